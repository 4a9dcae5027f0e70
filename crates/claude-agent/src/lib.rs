//! `claude-agent`: a small driver for one-shot Claude CLI invocations.
//!
//! ```text
//! QueryOptions + AgentDefinition
//!     │
//!     ▼
//! build_command   ← `claude -p <prompt> --output-format text --agents '{...}'`
//!     │
//!     ▼
//! run             ← blocking; stdio inherited; returns the exit code
//! ```
//!
//! # Quick start
//!
//! ```rust,ignore
//! use claude_agent::{run, AgentDefinition, QueryOptions};
//!
//! let opts = QueryOptions {
//!     dangerously_skip_permissions: true,
//!     ..Default::default()
//! }
//! .with_agent("planner", AgentDefinition::new("Plans work", "You are a planner."));
//!
//! let code = run("Plan issue #42", &opts)?;
//! std::process::exit(code);
//! ```

pub mod error;
pub mod types;

pub(crate) mod process;


pub use error::ClaudeAgentError;
pub use types::{AgentDefinition, QueryOptions};

/// Convenience `Result` alias for this crate.
pub type Result<T> = std::result::Result<T, ClaudeAgentError>;

/// Run a single prompt through the Claude CLI and wait for it to exit.
///
/// The subprocess shares this process's stdin, stdout, and stderr. The
/// returned value is its exit code.
pub fn run(prompt: &str, opts: &QueryOptions) -> Result<i32> {
    process::run(prompt, opts)
}
