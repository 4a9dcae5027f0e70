pub mod agent;
pub mod config;
pub mod error;
pub mod io;
pub mod issue;
pub mod paths;
pub mod prompts;
pub mod skills;
pub mod template;

pub use agent::{AgentMode, AgentTemplateSpec};
pub use config::Settings;
pub use error::{AskccError, Result};
pub use template::{ResolvedAgentConfig, TemplateStore};
