use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

// ─── AgentDefinition ──────────────────────────────────────────────────────

/// A custom subagent passed to `claude --agents '<json>'`.
///
/// Serialises to `{"description": "...", "prompt": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentDefinition {
    pub description: String,
    /// System prompt for the subagent.
    pub prompt: String,
}

impl AgentDefinition {
    pub fn new(description: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            prompt: prompt.into(),
        }
    }
}

// ─── QueryOptions ─────────────────────────────────────────────────────────

/// Options for a single `claude -p` invocation. Output is always plain text.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// Pass `--dangerously-skip-permissions`
    pub dangerously_skip_permissions: bool,
    /// Subagents keyed by name, serialised into `--agents`
    pub agents: BTreeMap<String, AgentDefinition>,
    /// Working directory for the subprocess (default: current dir)
    pub cwd: Option<PathBuf>,
    /// Custom path to the `claude` binary (default: `"claude"`)
    pub path_to_executable: Option<PathBuf>,
}

impl QueryOptions {
    /// Register a subagent under `name`.
    pub fn with_agent(mut self, name: impl Into<String>, agent: AgentDefinition) -> Self {
        self.agents.insert(name.into(), agent);
        self
    }
}
