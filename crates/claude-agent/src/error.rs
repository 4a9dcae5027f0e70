use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClaudeAgentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize --agents definition: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Process error: {0}")]
    Process(String),
}
