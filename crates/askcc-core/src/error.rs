use thiserror::Error;

#[derive(Debug, Error)]
pub enum AskccError {
    #[error("invalid GitHub issue URL: {0}")]
    InvalidIssueUrl(String),

    #[error("'{tool}' CLI is not installed or not on PATH. {hint}")]
    MissingDependency { tool: String, hint: String },

    #[error("failed to fetch issue: {0}")]
    IssueFetch(String),

    #[error("Template '{file}' is missing required variable '${variable}'")]
    TemplateValidation { file: String, variable: String },

    #[error("invalid skill registry {path}: {reason}")]
    InvalidRegistry { path: String, reason: String },

    #[error("skill not found in source: {0}")]
    SkillNotFound(String),

    #[error("home directory not found: set HOME environment variable")]
    HomeNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AskccError>;
