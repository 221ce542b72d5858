#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DomainError {
    /// Get error message
    pub fn message(&self) -> &str {
        match self {
            DomainError::Configuration(msg) => msg,
        }
    }
}
