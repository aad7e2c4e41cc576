use thiserror::Error;

/// Startup failures. None of these are retried: each one ends the run with exit code 1.
#[derive(Debug, Error)]
pub enum LifeError {
    /// The window or its drawing surface could not be acquired.
    #[error("could not create window: {0}")]
    StartupResourceFailure(String),

    #[error("pattern '{name}' not found in {catalog}")]
    PatternNotFound { name: String, catalog: String },

    #[error("could not read pattern catalog {path}: {reason}")]
    CatalogUnreadable { path: String, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("could not write output: {0}")]
    Output(#[from] std::io::Error),
}

impl From<figment::Error> for LifeError {
    fn from(e: figment::Error) -> Self {
        LifeError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LifeError>;
