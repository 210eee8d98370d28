use thiserror::Error;

/// Errors that can occur while generating, writing or checking fixtures
#[derive(Error, Debug)]
pub enum FixtureError {
    /// Failed to create, write or read a fixture file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to render or parse the JSON body of a fixture
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// The document is not a recognised fixture file
    #[error("Invalid fixture: {0}")]
    InvalidFixture(String),

    /// A recipe violates one of the recipe model's rules
    #[error("Recipe #{recipe} is invalid: {message}")]
    Validation { recipe: usize, message: String },

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),
}
