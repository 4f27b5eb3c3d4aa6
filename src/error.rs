use thiserror::Error;

/// Errors that can occur while loading, persisting or exporting a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to fetch the recipe resource over HTTP
    #[error("Failed to fetch recipes: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The recipe resource answered with a non-success status
    #[error("Unexpected status {status} while fetching {url}")]
    HttpStatus { status: u16, url: String },

    /// Failed to read or write a local file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Recipe or category data is not valid JSON for the expected shape
    #[error("Invalid catalog data: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Key/value store rejected a read or write
    #[error("Store error: {0}")]
    StoreError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
