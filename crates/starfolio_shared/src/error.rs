//! # Starfolio Error Types
//!
//! All errors that can occur while loading content or mounting effects.

use thiserror::Error;

/// Errors that can occur in Starfolio.
#[derive(Error, Debug)]
pub enum StarfolioError {
    /// The embedded TOML document could not be parsed.
    #[error("configuration parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// The configuration parsed but holds values that make no sense.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The drawing surface (or its 2D context) does not exist.
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(&'static str),

    /// A host API call failed.
    #[error("host error: {0}")]
    Host(String),
}

/// Result type for Starfolio operations.
pub type StarfolioResult<T> = Result<T, StarfolioError>;
