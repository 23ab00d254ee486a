//! Error types for the card renderer

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can abort a render run
///
/// Missing assets, unknown themes and unknown slide types are not errors: they
/// degrade with a warning and never surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// The slide document could not be parsed
    #[error("Invalid slide input: {0}")]
    InputError(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Failed to set up the rasterizer backend
    #[error("Rasterizer initialization failed: {0}")]
    InitializationError(String),

    /// The external renderer failed or produced no output
    #[error("Rasterization failed: {0}")]
    RenderError(String),

    /// The output directory does not exist and could not be created
    #[error("Failed to create output directory {}: {source}", path.display())]
    OutputDirError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Decoding or encoding the raster output failed
    #[error("Image processing failed: {0}")]
    ImageError(#[from] image::ImageError),

    /// Filesystem error while writing outputs
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CDP-specific error
    #[cfg(feature = "cdp")]
    #[error("CDP error: {0}")]
    CdpError(String),
}

#[cfg(feature = "cdp")]
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::CdpError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InputError(err.to_string())
    }
}
