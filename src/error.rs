//! Error taxonomy for surface construction and configuration.

use thiserror::Error;

/// Errors raised while building or reconfiguring a water surface
#[derive(Error, Debug)]
pub enum WaterError {
    /// Degenerate grid, zero wave count, or a non-finite parameter
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Wavelength of zero would divide by zero in every phase term
    #[error("Invalid wavelength: must be non-zero and finite, got {0}")]
    InvalidWavelength(f32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] ron::error::SpannedError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

impl WaterError {
    pub fn configuration<T: ToString>(msg: T) -> Self {
        WaterError::Configuration(msg.to_string())
    }
}

/// Result type alias for surface operations
pub type Result<T> = std::result::Result<T, WaterError>;
