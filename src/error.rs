use thiserror::Error;

/// Errors raised at the edges of the paint application.
///
/// Pointer and brush operations on the drawing surface never fail; these
/// cover construction, configuration loading and window startup.
#[derive(Debug, Error)]
pub enum PaintError {
    #[error("Invalid canvas dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to read configuration file: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Failed to launch window: {0}")]
    Launch(#[from] eframe::Error),
}

pub type PaintResult<T> = Result<T, PaintError>;
