use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SharedError {
    #[error("Point ({x}, {y}) is outside the image")]
    PointOutOfRange { x: f64, y: f64 },

    #[error("Viewport has no area")]
    EmptyViewport,

    #[error("Invalid configuration value for {key}: {value}")]
    InvalidConfig { key: &'static str, value: String },
}
