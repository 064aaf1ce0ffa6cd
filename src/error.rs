use thiserror::Error;

pub type PrintResult<T> = Result<T, PrintError>;

#[derive(Debug, Error)]
pub enum PrintError {
    #[error("invalid pixel density: x={x}, y={y}")]
    InvalidDensity { x: f64, y: f64 },

    #[error("invalid surface size: width={width}, height={height}")]
    InvalidSurface { width: i32, height: i32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("backend failure: {0}")]
    Backend(String),
}
