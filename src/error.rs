use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("sample sequence must not be empty")]
    EmptySamples,

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("renderer backend failed: {0}")]
    Backend(String),
}
