use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid value for point `{label}`: {value} (must be finite and >= 0)")]
    InvalidValue { label: String, value: f64 },

    #[error("bar height {value} out of range [{min}, {max}]")]
    HeightOutOfRange { value: f64, min: f64, max: f64 },
}
