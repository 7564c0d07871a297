use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("degenerate time range: min={min}, max={max}")]
    DegenerateRange { min: f64, max: f64 },
}

impl ChartError {
    pub(crate) fn invalid_request(reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            reason: reason.into(),
        }
    }
}
