use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid render config: {0}")]
    InvalidConfig(String),

    #[error("cannot append {found} to {target}")]
    InvalidAppend {
        target: &'static str,
        found: &'static str,
    },

    #[error("renderer backend failure: {0}")]
    Backend(String),
}
