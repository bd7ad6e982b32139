use linkmargin_core::LinkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error(transparent)]
    Link(#[from] LinkError),

    #[error("no result yet - use CALC to compute the link budget")]
    NoResult,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
