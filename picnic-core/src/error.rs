//! Error type shared by every picnic-core operation.
//!
//! Each variant carries the full human-readable message; `Display` prints it
//! as-is so the binary can surface it to the user unchanged.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PicnicError {
    /// Bad CLI input, bad weekday index or unsupported validator argument.
    #[error("{0}")]
    InvalidArgument(String),

    /// Requested date is absent from the forecast.
    #[error("{0}")]
    NotFound(String),

    /// Network-level error or non-2xx response from the provider.
    #[error("{0}")]
    TransportFailure(String),

    /// Response body could not be parsed into a forecast.
    #[error("{0}")]
    MalformedResponse(String),

    #[error("{0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PicnicError>;
