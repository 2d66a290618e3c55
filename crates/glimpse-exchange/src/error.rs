//! Exchange Error Types

use glimpse_core::protocol::UnknownProtocol;
use thiserror::Error;

pub type ExchangeResult<T> = Result<T, ExchangeError>;

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("exchange channel closed")]
    ChannelClosed,

    #[error("event receiver lagged by {0} events")]
    Lagged(u64),

    #[error("failed to submit request: {0}")]
    SubmitFailed(String),

    #[error(transparent)]
    UnknownProtocol(#[from] UnknownProtocol),

    #[error("malformed event frame: {0}")]
    MalformedFrame(#[from] serde_json::Error),
}
