//! Unified error types surfaced by the runtime API.
use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("runtime requires a level before building")]
    MissingLevel,

    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation input channel closed")]
    InputChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}
