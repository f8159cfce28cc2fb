//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing: attaching a presentation,
//! querying the current level and injecting input all go through it.
use tokio::sync::{mpsc, oneshot};

use game_core::Input;

use super::errors::{Result, RuntimeError};
use crate::channels::{PresentationChannels, Snapshot};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    input_tx: mpsc::Sender<Input>,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, input_tx: mpsc::Sender<Input>) -> Self {
        Self {
            command_tx,
            input_tx,
        }
    }

    /// Register a new presentation instance.
    ///
    /// The returned channels already hold the current level as an unseen
    /// snapshot, so the first poll renders immediately.
    pub async fn attach_presentation(&self) -> Result<PresentationChannels> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Attach { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Query the current level (read-only snapshot)
    pub async fn query_level(&self) -> Result<Snapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryLevel { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Queue an input as if a presentation had produced it. Waits for room in
    /// the input channel instead of dropping.
    pub async fn send_input(&self, input: Input) -> Result<()> {
        self.input_tx
            .send(input)
            .await
            .map_err(|_| RuntimeError::InputChannelClosed)
    }

    /// Ask the simulation to end the session.
    pub async fn quit(&self) -> Result<()> {
        self.send_input(Input::QuitGame).await
    }
}
