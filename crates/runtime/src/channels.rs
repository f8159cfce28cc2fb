//! Channel pair connecting one presentation instance to the simulation.
//!
//! Snapshots flow out through a `watch` channel that only keeps the newest
//! value: the simulation never blocks on a slow window, and the window skips
//! whatever frames it missed. Inputs flow back through a bounded `mpsc`
//! channel shared by every presentation.
use std::sync::Arc;

use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use game_core::{Input, Level, PresentationId};

/// Immutable view of the level published by the simulation.
pub type Snapshot = Arc<Level>;

/// Result of a non-blocking snapshot poll.
#[derive(Clone, Debug)]
pub enum SnapshotPoll {
    /// A snapshot newer than the last one taken.
    Fresh(Snapshot),
    /// Nothing new since the last poll.
    Unchanged,
    /// The simulation dropped this presentation's sender.
    Closed,
}

/// Endpoints owned by a single presentation instance.
#[derive(Debug)]
pub struct PresentationChannels {
    id: PresentationId,
    snapshots: watch::Receiver<Snapshot>,
    inputs: mpsc::Sender<Input>,
}

impl PresentationChannels {
    pub(crate) fn new(
        id: PresentationId,
        snapshots: watch::Receiver<Snapshot>,
        inputs: mpsc::Sender<Input>,
    ) -> Self {
        Self {
            id,
            snapshots,
            inputs,
        }
    }

    pub fn id(&self) -> PresentationId {
        self.id
    }

    /// Take the newest snapshot if one arrived since the previous call.
    /// Never waits.
    pub fn poll_snapshot(&mut self) -> SnapshotPoll {
        match self.snapshots.has_changed() {
            Ok(true) => SnapshotPoll::Fresh(self.snapshots.borrow_and_update().clone()),
            Ok(false) => SnapshotPoll::Unchanged,
            Err(_) => SnapshotPoll::Closed,
        }
    }

    /// Wait until a new snapshot is published. Returns `None` once the
    /// simulation has dropped the sender.
    pub async fn next_snapshot(&mut self) -> Option<Snapshot> {
        self.snapshots.changed().await.ok()?;
        Some(self.snapshots.borrow_and_update().clone())
    }

    /// Forward an input without waiting. A full queue drops the input.
    ///
    /// Returns whether the input was queued.
    pub fn send_input(&self, input: Input) -> bool {
        match self.inputs.try_send(input) {
            Ok(()) => true,
            Err(TrySendError::Full(input)) => {
                warn!(presentation = %self.id, %input, "input queue full, dropping input");
                false
            }
            Err(TrySendError::Closed(input)) => {
                debug!(presentation = %self.id, %input, "simulation gone, dropping input");
                false
            }
        }
    }

    /// Ask the simulation to deregister this presentation.
    pub fn close_window(&self) -> bool {
        self.send_input(Input::CloseWindow(self.id))
    }
}
