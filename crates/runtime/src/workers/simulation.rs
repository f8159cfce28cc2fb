//! Simulation worker that owns the authoritative [`game_core::Level`].
//!
//! Each tick drains a bounded number of queued inputs, applies them through
//! [`LevelEngine`], then publishes one snapshot to every registered
//! presentation. Commands from [`RuntimeHandle`](crate::RuntimeHandle) are
//! served between ticks.

use std::collections::BTreeMap;
use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use game_core::{GameConfig, Input, Level, LevelEngine, PresentationId};

use crate::api::SessionOutcome;
use crate::channels::{PresentationChannels, Snapshot};

const WELCOME_MESSAGE: &str = "Welcome to the dungeon";

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Register a new presentation instance and hand back its channels.
    Attach {
        reply: oneshot::Sender<PresentationChannels>,
    },
    /// Query the current level (read-only).
    QueryLevel { reply: oneshot::Sender<Snapshot> },
}

/// Background task that advances the level and fans out snapshots.
pub struct SimulationWorker {
    level: Level,
    config: GameConfig,
    tick_interval: Duration,
    command_rx: mpsc::Receiver<Command>,
    input_rx: mpsc::Receiver<Input>,
    /// Cloned into every new [`PresentationChannels`].
    input_tx: mpsc::Sender<Input>,
    presentations: BTreeMap<PresentationId, watch::Sender<Snapshot>>,
    next_id: u32,
}

impl SimulationWorker {
    pub fn new(
        level: Level,
        config: GameConfig,
        tick_interval: Duration,
        command_rx: mpsc::Receiver<Command>,
        input: (mpsc::Sender<Input>, mpsc::Receiver<Input>),
    ) -> Self {
        let (input_tx, input_rx) = input;
        info!(
            target: "runtime::worker",
            width = level.width(),
            height = level.height(),
            monsters = level.monsters.len(),
            "SimulationWorker initialized"
        );

        Self {
            level,
            config,
            tick_interval,
            command_rx,
            input_rx,
            input_tx,
            presentations: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Main worker loop. Returns once the session is over; dropping the
    /// worker closes every snapshot channel.
    pub async fn run(mut self) -> SessionOutcome {
        self.level.push_event(WELCOME_MESSAGE);
        LevelEngine::new(&mut self.level, &self.config).refresh_view();

        let mut ticker = tokio::time::interval(self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut commands_open = true;

        let outcome = loop {
            tokio::select! {
                cmd = self.command_rx.recv(), if commands_open => match cmd {
                    Some(cmd) => self.handle_command(cmd),
                    None => {
                        debug!(target: "runtime::worker", "all runtime handles dropped");
                        commands_open = false;
                    }
                },
                _ = ticker.tick() => {
                    if let ControlFlow::Break(outcome) = self.tick() {
                        break outcome;
                    }
                }
            }
        };

        info!(target: "runtime::worker", %outcome, "simulation finished");
        outcome
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Attach { reply } => {
                let channels = self.attach();
                if reply.send(channels).is_err() {
                    debug!("Attach reply channel closed (caller dropped)");
                }
            }
            Command::QueryLevel { reply } => {
                if reply.send(Arc::new(self.level.clone())).is_err() {
                    debug!("QueryLevel reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn attach(&mut self) -> PresentationChannels {
        let id = PresentationId(self.next_id);
        self.next_id += 1;

        let (snapshot_tx, mut snapshot_rx) = watch::channel(Arc::new(self.level.clone()));
        snapshot_rx.mark_changed();
        self.presentations.insert(id, snapshot_tx);

        info!(
            target: "runtime::worker",
            presentation = %id,
            registered = self.presentations.len(),
            "presentation attached"
        );
        PresentationChannels::new(id, snapshot_rx, self.input_tx.clone())
    }

    /// One simulation step.
    ///
    /// At most one input per registered presentation is consumed so a single
    /// busy window cannot starve the snapshot cadence.
    fn tick(&mut self) -> ControlFlow<SessionOutcome> {
        self.prune_closed()?;

        let budget = self.presentations.len().max(1);
        for _ in 0..budget {
            match self.input_rx.try_recv() {
                Ok(input) => self.apply(input)?,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }

        self.publish();
        ControlFlow::Continue(())
    }

    fn apply(&mut self, input: Input) -> ControlFlow<SessionOutcome> {
        match input {
            Input::QuitGame => {
                info!(target: "runtime::worker", "quit requested");
                return ControlFlow::Break(SessionOutcome::Quit);
            }
            Input::CloseWindow(id) => return self.close(id),
            Input::None => {}
            movement => {
                let outcome = LevelEngine::new(&mut self.level, &self.config).execute(movement);
                debug!(target: "runtime::worker", %movement, ?outcome, "input applied");
            }
        }
        ControlFlow::Continue(())
    }

    fn close(&mut self, id: PresentationId) -> ControlFlow<SessionOutcome> {
        if self.presentations.remove(&id).is_none() {
            debug!(target: "runtime::worker", presentation = %id, "close for unknown presentation ignored");
            return ControlFlow::Continue(());
        }

        info!(
            target: "runtime::worker",
            presentation = %id,
            remaining = self.presentations.len(),
            "presentation closed"
        );
        self.end_if_unattended()
    }

    /// Drops presentations whose receiver went away without a `CloseWindow`.
    fn prune_closed(&mut self) -> ControlFlow<SessionOutcome> {
        let before = self.presentations.len();
        self.presentations.retain(|id, sender| {
            let closed = sender.is_closed();
            if closed {
                warn!(target: "runtime::worker", presentation = %id, "pruning presentation with dropped receiver");
            }
            !closed
        });

        if self.presentations.len() < before {
            self.end_if_unattended()
        } else {
            ControlFlow::Continue(())
        }
    }

    fn end_if_unattended(&self) -> ControlFlow<SessionOutcome> {
        if self.presentations.is_empty() {
            ControlFlow::Break(SessionOutcome::AllWindowsClosed)
        } else {
            ControlFlow::Continue(())
        }
    }

    fn publish(&self) {
        if self.presentations.is_empty() {
            return;
        }
        let snapshot: Snapshot = Arc::new(self.level.clone());
        for sender in self.presentations.values() {
            sender.send_replace(snapshot.clone());
        }
    }
}
