//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up the command and input
//! channels, and exposes a builder-based API for clients.

use std::env;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

use game_core::{GameConfig, Input, Level};

use crate::api::{Result, RuntimeError, RuntimeHandle, SessionOutcome};
use crate::channels::PresentationChannels;
use crate::workers::{Command, SimulationWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Simulation cadence. Missed ticks are skipped, not replayed.
    pub tick_interval: Duration,
    /// Capacity of the input channel shared by all presentations.
    pub input_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            tick_interval: Duration::from_millis(16),
            input_buffer_size: 32,
            command_buffer_size: 16,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `DUNGEON_TICK_MS` - simulation tick interval (default: 16)
    /// - `DUNGEON_INPUT_BUFFER` - input queue size (default: 32)
    /// - `DUNGEON_EVENT_CAPACITY` - event log slots (default: 10)
    /// - `DUNGEON_SIGHT_RADIUS` - field of view radius in tiles (default: 7)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("DUNGEON_TICK_MS") {
            config.tick_interval = Duration::from_millis(ms.max(1));
        }
        if let Some(capacity) = read_env::<usize>("DUNGEON_INPUT_BUFFER") {
            config.input_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("DUNGEON_EVENT_CAPACITY") {
            config.game_config = config.game_config.with_event_capacity(capacity);
        }
        if let Some(radius) = read_env::<i32>("DUNGEON_SIGHT_RADIUS") {
            config.game_config = config.game_config.with_sight_radius(radius);
        }

        config
    }
}

/// Main runtime that drives the simulation.
///
/// [`RuntimeHandle`] provides a cloneable façade for clients; the runtime
/// itself only owns the worker task.
pub struct Runtime {
    handle: RuntimeHandle,
    sim_worker_handle: JoinHandle<SessionOutcome>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Register a new presentation instance.
    pub async fn attach_presentation(&self) -> Result<PresentationChannels> {
        self.handle.attach_presentation().await
    }

    /// Wait for the session to end on its own (quit or last window closed).
    pub async fn wait(self) -> Result<SessionOutcome> {
        drop(self.handle);
        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)
    }

    /// Ask the simulation to quit and wait for it.
    pub async fn shutdown(self) -> Result<SessionOutcome> {
        if self.handle.quit().await.is_err() {
            // Worker already finished; its outcome is still waiting in the join handle.
            info!("runtime already stopped");
        }
        self.wait().await
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    level: Option<Level>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            level: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide the level the simulation starts from
    pub fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Build the runtime and spawn the simulation worker.
    pub async fn build(self) -> Result<Runtime> {
        let level = self.level.ok_or(RuntimeError::MissingLevel)?;

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let (input_tx, input_rx) = mpsc::channel::<Input>(self.config.input_buffer_size);

        let handle = RuntimeHandle::new(command_tx, input_tx.clone());

        let sim_worker = SimulationWorker::new(
            level,
            self.config.game_config,
            self.config.tick_interval,
            command_rx,
            (input_tx, input_rx),
        );

        let sim_worker_handle = tokio::spawn(sim_worker.run());

        Ok(Runtime {
            handle,
            sim_worker_handle,
        })
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = RuntimeConfig::default();
        assert_eq!(config.tick_interval, Duration::from_millis(16));
        assert_eq!(config.input_buffer_size, 32);
        assert_eq!(config.command_buffer_size, 16);
        assert_eq!(config.game_config.event_capacity, 10);
    }

    #[tokio::test]
    async fn build_requires_a_level() {
        let result = Runtime::builder().build().await;
        assert!(matches!(result, Err(RuntimeError::MissingLevel)));
    }
}
