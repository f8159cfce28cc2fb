//! Top-level client orchestrating the Runtime and Frontend layers.
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime (simulation worker, snapshot and input channels)
//!   └─→ Frontend (presentation loops - CLI, headless, etc.)
//! ```
//!
//! The runtime is spawned when it is built; the client hands the frontend a
//! [`runtime::RuntimeHandle`] and, once the frontend returns, makes sure the
//! simulation has stopped.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use runtime::SessionOutcome;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` collects an already-running runtime and a frontend
/// 2. `Client::run()` transfers control to the frontend (blocking)
/// 3. When the frontend returns, the simulation is asked to quit if it is
///    still running and its outcome is reported
pub struct Client {
    runtime: runtime::Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client until the frontend exits.
    ///
    /// # Errors
    ///
    /// Returns the frontend's error if it failed (a failing shutdown is then
    /// only logged), otherwise any error from stopping the simulation worker.
    pub async fn run(self) -> Result<SessionOutcome> {
        let handle = self.runtime.handle();

        let mut frontend = self.frontend;
        let frontend_result = frontend.run(handle).await;
        if let Err(e) = &frontend_result {
            tracing::error!("Frontend error: {:#}", e);
        }

        settle(frontend_result, self.runtime.shutdown().await)
    }
}

/// Combines the frontend result with the runtime shutdown result; the
/// frontend error takes precedence.
fn settle(
    frontend: Result<()>,
    shutdown: runtime::Result<SessionOutcome>,
) -> Result<SessionOutcome> {
    match (frontend, shutdown) {
        (Ok(()), Ok(outcome)) => {
            tracing::info!(%outcome, "session ended");
            Ok(outcome)
        }
        (Ok(()), Err(e)) => Err(e.into()),
        (Err(e), Ok(outcome)) => {
            tracing::info!(%outcome, "session ended");
            Err(e)
        }
        (Err(e), Err(shutdown_error)) => {
            tracing::error!("Runtime shutdown failed: {}", shutdown_error);
            Err(e)
        }
    }
}
