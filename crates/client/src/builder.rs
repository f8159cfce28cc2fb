//! Client builder with dependency injection pattern.

use crate::{Client, Frontend};
use anyhow::{Context, Result};

/// Builder for constructing a Client with proper validation.
///
/// Both the runtime and the frontend are required; `build()` fails fast when
/// either is missing.
#[derive(Default)]
pub struct ClientBuilder {
    runtime: Option<runtime::Runtime>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the runtime (required).
    ///
    /// The simulation worker is already running; the client only owns it to
    /// shut it down.
    pub fn runtime(mut self, runtime: runtime::Runtime) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime or the frontend is not set.
    pub fn build(self) -> Result<Client> {
        let runtime = self
            .runtime
            .context("Runtime is required. Use .runtime() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client { runtime, frontend })
    }
}
