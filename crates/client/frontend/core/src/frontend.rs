//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::RuntimeHandle;

/// Frontend abstraction for UI layers.
///
/// Frontends talk to the game only through [`RuntimeHandle`]: they attach
/// one presentation instance per window and drive a
/// [`PresentationLoop`](crate::PresentationLoop) for each.
///
/// Frontends do NOT own the Runtime - they receive a handle for communication only.
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use client_frontend_core::{
///     AtlasIndex, Frontend, FrontendConfig, HeadlessSurface, PresentationLoop, Viewport,
/// };
/// use runtime::RuntimeHandle;
/// use anyhow::Result;
///
/// struct Headless;
///
/// #[async_trait]
/// impl Frontend for Headless {
///     async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
///         let channels = handle.attach_presentation().await?;
///         let surface = HeadlessSurface::new(Viewport::default());
///         let config = FrontendConfig::default();
///         PresentationLoop::new(surface, channels, AtlasIndex::default(), &config)
///             .run()
///             .await?;
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend until its windows are gone.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()>;
}
