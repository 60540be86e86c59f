//! The seam between the pipeline and the platform that actually prints.
//!
//! A [`PrintHost`] creates hidden [`PrintSurface`]s; the pipeline drives each
//! surface through load, print and teardown. Hosts never decide *when* a
//! surface is torn down, only *how*.
use crate::error::PrintError;
use crate::frame::IsolatedDocument;
use docket_types::SessionId;
use std::future::Future;
use tokio::sync::oneshot;

/// What the platform reported once its print dialog closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintOutcome {
    Completed,
    Cancelled,
}

/// A platform capable of hosting isolated print surfaces.
pub trait PrintHost: Send + Sync {
    type Surface: PrintSurface;

    /// Creates a hidden surface holding `document`. The surface is not yet loaded.
    fn create_surface(
        &self,
        session: &SessionId,
        document: &IsolatedDocument,
    ) -> Result<Self::Surface, PrintError>;
}

/// One hidden rendering surface, owned by exactly one print session.
pub trait PrintSurface: Send {
    fn id(&self) -> &SessionId;

    /// Resolves once the surface's content has fully loaded.
    fn ready(&mut self) -> impl Future<Output = Result<(), PrintError>> + Send;

    /// Invokes the platform print dialog.
    ///
    /// The receiver yields the completion signal. If the platform will never
    /// signal, the sender is dropped or kept alive forever; either way the
    /// pipeline's timeout decides.
    fn print(&mut self) -> Result<oneshot::Receiver<PrintOutcome>, PrintError>;

    /// Releases every resource of the surface. Called exactly once per surface.
    fn teardown(&mut self);
}
