use crate::error::PrintError;
use crate::frame::IsolatedDocument;
use crate::host::{PrintHost, PrintOutcome, PrintSurface};
use crate::session::{PrintSession, SessionState};
use docket_types::{RenderedSurface, SessionId};
use log::{debug, info, warn};
use rand::Rng;
use std::time::Duration;
use tokio::sync::oneshot;

pub const DEFAULT_PRINT_TIMEOUT: Duration = Duration::from_millis(2000);
pub const DEFAULT_READY_DELAY: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions {
    /// Pause between the surface reporting ready and opening the dialog.
    pub ready_delay: Duration,
    /// Backstop armed when printing starts; teardown happens no later than this.
    pub timeout: Duration,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            ready_delay: DEFAULT_READY_DELAY,
            timeout: DEFAULT_PRINT_TIMEOUT,
        }
    }
}

/// Which trigger ended the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettledBy {
    Completed,
    Cancelled,
    TimedOut,
}

impl From<PrintOutcome> for SettledBy {
    fn from(outcome: PrintOutcome) -> Self {
        match outcome {
            PrintOutcome::Completed => SettledBy::Completed,
            PrintOutcome::Cancelled => SettledBy::Cancelled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintReport {
    pub session_id: SessionId,
    pub settled_by: SettledBy,
}

/// Drives print sessions on a [`PrintHost`].
pub struct PrintPipeline<H: PrintHost> {
    host: H,
    options: PrintOptions,
}

impl<H: PrintHost> PrintPipeline<H> {
    pub fn new(host: H, options: PrintOptions) -> Self {
        Self { host, options }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn options(&self) -> &PrintOptions {
        &self.options
    }

    /// Prints one composed surface and tears its print surface down.
    ///
    /// The surface is always released before this returns, whether the
    /// platform signalled, stayed silent past the timeout, or failed. If the
    /// dialog fails to open the error is returned; there is no retry.
    pub async fn print(&self, surface: &RenderedSurface) -> Result<PrintReport, PrintError> {
        let id = new_session_id();
        let isolated = IsolatedDocument::new(surface);
        info!("[{}] Printing '{}'.", id, surface.title);

        let mut session = PrintSession::new(self.host.create_surface(&id, &isolated)?);
        session.advance(SessionState::Composing);
        session.surface_mut().ready().await?;
        tokio::time::sleep(self.options.ready_delay).await;

        let completion = session.surface_mut().print()?;
        session.advance(SessionState::Printing);

        let settled_by = tokio::select! {
            outcome = wait_for_signal(completion) => SettledBy::from(outcome),
            _ = tokio::time::sleep(self.options.timeout) => {
                warn!(
                    "[{}] No completion signal after {:?}; tearing down.",
                    id, self.options.timeout
                );
                SettledBy::TimedOut
            }
        };
        session.advance(SessionState::Settling);
        session.teardown();

        info!("[{}] Settled: {:?}.", id, settled_by);
        Ok(PrintReport {
            session_id: id,
            settled_by,
        })
    }
}

// A closed channel means the platform will never signal; only the timer can settle.
async fn wait_for_signal(completion: oneshot::Receiver<PrintOutcome>) -> PrintOutcome {
    match completion.await {
        Ok(outcome) => outcome,
        Err(_) => {
            debug!("Completion channel closed without a signal.");
            std::future::pending().await
        }
    }
}

fn new_session_id() -> SessionId {
    SessionId::from(format!("print-{:016x}", rand::rng().random::<u64>()))
}
