//! An in-memory host whose print dialogs behave as scripted.
use crate::error::PrintError;
use crate::frame::IsolatedDocument;
use crate::host::{PrintHost, PrintOutcome, PrintSurface};
use docket_types::SessionId;
use log::debug;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::oneshot;

/// How the platform answers one print request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behaviour {
    /// Signals completion as soon as the dialog opens.
    Complete,
    /// Signals that the user cancelled the dialog.
    Cancel,
    /// Signals completion after a delay.
    CompleteAfter(Duration),
    /// Never signals.
    Never,
    /// The dialog fails to open.
    FailToOpen,
}

#[derive(Default)]
struct Inner {
    script: VecDeque<Behaviour>,
    documents: Vec<(SessionId, String)>,
    torn_down: Vec<SessionId>,
}

/// A print host without a platform behind it.
///
/// Clones share state, so a test can keep a handle while a pipeline owns the
/// host. Behaviours are consumed one per surface; when the script runs out,
/// the default behaviour applies.
#[derive(Clone)]
pub struct ScriptedHost {
    default: Behaviour,
    inner: Arc<Mutex<Inner>>,
    live: Arc<AtomicUsize>,
}

impl ScriptedHost {
    pub fn new(default: Behaviour) -> Self {
        Self {
            default,
            inner: Arc::default(),
            live: Arc::default(),
        }
    }

    /// Queues behaviours for the next surfaces, in order.
    pub fn script(self, behaviours: impl IntoIterator<Item = Behaviour>) -> Self {
        self.lock().script.extend(behaviours);
        self
    }

    /// Surfaces created and not yet torn down.
    pub fn live_surfaces(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Sessions whose surfaces were torn down, in teardown order.
    pub fn torn_down(&self) -> Vec<SessionId> {
        self.lock().torn_down.clone()
    }

    /// The isolated document most recently loaded into a surface.
    pub fn last_document(&self) -> Option<String> {
        self.lock().documents.last().map(|(_, html)| html.clone())
    }

    pub fn surfaces_created(&self) -> usize {
        self.lock().documents.len()
    }

    // A poisoned lock only means a test thread panicked; the data is still usable.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for ScriptedHost {
    fn default() -> Self {
        Self::new(Behaviour::Complete)
    }
}

impl PrintHost for ScriptedHost {
    type Surface = ScriptedSurface;

    fn create_surface(
        &self,
        session: &SessionId,
        document: &IsolatedDocument,
    ) -> Result<ScriptedSurface, PrintError> {
        let behaviour = {
            let mut inner = self.lock();
            inner.documents.push((session.clone(), document.html.clone()));
            inner.script.pop_front().unwrap_or(self.default)
        };
        self.live.fetch_add(1, Ordering::SeqCst);
        debug!("[{}] Scripted surface created ({:?}).", session, behaviour);
        Ok(ScriptedSurface {
            id: session.clone(),
            behaviour,
            host: self.clone(),
            pending: None,
            released: false,
        })
    }
}

pub struct ScriptedSurface {
    id: SessionId,
    behaviour: Behaviour,
    host: ScriptedHost,
    // Held so that `Never` keeps the channel open instead of closing it.
    pending: Option<oneshot::Sender<PrintOutcome>>,
    released: bool,
}

impl PrintSurface for ScriptedSurface {
    fn id(&self) -> &SessionId {
        &self.id
    }

    async fn ready(&mut self) -> Result<(), PrintError> {
        Ok(())
    }

    fn print(&mut self) -> Result<oneshot::Receiver<PrintOutcome>, PrintError> {
        let (tx, rx) = oneshot::channel();
        match self.behaviour {
            Behaviour::Complete => {
                let _ = tx.send(PrintOutcome::Completed);
            }
            Behaviour::Cancel => {
                let _ = tx.send(PrintOutcome::Cancelled);
            }
            Behaviour::CompleteAfter(delay) => {
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(PrintOutcome::Completed);
                });
            }
            Behaviour::Never => self.pending = Some(tx),
            Behaviour::FailToOpen => {
                return Err(PrintError::DialogUnavailable {
                    session: self.id.to_string(),
                    reason: "scripted failure".to_string(),
                });
            }
        }
        Ok(rx)
    }

    fn teardown(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.pending = None;
        self.host.live.fetch_sub(1, Ordering::SeqCst);
        self.host.lock().torn_down.push(self.id.clone());
    }
}
