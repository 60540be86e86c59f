use crate::host::PrintSurface;
use docket_types::SessionId;
use log::{debug, warn};
use std::fmt;

/// Lifecycle of one print session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SessionState {
    Idle,
    Composing,
    Printing,
    Settling,
    TornDown,
}

impl SessionState {
    /// States only move forward; `TornDown` is reachable from anywhere.
    pub fn can_advance_to(self, next: SessionState) -> bool {
        next == SessionState::TornDown || next > self
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Idle => "idle",
            SessionState::Composing => "composing",
            SessionState::Printing => "printing",
            SessionState::Settling => "settling",
            SessionState::TornDown => "torn-down",
        };
        f.write_str(name)
    }
}

/// Owns a print surface and guarantees it is torn down exactly once.
///
/// Teardown happens on the first of: an explicit [`PrintSession::teardown`]
/// call, or the session being dropped (an error path, or the owning task
/// being cancelled).
pub struct PrintSession<S: PrintSurface> {
    id: SessionId,
    state: SessionState,
    surface: S,
}

impl<S: PrintSurface> PrintSession<S> {
    pub fn new(surface: S) -> Self {
        let id = surface.id().clone();
        Self {
            id,
            state: SessionState::Idle,
            surface,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Moves to `next`. Backward moves and moves out of `TornDown` are ignored.
    pub fn advance(&mut self, next: SessionState) -> bool {
        if self.state == SessionState::TornDown || !self.state.can_advance_to(next) {
            warn!(
                "[{}] Ignoring transition {} -> {}.",
                self.id, self.state, next
            );
            return false;
        }
        debug!("[{}] {} -> {}", self.id, self.state, next);
        self.state = next;
        true
    }

    /// Tears the surface down. Returns `false` if it was already torn down.
    pub fn teardown(&mut self) -> bool {
        if self.state == SessionState::TornDown {
            return false;
        }
        debug!("[{}] {} -> {}", self.id, self.state, SessionState::TornDown);
        self.state = SessionState::TornDown;
        self.surface.teardown();
        true
    }
}

impl<S: PrintSurface> Drop for PrintSession<S> {
    fn drop(&mut self) {
        if self.teardown() {
            debug!("[{}] Surface released on drop.", self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrintError;
    use crate::host::PrintOutcome;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::oneshot;

    struct CountingSurface {
        id: SessionId,
        teardowns: Arc<AtomicUsize>,
    }

    impl PrintSurface for CountingSurface {
        fn id(&self) -> &SessionId {
            &self.id
        }

        async fn ready(&mut self) -> Result<(), PrintError> {
            Ok(())
        }

        fn print(&mut self) -> Result<oneshot::Receiver<PrintOutcome>, PrintError> {
            let (_tx, rx) = oneshot::channel();
            Ok(rx)
        }

        fn teardown(&mut self) {
            self.teardowns.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn session() -> (PrintSession<CountingSurface>, Arc<AtomicUsize>) {
        let counter = Arc::new(AtomicUsize::new(0));
        let surface = CountingSurface {
            id: SessionId::from("s-1"),
            teardowns: Arc::clone(&counter),
        };
        (PrintSession::new(surface), counter)
    }

    #[test]
    fn teardown_is_idempotent() {
        let (mut session, counter) = session();
        assert!(session.teardown());
        assert!(!session.teardown());
        drop(session);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn drop_tears_down_a_live_session() {
        let (mut session, counter) = session();
        session.advance(SessionState::Composing);
        session.advance(SessionState::Printing);
        drop(session);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn states_only_move_forward() {
        let (mut session, _) = session();
        assert!(session.advance(SessionState::Composing));
        assert!(session.advance(SessionState::Printing));
        assert!(!session.advance(SessionState::Composing));
        assert_eq!(session.state(), SessionState::Printing);

        session.teardown();
        assert!(!session.advance(SessionState::Settling));
        assert_eq!(session.state(), SessionState::TornDown);
    }
}
