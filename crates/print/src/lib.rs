//! Printing composed documents through hidden, isolated surfaces.
//!
//! A print request composes nothing itself: it takes a finished
//! [`RenderedSurface`](docket_types::RenderedSurface), wraps it in an
//! [`IsolatedDocument`], loads that into a fresh surface on a [`PrintHost`]
//! and opens the platform's print dialog. The session then races the
//! platform's completion signal against a timeout; whichever fires first
//! tears the surface down, and the other is ignored. No surface outlives its
//! session, even when the platform never reports back.
//!
//! ```text
//! Idle -> Composing -> Printing -> Settling -> TornDown
//! ```

pub mod error;
pub mod frame;
pub mod host;
pub mod pipeline;
pub mod scripted;
pub mod session;
pub mod spool;

pub use error::PrintError;
pub use frame::{IsolatedDocument, PRINT_AREA_CLASS, print_stylesheet};
pub use host::{PrintHost, PrintOutcome, PrintSurface};
pub use pipeline::{
    DEFAULT_PRINT_TIMEOUT, DEFAULT_READY_DELAY, PrintOptions, PrintPipeline, PrintReport,
    SettledBy,
};
pub use scripted::{Behaviour, ScriptedHost};
pub use session::{PrintSession, SessionState};
pub use spool::{PrintCommand, SpoolHost};
