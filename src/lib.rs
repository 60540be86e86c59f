//! Docket: prints Thai business documents from layout descriptors.
//!
//! The crates underneath do the work:
//!
//! - [`docket_types`]: the document model and page geometry
//! - [`docket_bind`]: binding expressions that pull values out of a document
//! - [`docket_bahttext`]: amounts read out in Thai words
//! - [`docket_layout`]: per-form layout descriptors
//! - [`docket_render`]: block renderers and the composer
//! - [`docket_print`]: print sessions on isolated surfaces
//! - [`docket_channel`]: single-use tokens handing payloads to a print view
//!
//! This crate ties them together behind [`PrintView`] and [`EngineConfig`].
//!
//! ```ignore
//! let config = EngineConfig::load(Path::new("docket.json"))?;
//! let view = PrintViewBuilder::new().with_config(&config)?.build(config.spool_host())?;
//! let token = view.channel().publish(&payload)?;
//! match view.open(&token).await? {
//!     ViewOutcome::Printed(report) => println!("printed {}", report.session_id),
//!     ViewOutcome::NothingToPrint => println!("nothing to print"),
//! }
//! ```

pub mod config;
pub mod error;
pub mod view;

pub use config::EngineConfig;
pub use error::DocketError;
pub use view::{PrintView, PrintViewBuilder, ViewOutcome};

pub use docket_bahttext as bahttext;
pub use docket_bind as bind;
pub use docket_channel as channel;
pub use docket_layout as layout;
pub use docket_print as print;
pub use docket_render as render;
pub use docket_types as types;

pub use docket_channel::{PayloadChannel, PrintPayload, Token};
pub use docket_print::{PrintReport, ScriptedHost, SettledBy, SpoolHost};
pub use docket_types::{Document, FormKind};
