//! Block renderers and the document composer.
//!
//! A composition takes a [`Document`](docket_types::Document) and a
//! [`LayoutDescriptor`](docket_layout::LayoutDescriptor) and produces a
//! self-contained HTML surface. Nothing in here fails: missing values render
//! as blanks or documented defaults.

pub mod blocks;
pub mod composer;
pub mod context;
pub mod primitives;
pub mod view;

pub use composer::{Composer, NO_BREAK_CLASS, foundation_css};
pub use context::{ComposeOptions, DEFAULT_UTC_OFFSET_MINUTES, RenderContext};
pub use primitives::{Geometry, col, row};
pub use view::DocumentView;
