//! Per-document render state.
use crate::primitives::Geometry;
use crate::view::DocumentView;
use chrono::{FixedOffset, Offset, Utc};
use docket_layout::LayoutDescriptor;
use docket_types::Document;

/// Default offset for document dates: UTC+07:00.
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 7 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposeOptions {
    /// Offset timestamps are converted to before their calendar date is taken.
    pub utc_offset_minutes: i32,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
        }
    }
}

impl ComposeOptions {
    /// The configured offset; out-of-range values fall back to UTC.
    pub fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes.saturating_mul(60))
            .unwrap_or_else(|| Utc.fix())
    }
}

/// Everything one composition needs: the layout, the prepared view, and the
/// border geometry shared by all blocks.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub document: &'a Document,
    pub layout: &'a LayoutDescriptor,
    pub view: DocumentView,
    pub geometry: Geometry,
}

impl<'a> RenderContext<'a> {
    pub fn new(document: &'a Document, layout: &'a LayoutDescriptor, options: &ComposeOptions) -> Self {
        Self {
            document,
            layout,
            view: DocumentView::new(document, options.offset()),
            geometry: Geometry::from_page(&layout.page),
        }
    }
}
