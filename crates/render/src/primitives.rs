//! Layout primitives shared by every block: flex rows and columns, padded
//! cells, and the single rule style all borders are drawn with.
use docket_idf::{Element, div, px, solid};
use docket_layout::{HAlign, PageConfig};
use docket_types::Color;

/// Border and padding geometry, taken once from the page config and threaded
/// through every block so all ruled lines share one thickness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub border_px: f32,
    pub border_color: Color,
    pub pad_y: f32,
    pub pad_x: f32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self::from_page(&PageConfig::default())
    }
}

impl Geometry {
    pub fn from_page(page: &PageConfig) -> Self {
        let [pad_y, pad_x] = page.cell_padding_px;
        Self {
            border_px: page.border_px.max(0.0),
            border_color: page.border_color,
            pad_y,
            pad_x,
        }
    }

    /// The CSS value of a ruled line, e.g. `1px solid #000`.
    pub fn rule(&self) -> String {
        solid(self.border_px, self.border_color)
    }

    /// `rule()` when `on`, `none` otherwise.
    pub fn rule_if(&self, on: bool) -> String {
        if on { self.rule() } else { "none".to_string() }
    }

    pub fn cell_padding(&self) -> String {
        format!("{} {}", px(self.pad_y), px(self.pad_x))
    }

    /// A container with the rule drawn on all four sides.
    pub fn boxed(&self) -> Element {
        div().css("border", self.rule())
    }

    /// A padded cell with horizontal alignment.
    pub fn cell(&self, align: HAlign, bold: bool) -> Element {
        div()
            .css("padding", self.cell_padding())
            .css("text-align", align.text_align())
            .css("font-weight", if bold { "700" } else { "400" })
    }
}

/// A horizontal flex row spanning the full width.
pub fn row(gap_px: f32) -> Element {
    div()
        .css("display", "flex")
        .css("gap", px(gap_px))
        .css("width", "100%")
}

/// A flex column: fixed at `width` (any CSS length) or sharing the free space.
pub fn col(width: Option<String>) -> Element {
    match width {
        Some(w) => div().css("flex", "0 0 auto").css("width", w),
        None => div().css("flex", "1 1 0"),
    }
}
