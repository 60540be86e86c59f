//! Page-level settings: paper format, margins, base typography and the rule style
//! every block draws its borders with.
use docket_types::{Color, Margins, PageSetup, PageSize};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub size: PageSize,
    pub margins_mm: Margins,
    pub base_font_family: Vec<String>,
    pub base_font_px: f32,
    pub line_height: f32,
    /// Thickness of every ruled line in the document.
    pub border_px: f32,
    pub border_color: Color,
    /// Cell padding as `[y, x]`.
    pub cell_padding_px: [f32; 2],
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            size: PageSize::A4,
            margins_mm: Margins::new(4.0, 10.0, 4.0, 30.0),
            base_font_family: vec!["'TH Sarabun New'".to_string(), "Arial".to_string()],
            base_font_px: 14.0,
            line_height: 1.15,
            border_px: 1.0,
            border_color: Color::BLACK,
            cell_padding_px: [4.0, 6.0],
        }
    }
}

impl PageConfig {
    pub fn page_setup(&self) -> PageSetup {
        PageSetup {
            size: self.size,
            margins: self.margins_mm,
            base_font_family: self.base_font_family.clone(),
            base_font_px: self.base_font_px,
            line_height: self.line_height,
        }
    }
}
