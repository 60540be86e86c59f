//! The top-level layout descriptor.
use crate::error::LayoutError;
use crate::head_grid::HeadGridConfig;
use crate::header::{HeaderCompanyConfig, TitleBarConfig};
use crate::items::ItemsTableConfig;
use crate::page::PageConfig;
use crate::summary::{SignaturesConfig, SummaryConfig};
use docket_types::{FormKind, is_safe_font_family};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DESCRIPTOR_VERSION: u32 = 1;

/// Everything a form kind's printout is laid out with: geometry, sizes, label
/// text and the bindings that pull values out of the document.
///
/// Every field has a default, so `{}` is a complete descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutDescriptor {
    pub version: u32,
    /// The form kind this descriptor was written for. Informational.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<FormKind>,
    pub page: PageConfig,
    pub header_company: HeaderCompanyConfig,
    pub title_bar: TitleBarConfig,
    pub head_grid: HeadGridConfig,
    pub items_table: ItemsTableConfig,
    pub summary: SummaryConfig,
    pub signatures: SignaturesConfig,
}

impl Default for LayoutDescriptor {
    fn default() -> Self {
        Self {
            version: DESCRIPTOR_VERSION,
            form: None,
            page: PageConfig::default(),
            header_company: HeaderCompanyConfig::default(),
            title_bar: TitleBarConfig::default(),
            head_grid: HeadGridConfig::default(),
            items_table: ItemsTableConfig::default(),
            summary: SummaryConfig::default(),
            signatures: SignaturesConfig::default(),
        }
    }
}

impl LayoutDescriptor {
    /// Parses a descriptor. Every binding expression is parsed here; a malformed
    /// one rejects the whole descriptor.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        serde_json::from_str::<Self>(json)?.validated()
    }

    pub fn from_file(path: &Path) -> Result<Self, LayoutError> {
        let raw = std::fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str::<Self>(&raw)
            .map_err(|source| LayoutError::Parse {
                path: path.to_path_buf(),
                source,
            })?
            .validated()
    }

    /// Rejects values that would escape the stylesheet they are written into.
    fn validated(self) -> Result<Self, LayoutError> {
        if let Some(name) = self
            .page
            .base_font_family
            .iter()
            .find(|name| !is_safe_font_family(name))
        {
            return Err(LayoutError::UnsafeFontFamily(name.clone()));
        }
        Ok(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_a_complete_descriptor() {
        let layout = LayoutDescriptor::from_json("{}").unwrap();
        assert_eq!(layout, LayoutDescriptor::default());
        assert_eq!(layout.items_table.min_rows, 10);
        assert_eq!(layout.page.border_px, 1.0);
        assert_eq!(layout.page.page_setup().content_width_mm(), 170.0);
    }

    #[test]
    fn malformed_binding_rejects_descriptor() {
        let err = LayoutDescriptor::from_json(r#"{ "title_bar": { "bind": "document..title" } }"#);
        assert!(matches!(err, Err(LayoutError::Json(_))));
    }

    #[test]
    fn font_family_that_closes_the_stylesheet_is_rejected() {
        let err = LayoutDescriptor::from_json(
            r#"{ "page": { "base_font_family": ["Arial", "x</style><script>alert(1)</script>"] } }"#,
        );
        assert!(matches!(err, Err(LayoutError::UnsafeFontFamily(name)) if name.starts_with("x</style>")));

        let ok = LayoutDescriptor::from_json(r#"{ "page": { "base_font_family": ["'TH Sarabun New'", "Arial"] } }"#);
        assert!(ok.is_ok());
    }

    #[test]
    fn serialized_descriptor_loads_back_equal() {
        let layout = LayoutDescriptor::default();
        let json = layout.to_json_pretty().unwrap();
        assert_eq!(LayoutDescriptor::from_json(&json).unwrap(), layout);
    }
}
