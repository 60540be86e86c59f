//! Per-form-kind descriptor lookup.
use crate::descriptor::LayoutDescriptor;
use crate::error::LayoutError;
use docket_types::FormKind;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

const BUILTIN_A: &str = include_str!("../layouts/form_a.json");
const BUILTIN_B: &str = include_str!("../layouts/form_b.json");
const BUILTIN_QUOTATION: &str = include_str!("../layouts/form_quotation.json");
const BUILTIN_PO: &str = include_str!("../layouts/form_po.json");

/// The JSON source of the descriptor compiled in for `kind`.
pub fn builtin_source(kind: FormKind) -> &'static str {
    match kind {
        FormKind::A => BUILTIN_A,
        FormKind::B => BUILTIN_B,
        FormKind::Quotation => BUILTIN_QUOTATION,
        FormKind::PurchaseOrder => BUILTIN_PO,
    }
}

/// Maps form kinds to their descriptors. A kind without a descriptor uses form
/// A's, and an empty registry uses [`LayoutDescriptor::default`].
#[derive(Debug, Clone, Default)]
pub struct LayoutRegistry {
    layouts: BTreeMap<FormKind, Arc<LayoutDescriptor>>,
    fallback: Arc<LayoutDescriptor>,
}

impl LayoutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The descriptors compiled into the binary.
    pub fn builtin() -> Result<Self, LayoutError> {
        let mut registry = Self::new();
        for kind in FormKind::ALL {
            registry.insert(kind, LayoutDescriptor::from_json(builtin_source(kind))?);
        }
        Ok(registry)
    }

    /// Loads `<stem>.json` for every form kind from `dir`. Missing files are
    /// skipped with a warning; unreadable or malformed files are errors.
    pub fn from_dir(dir: &Path) -> Result<Self, LayoutError> {
        if !dir.is_dir() {
            return Err(LayoutError::MissingDirectory(dir.to_path_buf()));
        }
        let mut registry = Self::new();
        for kind in FormKind::ALL {
            let path = dir.join(format!("{}.json", kind.layout_stem()));
            if !path.is_file() {
                warn!(
                    "No layout for form {} at '{}'; it will fall back to form A.",
                    kind,
                    path.display()
                );
                continue;
            }
            debug!("Loading layout for form {} from '{}'", kind, path.display());
            registry.insert(kind, LayoutDescriptor::from_file(&path)?);
        }
        Ok(registry)
    }

    pub fn insert(&mut self, kind: FormKind, layout: LayoutDescriptor) {
        self.layouts.insert(kind, Arc::new(layout));
    }

    /// The descriptor declared for exactly this kind.
    pub fn declared(&self, kind: FormKind) -> Option<&Arc<LayoutDescriptor>> {
        self.layouts.get(&kind)
    }

    /// The descriptor to lay `kind` out with.
    pub fn get(&self, kind: FormKind) -> Arc<LayoutDescriptor> {
        self.layouts
            .get(&kind)
            .or_else(|| self.layouts.get(&FormKind::A))
            .unwrap_or(&self.fallback)
            .clone()
    }

    pub fn kinds(&self) -> impl Iterator<Item = FormKind> + '_ {
        self.layouts.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn builtins_load_for_every_kind() {
        let registry = LayoutRegistry::builtin().unwrap();
        for kind in FormKind::ALL {
            let layout = registry.declared(kind).unwrap();
            assert_eq!(layout.form, Some(kind));
            assert_eq!(layout.items_table.min_rows, 10);
        }
    }

    #[test]
    fn form_b_binds_reference_cell_to_display_number() {
        let registry = LayoutRegistry::builtin().unwrap();
        let b = registry.get(FormKind::B);
        let cell = b.head_grid.right_info.row2.first().unwrap();
        assert_eq!(cell.bind.as_ref().unwrap().to_string(), "document.display_no");
    }

    #[test]
    fn missing_kind_falls_back_to_a_then_default() {
        let mut registry = LayoutRegistry::new();
        assert_eq!(*registry.get(FormKind::PurchaseOrder), LayoutDescriptor::default());

        let mut a = LayoutDescriptor::default();
        a.items_table.min_rows = 3;
        registry.insert(FormKind::A, a);
        assert_eq!(registry.get(FormKind::PurchaseOrder).items_table.min_rows, 3);
    }

    #[test]
    fn from_dir_skips_missing_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("form_b.json"), r#"{ "items_table": { "min_rows": 4 } }"#)
            .unwrap();
        let registry = LayoutRegistry::from_dir(dir.path()).unwrap();
        assert_eq!(registry.kinds().collect::<Vec<_>>(), vec![FormKind::B]);
        assert_eq!(registry.get(FormKind::B).items_table.min_rows, 4);
        assert_eq!(*registry.get(FormKind::A), LayoutDescriptor::default());
    }

    #[test]
    fn from_dir_reports_malformed_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("form_a.json"), "{ not json").unwrap();
        let err = LayoutRegistry::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, LayoutError::Parse { .. }));
        assert!(err.to_string().contains("form_a.json"));
    }

    #[test]
    fn from_dir_requires_directory() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            LayoutRegistry::from_dir(&missing),
            Err(LayoutError::MissingDirectory(_))
        ));
    }
}
