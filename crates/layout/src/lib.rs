//! Layout descriptors: the static, per-form-kind configuration that governs
//! page geometry, block sizes, label text and value bindings.

pub mod align;
pub mod descriptor;
pub mod error;
pub mod head_grid;
pub mod header;
pub mod items;
pub mod page;
pub mod registry;
pub mod summary;

pub use align::{Bilingual, HAlign, VAlign};
pub use descriptor::{DESCRIPTOR_VERSION, LayoutDescriptor};
pub use error::LayoutError;
pub use head_grid::{
    FieldRole, HeadGridConfig, InfoSlot, RightInfoConfig, SellerBlockConfig, SellerField,
    TermsBlockConfig,
};
pub use header::{HeaderCompanyConfig, TitleBarConfig};
pub use items::{Column, ColumnField, ColumnSpec, ColumnWidth, ItemsTableConfig};
pub use page::PageConfig;
pub use registry::{LayoutRegistry, builtin_source};
pub use summary::{
    FinePrintConfig, RemarkConfig, SignatureBox, SignaturesConfig, SummaryConfig,
    TotalRowSpec, TotalsBoxConfig,
};

use docket_bind::{BindingExpr, parse_binding};

/// Parses a binding written into a default. These are literals, so a parse
/// failure only means "no binding".
pub(crate) fn default_binding(expr: &str) -> Option<BindingExpr> {
    parse_binding(expr).ok()
}
