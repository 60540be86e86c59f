pub mod color;
pub mod document;
pub mod format;
pub mod geometry;
pub mod ids;
pub mod surface;

pub use color::Color;
pub use document::{DocStatus, Document, FormKind, LineItem, Party, Totals};
pub use geometry::{Margins, PageSetup, PageSize, is_safe_font_family};
pub use ids::SessionId;
pub use surface::RenderedSurface;
