//! Block renderers. Each is a pure function of its slice of the document view
//! and its slice of the layout descriptor.
pub mod company_header;
pub mod head_grid;
pub mod items_table;
pub mod signatures;
pub mod summary;
pub mod title_bar;
