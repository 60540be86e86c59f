pub mod fixtures;

use docket::{PrintView, PrintViewBuilder, ScriptedHost};
use docket::print::{Behaviour, PrintOptions};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A view over the built-in layouts, an in-process channel and a scripted host.
pub fn scripted_view(behaviour: Behaviour) -> (PrintView<ScriptedHost>, ScriptedHost) {
    init_logger();
    let host = ScriptedHost::new(behaviour);
    let view = PrintViewBuilder::new()
        .with_print_options(PrintOptions::default())
        .build(host.clone())
        .expect("built-in layouts load");
    (view, host)
}

/// The `<tbody>` of the items table.
pub fn items_body(html: &str) -> &str {
    let start = html.find("<tbody>").expect("items table body");
    let end = html[start..].find("</tbody>").expect("closed body") + start;
    &html[start..end]
}

/// Number of body rows in the items table.
pub fn body_row_count(html: &str) -> usize {
    items_body(html).matches("<tr").count()
}
