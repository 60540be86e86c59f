//! The standalone page a print surface loads.
use docket_idf::{Node, div, to_html};
use docket_types::format::format_css_number;
use docket_types::{PageSetup, RenderedSurface};

pub const PRINT_AREA_CLASS: &str = "print-area";

/// A complete HTML page wrapping one composed surface for printing.
#[derive(Debug, Clone, PartialEq)]
pub struct IsolatedDocument {
    pub title: String,
    pub html: String,
    pub page: PageSetup,
}

impl IsolatedDocument {
    pub fn new(surface: &RenderedSurface) -> Self {
        let page = &surface.page;
        let area = div()
            .class(PRINT_AREA_CLASS)
            .css("width", mm(page.content_width_mm()))
            .child(Node::Raw(surface.html.clone()));

        let mut html = String::with_capacity(surface.html.len() + 1024);
        html.push_str("<!DOCTYPE html><html lang=\"th\"><head><meta charset=\"utf-8\">");
        html.push_str("<title>");
        html.push_str(&to_html(&Node::from(surface.title.as_str())));
        html.push_str("</title><style>");
        html.push_str(&print_stylesheet(page));
        html.push_str("</style></head><body>");
        html.push_str(&to_html(&area.into()));
        html.push_str("</body></html>");

        Self {
            title: surface.title.clone(),
            html,
            page: page.clone(),
        }
    }
}

fn mm(value: f32) -> String {
    format!("{}mm", format_css_number(value))
}

/// Print-only rules for the isolated page: page box, exact colours, header
/// groups repeating on each sheet, and rows that never split.
pub fn print_stylesheet(page: &PageSetup) -> String {
    format!(
        concat!(
            "@page{{size:{size};margin:{margins}}}",
            "@media print{{",
            "html,body{{-webkit-print-color-adjust:exact;print-color-adjust:exact}}",
            ".{area},.{area} *,.{area} *::before,.{area} *::after{{box-sizing:border-box}}",
            ".{area}{{width:{width};border:0 !important}}",
            "}}",
            "html,body{{margin:0}}",
            "body{{font-family:{family};font-size:{font}px;color:#111}}",
            "thead{{display:table-header-group}}",
            "tfoot{{display:table-footer-group}}",
            "table{{page-break-inside:auto;border-collapse:collapse}}",
            "tr,td,th{{page-break-inside:avoid;break-inside:avoid}}",
            ".{area}{{break-inside:avoid}}",
        ),
        size = page.size.css_size(),
        margins = page.margins.css_mm(),
        area = PRINT_AREA_CLASS,
        width = mm(page.content_width_mm()),
        family = page.font_family_css(),
        font = format_css_number(page.base_font_px),
    )
}
