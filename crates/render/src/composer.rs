//! Composes the blocks of one document into a self-contained surface.
use crate::blocks::{company_header, head_grid, items_table, signatures, summary, title_bar};
use crate::context::{ComposeOptions, RenderContext};
use docket_idf::{Element, Node, Tag, div, px, to_html};
use docket_layout::{LayoutDescriptor, PageConfig};
use docket_types::format::format_css_number;
use docket_types::{Document, RenderedSurface};
use log::debug;

/// Class of the summary + signatures unit, which must not split across pages.
pub const NO_BREAK_CLASS: &str = "docket-no-break";

#[derive(Debug, Clone, Default)]
pub struct Composer {
    options: ComposeOptions,
}

impl Composer {
    pub fn new(options: ComposeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ComposeOptions {
        &self.options
    }

    /// Renders `document` with `layout`. Pure: the same inputs always give
    /// byte-identical output.
    pub fn compose(&self, document: &Document, layout: &LayoutDescriptor) -> RenderedSurface {
        let tree = self.compose_tree(document, layout);
        let html = to_html(&tree);
        debug!(
            "Composed form {} '{}' ({} items, {} bytes)",
            document.form,
            document.display_no,
            document.items.len(),
            html.len()
        );
        RenderedSurface {
            title: surface_title(document),
            html,
            page: layout.page.page_setup(),
        }
    }

    /// The render tree, before serialization.
    pub fn compose_tree(&self, document: &Document, layout: &LayoutDescriptor) -> Node {
        let ctx = RenderContext::new(document, layout, &self.options);
        let page = &layout.page;
        let geo = &ctx.geometry;

        let keep_together = div()
            .class(NO_BREAK_CLASS)
            .child(summary::render(&layout.summary, &ctx.view, page.base_font_px, geo))
            .child(signatures::render(&layout.signatures, geo));

        div()
            .class("docket-document")
            .css("font-family", page.base_font_family.join(","))
            .css("color", "#111")
            .css("font-size", px(page.base_font_px))
            .css("line-height", format_css_number(page.line_height))
            .child(Element::new(Tag::Style).child(Node::Raw(foundation_css(page))))
            .child(company_header::render(&layout.header_company))
            .child(title_bar::render(&layout.title_bar, &ctx.view, geo))
            .child(head_grid::render(&layout.head_grid, &ctx.view, geo))
            .child(items_table::render(&document.items, &layout.items_table, geo))
            .child(keep_together)
            .into()
    }
}

fn surface_title(document: &Document) -> String {
    match (document.header_title.trim(), document.display_no.trim()) {
        ("", "") => document.form.to_string(),
        (title, "") => title.to_string(),
        ("", no) => no.to_string(),
        (title, no) => format!("{} {}", title, no),
    }
}

/// Page box and print rules that pin the output regardless of the host's
/// default styles.
pub fn foundation_css(page: &PageConfig) -> String {
    format!(
        "*{{box-sizing:border-box;}}\
html,body{{margin:0 !important;padding:0 !important;}}\
@page{{size:{size};margin:{margins};}}\
@media print{{\
body{{-webkit-print-color-adjust:exact;print-color-adjust:exact;}}\
html{{-webkit-text-size-adjust:100%;}}\
thead{{display:table-header-group;}}\
tfoot{{display:table-footer-group;}}\
.{no_break}{{break-inside:avoid;page-break-inside:avoid;}}\
}}\
table{{font-size:{font};border-collapse:collapse;}}\
p{{margin:0;}}",
        size = page.size.css_size(),
        margins = page.margins_mm.css_mm(),
        no_break = NO_BREAK_CLASS,
        font = px(page.base_font_px),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use docket_layout::LayoutRegistry;
    use docket_types::{FormKind, LineItem, Totals};

    fn scenario() -> Document {
        Document {
            form: FormKind::A,
            header_title: "ใบส่งของ".into(),
            display_no: "68/012".into(),
            totals: Totals {
                subtotal: Some(150.0),
                vat_rate: Some(7.0),
                vat_amount: Some(10.5),
                grand_total: Some(160.5),
            },
            items: vec![LineItem {
                quantity: Some(1.0),
                unit_price: Some(150.0),
                line_amount: Some(150.0),
                ..LineItem::default()
            }],
            ..Document::default()
        }
    }

    #[test]
    fn composition_is_deterministic() {
        let layouts = LayoutRegistry::builtin().unwrap();
        let composer = Composer::default();
        for kind in FormKind::ALL {
            let mut doc = scenario();
            doc.form = kind;
            let layout = layouts.get(kind);
            let a = composer.compose(&doc, &layout);
            let b = composer.compose(&doc, &layout);
            assert_eq!(a.html, b.html, "form {}", kind);
        }
    }

    #[test]
    fn blocks_appear_in_fixed_order() {
        let surface = Composer::default().compose(&scenario(), &LayoutDescriptor::default());
        let html = &surface.html;
        let order = [
            "docket-company-header",
            "docket-title",
            "docket-head-grid",
            "docket-items",
            "docket-no-break",
            "docket-summary",
            "docket-signatures",
        ];
        let positions: Vec<_> = order
            .iter()
            .map(|c| html.find(&format!("class=\"{}\"", c)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
        assert_eq!(surface.title, "ใบส่งของ 68/012");
    }

    #[test]
    fn page_box_uses_descriptor_margins() {
        let mut layout = LayoutDescriptor::default();
        layout.page.margins_mm = docket_types::Margins::new(5.0, 12.5, 5.0, 20.0);
        let css = foundation_css(&layout.page);
        assert!(css.contains("@page{size:A4;margin:5mm 12.5mm 5mm 20mm;}"));
        assert!(css.contains(".docket-no-break{break-inside:avoid;"));
        assert!(css.contains("thead{display:table-header-group;}"));
    }

    #[test]
    fn surface_title_falls_back_to_form_code() {
        assert_eq!(surface_title(&Document::default()), "A");
    }
}
