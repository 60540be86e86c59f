//! Remark panel beside the totals panel, then the two-column fine print.
//!
//! The remark panel is held to the height of the totals panel (every row plus
//! the rules between them) and its amount-in-words line sits level with the
//! last totals row.
use crate::primitives::Geometry;
use crate::view::DocumentView;
use docket_bahttext::amount_to_words;
use docket_idf::{Element, div, px};
use docket_layout::{Bilingual, SummaryConfig, TotalRowSpec, TotalsBoxConfig};
use docket_types::format::format_amount;

const PANEL_PAD_PX: f32 = 6.0;

pub fn render(cfg: &SummaryConfig, view: &DocumentView, base_font_px: f32, geo: &Geometry) -> Element {
    let tb = &cfg.totals_box;
    let rows = tb.effective_rows();
    let right_h = tb.panel_height(geo.border_px);
    let divider = tb.divider_offset(geo.border_px);

    let remark_text = view.resolve(cfg.remark.bind.as_ref()).trim().to_string();
    let words = cfg
        .remark
        .words_bind
        .as_ref()
        .map(|bind| amount_to_words(parse_amount(&view.resolve(Some(bind))).unwrap_or(0.0)))
        .unwrap_or_default();

    let mut remark_head = div()
        .css("min-height", px((divider - geo.border_px).max(0.0)))
        .child(
            div()
                .css("font-weight", "700")
                .css("margin-bottom", "6px")
                .css("font-size", px(cfg.remark.title_px))
                .text(cfg.remark.title.as_str()),
        );
    if !remark_text.is_empty() {
        remark_head = remark_head.child(
            div()
                .css("white-space", "pre-wrap")
                .css("font-size", px(cfg.remark.value_px.unwrap_or(base_font_px)))
                .css("line-height", "1.2")
                .text(remark_text),
        );
    }

    let words_line = div()
        .class("docket-amount-words")
        .css("margin-top", "-2px")
        .css("margin-left", px(-PANEL_PAD_PX))
        .css("margin-right", px(-PANEL_PAD_PX))
        .css("border-top", geo.rule())
        .css("height", px(tb.row_h_px))
        .css("display", "flex")
        .css("align-items", "center")
        .css("justify-content", "flex-end")
        .css("padding", "0 8px")
        .css("font-size", px(cfg.remark.words_px))
        .css("font-weight", "700")
        .text(words);

    let remark_panel = div()
        .css("flex", "1")
        .css("min-height", px(right_h.max(cfg.remark.min_height_px)))
        .css("padding", format!("0 {}", px(PANEL_PAD_PX)))
        .css("box-sizing", "border-box")
        .css("border-right", geo.rule())
        .css("display", "flex")
        .css("flex-direction", "column")
        .child(remark_head)
        .child(words_line);

    let last = rows.len().saturating_sub(1);
    let totals_panel = div()
        .css("width", px(tb.width_px))
        .css("display", "flex")
        .css("flex-direction", "column")
        .children(
            rows.iter()
                .enumerate()
                .map(|(i, spec)| total_row(tb, spec, view, i == last, geo)),
        );

    let upper = div()
        .css("display", "flex")
        .css("margin-top", px(cfg.margin_top_px))
        .css("border-top", "none")
        .css("border-bottom", geo.rule())
        .css("border-right", geo.rule())
        .css("border-left", geo.rule())
        .child(remark_panel)
        .child(totals_panel);

    let mut block = div().class("docket-summary").child(upper);
    if cfg.block_gap_px > 0.0 {
        block = block.child(div().css("height", px(cfg.block_gap_px)));
    }
    block.child(fine_print(cfg, tb, geo))
}

fn total_row(
    tb: &TotalsBoxConfig,
    spec: &TotalRowSpec,
    view: &DocumentView,
    last: bool,
    geo: &Geometry,
) -> Element {
    let raw = view.resolve(spec.bind.as_ref());
    let value = match parse_amount(&raw) {
        Some(n) => format_amount(Some(n)),
        None if raw.is_empty() => format_amount(None),
        None => raw,
    };

    let mut labels = div()
        .css("padding-top", px(tb.label_offset_y_px))
        .css("line-height", "1")
        .child(
            div()
                .css("font-weight", if spec.bold { "700" } else { "600" })
                .css("font-size", px(tb.label_px))
                .css("margin", "0")
                .text(spec.th.as_str()),
        );
    if tb.show_en_labels {
        labels = labels.child(
            div()
                .css("font-size", px(tb.en_label_px()))
                .css("opacity", "0.9")
                .css("margin", "0")
                .text(spec.en.as_str()),
        );
    }

    div()
        .css("display", "flex")
        .css("height", px(tb.row_h_px))
        .child(
            div()
                .css("flex", "1")
                .css("border-bottom", geo.rule_if(!last))
                .css("display", "flex")
                .css("flex-direction", "column")
                .css("justify-content", "center")
                .css("padding", "0 6px")
                .child(labels),
        )
        .child(
            div()
                .css("width", px(tb.value_box_w_px))
                .css("border-bottom", geo.rule_if(!last))
                .css("display", "flex")
                .css("align-items", "center")
                .css("justify-content", "flex-end")
                .css("padding", "0 8px")
                .css("font-size", px(tb.value_px))
                .css("font-weight", if spec.bold { "800" } else { "600" })
                .text(value),
        )
}

fn fine_print(cfg: &SummaryConfig, tb: &TotalsBoxConfig, geo: &Geometry) -> Element {
    let fp = &cfg.fine_print;
    let (left, right) = fp.panels();
    let lines = |line: Bilingual, el: Element| {
        el.child(div().css("font-size", px(fp.th_px)).text(line.th))
            .child(
                div()
                    .css("font-size", px(fp.en_px))
                    .css("opacity", "0.9")
                    .text(line.en),
            )
    };

    div()
        .class("docket-fine-print")
        .css("display", "flex")
        .css("border", geo.rule())
        .child(lines(
            left,
            div()
                .css("flex", "1")
                .css("padding", "6px")
                .css("border-right", geo.rule()),
        ))
        .child(lines(
            right,
            div().css("width", px(tb.width_px)).css("padding", "6px"),
        ))
}

/// Reads a resolved value as an amount. Thousands separators are ignored.
fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    cleaned.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use docket_idf::{Node, Tag};
    use docket_types::{Document, Totals};

    fn view(totals: Totals, remark: Option<&str>) -> DocumentView {
        let doc = Document {
            totals,
            remark: remark.map(str::to_string),
            ..Document::default()
        };
        DocumentView::new(&doc, FixedOffset::east_opt(0).unwrap())
    }

    fn scenario_totals() -> Totals {
        Totals {
            subtotal: Some(150.0),
            vat_rate: Some(7.0),
            vat_amount: Some(10.5),
            grand_total: Some(160.5),
        }
    }

    fn words_of(el: &Element) -> String {
        Node::from(el.clone())
            .find_all(Tag::Div)
            .into_iter()
            .find(|d| d.get_attr("class") == Some("docket-amount-words"))
            .map(|d| Node::from(d.clone()).text_content())
            .unwrap_or_default()
    }

    #[test]
    fn words_line_reads_grand_total() {
        let el = render(&SummaryConfig::default(), &view(scenario_totals(), None), 14.0, &Geometry::default());
        assert_eq!(words_of(&el), "หนึ่งร้อยหกสิบบาทห้าสิบสตางค์");
        let text = Node::from(el).text_content();
        assert!(text.contains("150.00"));
        assert!(text.contains("10.50"));
        assert!(text.contains("160.50"));
    }

    #[test]
    fn missing_grand_total_reads_zero() {
        let el = render(&SummaryConfig::default(), &view(Totals::default(), None), 14.0, &Geometry::default());
        assert_eq!(words_of(&el), "ศูนย์บาทถ้วน");
    }

    #[test]
    fn remark_panel_matches_totals_height() {
        let geo = Geometry { border_px: 2.0, ..Geometry::default() };
        let el = render(&SummaryConfig::default(), &view(scenario_totals(), Some("  fragile ")), 14.0, &geo);
        let node = Node::from(el);
        let divs = node.find_all(Tag::Div);
        // 3 rows of 40px plus two 2px rules.
        assert!(divs.iter().any(|d| d.style.get("min-height") == Some("124px")));
        // Divider sits above the last row: (40 + 2) * 2 - 2.
        assert!(divs.iter().any(|d| d.style.get("min-height") == Some("82px")));
        assert!(node.text_content().contains("fragile"));
        assert!(!node.text_content().contains("  fragile"));
    }

    #[test]
    fn gap_row_only_when_positive() {
        let mut cfg = SummaryConfig::default();
        cfg.block_gap_px = 0.0;
        let el = render(&cfg, &view(scenario_totals(), None), 14.0, &Geometry::default());
        assert_eq!(el.children.len(), 2);
    }

    #[test]
    fn amounts_parse_with_grouping() {
        assert_eq!(parse_amount("1,234.5"), Some(1234.5));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("n/a"), None);
    }
}
