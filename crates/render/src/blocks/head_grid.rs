//! Head grid: counterparty box, the 2x2 reference grid and the terms strip.
//!
//! Every displayed value goes through a binding, so the same code lays out all
//! four form kinds; what differs between them lives in their descriptors.
use crate::primitives::{Geometry, col, row};
use crate::view::DocumentView;
use docket_idf::{Element, div, pct, px, span};
use docket_layout::head_grid::{RightInfoConfig, TermsBlockConfig};
use docket_layout::{FieldRole, HAlign, HeadGridConfig, InfoSlot, SellerBlockConfig, SellerField};

const TAX_ID_LABEL: &str = "เลขประจำตัวผู้เสียภาษีอากร";

pub fn render(cfg: &HeadGridConfig, view: &DocumentView, geo: &Geometry) -> Element {
    let main = row(cfg.col_gap_px)
        .child(col(Some(pct(cfg.grid.left_pct))).children(seller_column(&cfg.seller_block, view, geo)))
        .child(col(Some(pct(cfg.grid.right_pct))).child(right_column(&cfg.right_info, view, geo)));

    let mut block = div()
        .class("docket-head-grid")
        .css("margin-top", px(cfg.offset_top_px))
        .css("margin-bottom", px(cfg.offset_bottom_px))
        .css("padding-left", px(cfg.offset_left_px))
        .css("padding-right", px(cfg.offset_right_px))
        .css("line-height", docket_types::format::format_css_number(cfg.line_height))
        .child(main);

    if cfg.terms_block.show {
        block = block.child(terms_strip(&cfg.terms_block, geo));
    }
    block
}

fn seller_column(sb: &SellerBlockConfig, view: &DocumentView, geo: &Geometry) -> Vec<Element> {
    let mut out = Vec::new();

    if sb.top_left.show {
        let value = view.resolve(sb.top_left.bind.as_ref());
        let value = if value.is_empty() {
            non_empty_or(view.document_field("job_no"), "-")
        } else {
            value
        };
        out.push(
            geo.cell(HAlign::Left, false).child(
                span()
                    .css("font-size", px(sb.top_left.font_px))
                    .text(format!("{} {}", sb.top_left.text, value)),
            ),
        );
    }

    let (caption_th, caption_en) = sb.caption();
    let mut panel = geo
        .boxed()
        .css("height", px(sb.box_height_px))
        .css("padding", px(sb.box_padding_px))
        .child(
            geo.cell(HAlign::Left, true).child(
                span()
                    .css("font-size", px(sb.labels_px))
                    .text(format!("{}/{}", caption_th, caption_en)),
            ),
        );

    for field in sb.stacked_fields() {
        panel = panel.child(
            geo.cell(HAlign::Left, false)
                .child(span().css("font-size", px(sb.text_px)).text(field_text(field, view))),
        );
    }

    let email = view.resolve(sb.contact_binding(FieldRole::Email));
    let phone = view.resolve(sb.contact_binding(FieldRole::Phone));
    if !email.is_empty() || !phone.is_empty() {
        let mut contacts = div()
            .css("display", "flex")
            .css("flex-wrap", "wrap")
            .css("column-gap", "16px")
            .css("row-gap", "0")
            .css("align-items", "baseline");
        let line = |label: &str, value: &str| {
            geo.cell(HAlign::Left, false).child(
                span()
                    .css("font-size", px(sb.text_px))
                    .text(format!("{}: {}", label, value)),
            )
        };
        if !email.is_empty() {
            contacts = contacts.child(
                div()
                    .css("flex", "1 1 320px")
                    .css("min-width", "240px")
                    .child(line(&sb.contact.email_label, &email)),
            );
        }
        if !phone.is_empty() {
            contacts = contacts.child(
                div()
                    .css("flex", "0 0 auto")
                    .child(line(&sb.contact.phone_label, &phone)),
            );
        }
        panel = panel.child(contacts);
    }

    out.push(panel);
    out
}

fn field_text(field: &SellerField, view: &DocumentView) -> String {
    let value = non_empty_or(&view.resolve(field.bind.as_ref()), "-");
    match field.role {
        FieldRole::TaxId => {
            let label = if field.label_th.is_empty() { TAX_ID_LABEL } else { &field.label_th };
            format!("{} {}", label, value)
        }
        _ => value,
    }
}

fn right_column(ri: &RightInfoConfig, view: &DocumentView, geo: &Geometry) -> Element {
    let mut column = div().css("margin-top", px(ri.offset_top_px));

    let note = &ri.top_right_note;
    if note.show {
        let value = view.resolve(note.bind.as_ref());
        column = column.child(
            div()
                .css("text-align", "right")
                .css("margin-bottom", "4px")
                .child(
                    span()
                        .css("font-size", px(note.font_px))
                        .text(format!("{} {}", note.label, value).trim_end().to_string()),
                ),
        );
    }

    if ri.show {
        let [left, right] = ri.col_split_pct;
        let grid = div()
            .css("display", "grid")
            .css("grid-template-columns", format!("{} {}", pct(left), pct(right)))
            .css("gap", px(ri.gap_px))
            .children(InfoSlot::ALL.iter().map(|slot| info_box(ri, *slot, view, geo)));
        column = column.child(grid);
    }
    column
}

fn info_box(ri: &RightInfoConfig, slot: InfoSlot, view: &DocumentView, geo: &Geometry) -> Element {
    let own = ri.cell(slot).and_then(|c| c.bind.as_ref());
    let value = view.resolve_first(&[own, ri.fallbacks.for_slot(slot)], slot.default_text());

    let frame = if ri.boxed { geo.boxed() } else { div() };
    frame
        .css("height", px(ri.row_height(slot)))
        .css("padding", px(ri.box_padding_px))
        .css("display", "flex")
        .css("flex-direction", "column")
        .child(
            div()
                .css("font-weight", "700")
                .css("font-size", px(ri.label_px))
                .text(ri.label(slot)),
        )
        .child(
            div()
                .css("flex", "1")
                .css("display", "flex")
                .css("align-items", ri.value_valign.align_items())
                .css("justify-content", ri.value_align.justify())
                .child(div().css("font-size", px(ri.value_px)).text(value)),
        )
}

fn terms_strip(terms: &TermsBlockConfig, geo: &Geometry) -> Element {
    let sized = |el: Element, size: Option<f32>| match size {
        Some(s) => el.css("font-size", px(s)),
        None => el,
    };

    let boxes = terms.boxes().into_iter().map(|(label, value)| {
        geo.boxed()
            .css("min-height", px(terms.box_height_px))
            .css("display", "flex")
            .css("flex-direction", "column")
            .child(sized(
                div()
                    .css("padding", "4px 6px")
                    .css("text-align", "center")
                    .css("font-weight", "700"),
                terms.label_th_px,
            )
            .text(label.th))
            .child(sized(
                div()
                    .css("padding", "2px 6px")
                    .css("text-align", "center")
                    .css("font-weight", "700"),
                terms.label_en_px,
            )
            .text(label.en))
            .child(div().css("border-top", geo.rule()))
            .child(sized(
                div()
                    .css("flex", "1")
                    .css("display", "flex")
                    .css("align-items", "center")
                    .css("justify-content", "center")
                    .css("padding", "6px")
                    .css("font-weight", "700"),
                terms.value_px,
            )
            .text(value))
    });

    div()
        .class("docket-terms")
        .css("display", "grid")
        .css("grid-template-columns", "1fr 1fr 1fr")
        .css("gap", px(terms.gap_px))
        .css("margin-top", "6px")
        .children(boxes)
}

fn non_empty_or(value: &str, default: &str) -> String {
    if value.is_empty() { default.to_string() } else { value.to_string() }
}
