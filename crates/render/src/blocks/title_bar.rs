//! Centered document title with optional rules above and below.
use crate::primitives::Geometry;
use crate::view::DocumentView;
use docket_idf::{Element, div, px};
use docket_layout::TitleBarConfig;

pub fn render(cfg: &TitleBarConfig, view: &DocumentView, geo: &Geometry) -> Element {
    let [pad_y, pad_x] = cfg.padding_px;
    div()
        .class("docket-title")
        .css("text-align", "center")
        .css("font-size", px(cfg.font_px))
        .css("font-weight", "800")
        .css("padding", format!("{} {}", px(pad_y), px(pad_x)))
        .css("margin", "6px 0 8px 0")
        .css("border-top", geo.rule_if(cfg.border.top))
        .css("border-bottom", geo.rule_if(cfg.border.bottom))
        .child(
            div()
                .css("white-space", "nowrap")
                .css("word-break", "keep-all")
                .text(view.resolve(cfg.bind.as_ref())),
        )
}
