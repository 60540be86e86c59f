//! Signature boxes.
use crate::primitives::{Geometry, col, row};
use docket_idf::{Element, div, pct, px};
use docket_layout::SignaturesConfig;

/// Space left under the signing area for the two label lines.
const LABEL_BAND_PX: f32 = 24.0;

pub fn render(cfg: &SignaturesConfig, geo: &Geometry) -> Element {
    let boxes = cfg.effective_boxes().into_iter().map(|b| {
        col(b.width_pct.map(pct)).child(
            geo.boxed()
                .css("min-height", px(cfg.min_height_px))
                .css("padding", "6px")
                .child(div().css("height", px((cfg.min_height_px - LABEL_BAND_PX).max(0.0))))
                .child(
                    div()
                        .css("text-align", "center")
                        .css("font-size", px(cfg.label_th_px))
                        .text(b.th),
                )
                .child(
                    div()
                        .css("text-align", "center")
                        .css("font-size", px(cfg.label_en_px))
                        .css("opacity", "0.9")
                        .text(b.en),
                ),
        )
    });

    row(cfg.gap_px)
        .class("docket-signatures")
        .css("margin-top", px(cfg.margin_top_px))
        .children(boxes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use docket_idf::Node;
    use docket_layout::SignatureBox;

    #[test]
    fn default_boxes_with_explicit_width_on_second() {
        let el = render(&SignaturesConfig::default(), &Geometry::default());
        assert_eq!(el.children.len(), 4);
        let widths: Vec<_> = el
            .children
            .iter()
            .map(|c| match c {
                Node::Element(e) => e.style.get("width").map(str::to_string),
                _ => None,
            })
            .collect();
        assert_eq!(widths, vec![None, Some("25%".to_string()), None, None]);
    }

    #[test]
    fn layout_replaces_boxes() {
        let cfg = SignaturesConfig {
            boxes: vec![SignatureBox { th: "ผู้อนุมัติ".into(), en: "APPROVED BY".into(), width_pct: Some(50.0) }],
            ..SignaturesConfig::default()
        };
        let node = Node::from(render(&cfg, &Geometry::default()));
        assert_eq!(node.text_content(), "ผู้อนุมัติAPPROVED BY");
    }
}
