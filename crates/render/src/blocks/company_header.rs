//! Branding header: logo and tagline on the left, company details on the right.
use docket_idf::{Element, div, px};
use docket_layout::HeaderCompanyConfig;

const LOGO_FONT: &str = "'Times New Roman', serif";

pub fn render(cfg: &HeaderCompanyConfig) -> Element {
    let lx = &cfg.layout;
    let sizes = &cfg.company_block;
    let texts = &cfg.texts;

    let brand = div()
        .css("text-align", "left")
        .child(
            div()
                .css("font-family", LOGO_FONT)
                .css("font-style", "italic")
                .css("font-weight", "800")
                .css("font-size", px(cfg.logo_px))
                .css("line-height", "0.8")
                .css("letter-spacing", "1px")
                .css("text-align", "center")
                .text(cfg.logo_text.as_str()),
        )
        .child(
            div()
                .css("font-family", LOGO_FONT)
                .css("font-style", "italic")
                .css("font-weight", "700")
                .css("font-size", px(cfg.tagline_px))
                .css("margin-top", "6px")
                .text(cfg.tagline_text.as_str()),
        );

    let line = |size: f32, weight: Option<&'static str>, margin_bottom: f32, text: &str| {
        let mut el = div().css("font-size", px(size));
        if let Some(w) = weight {
            el = el.css("font-weight", w);
        }
        if margin_bottom > 0.0 {
            el = el.css("margin-bottom", px(margin_bottom));
        }
        el.text(text)
    };

    let company = div()
        .css("text-align", "left")
        .css("font-style", "normal")
        .css("line-height", "1")
        .css("min-width", px(lx.right_min_width))
        .css("max-width", px(lx.right_max_width))
        .css("margin-left", "auto")
        .css("padding-top", px(lx.right_padding_top_px))
        .child(line(sizes.th_bold_px, Some("700"), 2.0, &texts.name_th))
        .child(line(sizes.addr_th_px, None, 2.0, &texts.addr_th))
        .child(line(sizes.en_bold_px, Some("700"), 4.0, &texts.name_en))
        .child(line(sizes.addr_en_px, None, 2.0, &texts.addr_en))
        .child(line(sizes.tel_px, Some("600"), 0.0, &texts.contact_line()));

    div()
        .class("docket-company-header")
        .css("margin-bottom", "6px")
        .css("margin-top", px(lx.top_offset_px))
        .child(
            div()
                .css("display", "flex")
                .css("align-items", "flex-start")
                .css("justify-content", "space-between")
                .css("gap", px(lx.gap_px))
                .child(brand)
                .child(company),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use docket_idf::Node;

    #[test]
    fn missing_texts_still_render_a_legible_header() {
        let node: Node = render(&HeaderCompanyConfig::default()).into();
        let text = node.text_content();
        assert!(text.contains("DOCKET"));
        assert!(text.contains("Docket Company Limited"));
        assert!(text.ends_with("Tel/Fax 0-0000-0000"));
    }

    #[test]
    fn tax_id_replaces_phone_line() {
        let mut cfg = HeaderCompanyConfig::default();
        cfg.texts.tax_id = Some("0105500000000".into());
        let node: Node = render(&cfg).into();
        assert!(node.text_content().ends_with("เลขประจำตัวผู้เสียภาษีอากร 0105500000000"));
    }
}
