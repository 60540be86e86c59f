//! Company branding header and the title bar.
use crate::default_binding;
use docket_bind::BindingExpr;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderCompanyConfig {
    pub logo_text: String,
    pub logo_px: f32,
    pub tagline_text: String,
    pub tagline_px: f32,
    pub layout: HeaderLayout,
    pub company_block: CompanyBlockSizes,
    pub texts: CompanyTexts,
}

impl Default for HeaderCompanyConfig {
    fn default() -> Self {
        Self {
            logo_text: "DOCKET".to_string(),
            logo_px: 72.0,
            tagline_text: "Engineering and Equipment".to_string(),
            tagline_px: 24.0,
            layout: HeaderLayout::default(),
            company_block: CompanyBlockSizes::default(),
            texts: CompanyTexts::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderLayout {
    pub gap_px: f32,
    pub right_min_width: f32,
    pub right_max_width: f32,
    pub right_padding_top_px: f32,
    pub top_offset_px: f32,
}

impl Default for HeaderLayout {
    fn default() -> Self {
        Self {
            gap_px: 16.0,
            right_min_width: 420.0,
            right_max_width: 520.0,
            right_padding_top_px: 6.0,
            top_offset_px: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyBlockSizes {
    pub th_bold_px: f32,
    pub en_bold_px: f32,
    pub addr_th_px: f32,
    pub addr_en_px: f32,
    pub tel_px: f32,
}

impl Default for CompanyBlockSizes {
    fn default() -> Self {
        Self {
            th_bold_px: 21.0,
            en_bold_px: 18.0,
            addr_th_px: 17.0,
            addr_en_px: 17.0,
            tel_px: 17.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyTexts {
    pub name_th: String,
    pub addr_th: String,
    pub name_en: String,
    pub addr_en: String,
    pub tax_label: String,
    pub tax_id: Option<String>,
    pub tel: String,
}

impl Default for CompanyTexts {
    fn default() -> Self {
        Self {
            name_th: "บริษัท ด็อกเก็ต จำกัด (สำนักงานใหญ่)".to_string(),
            addr_th: "เลขที่ 1 ถนนสุขุมวิท กรุงเทพมหานคร".to_string(),
            name_en: "Docket Company Limited".to_string(),
            addr_en: "1 Sukhumvit Road, Bangkok".to_string(),
            tax_label: "เลขประจำตัวผู้เสียภาษีอากร".to_string(),
            tax_id: None,
            tel: "Tel/Fax 0-0000-0000".to_string(),
        }
    }
}

impl CompanyTexts {
    /// The last header line: the tax id when one is configured, the phone line otherwise.
    pub fn contact_line(&self) -> String {
        match self.tax_id.as_deref().filter(|id| !id.is_empty()) {
            Some(id) => format!("{} {}", self.tax_label, id),
            None => self.tel.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleFlags {
    pub top: bool,
    pub bottom: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleBarConfig {
    pub font_px: f32,
    /// `[y, x]`.
    pub padding_px: [f32; 2],
    pub border: RuleFlags,
    #[serde(with = "docket_bind::serde_support::optional")]
    pub bind: Option<BindingExpr>,
}

impl Default for TitleBarConfig {
    fn default() -> Self {
        Self {
            font_px: 29.0,
            padding_px: [0.0, 0.0],
            border: RuleFlags::default(),
            bind: default_binding("document.header_title"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_line_prefers_tax_id() {
        let mut texts = CompanyTexts::default();
        assert_eq!(texts.contact_line(), "Tel/Fax 0-0000-0000");
        texts.tax_id = Some("0105500000000".into());
        assert_eq!(texts.contact_line(), "เลขประจำตัวผู้เสียภาษีอากร 0105500000000");
    }
}
