//! Remark/totals panel, fine print, and the signature row.
use crate::align::Bilingual;
use crate::default_binding;
use docket_bind::BindingExpr;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub margin_top_px: f32,
    pub block_gap_px: f32,
    pub totals_box: TotalsBoxConfig,
    pub remark: RemarkConfig,
    pub fine_print: FinePrintConfig,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            margin_top_px: 0.0,
            block_gap_px: 6.0,
            totals_box: TotalsBoxConfig::default(),
            remark: RemarkConfig::default(),
            fine_print: FinePrintConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TotalRowSpec {
    pub th: String,
    pub en: String,
    #[serde(with = "docket_bind::serde_support::optional")]
    pub bind: Option<BindingExpr>,
    pub bold: bool,
}

impl TotalRowSpec {
    fn new(th: &str, en: &str, bind: &'static str, bold: bool) -> Self {
        Self {
            th: th.to_string(),
            en: en.to_string(),
            bind: default_binding(bind),
            bold,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TotalsBoxConfig {
    pub width_px: f32,
    pub value_box_w_px: f32,
    pub row_h_px: f32,
    pub label_px: f32,
    pub value_px: f32,
    pub label_offset_y_px: f32,
    pub show_en_labels: bool,
    pub rows: Vec<TotalRowSpec>,
}

impl Default for TotalsBoxConfig {
    fn default() -> Self {
        Self {
            width_px: 271.0,
            value_box_w_px: 120.0,
            row_h_px: 40.0,
            label_px: 16.0,
            value_px: 22.0,
            label_offset_y_px: 4.0,
            show_en_labels: true,
            rows: default_total_rows(),
        }
    }
}

fn default_total_rows() -> Vec<TotalRowSpec> {
    vec![
        TotalRowSpec::new("รวมราคาทั้งสิ้น", "TOTAL PRICE", "totals.subtotal", false),
        TotalRowSpec::new("ภาษีมูลค่าเพิ่ม/VAT", "VAT", "totals.vat_amount", false),
        TotalRowSpec::new("จำนวนเงินรวมทั้งสิ้น", "NET PRICE", "totals.grand_total", true),
    ]
}

impl TotalsBoxConfig {
    /// The declared rows, or subtotal/VAT/net when the list is empty.
    pub fn effective_rows(&self) -> Vec<TotalRowSpec> {
        if self.rows.is_empty() {
            default_total_rows()
        } else {
            self.rows.clone()
        }
    }

    /// Height of the totals panel: every row plus the rules between them.
    pub fn panel_height(&self, border_px: f32) -> f32 {
        let rows = self.effective_rows().len() as f32;
        self.row_h_px * rows + border_px * (rows - 1.0).max(0.0)
    }

    /// Offset from the top of the panel to the rule above its last row.
    pub fn divider_offset(&self, border_px: f32) -> f32 {
        let rows = self.effective_rows().len() as f32;
        (self.row_h_px + border_px) * (rows - 1.0).max(0.0)
    }

    /// English label size: two pixels under the Thai one, never below 12.
    pub fn en_label_px(&self) -> f32 {
        (self.label_px - 2.0).max(12.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemarkConfig {
    pub title: String,
    pub title_px: f32,
    pub min_height_px: f32,
    #[serde(with = "docket_bind::serde_support::optional")]
    pub bind: Option<BindingExpr>,
    /// The amount read out in words under the remark. Absent means no words line.
    #[serde(with = "docket_bind::serde_support::optional")]
    pub words_bind: Option<BindingExpr>,
    pub words_px: f32,
    /// Remark text size; the page base size when unset.
    pub value_px: Option<f32>,
}

impl Default for RemarkConfig {
    fn default() -> Self {
        Self {
            title: "REMARK".to_string(),
            title_px: 18.0,
            min_height_px: 0.0,
            bind: default_binding("document.remark"),
            words_bind: default_binding("totals.grand_total"),
            words_px: 20.0,
            value_px: None,
        }
    }
}

const CLAIM_NOTICE: (&str, &str) = (
    "หากมีข้อโต้แย้งให้รีบแจ้งทางบริษัท ภายใน 7 วัน นับแต่วันรับของ มิฉะนั้นทางร้านจะมิยอมรับในความผิดพลาดใดๆ",
    "CLAIMS NOT MADE WITHIN 7 DAYS AFTER RECEIPT OF GOODS CANNOT BE ACCEPTED",
);
const RECEIVED_NOTICE: (&str, &str) = (
    "ได้ตรวจรับมอบสินค้าตามรายการและจำนวนในสภาพที่เรียบร้อย",
    "GOODS ARE RECEIVED AT THE ABOVE QUANTITY AND IN THE GOOD MANNER",
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinePrintConfig {
    pub lines: Vec<Bilingual>,
    pub left_index: usize,
    pub right_index: usize,
    pub th_px: f32,
    pub en_px: f32,
}

impl Default for FinePrintConfig {
    fn default() -> Self {
        Self {
            lines: vec![
                Bilingual::new(CLAIM_NOTICE.0, CLAIM_NOTICE.1),
                Bilingual::new(RECEIVED_NOTICE.0, RECEIVED_NOTICE.1),
            ],
            left_index: 0,
            right_index: 1,
            th_px: 16.0,
            en_px: 14.0,
        }
    }
}

impl FinePrintConfig {
    /// The `(left, right)` panels. An index past the end, or a blank half of a
    /// line, falls back to the claim notice on the left and the receipt
    /// attestation on the right.
    pub fn panels(&self) -> (Bilingual, Bilingual) {
        let pick = |index: usize, fallback: (&str, &str)| {
            let line = self.lines.get(index);
            let th = line.map(|l| l.th.as_str()).filter(|s| !s.is_empty());
            let en = line.map(|l| l.en.as_str()).filter(|s| !s.is_empty());
            Bilingual::new(th.unwrap_or(fallback.0), en.unwrap_or(fallback.1))
        };
        (
            pick(self.left_index, CLAIM_NOTICE),
            pick(self.right_index, RECEIVED_NOTICE),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SignatureBox {
    pub th: String,
    pub en: String,
    pub width_pct: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignaturesConfig {
    pub gap_px: f32,
    pub margin_top_px: f32,
    pub min_height_px: f32,
    pub label_th_px: f32,
    pub label_en_px: f32,
    pub boxes: Vec<SignatureBox>,
}

impl Default for SignaturesConfig {
    fn default() -> Self {
        Self {
            gap_px: 6.0,
            margin_top_px: 0.0,
            min_height_px: 80.0,
            label_th_px: 16.0,
            label_en_px: 14.0,
            boxes: default_signature_boxes(),
        }
    }
}

fn default_signature_boxes() -> Vec<SignatureBox> {
    let sig = |th: &str, en: &str, width_pct| SignatureBox {
        th: th.to_string(),
        en: en.to_string(),
        width_pct,
    };
    vec![
        sig("ผู้รับสินค้า", "GOODS RECEIVED", None),
        sig("วันที่", "DATE", Some(25.0)),
        sig("ผู้ส่งสินค้า", "DELIVERED BY", None),
        sig("ลงนาม", "SIGNATURE", None),
    ]
}

impl SignaturesConfig {
    pub fn effective_boxes(&self) -> Vec<SignatureBox> {
        if self.boxes.is_empty() {
            default_signature_boxes()
        } else {
            self.boxes.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn panel_height_counts_rules_between_rows() {
        let cfg = TotalsBoxConfig::default();
        assert_eq!(cfg.panel_height(1.0), 122.0);
        assert_eq!(cfg.divider_offset(1.0), 82.0);
        assert_eq!(cfg.en_label_px(), 14.0);
    }

    #[test]
    fn empty_rows_fall_back_to_three() {
        let cfg: TotalsBoxConfig = serde_json::from_value(json!({ "rows": [] })).unwrap();
        assert_eq!(cfg.effective_rows().len(), 3);
        assert!(cfg.effective_rows()[2].bold);
    }

    #[test]
    fn fine_print_sides_follow_indices() {
        let cfg: FinePrintConfig = serde_json::from_value(json!({
            "lines": [{ "th": "ก", "en": "A" }, { "th": "ข", "en": "B" }],
            "left_index": 1,
            "right_index": 0
        }))
        .unwrap();
        let (left, right) = cfg.panels();
        assert_eq!(left, Bilingual::new("ข", "B"));
        assert_eq!(right, Bilingual::new("ก", "A"));
    }

    #[test]
    fn fine_print_out_of_range_uses_canned_text() {
        let cfg: FinePrintConfig =
            serde_json::from_value(json!({ "lines": [], "right_index": 7 })).unwrap();
        let (left, right) = cfg.panels();
        assert_eq!(left.en, CLAIM_NOTICE.1);
        assert_eq!(right.en, RECEIVED_NOTICE.1);
    }

    #[test]
    fn remark_words_binding_can_be_disabled() {
        let cfg: RemarkConfig = serde_json::from_value(json!({ "words_bind": "" })).unwrap();
        assert!(cfg.words_bind.is_none());
        assert_eq!(cfg.bind.map(|b| b.to_string()).as_deref(), Some("document.remark"));
    }

    #[test]
    fn signature_boxes_default_to_four() {
        let boxes = SignaturesConfig::default().effective_boxes();
        assert_eq!(boxes.len(), 4);
        assert_eq!(boxes[1].width_pct, Some(25.0));
    }
}
