//! The head grid: counterparty box on the left, the 2x2 reference grid on the
//! right, and the optional terms strip underneath.
use crate::align::{Bilingual, HAlign, VAlign};
use crate::default_binding;
use docket_bind::BindingExpr;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadGridConfig {
    pub offset_top_px: f32,
    pub offset_bottom_px: f32,
    pub offset_left_px: f32,
    pub offset_right_px: f32,
    pub line_height: f32,
    pub grid: GridSplit,
    pub col_gap_px: f32,
    pub seller_block: SellerBlockConfig,
    pub right_info: RightInfoConfig,
    pub terms_block: TermsBlockConfig,
}

impl Default for HeadGridConfig {
    fn default() -> Self {
        Self {
            offset_top_px: 0.0,
            offset_bottom_px: 0.0,
            offset_left_px: 0.0,
            offset_right_px: 0.0,
            line_height: 1.0,
            grid: GridSplit::default(),
            col_gap_px: 8.0,
            seller_block: SellerBlockConfig::default(),
            right_info: RightInfoConfig::default(),
            terms_block: TermsBlockConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSplit {
    pub left_pct: f32,
    pub right_pct: f32,
}

impl Default for GridSplit {
    fn default() -> Self {
        Self { left_pct: 55.0, right_pct: 45.0 }
    }
}

// ---- Left column ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopLeftLine {
    pub show: bool,
    pub text: String,
    pub font_px: f32,
    #[serde(with = "docket_bind::serde_support::optional")]
    pub bind: Option<BindingExpr>,
}

impl Default for TopLeftLine {
    fn default() -> Self {
        Self {
            show: true,
            text: "JOB No.".to_string(),
            font_px: 16.0,
            bind: default_binding("document.job_no"),
        }
    }
}

/// How a counterparty field is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRole {
    #[default]
    Text,
    /// Shown as `<label_th> <value>`.
    TaxId,
    /// Moved into the contact sub-row.
    Email,
    /// Moved into the contact sub-row.
    Phone,
}

impl FieldRole {
    pub fn is_contact(&self) -> bool {
        matches!(self, FieldRole::Email | FieldRole::Phone)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SellerField {
    pub label_th: String,
    pub label_en: String,
    #[serde(with = "docket_bind::serde_support::optional")]
    pub bind: Option<BindingExpr>,
    pub role: FieldRole,
}

impl SellerField {
    fn new(th: &str, en: &str, bind: &'static str, role: FieldRole) -> Self {
        Self {
            label_th: th.to_string(),
            label_en: en.to_string(),
            bind: default_binding(bind),
            role,
        }
    }
}

/// Labels and bindings of the email/phone sub-row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub email_label: String,
    pub phone_label: String,
    #[serde(with = "docket_bind::serde_support::optional")]
    pub email_bind: Option<BindingExpr>,
    #[serde(with = "docket_bind::serde_support::optional")]
    pub phone_bind: Option<BindingExpr>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email_label: "อีเมล".to_string(),
            phone_label: "โทร".to_string(),
            email_bind: default_binding("party.email|customer.email"),
            phone_bind: default_binding("party.phone|customer.phone"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SellerBlockConfig {
    pub top_left: TopLeftLine,
    pub box_height_px: f32,
    pub box_padding_px: f32,
    pub labels_px: f32,
    pub text_px: f32,
    pub fields: Vec<SellerField>,
    pub contact: ContactConfig,
}

impl Default for SellerBlockConfig {
    fn default() -> Self {
        Self {
            top_left: TopLeftLine::default(),
            box_height_px: 160.0,
            box_padding_px: 6.0,
            labels_px: 18.0,
            text_px: 18.0,
            fields: vec![
                SellerField::new("นามผู้ซื้อ", "CUSTOMERS NAME", "party.name", FieldRole::Text),
                SellerField::new("ที่อยู่", "ADDRESS", "party.address", FieldRole::Text),
                SellerField::new(
                    "เลขประจำตัวผู้เสียภาษีอากร",
                    "TAX ID",
                    "party.tax_id",
                    FieldRole::TaxId,
                ),
                SellerField::new("อีเมล", "EMAIL", "party.email", FieldRole::Email),
                SellerField::new("โทร", "TEL", "party.phone", FieldRole::Phone),
            ],
            contact: ContactConfig::default(),
        }
    }
}

impl SellerBlockConfig {
    /// The box caption, taken from the first field's labels.
    pub fn caption(&self) -> (&str, &str) {
        let first = self.fields.first();
        let th = first.map(|f| f.label_th.as_str()).filter(|s| !s.is_empty());
        let en = first.map(|f| f.label_en.as_str()).filter(|s| !s.is_empty());
        (th.unwrap_or("นามผู้ซื้อ"), en.unwrap_or("CUSTOMERS NAME"))
    }

    /// Fields shown one per line; contact roles are excluded.
    pub fn stacked_fields(&self) -> impl Iterator<Item = &SellerField> {
        self.fields.iter().filter(|f| !f.role.is_contact())
    }

    /// The binding for a contact role: a field declaring that role wins over the contact default.
    pub fn contact_binding(&self, role: FieldRole) -> Option<&BindingExpr> {
        let declared = self
            .fields
            .iter()
            .find(|f| f.role == role)
            .and_then(|f| f.bind.as_ref());
        let fallback = match role {
            FieldRole::Email => self.contact.email_bind.as_ref(),
            FieldRole::Phone => self.contact.phone_bind.as_ref(),
            _ => None,
        };
        declared.or(fallback)
    }
}

// ---- Right column ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopRightNote {
    pub show: bool,
    pub label: String,
    #[serde(with = "docket_bind::serde_support::optional")]
    pub bind: Option<BindingExpr>,
    pub font_px: f32,
}

impl Default for TopRightNote {
    fn default() -> Self {
        Self {
            show: false,
            label: "เอกสารออกเป็นชุด".to_string(),
            bind: default_binding("document.document_set_note"),
            font_px: 16.0,
        }
    }
}

/// One box of the right grid. A blank label or missing binding falls back to the
/// built-in for its position.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InfoCell {
    pub label: String,
    #[serde(with = "docket_bind::serde_support::optional")]
    pub bind: Option<BindingExpr>,
}

/// Position of a box in the right grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoSlot {
    Date,
    Number,
    Reference,
    Code,
}

impl InfoSlot {
    pub const ALL: [InfoSlot; 4] = [
        InfoSlot::Date,
        InfoSlot::Number,
        InfoSlot::Reference,
        InfoSlot::Code,
    ];

    pub fn default_label(&self) -> &'static str {
        match self {
            InfoSlot::Date => "วันที่/DATE",
            InfoSlot::Number => "เลขที่/No.",
            InfoSlot::Reference => "เลขที่ใบสั่งซื้อ",
            InfoSlot::Code => "รหัสผู้ขาย/SUPPLIER CODE",
        }
    }

    /// Text shown when neither binding yields a value.
    pub fn default_text(&self) -> &'static str {
        match self {
            InfoSlot::Date => "-",
            _ => "",
        }
    }
}

/// Built-in bindings consulted after a cell's own binding yields nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfoFallbacks {
    #[serde(with = "docket_bind::serde_support::optional")]
    pub date: Option<BindingExpr>,
    #[serde(with = "docket_bind::serde_support::optional")]
    pub number: Option<BindingExpr>,
    #[serde(with = "docket_bind::serde_support::optional")]
    pub reference: Option<BindingExpr>,
    #[serde(with = "docket_bind::serde_support::optional")]
    pub code: Option<BindingExpr>,
}

impl Default for InfoFallbacks {
    fn default() -> Self {
        Self {
            date: default_binding("document.date_dmy|document.doc_date_dmy"),
            number: default_binding("document.display_no"),
            reference: default_binding("document.po_list"),
            code: default_binding(
                "party.supplier_code|document.supplier_code|party.customer_no|customer.customer_no",
            ),
        }
    }
}

impl InfoFallbacks {
    pub fn for_slot(&self, slot: InfoSlot) -> Option<&BindingExpr> {
        match slot {
            InfoSlot::Date => self.date.as_ref(),
            InfoSlot::Number => self.number.as_ref(),
            InfoSlot::Reference => self.reference.as_ref(),
            InfoSlot::Code => self.code.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RightInfoConfig {
    pub show: bool,
    pub boxed: bool,
    pub offset_top_px: f32,
    pub top_right_note: TopRightNote,
    pub col_split_pct: [f32; 2],
    pub gap_px: f32,
    pub row1_height_px: f32,
    pub row2_height_px: f32,
    pub box_padding_px: f32,
    pub label_px: f32,
    pub value_px: f32,
    pub value_align: HAlign,
    pub value_valign: VAlign,
    pub row1: Vec<InfoCell>,
    pub row2: Vec<InfoCell>,
    pub fallbacks: InfoFallbacks,
}

impl Default for RightInfoConfig {
    fn default() -> Self {
        Self {
            show: true,
            boxed: true,
            offset_top_px: 0.0,
            top_right_note: TopRightNote::default(),
            col_split_pct: [50.0, 50.0],
            gap_px: 6.0,
            row1_height_px: 64.0,
            row2_height_px: 64.0,
            box_padding_px: 6.0,
            label_px: 16.0,
            value_px: 20.0,
            value_align: HAlign::Right,
            value_valign: VAlign::Top,
            row1: Vec::new(),
            row2: Vec::new(),
            fallbacks: InfoFallbacks::default(),
        }
    }
}

impl RightInfoConfig {
    /// The configured cell for a slot, if the layout declares one.
    pub fn cell(&self, slot: InfoSlot) -> Option<&InfoCell> {
        match slot {
            InfoSlot::Date => self.row1.first(),
            InfoSlot::Number => self.row1.get(1),
            InfoSlot::Reference => self.row2.first(),
            InfoSlot::Code => self.row2.get(1),
        }
    }

    pub fn label(&self, slot: InfoSlot) -> &str {
        self.cell(slot)
            .map(|c| c.label.as_str())
            .filter(|l| !l.is_empty())
            .unwrap_or(slot.default_label())
    }

    pub fn row_height(&self, slot: InfoSlot) -> f32 {
        match slot {
            InfoSlot::Date | InfoSlot::Number => self.row1_height_px,
            InfoSlot::Reference | InfoSlot::Code => self.row2_height_px,
        }
    }
}

// ---- Terms strip ----

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TermDefaults {
    pub term: Option<String>,
    pub price_validity: Option<String>,
    pub delivery_validity: Option<String>,
}

impl TermDefaults {
    pub fn values(&self) -> [Option<&str>; 3] {
        [
            self.term.as_deref(),
            self.price_validity.as_deref(),
            self.delivery_validity.as_deref(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TermsBlockConfig {
    pub show: bool,
    pub gap_px: f32,
    pub box_height_px: f32,
    pub label_th_px: Option<f32>,
    pub label_en_px: Option<f32>,
    pub value_px: Option<f32>,
    pub labels: Vec<Bilingual>,
    pub defaults: TermDefaults,
    /// Shown in a box whose value is not configured.
    pub placeholder: String,
}

impl Default for TermsBlockConfig {
    fn default() -> Self {
        Self {
            show: true,
            gap_px: 6.0,
            box_height_px: 60.0,
            label_th_px: None,
            label_en_px: None,
            value_px: None,
            labels: vec![
                Bilingual::new("เงื่อนไขการชำระเงิน", "TERM OF PAYMENT"),
                Bilingual::new("ยืนราคา", "PRICE VALIDITY"),
                Bilingual::new("กำหนดส่งของ", "DELIVERY"),
            ],
            defaults: TermDefaults::default(),
            placeholder: "30 day".to_string(),
        }
    }
}

impl TermsBlockConfig {
    /// The three boxes as `(label, value)` pairs.
    pub fn boxes(&self) -> [(Bilingual, &str); 3] {
        let values = self.defaults.values();
        std::array::from_fn(|i| {
            let label = self.labels.get(i).cloned().unwrap_or_default();
            let value = values[i].filter(|v| !v.is_empty()).unwrap_or(self.placeholder.as_str());
            (label, value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn contact_fields_leave_the_stacked_list() {
        let cfg = SellerBlockConfig::default();
        let roles: Vec<_> = cfg.stacked_fields().map(|f| f.role).collect();
        assert_eq!(roles, vec![FieldRole::Text, FieldRole::Text, FieldRole::TaxId]);
        assert_eq!(
            cfg.contact_binding(FieldRole::Email).map(|b| b.to_string()),
            Some("party.email".to_string())
        );
    }

    #[test]
    fn contact_binding_falls_back_when_no_field_declares_it() {
        let cfg: SellerBlockConfig = serde_json::from_value(json!({
            "fields": [{ "label_th": "ผู้ขาย", "label_en": "VENDOR", "bind": "party.name" }]
        }))
        .unwrap();
        assert_eq!(cfg.caption(), ("ผู้ขาย", "VENDOR"));
        assert_eq!(
            cfg.contact_binding(FieldRole::Phone).map(|b| b.to_string()),
            Some("party.phone|customer.phone".to_string())
        );
    }

    #[test]
    fn right_cells_fall_back_per_position() {
        let cfg: RightInfoConfig = serde_json::from_value(json!({
            "row1": [{ "label": "DATE" }],
            "value_align": "center"
        }))
        .unwrap();
        assert_eq!(cfg.label(InfoSlot::Date), "DATE");
        assert_eq!(cfg.label(InfoSlot::Code), "รหัสผู้ขาย/SUPPLIER CODE");
        assert_eq!(cfg.value_align, HAlign::Center);
        assert_eq!(
            cfg.fallbacks.for_slot(InfoSlot::Reference).map(|b| b.to_string()),
            Some("document.po_list".to_string())
        );
    }

    #[test]
    fn terms_fill_missing_values_with_placeholder() {
        let cfg: TermsBlockConfig = serde_json::from_value(json!({
            "defaults": { "term": "Cash" }
        }))
        .unwrap();
        let boxes = cfg.boxes();
        assert_eq!(boxes[0].1, "Cash");
        assert_eq!(boxes[1].1, "30 day");
        assert_eq!(boxes[2].0.en, "DELIVERY");
    }
}
