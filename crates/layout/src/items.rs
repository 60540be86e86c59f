//! The line-items table.
use crate::align::HAlign;
use docket_types::format::format_css_number;
use serde::{Deserialize, Serialize};

/// Which line-item value a column displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnField {
    /// 1-based row number.
    Index,
    /// Item name, falling back to its description.
    Name,
    ProductNo,
    Description,
    Unit,
    Quantity,
    UnitPrice,
    LineAmount,
}

impl ColumnField {
    /// Fields assumed, by position, for columns that do not name one.
    const POSITIONAL: [ColumnField; 5] = [
        ColumnField::Index,
        ColumnField::Name,
        ColumnField::Quantity,
        ColumnField::UnitPrice,
        ColumnField::LineAmount,
    ];

    pub fn default_align(&self) -> HAlign {
        match self {
            ColumnField::Index => HAlign::Center,
            ColumnField::Quantity | ColumnField::UnitPrice | ColumnField::LineAmount => {
                HAlign::Right
            }
            _ => HAlign::Left,
        }
    }
}

/// A column width: a number is pixels, a string is used as CSS verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnWidth {
    Px(f32),
    Css(String),
}

impl ColumnWidth {
    pub fn to_css(&self) -> String {
        match self {
            ColumnWidth::Px(px) => format!("{}px", format_css_number(*px)),
            ColumnWidth::Css(raw) => raw.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSpec {
    pub label_th: String,
    pub label_en: String,
    pub width_px: Option<ColumnWidth>,
    pub field: Option<ColumnField>,
    pub align: Option<HAlign>,
}

/// A column with its field and alignment decided.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub label_th: String,
    pub label_en: String,
    pub width: Option<ColumnWidth>,
    pub field: ColumnField,
    pub align: HAlign,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemsTableConfig {
    pub min_rows: usize,
    pub value_px: f32,
    pub head_px: f32,
    pub head_height_px: f32,
    pub row_height_px: f32,
    /// Rule lines between body rows. When off, only the last row closes the table.
    pub body_hlines: bool,
    pub columns: Vec<ColumnSpec>,
}

impl Default for ItemsTableConfig {
    fn default() -> Self {
        Self {
            min_rows: 10,
            value_px: 21.0,
            head_px: 18.0,
            head_height_px: 26.0,
            row_height_px: 31.0,
            body_hlines: true,
            columns: Vec::new(),
        }
    }
}

fn default_columns() -> Vec<ColumnSpec> {
    let spec = |th: &str, en: &str, width: Option<f32>, field| ColumnSpec {
        label_th: th.to_string(),
        label_en: en.to_string(),
        width_px: width.map(ColumnWidth::Px),
        field: Some(field),
        align: None,
    };
    vec![
        spec("ลำดับ", "NO.", Some(48.0), ColumnField::Index),
        spec("รายการ", "DESCRIPTION", None, ColumnField::Name),
        spec("จำนวน", "QUANTITY", Some(90.0), ColumnField::Quantity),
        spec("ราคาต่อหน่วย", "UNIT PRICE", Some(120.0), ColumnField::UnitPrice),
        spec("จำนวนเงิน", "AMOUNT", Some(130.0), ColumnField::LineAmount),
    ]
}

impl ItemsTableConfig {
    /// The declared columns, or the five default ones when none are declared.
    pub fn effective_columns(&self) -> Vec<Column> {
        let specs = if self.columns.is_empty() {
            default_columns()
        } else {
            self.columns.clone()
        };
        specs
            .into_iter()
            .enumerate()
            .map(|(i, spec)| {
                let field = spec.field.unwrap_or_else(|| {
                    ColumnField::POSITIONAL
                        .get(i)
                        .copied()
                        .unwrap_or(ColumnField::Description)
                });
                Column {
                    label_th: spec.label_th,
                    label_en: spec.label_en,
                    width: spec.width_px,
                    align: spec.align.unwrap_or_else(|| field.default_align()),
                    field,
                }
            })
            .collect()
    }

    /// Number of blank rows needed to reach `min_rows`.
    pub fn padding_rows(&self, item_count: usize) -> usize {
        self.min_rows.saturating_sub(item_count)
    }
}
