//! The business document as received from upstream collaborators.
//!
//! Every field except the form kind is optional: the engine only displays
//! what it is given and never validates that totals reconcile.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of supported document templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum FormKind {
    /// Delivery note / invoice / billing note.
    #[default]
    A,
    /// Tax invoice / receipt.
    B,
    #[serde(rename = "QUOTATION")]
    Quotation,
    #[serde(rename = "PO")]
    PurchaseOrder,
}

impl FormKind {
    pub const ALL: [FormKind; 4] = [
        FormKind::A,
        FormKind::B,
        FormKind::Quotation,
        FormKind::PurchaseOrder,
    ];

    /// The wire code used in payloads (`A`, `B`, `QUOTATION`, `PO`).
    pub fn code(&self) -> &'static str {
        match self {
            FormKind::A => "A",
            FormKind::B => "B",
            FormKind::Quotation => "QUOTATION",
            FormKind::PurchaseOrder => "PO",
        }
    }

    /// File stem of the layout descriptor for this form kind.
    pub fn layout_stem(&self) -> &'static str {
        match self {
            FormKind::A => "form_a",
            FormKind::B => "form_b",
            FormKind::Quotation => "form_quotation",
            FormKind::PurchaseOrder => "form_po",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for FormKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(FormKind::A),
            "B" => Ok(FormKind::B),
            "QUOTATION" => Ok(FormKind::Quotation),
            "PO" => Ok(FormKind::PurchaseOrder),
            other => Err(format!("Unknown form kind: {}", other)),
        }
    }
}

/// Lifecycle tag. Informational only; the engine renders every status the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocStatus {
    Draft,
    Approved,
    Void,
    Reprint,
}

/// A counterparty: customer on sales forms, supplier on purchase orders.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Party {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_code: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grand_total: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_amount: Option<f64>,
}

impl LineItem {
    /// The display title of the item: name, then description.
    pub fn title(&self) -> Option<&str> {
        non_empty(self.name.as_deref()).or_else(|| non_empty(self.description.as_deref()))
    }
}

/// The subject of printing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ok: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub form: FormKind,
    #[serde(default, deserialize_with = "null_as_default")]
    pub header_title: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub header_labels: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_no: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_status: Option<DocStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Party>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party: Option<Party>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_order_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub po_number: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub po_numbers: Vec<String>,
    /// Alternate single purchase-order number some producers send.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub po_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quotation_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bill_ref_no: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub document_no: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_set_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_date: Option<String>,
    /// Alternate spellings of `document_date`, consulted in this order after it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_date: Option<String>,
    #[serde(default, rename = "documentDate", skip_serializing_if = "Option::is_none")]
    pub document_date_camel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_date_dmy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_date_th: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub totals: Totals,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<LineItem>,
}

impl Document {
    /// The counterparty shown on the form: `customer` when present, else `party`.
    pub fn counterparty(&self) -> Option<&Party> {
        self.customer.as_ref().or(self.party.as_ref())
    }

    /// Purchase-order references: the list when non-empty, else the single number.
    pub fn po_list(&self) -> Vec<&str> {
        if !self.po_numbers.is_empty() {
            return self.po_numbers.iter().map(String::as_str).collect();
        }
        non_empty(self.po_number.as_deref()).into_iter().collect()
    }

    /// The job number, derived from the primary number the form actually carries.
    pub fn effective_job_no(&self) -> &str {
        [
            self.job_no.as_deref(),
            Some(self.document_no.as_str()),
            self.po_no.as_deref(),
            self.po_number.as_deref(),
            self.quotation_no.as_deref(),
            Some(self.display_no.as_str()),
        ]
        .into_iter()
        .find_map(non_empty)
        .unwrap_or("")
    }

    /// The raw document date: `document_date`, then `doc_date`, then `documentDate`.
    pub fn effective_document_date(&self) -> Option<&str> {
        [
            self.document_date.as_deref(),
            self.doc_date.as_deref(),
            self.document_date_camel.as_deref(),
        ]
        .into_iter()
        .find_map(non_empty)
    }

    /// The remark, trimmed; empty when absent.
    pub fn remark_text(&self) -> &str {
        self.remark.as_deref().map(str::trim).unwrap_or("")
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.is_empty())
}

/// Reads an explicit `null` as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
