//! The JSON view bindings are resolved against.
//!
//! ```text
//! { "document": {..., "date_dmy", "doc_date_dmy", "job_no", "po_list"},
//!   "party": {...}, "customer": {...} | null, "totals": {...} }
//! ```
use docket_bind::{BindingExpr, resolve};
use docket_types::Document;
use docket_types::format::{format_dmy, format_dmy_buddhist, parse_document_date};
use chrono::FixedOffset;
use serde_json::{Map, Value, json};

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentView {
    root: Value,
}

impl DocumentView {
    /// Builds the view. Derived fields are added to the view only; `document`
    /// itself is left untouched.
    pub fn new(document: &Document, offset: FixedOffset) -> Self {
        let mut doc = match serde_json::to_value(document) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };

        let date = document
            .effective_document_date()
            .and_then(|raw| parse_document_date(raw, offset));
        if let Some(date) = date {
            doc.insert("date_dmy".into(), Value::String(format_dmy(date)));
        }
        let has_dmy = document.doc_date_dmy.as_deref().is_some_and(|s| !s.is_empty());
        if let Some(date) = date.filter(|_| !has_dmy) {
            doc.insert("doc_date_dmy".into(), Value::String(format_dmy_buddhist(date)));
        }
        doc.insert("job_no".into(), Value::String(document.effective_job_no().to_string()));
        doc.insert("po_list".into(), json!(document.po_list()));

        let party = document
            .counterparty()
            .and_then(|p| serde_json::to_value(p).ok())
            .unwrap_or_else(|| Value::Object(Map::new()));
        let customer = document
            .customer
            .as_ref()
            .and_then(|c| serde_json::to_value(c).ok())
            .unwrap_or(Value::Null);
        let totals = serde_json::to_value(document.totals).unwrap_or(Value::Null);

        Self {
            root: json!({
                "document": Value::Object(doc),
                "party": party,
                "customer": customer,
                "totals": totals,
            }),
        }
    }

    pub fn value(&self) -> &Value {
        &self.root
    }

    /// Resolves an optional binding; no binding resolves to `""`.
    pub fn resolve(&self, expr: Option<&BindingExpr>) -> String {
        expr.map(|e| resolve(e, &self.root)).unwrap_or_default()
    }

    /// The first non-empty of the given bindings, or `default`.
    pub fn resolve_first(&self, exprs: &[Option<&BindingExpr>], default: &str) -> String {
        exprs
            .iter()
            .map(|e| self.resolve(*e))
            .find(|v| !v.is_empty())
            .unwrap_or_else(|| default.to_string())
    }

    /// A string field of the prepared `document` object.
    pub fn document_field(&self, key: &str) -> &str {
        self.root
            .get("document")
            .and_then(|d| d.get(key))
            .and_then(Value::as_str)
            .unwrap_or("")
    }
}
