//! Binding expressions: fallback chains of dot-paths into a document view.
//!
//! A layout descriptor names the value each field displays with a string such
//! as `party.supplier_code|party.customer_no`. The string is parsed once, when
//! the descriptor is loaded, into a [`BindingExpr`]; rendering only ever walks
//! the parsed form and can never fail.

pub mod ast;
pub mod engine;
pub mod error;
mod parser;
pub mod serde_support;

// --- Public API ---
pub use ast::{BindingExpr, BindingPath, PathSegment};
pub use engine::{SEQUENCE_SEPARATOR, resolve, resolve_str, scalar_text, select};
pub use error::BindError;
pub use parser::parse_binding;

impl std::str::FromStr for BindingExpr {
    type Err = BindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_binding(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn view() -> serde_json::Value {
        json!({
            "document": {
                "display_no": "68/012",
                "po_list": ["PO-1", "", "PO-2"],
                "empty_list": ["", 0],
                "remark": ""
            },
            "party": { "name": "ACME", "tax_id": null, "customer_no": 42 },
            "customer": null,
            "totals": { "subtotal": 150.0, "vat_amount": 10.5 }
        })
    }

    #[test]
    fn test_first_non_empty_path_wins() {
        let expr = parse_binding("customer.name|party.name|document.display_no").unwrap();
        assert_eq!(resolve(&expr, &view()), "ACME");
    }

    #[test]
    fn test_missing_intermediate_steps_are_not_errors() {
        let expr = parse_binding("a.b.c.d|customer.name.first|party.tax_id").unwrap();
        assert_eq!(resolve(&expr, &view()), "");
    }

    #[test]
    fn test_empty_string_falls_through() {
        let expr = parse_binding("document.remark|document.display_no").unwrap();
        assert_eq!(resolve(&expr, &view()), "68/012");
    }

    #[test]
    fn test_sequences_join_non_empty_elements() {
        let expr = parse_binding("document.po_list").unwrap();
        assert_eq!(resolve(&expr, &view()), "PO-1  PO-2");
    }

    #[test]
    fn test_empty_sequence_falls_through() {
        let expr = parse_binding("document.empty_list|party.name").unwrap();
        assert_eq!(resolve(&expr, &view()), "ACME");
    }

    #[test]
    fn test_numbers_render_in_shortest_form() {
        let v = view();
        assert_eq!(resolve_str("totals.subtotal", &v), "150");
        assert_eq!(resolve_str("totals.vat_amount", &v), "10.5");
        assert_eq!(resolve_str("party.customer_no", &v), "42");
    }

    #[test]
    fn test_index_segments() {
        let v = view();
        assert_eq!(resolve_str("document.po_list.2", &v), "PO-2");
        assert_eq!(resolve_str("document.po_list.9", &v), "");
        assert_eq!(resolve_str("party.0", &v), "");
    }

    #[test]
    fn test_objects_are_not_values() {
        assert_eq!(resolve_str("party|document.display_no", &view()), "68/012");
    }

    #[test]
    fn test_malformed_string_resolves_empty() {
        assert_eq!(resolve_str("party..name", &view()), "");
    }
}
