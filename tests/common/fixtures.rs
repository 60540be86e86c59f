use docket::{Document, FormKind, PrintPayload};
use serde_json::{Value, json};

/// The one-item form A scenario: 150 + 7% VAT = 160.50.
pub fn scenario_json() -> Value {
    json!({
        "form": "A",
        "header_title": "ใบส่งของ/ใบแจ้งหนี้",
        "display_no": "68/012",
        "document_no": "DN-68-012",
        "document_date": "2025-07-31T18:30:00Z",
        "customer": {
            "name": "บริษัท ตัวอย่าง จำกัด",
            "address": "99 ถนนสุขุมวิท กรุงเทพฯ",
            "tax_id": "0105555000000",
            "email": "ap@example.co.th",
            "phone": "02-000-0000"
        },
        "po_numbers": ["PO-1001", "PO-1002"],
        "totals": { "subtotal": 150, "vat_rate": 7, "vat_amount": 10.5, "grand_total": 160.5 },
        "items": [
            { "name": "Widget", "quantity": 1, "unit_price": 150, "line_amount": 150 }
        ]
    })
}

pub fn scenario_document() -> Document {
    serde_json::from_value(scenario_json()).expect("scenario parses")
}

pub fn scenario_payload() -> PrintPayload {
    PrintPayload::new(scenario_document())
}

pub fn payload_with_items(form: FormKind, count: usize) -> PrintPayload {
    let mut value = scenario_json();
    value["form"] = json!(form.code());
    value["items"] = Value::Array(
        (0..count)
            .map(|i| {
                json!({
                    "name": format!("Item {}", i + 1),
                    "quantity": i + 1,
                    "unit_price": 10,
                    "line_amount": 10 * (i + 1)
                })
            })
            .collect(),
    );
    PrintPayload::new(serde_json::from_value(value).expect("payload parses"))
}
