//! Composition throughput across form kinds and item counts.
//!
//! Run benchmarks: `cargo bench --bench compose_throughput`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use docket::layout::LayoutRegistry;
use docket::print::IsolatedDocument;
use docket::render::Composer;
use docket::{Document, FormKind};
use serde_json::json;
use std::hint::black_box;

fn document(form: FormKind, items: usize) -> Document {
    serde_json::from_value(json!({
        "form": form.code(),
        "header_title": "ใบแจ้งหนี้",
        "display_no": "68/012",
        "document_date": "2025-08-01",
        "customer": { "name": "บริษัท ตัวอย่าง จำกัด", "tax_id": "0105555000000" },
        "totals": { "subtotal": 1000, "vat_rate": 7, "vat_amount": 70, "grand_total": 1070 },
        "items": (0..items)
            .map(|i| json!({ "name": format!("Item {}", i), "quantity": 1, "unit_price": 10, "line_amount": 10 }))
            .collect::<Vec<_>>()
    }))
    .expect("bench document")
}

fn bench_compose(c: &mut Criterion) {
    let layouts = LayoutRegistry::builtin().expect("built-in layouts");
    let composer = Composer::default();

    let mut group = c.benchmark_group("compose");
    for kind in FormKind::ALL {
        for items in [1usize, 10, 100] {
            let doc = document(kind, items);
            let layout = layouts.get(kind);
            group.throughput(Throughput::Elements(items as u64));
            group.bench_with_input(
                BenchmarkId::new(kind.code(), items),
                &doc,
                |b, doc| b.iter(|| black_box(composer.compose(doc, &layout))),
            );
        }
    }
    group.finish();
}

fn bench_isolated_document(c: &mut Criterion) {
    let layouts = LayoutRegistry::builtin().expect("built-in layouts");
    let surface = Composer::default().compose(&document(FormKind::A, 10), &layouts.get(FormKind::A));
    c.bench_function("isolated_document", |b| {
        b.iter(|| black_box(IsolatedDocument::new(&surface)))
    });
}

criterion_group!(benches, bench_compose, bench_isolated_document);
criterion_main!(benches);
