//! Line-items table: a fused two-row bilingual header, one row per item, then
//! blank padding rows up to the configured minimum.
use crate::primitives::Geometry;
use docket_idf::{Element, Node, Tag, div, px};
use docket_layout::{Column, ColumnField, HAlign, ItemsTableConfig};
use docket_types::LineItem;
use docket_types::format::{format_amount, format_number};

const NBSP: &str = "\u{a0}";

/// Which of a header cell's horizontal rules are drawn.
#[derive(Debug, Clone, Copy)]
struct HeadEdges {
    top: bool,
    bottom: bool,
}

struct TableStyle<'a> {
    cfg: &'a ItemsTableConfig,
    geo: &'a Geometry,
}

impl TableStyle<'_> {
    fn th(&self, text: &str, edges: HeadEdges) -> Element {
        Element::new(Tag::Th)
            .css("border-left", self.geo.rule())
            .css("border-right", self.geo.rule())
            .css("border-top", self.geo.rule_if(edges.top))
            .css("border-bottom", self.geo.rule_if(edges.bottom))
            .css("padding", self.geo.cell_padding())
            .css("font-weight", "800")
            .css("text-align", "center")
            .css("font-size", px(self.cfg.head_px))
            .css("line-height", "1")
            .css("height", px(self.cfg.head_height_px))
            .css("vertical-align", "middle")
            .text(text)
    }

    /// A body cell. `closing` draws the table's bottom rule on a row that would
    /// otherwise have none.
    fn td(&self, content: Node, align: HAlign, closing: bool) -> Element {
        let hlines = self.cfg.body_hlines;
        Element::new(Tag::Td)
            .css("border-left", self.geo.rule())
            .css("border-right", self.geo.rule())
            .css("border-top", self.geo.rule_if(hlines))
            .css("border-bottom", self.geo.rule_if(hlines || closing))
            .css("padding", self.geo.cell_padding())
            .css("text-align", align.text_align())
            .css("font-size", px(self.cfg.value_px))
            .css("vertical-align", "top")
            .child(content)
    }

    fn tr(&self) -> Element {
        Element::new(Tag::Tr).css("height", px(self.cfg.row_height_px))
    }
}

pub fn render(items: &[LineItem], cfg: &ItemsTableConfig, geo: &Geometry) -> Element {
    let columns = cfg.effective_columns();
    let style = TableStyle { cfg, geo };
    let pads = cfg.padding_rows(items.len());
    let total_rows = items.len() + pads;
    // Without body rules only the very last row closes the table.
    let closes = |row: usize| !cfg.body_hlines && row + 1 == total_rows;

    let colgroup = Element::new(Tag::Colgroup).children(columns.iter().map(|c| {
        let col = Element::new(Tag::Col);
        match &c.width {
            Some(w) => col.css("width", w.to_css()),
            None => col,
        }
    }));

    let thead = Element::new(Tag::Thead)
        .child(Element::new(Tag::Tr).children(columns.iter().map(|c| {
            style.th(&c.label_th, HeadEdges { top: true, bottom: false })
        })))
        .child(
            Element::new(Tag::Tr)
                .css("font-weight", "600")
                .children(columns.iter().map(|c| {
                    style.th(&c.label_en, HeadEdges { top: false, bottom: true })
                })),
        );

    let item_rows = items.iter().enumerate().map(|(i, item)| {
        style.tr().children(
            columns
                .iter()
                .map(|c| style.td(cell_content(c, i, item), c.align, closes(i))),
        )
    });

    let pad_rows = (items.len()..total_rows).map(|row| {
        style.tr().children(columns.iter().enumerate().map(|(idx, _)| {
            let align = if idx == 0 { HAlign::Center } else { HAlign::Left };
            style.td(Node::from(NBSP), align, closes(row))
        }))
    });

    let tbody = Element::new(Tag::Tbody).children(item_rows).children(pad_rows);

    Element::new(Tag::Table)
        .class("docket-items")
        .css("width", "100%")
        .css("border-collapse", "collapse")
        .css("margin-top", "6px")
        .child(colgroup)
        .child(thead)
        .child(tbody)
}

fn cell_content(column: &Column, index: usize, item: &LineItem) -> Node {
    let text = |value: Option<&str>| Node::from(value.unwrap_or_default());
    match column.field {
        ColumnField::Index => Node::from((index + 1).to_string()),
        ColumnField::Name => div()
            .css("font-weight", "700")
            .text(item.title().unwrap_or("-"))
            .into(),
        ColumnField::ProductNo => text(item.product_no.as_deref()),
        ColumnField::Description => text(item.description.as_deref()),
        ColumnField::Unit => text(item.unit.as_deref()),
        ColumnField::Quantity => Node::from(
            item.quantity
                .filter(|q| q.is_finite())
                .map(format_number)
                .unwrap_or_else(|| "-".to_string()),
        ),
        ColumnField::UnitPrice => Node::from(format_amount(item.unit_price)),
        ColumnField::LineAmount => Node::from(format_amount(item.line_amount)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(qty: f64, price: f64) -> LineItem {
        LineItem {
            name: Some("Pump".into()),
            quantity: Some(qty),
            unit_price: Some(price),
            line_amount: Some(qty * price),
            ..LineItem::default()
        }
    }

    fn body_rows(table: &Element) -> Vec<&Element> {
        table
            .children
            .iter()
            .filter_map(|n| match n {
                Node::Element(el) if el.tag == Tag::Tbody => Some(el),
                _ => None,
            })
            .flat_map(|tbody| tbody.children.iter())
            .filter_map(|n| match n {
                Node::Element(el) => Some(el),
                _ => None,
            })
            .collect()
    }

    fn closing_rows(rows: &[&Element]) -> Vec<usize> {
        rows.iter()
            .enumerate()
            .filter(|(_, row)| {
                row.children.iter().all(|cell| match cell {
                    Node::Element(td) => td.style.get("border-bottom") != Some("none"),
                    _ => false,
                })
            })
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn pads_to_minimum_rows() {
        let cfg = ItemsTableConfig::default();
        let table = render(&[item(1.0, 150.0)], &cfg, &Geometry::default());
        let rows = body_rows(&table);
        assert_eq!(rows.len(), 10);
        let first = Node::from(rows[0].clone()).text_content();
        assert_eq!(first, "1Pump1150.00150.00");
        assert_eq!(Node::from(rows[9].clone()).text_content(), NBSP.repeat(5));
    }

    #[test]
    fn body_rows_are_max_of_items_and_minimum() {
        for (k, m) in [(0usize, 10usize), (3, 10), (10, 10), (14, 10), (2, 0)] {
            let cfg = ItemsTableConfig { min_rows: m, ..ItemsTableConfig::default() };
            let items: Vec<_> = (0..k).map(|_| item(1.0, 1.0)).collect();
            let table = render(&items, &cfg, &Geometry::default());
            assert_eq!(body_rows(&table).len(), k.max(m), "k={} m={}", k, m);
        }
    }

    #[test]
    fn only_last_row_closes_without_body_lines() {
        for (k, m) in [(1usize, 10usize), (10, 10), (12, 10), (0, 4)] {
            let cfg = ItemsTableConfig {
                min_rows: m,
                body_hlines: false,
                ..ItemsTableConfig::default()
            };
            let items: Vec<_> = (0..k).map(|_| item(2.0, 5.0)).collect();
            let table = render(&items, &cfg, &Geometry::default());
            let rows = body_rows(&table);
            assert_eq!(closing_rows(&rows), vec![rows.len() - 1], "k={} m={}", k, m);
        }
    }

    #[test]
    fn header_rows_fuse() {
        let table = render(&[], &ItemsTableConfig::default(), &Geometry::default());
        let heads = Node::from(table).find_all(Tag::Th).into_iter().cloned().collect::<Vec<_>>();
        assert_eq!(heads.len(), 10);
        assert_eq!(heads[0].style.get("border-bottom"), Some("none"));
        assert_eq!(heads[5].style.get("border-top"), Some("none"));
        assert_eq!(heads[5].style.get("border-bottom"), Some("1px solid #000"));
    }

    #[test]
    fn missing_values_render_placeholders() {
        let table = render(&[LineItem::default()], &ItemsTableConfig::default(), &Geometry::default());
        let rows = body_rows(&table);
        assert_eq!(Node::from(rows[0].clone()).text_content(), "1--0.000.00");
    }
}
