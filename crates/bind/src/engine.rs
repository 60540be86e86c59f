//! Resolution of parsed binding expressions against a JSON view.
use super::ast::{BindingExpr, BindingPath, PathSegment};
use crate::parser::parse_binding;
use docket_types::format::format_number;
use itertools::Itertools;
use serde_json::{Number, Value};

/// Separator placed between the elements of a sequence value.
pub const SEQUENCE_SEPARATOR: &str = "  ";

/// Resolves `expr` against `view`.
///
/// Paths are tried left to right; the first one that yields a non-empty value
/// wins. Never fails: an expression that matches nothing resolves to `""`.
pub fn resolve(expr: &BindingExpr, view: &Value) -> String {
    expr.paths()
        .iter()
        .find_map(|path| select(path, view).and_then(candidate))
        .unwrap_or_default()
}

/// Parses and resolves in one step. A malformed expression resolves to `""`.
pub fn resolve_str(expr: &str, view: &Value) -> String {
    parse_binding(expr)
        .map(|parsed| resolve(&parsed, view))
        .unwrap_or_default()
}

/// Walks `path` from `root`. Missing steps yield `None`, never an error.
pub fn select<'a>(path: &BindingPath, root: &'a Value) -> Option<&'a Value> {
    path.segments()
        .iter()
        .try_fold(root, |node, segment| match (segment, node) {
            (PathSegment::Key(key), Value::Object(map)) => map.get(key),
            (PathSegment::Index(i), Value::Array(items)) => items.get(*i),
            (PathSegment::Index(i), Value::Object(map)) => map.get(&i.to_string()),
            _ => None,
        })
}

/// Display text of a scalar value: non-empty strings and numbers.
///
/// Nulls, booleans, objects and empty strings carry no displayable value.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        _ => None,
    }
}

fn candidate(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => {
            let joined = items.iter().filter_map(element_text).join(SEQUENCE_SEPARATOR);
            (!joined.is_empty()).then_some(joined)
        }
        other => scalar_text(other),
    }
}

// Sequence elements must be truthy: zero is dropped along with empty strings.
fn element_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => scalar_text(other),
    }
}

fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map(format_number).unwrap_or_default()
    }
}
