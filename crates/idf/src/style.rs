//! Inline style declarations.
use docket_types::Color;
use docket_types::format::format_css_number;
use std::fmt::Write;

/// A pixel length in CSS notation: `6px`, `0.5px`, `0`.
pub fn px(value: f32) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}px", format_css_number(value))
    }
}

/// A percentage in CSS notation.
pub fn pct(value: f32) -> String {
    format!("{}%", format_css_number(value))
}

/// A solid rule of the given thickness and colour, or `none` for zero thickness.
pub fn solid(width_px: f32, color: Color) -> String {
    if width_px <= 0.0 {
        "none".to_string()
    } else {
        format!("{} solid {}", px(width_px), color.to_css())
    }
}

/// CSS declarations kept in insertion order.
///
/// Setting a property that is already present replaces its value in place, so
/// the serialized order only depends on the order properties were first set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Style {
    declarations: Vec<(&'static str, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, property: &'static str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = value,
            None => self.declarations.push((property, value)),
        }
        self
    }

    /// Builder form of [`Style::set`].
    pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.declarations.iter().map(|(p, v)| (*p, v.as_str()))
    }

    /// Serialized as the value of a `style` attribute: `a:b;c:d`.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for (i, (property, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                out.push(';');
            }
            let _ = write!(out, "{}:{}", property, value);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_insertion_position() {
        let mut style = Style::new().with("display", "flex").with("gap", "8px");
        style.set("display", "block");
        assert_eq!(style.to_css(), "display:block;gap:8px");
        assert_eq!(style.get("gap"), Some("8px"));
    }

    #[test]
    fn length_helpers() {
        assert_eq!(px(6.0), "6px");
        assert_eq!(px(0.0), "0");
        assert_eq!(px(1.5), "1.5px");
        assert_eq!(pct(45.0), "45%");
        assert_eq!(solid(1.0, Color::BLACK), "1px solid #000");
        assert_eq!(solid(0.0, Color::BLACK), "none");
    }
}
