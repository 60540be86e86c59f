//! Physical page geometry, expressed in millimetres.
use crate::format::format_css_number;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser::SerializeMap};

/// A standard or custom physical page format.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    #[default]
    A4,
    A5,
    Letter,
    Custom { width: f32, height: f32 },
}

impl PageSize {
    /// Width and height in millimetres (portrait).
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::A5 => (148.0, 210.0),
            PageSize::Letter => (215.9, 279.4),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }

    /// The value of the CSS `@page { size: ... }` descriptor.
    pub fn css_size(&self) -> String {
        match self {
            PageSize::A4 => "A4".to_string(),
            PageSize::A5 => "A5".to_string(),
            PageSize::Letter => "letter".to_string(),
            PageSize::Custom { width, height } => format!(
                "{}mm {}mm",
                format_css_number(*width),
                format_css_number(*height)
            ),
        }
    }

    /// Parse a page size name (e.g., "A4", "A5", "Letter")
    fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "a5" => Ok(PageSize::A5),
            "letter" => Ok(PageSize::Letter),
            _ => Err(format!("Unknown page size: {}", s)),
        }
    }
}

impl Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageSize::A4 => serializer.serialize_str("A4"),
            PageSize::A5 => serializer.serialize_str("A5"),
            PageSize::Letter => serializer.serialize_str("Letter"),
            PageSize::Custom { width, height } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("width_mm", width)?;
                map.serialize_entry("height_mm", height)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageSizeDef {
            Named(String),
            Custom { width_mm: f32, height_mm: f32 },
        }

        match PageSizeDef::deserialize(deserializer)? {
            PageSizeDef::Named(name) => PageSize::parse(&name).map_err(de::Error::custom),
            PageSizeDef::Custom { width_mm, height_mm } => Ok(PageSize::Custom {
                width: width_mm,
                height: height_mm,
            }),
        }
    }
}

/// Page margins in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }

    /// CSS shorthand in `top right bottom left` order, e.g. `4mm 10mm 4mm 30mm`.
    pub fn css_mm(&self) -> String {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .map(|v| format!("{}mm", format_css_number(*v)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// Descriptors declare margins as a four-element array, like CSS shorthand.
impl Serialize for Margins {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        [self.top, self.right, self.bottom, self.left].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Margins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [top, right, bottom, left] = <[f32; 4]>::deserialize(deserializer)?;
        Ok(Margins { top, right, bottom, left })
    }
}

/// Page-level settings the print surface needs, resolved from a layout descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSetup {
    pub size: PageSize,
    pub margins: Margins,
    pub base_font_family: Vec<String>,
    pub base_font_px: f32,
    pub line_height: f32,
}

impl PageSetup {
    /// Printable width: page width minus the left and right margins.
    pub fn content_width_mm(&self) -> f32 {
        let (width, _) = self.size.dimensions_mm();
        (width - self.margins.left - self.margins.right).max(0.0)
    }

    /// The font stack as a CSS `font-family` value. Names that could close the
    /// declaration or the surrounding `<style>` element are left out.
    pub fn font_family_css(&self) -> String {
        self.base_font_family
            .iter()
            .filter(|name| is_safe_font_family(name))
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Whether a font family name can be written into a stylesheet as is.
pub fn is_safe_font_family(name: &str) -> bool {
    !name.trim().is_empty() && !name.contains(['<', '>', '{', '}', ';', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn font_stack_drops_names_that_break_the_stylesheet() {
        let page = PageSetup {
            size: PageSize::A4,
            margins: Margins::new(4.0, 10.0, 4.0, 30.0),
            base_font_family: vec![
                "'TH Sarabun New'".into(),
                "x</style><script>".into(),
                "a}body{color:red".into(),
                "Arial".into(),
            ],
            base_font_px: 14.0,
            line_height: 1.15,
        };
        assert_eq!(page.font_family_css(), "'TH Sarabun New',Arial");
        assert!(is_safe_font_family("\"Noto Sans Thai\""));
        assert!(!is_safe_font_family(" "));
    }

    #[test]
    fn margins_deserialize_from_array() {
        let m: Margins = serde_json::from_value(json!([4, 10, 4, 30])).unwrap();
        assert_eq!(m, Margins::new(4.0, 10.0, 4.0, 30.0));
        assert_eq!(m.css_mm(), "4mm 10mm 4mm 30mm");
        assert!(serde_json::from_value::<Margins>(json!([1, 2, 3])).is_err());
    }

    #[test]
    fn page_size_names_and_custom() {
        let a4: PageSize = serde_json::from_value(json!("a4")).unwrap();
        assert_eq!(a4, PageSize::A4);
        let custom: PageSize =
            serde_json::from_value(json!({ "width_mm": 100, "height_mm": 150 })).unwrap();
        assert_eq!(custom.css_size(), "100mm 150mm");
        assert!(serde_json::from_value::<PageSize>(json!("B9")).is_err());
    }

    #[test]
    fn content_width_subtracts_side_margins() {
        let setup = PageSetup {
            size: PageSize::A4,
            margins: Margins::new(4.0, 10.0, 4.0, 30.0),
            base_font_family: vec!["Arial".into()],
            base_font_px: 14.0,
            line_height: 1.15,
        };
        assert_eq!(setup.content_width_mm(), 170.0);
    }
}
