use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl HAlign {
    /// Value for `text-align`.
    pub fn text_align(&self) -> &'static str {
        match self {
            HAlign::Left => "left",
            HAlign::Center => "center",
            HAlign::Right => "right",
        }
    }

    /// Value for `justify-content` in a row flex container.
    pub fn justify(&self) -> &'static str {
        match self {
            HAlign::Left => "flex-start",
            HAlign::Center => "center",
            HAlign::Right => "flex-end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl VAlign {
    /// Value for `align-items` in a row flex container.
    pub fn align_items(&self) -> &'static str {
        match self {
            VAlign::Top => "flex-start",
            VAlign::Middle => "center",
            VAlign::Bottom => "flex-end",
        }
    }
}

/// A Thai/English label pair.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Bilingual {
    pub th: String,
    pub en: String,
}

impl Bilingual {
    pub fn new(th: impl Into<String>, en: impl Into<String>) -> Self {
        Self { th: th.into(), en: en.into() }
    }
}
