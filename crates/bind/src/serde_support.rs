//! Serde integration: binding expressions travel as strings and are parsed on load.
use crate::ast::BindingExpr;
use crate::parser::parse_binding;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

impl Serialize for BindingExpr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BindingExpr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_binding(&raw).map_err(de::Error::custom)
    }
}

/// For `Option<BindingExpr>` fields: `null`, absent and blank strings mean "no binding".
///
/// ```ignore
/// #[serde(default, with = "docket_bind::serde_support::optional")]
/// pub bind: Option<BindingExpr>,
/// ```
pub mod optional {
    use super::*;

    pub fn serialize<S>(value: &Option<BindingExpr>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(expr) => serializer.collect_str(expr),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<BindingExpr>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.trim().is_empty() => {
                parse_binding(&raw).map(Some).map_err(de::Error::custom)
            }
            _ => Ok(None),
        }
    }
}
