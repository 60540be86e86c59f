use chrono::{DateTime, Utc};
use docket_types::{Document, FormKind};
use serde::{Deserialize, Serialize};

/// What a publisher hands to a print view.
///
/// On the wire this is the document itself, optionally carrying a `layout`
/// key that overrides which form's descriptor is used. A bare document is a
/// valid payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PrintPayload {
    #[serde(flatten)]
    pub document: Document,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<FormKind>,
}

impl PrintPayload {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            layout: None,
        }
    }

    pub fn with_layout(mut self, layout: FormKind) -> Self {
        self.layout = Some(layout);
        self
    }

    /// The form whose layout renders this payload.
    pub fn form_kind(&self) -> FormKind {
        self.layout.unwrap_or(self.document.form)
    }
}

/// A payload as it sits in a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub published_at: DateTime<Utc>,
    pub payload: PrintPayload,
}
