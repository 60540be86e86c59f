use crate::error::ChannelError;
use crate::payload::{Envelope, PrintPayload};
use crate::store::PayloadStore;
use crate::token::Token;
use chrono::{DateTime, Duration, Utc};
use log::{debug, info, warn};
use std::sync::Arc;

/// Hands payloads from a publishing context to exactly one print view.
#[derive(Debug, Clone)]
pub struct PayloadChannel {
    store: Arc<dyn PayloadStore>,
    max_age: Option<Duration>,
}

impl PayloadChannel {
    pub fn new(store: Arc<dyn PayloadStore>) -> Self {
        Self {
            store,
            max_age: None,
        }
    }

    /// Envelopes older than `max_age` are treated as absent and deleted.
    pub fn with_max_age(mut self, max_age: Option<Duration>) -> Self {
        self.max_age = max_age;
        self
    }

    pub fn store(&self) -> &dyn PayloadStore {
        self.store.as_ref()
    }

    /// Stores `payload` under a fresh token and returns the token.
    pub fn publish(&self, payload: &PrintPayload) -> Result<Token, ChannelError> {
        self.publish_at(payload, Utc::now())
    }

    pub fn publish_at(
        &self,
        payload: &PrintPayload,
        now: DateTime<Utc>,
    ) -> Result<Token, ChannelError> {
        let token = Token::generate(now);
        let envelope = Envelope {
            published_at: now,
            payload: payload.clone(),
        };
        let bytes = serde_json::to_vec(&envelope).map_err(ChannelError::Encode)?;
        self.store.put(&token, bytes)?;
        info!(
            "Published {} payload as {} ({}).",
            payload.form_kind(),
            token,
            self.store.name()
        );
        Ok(token)
    }

    /// Reads and deletes the payload behind `token`.
    ///
    /// `Ok(None)` means there is nothing to print: the token was never
    /// published, was already consumed, or has expired. The entry is gone
    /// after this call whatever the outcome, including a decode error.
    pub fn consume(&self, token: &Token) -> Result<Option<PrintPayload>, ChannelError> {
        self.consume_at(token, Utc::now())
    }

    pub fn consume_at(
        &self,
        token: &Token,
        now: DateTime<Utc>,
    ) -> Result<Option<PrintPayload>, ChannelError> {
        let Some(bytes) = self.store.take(token)? else {
            info!("Nothing to print for {}.", token);
            return Ok(None);
        };
        let envelope = decode(token, &bytes)?;
        if self.is_expired(&envelope, now) {
            warn!(
                "Payload {} expired (published {}); discarded.",
                token, envelope.published_at
            );
            return Ok(None);
        }
        debug!("Consumed {}.", token);
        Ok(Some(envelope.payload))
    }

    /// Deletes every expired or unreadable envelope. Returns how many were removed.
    /// Without a `max_age` only unreadable envelopes are removed.
    pub fn purge_expired(&self) -> Result<usize, ChannelError> {
        self.purge_expired_at(Utc::now())
    }

    pub fn purge_expired_at(&self, now: DateTime<Utc>) -> Result<usize, ChannelError> {
        let mut removed = 0;
        for token in self.store.keys()? {
            let Some(bytes) = self.store.peek(&token)? else {
                continue;
            };
            let stale = match decode(&token, &bytes) {
                Ok(envelope) => self.is_expired(&envelope, now),
                Err(e) => {
                    warn!("{}", e);
                    true
                }
            };
            if stale && self.store.remove(&token)? {
                removed += 1;
            }
        }
        if removed > 0 {
            info!("Purged {} stale payload(s).", removed);
        }
        Ok(removed)
    }

    fn is_expired(&self, envelope: &Envelope, now: DateTime<Utc>) -> bool {
        self.max_age
            .is_some_and(|max_age| now.signed_duration_since(envelope.published_at) > max_age)
    }
}

fn decode(token: &Token, bytes: &[u8]) -> Result<Envelope, ChannelError> {
    serde_json::from_slice(bytes).map_err(|source| ChannelError::Decode {
        token: token.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryPayloadStore;
    use docket_types::{Document, FormKind};

    fn payload() -> PrintPayload {
        PrintPayload::new(Document {
            form: FormKind::B,
            display_no: "68/012".to_string(),
            ..Document::default()
        })
    }

    fn channel() -> (PayloadChannel, Arc<InMemoryPayloadStore>) {
        let store = Arc::new(InMemoryPayloadStore::new());
        (PayloadChannel::new(store.clone()), store)
    }

    #[test]
    fn consume_is_single_use() {
        let (channel, store) = channel();
        let token = channel.publish(&payload()).unwrap();

        let first = channel.consume(&token).unwrap().unwrap();
        assert_eq!(first.document.display_no, "68/012");
        assert!(channel.consume(&token).unwrap().is_none());
        assert!(channel.consume(&token).unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn unknown_token_is_nothing_to_print() {
        let (channel, _) = channel();
        let token = Token::parse("PRINT_PAYLOAD_0").unwrap();
        assert!(channel.consume(&token).unwrap().is_none());
    }

    #[test]
    fn expired_payload_is_absent_and_deleted() {
        let (channel, store) = channel();
        let channel = channel.with_max_age(Some(Duration::minutes(10)));
        let published = Utc::now();
        let token = channel.publish_at(&payload(), published).unwrap();

        let later = published + Duration::minutes(11);
        assert!(channel.consume_at(&token, later).unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn fresh_payload_survives_max_age() {
        let (channel, _) = channel();
        let channel = channel.with_max_age(Some(Duration::minutes(10)));
        let published = Utc::now();
        let token = channel.publish_at(&payload(), published).unwrap();
        let soon = published + Duration::minutes(9);
        assert!(channel.consume_at(&token, soon).unwrap().is_some());
    }

    #[test]
    fn purge_removes_stale_and_unreadable_entries() {
        let (channel, store) = channel();
        let channel = channel.with_max_age(Some(Duration::minutes(10)));
        let now = Utc::now();
        channel.publish_at(&payload(), now - Duration::hours(1)).unwrap();
        let fresh = channel.publish_at(&payload(), now).unwrap();
        store
            .put(&Token::parse("PRINT_PAYLOAD_junk").unwrap(), b"not json".to_vec())
            .unwrap();

        assert_eq!(channel.purge_expired_at(now).unwrap(), 2);
        assert_eq!(store.keys().unwrap(), vec![fresh]);
    }

    #[test]
    fn unreadable_payload_is_an_error_and_is_gone() {
        let (channel, store) = channel();
        let token = Token::parse("PRINT_PAYLOAD_junk").unwrap();
        store.put(&token, b"{".to_vec()).unwrap();
        assert!(matches!(
            channel.consume(&token),
            Err(ChannelError::Decode { .. })
        ));
        assert!(store.is_empty());
    }
}
