//! Key/value stores a channel keeps its envelopes in.
use crate::error::ChannelError;
use crate::token::Token;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;

/// A store shared by every context that publishes or consumes payloads.
///
/// `take` is the only way a consumer reads a payload: it returns the bytes and
/// removes them in one step, so two consumers can never both get the same
/// entry.
pub trait PayloadStore: Send + Sync + Debug {
    fn put(&self, token: &Token, bytes: Vec<u8>) -> Result<(), ChannelError>;

    /// Reads and removes. `Ok(None)` when nothing is stored under `token`.
    fn take(&self, token: &Token) -> Result<Option<Vec<u8>>, ChannelError>;

    /// Reads without removing. Used for housekeeping only.
    fn peek(&self, token: &Token) -> Result<Option<Vec<u8>>, ChannelError>;

    /// Removes without reading. Returns whether an entry existed.
    fn remove(&self, token: &Token) -> Result<bool, ChannelError>;

    fn keys(&self) -> Result<Vec<Token>, ChannelError>;

    /// A human-readable name for logs.
    fn name(&self) -> &'static str;
}

/// A store living in this process only.
#[derive(Debug, Default)]
pub struct InMemoryPayloadStore {
    entries: RwLock<HashMap<Token, Vec<u8>>>,
}

impl InMemoryPayloadStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries. Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PayloadStore for InMemoryPayloadStore {
    fn put(&self, token: &Token, bytes: Vec<u8>) -> Result<(), ChannelError> {
        self.entries
            .write()
            .map_err(|_| ChannelError::LockPoisoned)?
            .insert(token.clone(), bytes);
        Ok(())
    }

    fn take(&self, token: &Token) -> Result<Option<Vec<u8>>, ChannelError> {
        Ok(self
            .entries
            .write()
            .map_err(|_| ChannelError::LockPoisoned)?
            .remove(token))
    }

    fn peek(&self, token: &Token) -> Result<Option<Vec<u8>>, ChannelError> {
        Ok(self
            .entries
            .read()
            .map_err(|_| ChannelError::LockPoisoned)?
            .get(token)
            .cloned())
    }

    fn remove(&self, token: &Token) -> Result<bool, ChannelError> {
        self.take(token).map(|entry| entry.is_some())
    }

    fn keys(&self) -> Result<Vec<Token>, ChannelError> {
        let mut keys: Vec<Token> = self
            .entries
            .read()
            .map_err(|_| ChannelError::LockPoisoned)?
            .keys()
            .cloned()
            .collect();
        keys.sort();
        Ok(keys)
    }

    fn name(&self) -> &'static str {
        "InMemoryPayloadStore"
    }
}
