//! A single-consumption channel for print payloads.
//!
//! A publisher stores a payload under a fresh [`Token`] and opens a print
//! view carrying only that token. The view consumes the token once: the read
//! deletes the entry, so no second view can print the same payload and a
//! stale tab cannot reprint it. A token with nothing behind it is the normal
//! "nothing to print" outcome, not an error.

pub mod channel;
pub mod error;
pub mod filesystem;
pub mod payload;
pub mod store;
pub mod token;

pub use channel::PayloadChannel;
pub use error::ChannelError;
pub use filesystem::FilesystemPayloadStore;
pub use payload::{Envelope, PrintPayload};
pub use store::{InMemoryPayloadStore, PayloadStore};
pub use token::{TOKEN_PREFIX, Token};
