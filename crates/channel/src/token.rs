use crate::error::ChannelError;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;

pub const TOKEN_PREFIX: &str = "PRINT_PAYLOAD_";
const MAX_TOKEN_LEN: usize = 128;

/// Names one published payload. Safe as a file name and as a URL query value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token(String);

impl Token {
    /// A fresh token: `PRINT_PAYLOAD_<millis>_<16 hex digits>`.
    pub fn generate(now: DateTime<Utc>) -> Self {
        let nonce: u64 = rand::rng().random();
        Token(format!(
            "{}{}_{:016x}",
            TOKEN_PREFIX,
            now.timestamp_millis(),
            nonce
        ))
    }

    /// Accepts any non-empty run of `[A-Za-z0-9_-]`, so tokens minted by
    /// other publishers (e.g. `PRINT_PAYLOAD_<millis>`) are usable too.
    pub fn parse(raw: &str) -> Result<Self, ChannelError> {
        let valid = !raw.is_empty()
            && raw.len() <= MAX_TOKEN_LEN
            && raw
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
        if valid {
            Ok(Token(raw.to_string()))
        } else {
            Err(ChannelError::InvalidToken(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The query string a print view is opened with.
    pub fn query(&self) -> String {
        format!("key={}", self.0)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Token {
    type Err = ChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Token::parse(s)
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Token {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Token::parse(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn generated_tokens_are_prefixed_and_unique() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let a = Token::generate(now);
        let b = Token::generate(now);
        assert!(a.as_str().starts_with("PRINT_PAYLOAD_1700000000123_"));
        assert_eq!(a.as_str().len(), TOKEN_PREFIX.len() + 13 + 1 + 16);
        assert_ne!(a, b);
        assert_eq!(Token::parse(a.as_str()).unwrap(), a);
    }

    #[test]
    fn legacy_tokens_parse() {
        assert!(Token::parse("PRINT_PAYLOAD_1700000000123").is_ok());
    }

    #[test]
    fn rejects_unsafe_tokens() {
        for bad in ["", "../etc/passwd", "a b", "a/b", "PRINT_PAYLOAD_1?x=1", "ก"] {
            assert!(Token::parse(bad).is_err(), "accepted {:?}", bad);
        }
        assert!(Token::parse(&"x".repeat(129)).is_err());
    }

    #[test]
    fn query_form() {
        let token = Token::parse("PRINT_PAYLOAD_1").unwrap();
        assert_eq!(token.query(), "key=PRINT_PAYLOAD_1");
    }
}
