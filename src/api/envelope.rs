//! Response envelopes.
//!
//! Different backend deployments wrap their payloads differently: the login
//! token sits under `data.token` on one and `result.token` on another, and
//! lists come back either bare or under `data`. These helpers absorb the
//! shapes the client knows about and nothing else.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Where the login response keeps the bearer token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TokenEnvelope {
    /// `{"data": {"token": "..."}}`
    #[default]
    Data,
    /// `{"result": {"token": "..."}}`
    Result,
    /// `{"token": "..."}`
    Bare,
}

impl TokenEnvelope {
    /// Returns the token only if it sits exactly where this envelope says.
    pub fn extract<'a>(&self, body: &'a Value) -> Option<&'a str> {
        let holder = match self {
            TokenEnvelope::Data => body.get("data")?,
            TokenEnvelope::Result => body.get("result")?,
            TokenEnvelope::Bare => body,
        };
        holder
            .get("token")
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
    }
}

impl fmt::Display for TokenEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenEnvelope::Data => "data",
            TokenEnvelope::Result => "result",
            TokenEnvelope::Bare => "bare",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
#[error("unknown token envelope `{0}` (expected data, result or bare)")]
pub struct UnknownEnvelope(String);

impl FromStr for TokenEnvelope {
    type Err = UnknownEnvelope;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "data" | "data.token" => Ok(TokenEnvelope::Data),
            "result" | "result.token" => Ok(TokenEnvelope::Result),
            "bare" | "token" => Ok(TokenEnvelope::Bare),
            _ => Err(UnknownEnvelope(s.to_string())),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListEnvelope<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ItemEnvelope<T> {
    Wrapped { data: T },
    Bare(T),
}

/// Parses a list sent either as a raw array or as `{"data": [...]}`.
pub fn parse_list<T: DeserializeOwned>(body: &str) -> serde_json::Result<Vec<T>> {
    let list = match serde_json::from_str::<ListEnvelope<T>>(body)? {
        ListEnvelope::Bare(items) => items,
        ListEnvelope::Wrapped { data } => data,
    };
    Ok(list)
}

/// Parses an object sent either bare or as `{"data": {...}}`.
pub fn parse_item<T: DeserializeOwned>(body: &str) -> serde_json::Result<T> {
    let item = match serde_json::from_str::<ItemEnvelope<T>>(body)? {
        ItemEnvelope::Wrapped { data } => data,
        ItemEnvelope::Bare(item) => item,
    };
    Ok(item)
}

/// Human readable message carried by an error body, if any.
pub fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn token_is_read_from_the_configured_field_only() {
        let data = json!({ "data": { "token": "abc" } });
        let result = json!({ "result": { "token": "xyz" } });

        assert_eq!(TokenEnvelope::Data.extract(&data), Some("abc"));
        assert_eq!(TokenEnvelope::Data.extract(&result), None);
        assert_eq!(TokenEnvelope::Result.extract(&result), Some("xyz"));
        assert_eq!(TokenEnvelope::Result.extract(&data), None);
        assert_eq!(TokenEnvelope::Bare.extract(&data), None);
        assert_eq!(TokenEnvelope::Bare.extract(&json!({ "token": "t" })), Some("t"));
    }

    #[test]
    fn empty_or_non_string_token_is_rejected() {
        assert_eq!(TokenEnvelope::Data.extract(&json!({ "data": { "token": "" } })), None);
        assert_eq!(TokenEnvelope::Data.extract(&json!({ "data": { "token": 42 } })), None);
    }

    #[test]
    fn envelope_names_parse() {
        assert_eq!("DATA".parse::<TokenEnvelope>().unwrap(), TokenEnvelope::Data);
        assert_eq!("result.token".parse::<TokenEnvelope>().unwrap(), TokenEnvelope::Result);
        assert_eq!("bare".parse::<TokenEnvelope>().unwrap(), TokenEnvelope::Bare);
        assert!("jwt".parse::<TokenEnvelope>().is_err());
    }

    #[test]
    fn lists_accept_both_shapes() {
        let bare: Vec<u32> = parse_list("[1, 2, 3]").unwrap();
        let wrapped: Vec<u32> = parse_list(r#"{"data": [1, 2, 3]}"#).unwrap();
        assert_eq!(bare, wrapped);
        assert!(parse_list::<u32>(r#"{"items": [1]}"#).is_err());
    }

    #[test]
    fn items_accept_both_shapes() {
        #[derive(Deserialize, Debug, PartialEq)]
        struct Named {
            name: String,
        }
        let bare: Named = parse_item(r#"{"name": "Food"}"#).unwrap();
        let wrapped: Named = parse_item(r#"{"data": {"name": "Food"}}"#).unwrap();
        assert_eq!(bare, wrapped);
    }

    #[test]
    fn server_message_prefers_message_then_error() {
        assert_eq!(
            server_message(r#"{"message": "Email already in use", "error": "Conflict"}"#),
            Some("Email already in use".to_string())
        );
        assert_eq!(server_message(r#"{"error": "Bad Request"}"#), Some("Bad Request".to_string()));
        assert_eq!(server_message(r#"{"message": "  "}"#), None);
        assert_eq!(server_message("<html>502</html>"), None);
    }
}
