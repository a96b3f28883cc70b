//! Build-time configuration.
//!
//! The bundle is static, so values are baked in with `option_env!` when the
//! crate is compiled. Anything that fails to parse is logged and replaced by
//! its default.

use std::str::FromStr;

use crate::api::envelope::TokenEnvelope;

const DEFAULT_BACKEND_URL: &str = "http://198.211.105.95:8080";
const DEFAULT_AUTH_PREFIX: &str = "authentication";
const DEFAULT_REGISTER_PATH: &str = "register";
const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_MIN_PASSWORD: usize = 12;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub backend_url: String,
    /// First path segment of the auth endpoints (`authentication` or `auth`).
    pub auth_prefix: String,
    /// Last path segment of the account creation endpoint (`register` or `signup`).
    pub register_path: String,
    pub token_envelope: TokenEnvelope,
    pub page_size: usize,
    pub min_password_len: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            auth_prefix: DEFAULT_AUTH_PREFIX.to_string(),
            register_path: DEFAULT_REGISTER_PATH.to_string(),
            token_envelope: TokenEnvelope::default(),
            page_size: DEFAULT_PAGE_SIZE,
            min_password_len: DEFAULT_MIN_PASSWORD,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "AHORRISTA_BACKEND_URL" => option_env!("AHORRISTA_BACKEND_URL"),
            "AHORRISTA_AUTH_PREFIX" => option_env!("AHORRISTA_AUTH_PREFIX"),
            "AHORRISTA_REGISTER_PATH" => option_env!("AHORRISTA_REGISTER_PATH"),
            "AHORRISTA_TOKEN_ENVELOPE" => option_env!("AHORRISTA_TOKEN_ENVELOPE"),
            "AHORRISTA_PAGE_SIZE" => option_env!("AHORRISTA_PAGE_SIZE"),
            "AHORRISTA_MIN_PASSWORD" => option_env!("AHORRISTA_MIN_PASSWORD"),
            _ => None,
        })
    }

    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let defaults = Self::default();
        let text = |key: &str, default: String| {
            lookup(key)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(|value| value.trim_matches('/').to_string())
                .unwrap_or(default)
        };

        Self {
            backend_url: lookup("AHORRISTA_BACKEND_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.backend_url),
            auth_prefix: text("AHORRISTA_AUTH_PREFIX", defaults.auth_prefix),
            register_path: text("AHORRISTA_REGISTER_PATH", defaults.register_path),
            token_envelope: parsed(&lookup, "AHORRISTA_TOKEN_ENVELOPE", defaults.token_envelope),
            page_size: parsed(&lookup, "AHORRISTA_PAGE_SIZE", defaults.page_size).max(1),
            min_password_len: parsed(&lookup, "AHORRISTA_MIN_PASSWORD", defaults.min_password_len),
        }
    }
}

fn parsed<'a, T>(lookup: &impl Fn(&str) -> Option<&'a str>, key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|err| {
            log::warn!("ignoring {key}={raw:?}: {err}");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.token_envelope, TokenEnvelope::Data);
    }

    #[test]
    fn overrides_are_normalized() {
        let config = AppConfig::from_lookup(|key| match key {
            "AHORRISTA_BACKEND_URL" => Some("http://localhost:8080/"),
            "AHORRISTA_AUTH_PREFIX" => Some("/auth/"),
            "AHORRISTA_REGISTER_PATH" => Some("signup"),
            "AHORRISTA_TOKEN_ENVELOPE" => Some("result"),
            "AHORRISTA_PAGE_SIZE" => Some("25"),
            _ => None,
        });
        assert_eq!(config.backend_url, "http://localhost:8080");
        assert_eq!(config.auth_prefix, "auth");
        assert_eq!(config.register_path, "signup");
        assert_eq!(config.token_envelope, TokenEnvelope::Result);
        assert_eq!(config.page_size, 25);
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let config = AppConfig::from_lookup(|key| match key {
            "AHORRISTA_TOKEN_ENVELOPE" => Some("payload.jwt"),
            "AHORRISTA_PAGE_SIZE" => Some("0"),
            "AHORRISTA_MIN_PASSWORD" => Some("many"),
            _ => None,
        });
        assert_eq!(config.token_envelope, TokenEnvelope::Data);
        assert_eq!(config.page_size, 1);
        assert_eq!(config.min_password_len, DEFAULT_MIN_PASSWORD);
    }
}
