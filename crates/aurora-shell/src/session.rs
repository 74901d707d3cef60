//! Session-scoped key-value state.
//!
//! Unlike the persistent store, these values die with the process — the
//! onboarding language choice lives here so a fresh boot asks again.

use std::collections::HashMap;

pub const LANGUAGE_KEY: &str = "current-language";

pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Default)]
pub struct SessionStore {
    values: HashMap<String, String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}
