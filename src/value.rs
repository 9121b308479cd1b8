//! Conversion between typed preference values and the raw values a backend stores.
//!
//! Decoding never fails: a stored value of the wrong shape decodes to the
//! type's natural "empty" value (`false`, `""`, no URL) instead of erroring.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use url::Url;

/// A value as it is held by a [`SettingsBackend`](crate::backend::SettingsBackend).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    /// Anything else found in the settings file (arrays, tables, dates).
    /// Reads as the empty value of every type and is written back as-is.
    Other(toml::Value),
}

impl RawValue {
    /// Loose boolean conversion. Text is false only when empty, `0` or `false`.
    pub fn to_bool(&self) -> bool {
        match self {
            RawValue::Bool(b) => *b,
            RawValue::Integer(i) => *i != 0,
            RawValue::Float(f) => *f != 0.0,
            RawValue::Text(s) => !(s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false")),
            RawValue::Other(_) => false,
        }
    }

    pub fn to_text(&self) -> String {
        match self {
            RawValue::Bool(b) => b.to_string(),
            RawValue::Integer(i) => i.to_string(),
            RawValue::Float(f) => f.to_string(),
            RawValue::Text(s) => s.clone(),
            RawValue::Other(_) => String::new(),
        }
    }
}

/// A semantic type a preference can hold.
pub trait PreferenceValue: Clone + PartialEq + Debug {
    /// Human readable name of the type, used in error messages
    const TYPE_NAME: &'static str;

    fn from_raw(raw: &RawValue) -> Self;

    fn to_raw(&self) -> RawValue;

    /// Parse user-entered text, `None` if it isn't a valid value of this type
    fn parse_text(text: &str) -> Option<Self>;

    fn display(&self) -> String;
}

impl PreferenceValue for bool {
    const TYPE_NAME: &'static str = "boolean";

    fn from_raw(raw: &RawValue) -> Self {
        raw.to_bool()
    }

    fn to_raw(&self) -> RawValue {
        RawValue::Bool(*self)
    }

    fn parse_text(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => None,
        }
    }

    fn display(&self) -> String {
        self.to_string()
    }
}

impl PreferenceValue for String {
    const TYPE_NAME: &'static str = "shortcut";

    fn from_raw(raw: &RawValue) -> Self {
        raw.to_text()
    }

    fn to_raw(&self) -> RawValue {
        RawValue::Text(self.clone())
    }

    fn parse_text(text: &str) -> Option<Self> {
        Some(text.to_string())
    }

    fn display(&self) -> String {
        self.clone()
    }
}

/// `None` is the empty URL, which is also what an unparseable stored URL decodes to.
impl PreferenceValue for Option<Url> {
    const TYPE_NAME: &'static str = "URL";

    fn from_raw(raw: &RawValue) -> Self {
        match raw {
            RawValue::Text(s) if !s.is_empty() => Url::parse(s).ok(),
            _ => None,
        }
    }

    fn to_raw(&self) -> RawValue {
        RawValue::Text(self.as_ref().map(Url::to_string).unwrap_or_default())
    }

    fn parse_text(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Some(None);
        }
        Url::parse(text).ok().map(Some)
    }

    fn display(&self) -> String {
        self.as_ref().map(Url::to_string).unwrap_or_default()
    }
}
