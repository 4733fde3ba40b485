//! Binding descriptors.
//!
//! A [`BindingDescriptor`] is the parsed form of one configuration value such as
//! `code:700,engine:gamepad`. It names the factory engine that should build the
//! device and carries engine-specific parameters (for the gamepad engine, just
//! `code`).
//!
//! ## Text format
//! - Pairs are `key:value`, separated by `,`.
//! - Inside keys and values, `$` is written `$2`, `,` is written `$1` and `:` is
//!   written `$0`.
//! - Pairs that do not split into exactly one key and one value are skipped.
//!
//! Parsing never fails. A descriptor that is empty or garbled simply lacks the
//! keys a factory looks for, and the factory falls back to its defaults.
//!
//! Integer values must be a whole integer after trimming whitespace. A value
//! with trailing junk such as `code:12abc` is treated as malformed and yields
//! the default; the leading digits are not salvaged.

use crate::codes::LogicalCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Key naming the factory engine.
pub const ENGINE_KEY: &str = "engine";
/// Key carrying the logical code for gamepad devices.
pub const CODE_KEY: &str = "code";
/// Engine name the gamepad factories register under.
pub const GAMEPAD_ENGINE: &str = "gamepad";

/// Parsed key-value binding produced by configuration.
///
/// Read only at device-creation time; factories never keep a reference to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BindingDescriptor {
    params: BTreeMap<String, String>,
}

impl BindingDescriptor {
    /// Creates an empty descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses descriptor text. Malformed pairs are dropped.
    pub fn parse(text: &str) -> Self {
        let mut params = BTreeMap::new();

        for pair in text.split(',').filter(|p| !p.is_empty()) {
            let mut parts = pair.split(':');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(key), Some(value), None) => {
                    params.insert(unescape(key), unescape(value));
                }
                _ => log::debug!("ignoring malformed binding pair {pair:?} in {text:?}"),
            }
        }

        Self { params }
    }

    /// Builder-style setter.
    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl ToString) {
        self.params.insert(key.to_owned(), value.to_string());
    }

    /// Raw string value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Integer value for `key`, or `default` when missing or not an integer.
    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        match self.get(key) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::debug!("binding key {key:?} has non-integer value {raw:?}, using {default}");
                default
            }),
            None => default,
        }
    }

    /// The `engine` discriminator, if present.
    pub fn engine(&self) -> Option<&str> {
        self.get(ENGINE_KEY)
    }

    /// The logical code, defaulting to `0` when missing or malformed.
    pub fn code(&self) -> LogicalCode {
        self.get_int(CODE_KEY, 0)
    }

    pub fn has(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl fmt::Display for BindingDescriptor {
    /// Serializes back to descriptor text (keys in sorted order).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}:{}", escape(key), escape(value))?;
        }
        Ok(())
    }
}

impl From<&str> for BindingDescriptor {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

fn escape(s: &str) -> String {
    s.replace('$', "$2").replace(',', "$1").replace(':', "$0")
}

fn unescape(s: &str) -> String {
    s.replace("$0", ":").replace("$1", ",").replace("$2", "$")
}

/// Descriptor text binding a button slot to a gamepad code.
///
/// Used to fill configuration defaults.
pub fn generate_button_binding(code: LogicalCode) -> String {
    gamepad_binding(code).to_string()
}

/// Descriptor text binding an analog slot to a gamepad code.
pub fn generate_analog_binding(code: LogicalCode) -> String {
    gamepad_binding(code).to_string()
}

fn gamepad_binding(code: LogicalCode) -> BindingDescriptor {
    BindingDescriptor::new()
        .with(ENGINE_KEY, GAMEPAD_ENGINE)
        .with(CODE_KEY, code)
}
