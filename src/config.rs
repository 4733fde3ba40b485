//! Controls configuration.
//!
//! The controls file is a TOML document with one `[controls]` table mapping
//! slot names (see [`codes::DEFAULT_BUTTONS`](crate::codes::DEFAULT_BUTTONS))
//! to binding descriptor strings:
//!
//! ```toml
//! [controls]
//! button_a = "code:700,engine:gamepad"
//! circle_pad = "code:713,engine:gamepad"
//! ```
//!
//! Missing slots and empty strings fall back to the generated default for that
//! slot. A missing file is created from defaults by [`ControlsConfig::load_or_create`].

use crate::binding::{generate_analog_binding, generate_button_binding, BindingDescriptor};
use crate::codes::{self, LogicalCode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid controls file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize controls: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Slot name → descriptor text, as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlsConfig {
    #[serde(default)]
    pub controls: BTreeMap<String, String>,
}

impl Default for ControlsConfig {
    /// The default layout: every known slot bound to its gamepad code.
    fn default() -> Self {
        let buttons = codes::DEFAULT_BUTTONS
            .iter()
            .map(|(slot, code)| (slot.to_string(), generate_button_binding(*code)));
        let analogs = codes::DEFAULT_ANALOGS
            .iter()
            .map(|(slot, code)| (slot.to_string(), generate_analog_binding(*code)));

        Self {
            controls: buttons.chain(analogs).collect(),
        }
    }
}

impl ControlsConfig {
    /// Reads and parses `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loaded controls from {}", path.display());
        Ok(config)
    }

    /// Like [`load`](Self::load), but writes the default layout first when
    /// `path` does not exist. An existing file that fails to parse is left
    /// untouched and reported.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::warn!(
                "controls file {} missing, creating it from defaults",
                path.display()
            );
            Self::default().save(path)?;
        }
        Self::load(path)
    }

    /// Writes the configuration, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(io_err)?;
        }
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text).map_err(io_err)
    }

    /// Descriptor for a button slot.
    ///
    /// `None` only when the slot is neither configured nor a known default slot.
    pub fn button_binding(&self, slot: &str) -> Option<BindingDescriptor> {
        self.binding(slot, codes::default_button_code(slot), generate_button_binding)
    }

    /// Descriptor for an analog slot.
    pub fn analog_binding(&self, slot: &str) -> Option<BindingDescriptor> {
        self.binding(slot, codes::default_analog_code(slot), generate_analog_binding)
    }

    /// Descriptors for every default button slot, in layout order.
    pub fn button_bindings(&self) -> Vec<(&'static str, BindingDescriptor)> {
        codes::DEFAULT_BUTTONS
            .iter()
            .filter_map(|(slot, _)| self.button_binding(slot).map(|d| (*slot, d)))
            .collect()
    }

    /// Descriptors for every default analog slot, in layout order.
    pub fn analog_bindings(&self) -> Vec<(&'static str, BindingDescriptor)> {
        codes::DEFAULT_ANALOGS
            .iter()
            .filter_map(|(slot, _)| self.analog_binding(slot).map(|d| (*slot, d)))
            .collect()
    }

    pub fn set(&mut self, slot: &str, descriptor: &BindingDescriptor) {
        self.controls.insert(slot.to_owned(), descriptor.to_string());
    }

    fn binding(
        &self,
        slot: &str,
        default_code: Option<LogicalCode>,
        generate: fn(LogicalCode) -> String,
    ) -> Option<BindingDescriptor> {
        match self.controls.get(slot).filter(|text| !text.trim().is_empty()) {
            Some(text) => Some(BindingDescriptor::parse(text)),
            None => default_code.map(|code| BindingDescriptor::parse(&generate(code))),
        }
    }
}
