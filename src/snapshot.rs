//! Point-in-time view of every bound control.
//!
//! [`Snapshot`] is an **owned**, read-only copy of the last broadcast value per
//! bound code, produced by [`InputManager::snapshot`](crate::manager::InputManager::snapshot).
//! It is meant for overlays and diagnostics; the emulation core polls its
//! handles directly and never needs one.
//!
//! # Semantics
//! - Only codes with at least one live handle appear.
//! - Each code reads the last value broadcast to it, or the zero value if none
//!   was. Handles created after that broadcast poll zero until the next one,
//!   but do not change what their code reports here.
//! - Once every handle on a code is dropped, the code's value is forgotten.
//! - Taking a snapshot locks each registry briefly; handles are never locked.
//!
//! # Example
//! ```
//! use padwire::{BindingDescriptor, InputManager};
//!
//! let input = InputManager::new();
//! let _a = input.button_handler().create(&BindingDescriptor::parse("engine:gamepad,code:700"));
//! input.button_handler().press_key(700);
//!
//! let snap = input.snapshot();
//! assert_eq!(snap.button(700), Some(true));
//! println!("{}", snap.to_json().unwrap());
//! ```

use crate::codes::LogicalCode;
use crate::registry::{AnalogRegistry, ButtonRegistry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Owned copy of button and stick states, keyed by code.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub buttons: BTreeMap<LogicalCode, bool>,
    pub analogs: BTreeMap<LogicalCode, (f32, f32)>,
}

impl Snapshot {
    /// Reads both registries.
    pub fn capture(buttons: &ButtonRegistry, analogs: &AnalogRegistry) -> Self {
        Self {
            buttons: buttons.code_states().into_iter().collect(),
            analogs: analogs.code_states().into_iter().collect(),
        }
    }

    #[inline]
    pub fn button(&self, code: LogicalCode) -> Option<bool> {
        self.buttons.get(&code).copied()
    }

    #[inline]
    pub fn analog(&self, code: LogicalCode) -> Option<(f32, f32)> {
        self.analogs.get(&code).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty() && self.analogs.is_empty()
    }

    /// JSON form for handing across to the UI layer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
