//! Logical input codes.
//!
//! A [`LogicalCode`] names one control on the virtual gamepad the frontend
//! draws (or a physical pad mapped onto it). Codes are scoped per kind: code
//! `713` as a button and code `713` as an analog stick are unrelated, because
//! buttons and sticks live in separate registries.
//!
//! The numbering below follows the frontend's overlay layout. Only the 3DS
//! block is used by the default configuration; other blocks can be added
//! without touching the registry, which accepts any `i32`.

/// Integer identifying a logical control, scoped to digital or analog kind.
pub type LogicalCode = i32;

/// 3DS gamepad codes sent by the frontend.
pub mod n3ds {
    use super::LogicalCode;

    pub const BUTTON_A: LogicalCode = 700;
    pub const BUTTON_B: LogicalCode = 701;
    pub const BUTTON_X: LogicalCode = 702;
    pub const BUTTON_Y: LogicalCode = 703;
    pub const BUTTON_START: LogicalCode = 704;
    pub const BUTTON_SELECT: LogicalCode = 705;
    pub const BUTTON_HOME: LogicalCode = 706;
    pub const BUTTON_ZL: LogicalCode = 707;
    pub const BUTTON_ZR: LogicalCode = 708;
    pub const DPAD_UP: LogicalCode = 709;
    pub const DPAD_DOWN: LogicalCode = 710;
    pub const DPAD_LEFT: LogicalCode = 711;
    pub const DPAD_RIGHT: LogicalCode = 712;
    /// Whole circle pad, delivered as one (x, y) analog event.
    pub const CIRCLEPAD: LogicalCode = 713;
    pub const CIRCLEPAD_UP: LogicalCode = 714;
    pub const CIRCLEPAD_DOWN: LogicalCode = 715;
    pub const CIRCLEPAD_LEFT: LogicalCode = 716;
    pub const CIRCLEPAD_RIGHT: LogicalCode = 717;
    /// Whole C-stick, delivered as one (x, y) analog event.
    pub const STICK_C: LogicalCode = 718;
    pub const STICK_C_UP: LogicalCode = 719;
    pub const STICK_C_DOWN: LogicalCode = 720;
    // The frontend skips 721..=770 here; keep the gap.
    pub const STICK_C_LEFT: LogicalCode = 771;
    pub const STICK_C_RIGHT: LogicalCode = 772;
    pub const TRIGGER_L: LogicalCode = 773;
    pub const TRIGGER_R: LogicalCode = 774;
}

/// Button slots of the emulated console, paired with their default code.
///
/// Slot names are the keys used in the `[controls]` table of the
/// configuration file.
pub const DEFAULT_BUTTONS: [(&str, LogicalCode); 15] = [
    ("button_a", n3ds::BUTTON_A),
    ("button_b", n3ds::BUTTON_B),
    ("button_x", n3ds::BUTTON_X),
    ("button_y", n3ds::BUTTON_Y),
    ("button_up", n3ds::DPAD_UP),
    ("button_down", n3ds::DPAD_DOWN),
    ("button_left", n3ds::DPAD_LEFT),
    ("button_right", n3ds::DPAD_RIGHT),
    ("button_l", n3ds::TRIGGER_L),
    ("button_r", n3ds::TRIGGER_R),
    ("button_start", n3ds::BUTTON_START),
    ("button_select", n3ds::BUTTON_SELECT),
    ("button_zl", n3ds::BUTTON_ZL),
    ("button_zr", n3ds::BUTTON_ZR),
    ("button_home", n3ds::BUTTON_HOME),
];

/// Analog slots of the emulated console, paired with their default code.
pub const DEFAULT_ANALOGS: [(&str, LogicalCode); 2] = [
    ("circle_pad", n3ds::CIRCLEPAD),
    ("c_stick", n3ds::STICK_C),
];

/// Default code for a button slot, if the slot exists.
pub fn default_button_code(slot: &str) -> Option<LogicalCode> {
    DEFAULT_BUTTONS
        .iter()
        .find(|(name, _)| *name == slot)
        .map(|(_, code)| *code)
}

/// Default code for an analog slot, if the slot exists.
pub fn default_analog_code(slot: &str) -> Option<LogicalCode> {
    DEFAULT_ANALOGS
        .iter()
        .find(|(name, _)| *name == slot)
        .map(|(_, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_has_unique_slots_and_codes() {
        let mut names: Vec<_> = DEFAULT_BUTTONS.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DEFAULT_BUTTONS.len());

        let mut codes: Vec<_> = DEFAULT_BUTTONS.iter().map(|(_, c)| *c).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), DEFAULT_BUTTONS.len());
    }

    #[test]
    fn slot_lookup() {
        assert_eq!(default_button_code("button_zr"), Some(n3ds::BUTTON_ZR));
        assert_eq!(default_analog_code("c_stick"), Some(n3ds::STICK_C));
        assert_eq!(default_button_code("circle_pad"), None);
        assert_eq!(default_analog_code("nope"), None);
    }
}
