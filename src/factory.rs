//! Gamepad device factories.
//!
//! [`ButtonFactory`] and [`AnalogFactory`] each own one registry. `create`
//! builds a handle bound to the descriptor's `code`; the forwarding methods
//! (`press_key`, `release_key`, `move_joystick`) are the only path by which
//! frontend events reach those handles.
//!
//! A missing or malformed `code` binds to code `0` instead of failing, so a
//! bad configuration entry yields an inert control rather than aborting device
//! setup. Two such entries share code `0` and therefore move together.

use crate::binding::BindingDescriptor;
use crate::codes::LogicalCode;
use crate::device::{AnalogDevice, ButtonDevice, Factory};
use crate::handle::{AnalogHandle, ButtonHandle};
use crate::registry::{AnalogRegistry, ButtonRegistry};
use std::sync::Arc;

/// Factory for digital gamepad buttons.
#[derive(Debug, Default)]
pub struct ButtonFactory {
    registry: Arc<ButtonRegistry>,
}

impl ButtonFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a button handle bound to `params["code"]` (default `0`).
    pub fn create(&self, params: &BindingDescriptor) -> ButtonHandle {
        let code = params.code();
        log::debug!("creating gamepad button for code {code}");
        ButtonHandle::register(&self.registry, code)
    }

    /// Marks every button bound to `code` as pressed.
    ///
    /// Returns `true` if at least one button was bound (the event was consumed).
    pub fn press_key(&self, code: LogicalCode) -> bool {
        self.registry.update_by_code(code, true) > 0
    }

    /// Marks every button bound to `code` as released.
    pub fn release_key(&self, code: LogicalCode) -> bool {
        self.registry.update_by_code(code, false) > 0
    }

    /// Releases every button this factory created.
    pub fn release_all_keys(&self) {
        let n = self.registry.update_all(false);
        log::debug!("released {n} gamepad button(s)");
    }

    pub fn registry(&self) -> &Arc<ButtonRegistry> {
        &self.registry
    }
}

impl Factory<dyn ButtonDevice> for ButtonFactory {
    fn create(&self, params: &BindingDescriptor) -> Box<dyn ButtonDevice> {
        Box::new(ButtonFactory::create(self, params))
    }
}

/// Factory for analog gamepad sticks.
#[derive(Debug, Default)]
pub struct AnalogFactory {
    registry: Arc<AnalogRegistry>,
}

impl AnalogFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a stick handle bound to `params["code"]` (default `0`).
    pub fn create(&self, params: &BindingDescriptor) -> AnalogHandle {
        let code = params.code();
        log::debug!("creating gamepad stick for code {code}");
        AnalogHandle::register(&self.registry, code)
    }

    /// Moves every stick bound to `code` to `(x, y)`.
    ///
    /// `y` is expected positive-up; the frontend flip happens before this call.
    pub fn move_joystick(&self, code: LogicalCode, x: f32, y: f32) -> bool {
        self.registry.update_by_code(code, (x, y)) > 0
    }

    /// Recenters every stick this factory created.
    pub fn center_all(&self) {
        let n = self.registry.update_all((0.0, 0.0));
        log::debug!("centered {n} gamepad stick(s)");
    }

    pub fn registry(&self) -> &Arc<AnalogRegistry> {
        &self.registry
    }
}

impl Factory<dyn AnalogDevice> for AnalogFactory {
    fn create(&self, params: &BindingDescriptor) -> Box<dyn AnalogDevice> {
        Box::new(AnalogFactory::create(self, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gamepad(code: &str) -> BindingDescriptor {
        BindingDescriptor::parse(&format!("engine:gamepad,code:{code}"))
    }

    #[test]
    fn press_release_cycle() {
        let factory = ButtonFactory::new();
        let h = factory.create(&gamepad("5"));

        assert!(factory.release_key(5));
        assert!(!h.poll());
        assert!(factory.press_key(5));
        assert!(h.poll());
        assert!(factory.release_key(5));
        assert!(!h.poll());
    }

    #[test]
    fn live_button_always_consumes_its_code() {
        let factory = ButtonFactory::new();
        let h = factory.create(&gamepad("5"));
        let _other = factory.create(&gamepad("6"));
        drop(factory.create(&gamepad("5")));

        for _ in 0..3 {
            assert!(factory.press_key(5));
            assert!(h.poll());
            assert!(factory.release_key(5));
            assert!(!h.poll());
        }
        assert_eq!(factory.registry().count_for(5), 1);
    }

    #[test]
    fn unbound_code_is_not_consumed() {
        let factory = ButtonFactory::new();
        let _h = factory.create(&gamepad("1"));
        assert!(!factory.press_key(2));
    }

    #[test]
    fn two_buttons_on_one_code_both_press() {
        let factory = ButtonFactory::new();
        let a = factory.create(&gamepad("42"));
        let b = factory.create(&gamepad("42"));

        factory.press_key(42);
        assert!(a.poll());
        assert!(b.poll());
    }

    #[test]
    fn missing_code_binds_to_zero() {
        let factory = ButtonFactory::new();
        let h = factory.create(&BindingDescriptor::parse("engine:gamepad"));
        assert_eq!(h.code(), 0);
        assert!(!h.poll());

        factory.press_key(0);
        assert!(h.poll());
    }

    #[test]
    fn release_all_keys_clears_everything() {
        let factory = ButtonFactory::new();
        let a = factory.create(&gamepad("1"));
        let b = factory.create(&gamepad("2"));
        factory.press_key(1);
        factory.press_key(2);

        factory.release_all_keys();
        assert!(!a.poll());
        assert!(!b.poll());
    }

    #[test]
    fn joystick_move_and_drop() {
        let factory = AnalogFactory::new();
        let j = factory.create(&gamepad("10"));

        assert!(factory.move_joystick(10, 0.5, -0.75));
        assert_eq!(j.poll(), (0.5, -0.75));

        drop(j);
        assert!(!factory.move_joystick(10, 1.0, 1.0));
        assert!(factory.registry().is_empty());
    }

    #[test]
    fn center_all_resets_sticks() {
        let factory = AnalogFactory::new();
        let j = factory.create(&gamepad("713"));
        factory.move_joystick(713, 1.0, -1.0);
        factory.center_all();
        assert_eq!(j.poll(), (0.0, 0.0));
    }

    #[test]
    fn handle_outlives_factory() {
        let factory = AnalogFactory::new();
        let j = factory.create(&gamepad("3"));
        let registry = Arc::clone(factory.registry());
        drop(factory);

        registry.update_by_code(3, (0.3, 0.4));
        assert_eq!(j.poll(), (0.3, 0.4));
        drop(j);
        assert!(registry.is_empty());
    }

    #[test]
    fn trait_object_factory_builds_pollable_device() {
        let factory = ButtonFactory::new();
        let dyn_factory: &dyn Factory<dyn ButtonDevice> = &factory;
        let device = dyn_factory.create(&gamepad("9"));

        factory.press_key(9);
        assert!(device.status());
    }
}
