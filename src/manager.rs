//! Input dispatcher.
//!
//! [`InputManager`] owns the gamepad button and analog factories for one
//! emulation session. The embedding application constructs it, hands it to
//! whatever needs input, and tears it down explicitly; nothing here is global.
//!
//! # Lifecycle
//! 1. [`InputManager::init`] creates both factories and registers them in a
//!    [`FactoryDirectory`] under the `"gamepad"` engine.
//! 2. The emulation core creates handles through the directory (or directly
//!    through [`button_handler`](InputManager::button_handler) /
//!    [`analog_handler`](InputManager::analog_handler)).
//! 3. The frontend forwards events with [`dispatch`](InputManager::dispatch) or
//!    the `on_gamepad_*` entry points.
//! 4. [`InputManager::shutdown`] unregisters both factories.
//!
//! `init` and `shutdown` need `&mut FactoryDirectory`, so they cannot overlap
//! with device creation through that directory. Event delivery only needs
//! `&self` and is safe from any thread.

use crate::binding::GAMEPAD_ENGINE;
use crate::codes::LogicalCode;
use crate::directory::FactoryDirectory;
use crate::event::GamepadEvent;
use crate::factory::{AnalogFactory, ButtonFactory};
use crate::snapshot::Snapshot;
use std::sync::Arc;

/// Session-scoped owner of the gamepad factories.
#[derive(Debug, Default)]
pub struct InputManager {
    buttons: Arc<ButtonFactory>,
    analogs: Arc<AnalogFactory>,
}

impl InputManager {
    /// Creates factories without registering them anywhere.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates factories and registers them under the gamepad engine.
    pub fn init(directory: &mut FactoryDirectory) -> Self {
        let manager = Self::new();
        directory.register_button(GAMEPAD_ENGINE, manager.buttons.clone());
        directory.register_analog(GAMEPAD_ENGINE, manager.analogs.clone());
        log::info!("gamepad input initialized");
        manager
    }

    /// Unregisters both factories and drops this manager's references.
    ///
    /// Handles already handed out keep working until dropped; they simply
    /// stop receiving events.
    pub fn shutdown(self, directory: &mut FactoryDirectory) {
        directory.unregister_button(GAMEPAD_ENGINE);
        directory.unregister_analog(GAMEPAD_ENGINE);
        log::info!(
            "gamepad input shut down ({} button, {} analog handle(s) still live)",
            self.buttons.registry().len(),
            self.analogs.registry().len()
        );
    }

    pub fn button_handler(&self) -> &ButtonFactory {
        &self.buttons
    }

    pub fn analog_handler(&self) -> &AnalogFactory {
        &self.analogs
    }

    /// Routes one event. Returns `true` if some handle was bound to its code.
    pub fn dispatch(&self, event: GamepadEvent) -> bool {
        match event {
            GamepadEvent::Button { code, pressed: true } => self.buttons.press_key(code),
            GamepadEvent::Button { code, pressed: false } => self.buttons.release_key(code),
            GamepadEvent::Axis { code, x, y } => self.analogs.move_joystick(code, x, y),
        }
    }

    /// Button entry point for the platform layer.
    pub fn on_gamepad_event(&self, code: LogicalCode, pressed: bool) -> bool {
        self.dispatch(GamepadEvent::button(code, pressed))
    }

    /// Stick entry point for the platform layer; `y` is positive-down.
    pub fn on_gamepad_move_event(&self, code: LogicalCode, x: f32, y: f32) -> bool {
        self.dispatch(GamepadEvent::from_frontend_axis(code, x, y))
    }

    /// Releases all buttons and recenters all sticks.
    pub fn release_all(&self) {
        self.buttons.release_all_keys();
        self.analogs.center_all();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self.buttons.registry(), self.analogs.registry())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::{generate_analog_binding, generate_button_binding, BindingDescriptor};

    #[test]
    fn init_registers_and_shutdown_unregisters_both_kinds() {
        let mut dir = FactoryDirectory::new();
        let input = InputManager::init(&mut dir);
        assert!(dir.has_button(GAMEPAD_ENGINE));
        assert!(dir.has_analog(GAMEPAD_ENGINE));

        input.shutdown(&mut dir);
        assert!(!dir.has_button(GAMEPAD_ENGINE));
        assert!(!dir.has_analog(GAMEPAD_ENGINE));
    }

    #[test]
    fn directory_devices_receive_dispatched_events() {
        let mut dir = FactoryDirectory::new();
        let input = InputManager::init(&mut dir);

        let a = dir
            .create_button(&BindingDescriptor::parse(&generate_button_binding(700)))
            .unwrap();
        let pad = dir
            .create_analog(&BindingDescriptor::parse(&generate_analog_binding(713)))
            .unwrap();

        assert!(input.on_gamepad_event(700, true));
        assert!(a.status());

        // platform y is positive-down
        assert!(input.on_gamepad_move_event(713, 0.5, 0.25));
        assert_eq!(pad.status(), (0.5, -0.25));
    }

    #[test]
    fn dispatch_keeps_kinds_apart() {
        let input = InputManager::new();
        let button = input.button_handler().create(&BindingDescriptor::parse("code:3"));
        let stick = input.analog_handler().create(&BindingDescriptor::parse("code:3"));

        assert!(input.dispatch(GamepadEvent::axis(3, 1.0, 1.0)));
        assert!(!button.poll());
        assert_eq!(stick.poll(), (1.0, 1.0));

        assert!(input.dispatch(GamepadEvent::button(3, true)));
        assert!(button.poll());
        assert_eq!(stick.poll(), (1.0, 1.0));
    }

    #[test]
    fn release_all_resets_both_kinds() {
        let input = InputManager::new();
        let b = input.button_handler().create(&BindingDescriptor::parse("code:1"));
        let s = input.analog_handler().create(&BindingDescriptor::parse("code:2"));
        input.on_gamepad_event(1, true);
        input.dispatch(GamepadEvent::axis(2, 0.7, 0.7));

        input.release_all();
        assert!(!b.poll());
        assert_eq!(s.poll(), (0.0, 0.0));
    }

    #[test]
    fn handles_survive_shutdown() {
        let mut dir = FactoryDirectory::new();
        let input = InputManager::init(&mut dir);
        let b = input.button_handler().create(&BindingDescriptor::parse("code:5"));
        input.on_gamepad_event(5, true);

        input.shutdown(&mut dir);
        assert!(b.poll());
        drop(b);
    }
}
