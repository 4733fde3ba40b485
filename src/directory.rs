//! Device-factory directory.
//!
//! The emulation core does not know which engine backs a control. It hands the
//! configured descriptor to the directory, which reads `engine` and delegates
//! to whichever factory registered under that name (`"gamepad"` for the
//! factories in this crate).

use crate::binding::BindingDescriptor;
use crate::device::{AnalogDevice, ButtonDevice, Factory};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Shared button factory as stored in the directory.
pub type ButtonFactoryRef = Arc<dyn Factory<dyn ButtonDevice>>;
/// Shared analog factory as stored in the directory.
pub type AnalogFactoryRef = Arc<dyn Factory<dyn AnalogDevice>>;

/// Engine name → factory, one table per device kind.
#[derive(Default)]
pub struct FactoryDirectory {
    buttons: HashMap<String, ButtonFactoryRef>,
    analogs: HashMap<String, AnalogFactoryRef>,
}

impl FactoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a button factory, replacing any previous one for `engine`.
    pub fn register_button(&mut self, engine: &str, factory: ButtonFactoryRef) {
        if self.buttons.insert(engine.to_owned(), factory).is_some() {
            log::warn!("button factory {engine:?} replaced");
        }
    }

    pub fn register_analog(&mut self, engine: &str, factory: AnalogFactoryRef) {
        if self.analogs.insert(engine.to_owned(), factory).is_some() {
            log::warn!("analog factory {engine:?} replaced");
        }
    }

    pub fn unregister_button(&mut self, engine: &str) -> Option<ButtonFactoryRef> {
        self.buttons.remove(engine)
    }

    pub fn unregister_analog(&mut self, engine: &str) -> Option<AnalogFactoryRef> {
        self.analogs.remove(engine)
    }

    pub fn has_button(&self, engine: &str) -> bool {
        self.buttons.contains_key(engine)
    }

    pub fn has_analog(&self, engine: &str) -> bool {
        self.analogs.contains_key(engine)
    }

    /// Builds a button device from the factory named by `params["engine"]`.
    ///
    /// Returns `None` if the descriptor has no engine or the engine is unknown.
    pub fn create_button(&self, params: &BindingDescriptor) -> Option<Box<dyn ButtonDevice>> {
        let engine = params.engine()?;
        match self.buttons.get(engine) {
            Some(factory) => Some(factory.create(params)),
            None => {
                log::warn!("no button factory for engine {engine:?}");
                None
            }
        }
    }

    /// Builds an analog device from the factory named by `params["engine"]`.
    pub fn create_analog(&self, params: &BindingDescriptor) -> Option<Box<dyn AnalogDevice>> {
        let engine = params.engine()?;
        match self.analogs.get(engine) {
            Some(factory) => Some(factory.create(params)),
            None => {
                log::warn!("no analog factory for engine {engine:?}");
                None
            }
        }
    }
}

impl fmt::Debug for FactoryDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryDirectory")
            .field("buttons", &self.buttons.keys().collect::<Vec<_>>())
            .field("analogs", &self.analogs.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{AnalogFactory, ButtonFactory};

    #[test]
    fn creates_through_registered_engine() {
        let buttons = Arc::new(ButtonFactory::new());
        let mut dir = FactoryDirectory::new();
        dir.register_button("gamepad", buttons.clone());

        let device = dir
            .create_button(&BindingDescriptor::parse("engine:gamepad,code:4"))
            .expect("gamepad engine registered");
        buttons.press_key(4);
        assert!(device.status());
    }

    #[test]
    fn unknown_or_missing_engine_yields_none() {
        let mut dir = FactoryDirectory::new();
        dir.register_analog("gamepad", Arc::new(AnalogFactory::new()));

        assert!(dir
            .create_analog(&BindingDescriptor::parse("engine:sdl,code:1"))
            .is_none());
        assert!(dir
            .create_analog(&BindingDescriptor::parse("code:1"))
            .is_none());
        assert!(dir.create_button(&BindingDescriptor::parse("engine:gamepad")).is_none());
    }

    #[test]
    fn unregister_removes_engine() {
        let mut dir = FactoryDirectory::new();
        dir.register_button("gamepad", Arc::new(ButtonFactory::new()));
        assert!(dir.has_button("gamepad"));
        assert!(dir.unregister_button("gamepad").is_some());
        assert!(!dir.has_button("gamepad"));
        assert!(dir.unregister_button("gamepad").is_none());
    }
}
