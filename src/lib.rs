//! padwire: gamepad input registry for emulator frontends.
//!
//! Bridges input events arriving on the UI thread to pollable devices owned by
//! the emulation thread. The emulation core creates a handle per control from a
//! binding descriptor; the frontend broadcasts button and stick changes by
//! logical code; handles read their last value lock-free.
//!
//! ```
//! use padwire::{BindingDescriptor, FactoryDirectory, GamepadEvent, InputManager};
//!
//! let mut directory = FactoryDirectory::new();
//! let input = InputManager::init(&mut directory);
//!
//! let a = directory
//!     .create_button(&BindingDescriptor::parse("engine:gamepad,code:700"))
//!     .unwrap();
//! input.dispatch(GamepadEvent::button(700, true));
//! assert!(a.status());
//!
//! drop(a);
//! input.shutdown(&mut directory);
//! ```

pub mod binding;
pub mod codes;
pub mod config;
pub mod device;
pub mod directory;
pub mod event;
pub mod factory;
pub mod handle;
pub mod manager;
pub mod registry;
pub mod snapshot;

pub use binding::{generate_analog_binding, generate_button_binding, BindingDescriptor};
pub use codes::LogicalCode;
pub use config::{ConfigError, ControlsConfig};
pub use device::*;
pub use directory::FactoryDirectory;
pub use event::GamepadEvent;
pub use factory::{AnalogFactory, ButtonFactory};
pub use handle::{AnalogHandle, ButtonHandle, DeviceHandle};
pub use manager::InputManager;
pub use registry::{AnalogRegistry, ButtonRegistry, Registry};
pub use snapshot::Snapshot;
