//! Device handles.
//!
//! A [`DeviceHandle`] is what the emulation core holds for each bound control.
//! It keeps the registry alive through an `Arc`, so a handle may outlive the
//! factory that created it. Dropping the handle deregisters it synchronously
//! under the registry lock; once `drop` returns, no broadcast can reach it.

use crate::codes::LogicalCode;
use crate::device::{AnalogDevice, ButtonDevice};
use crate::registry::{AnalogCell, DigitalCell, Registry, RegistrationId, StateCell};
use std::fmt;
use std::sync::Arc;

/// A live, pollable binding to one logical code.
pub struct DeviceHandle<C: StateCell> {
    registry: Arc<Registry<C>>,
    cell: Arc<C>,
    id: RegistrationId,
    code: LogicalCode,
}

/// Digital handle produced by [`ButtonFactory`](crate::factory::ButtonFactory).
pub type ButtonHandle = DeviceHandle<DigitalCell>;
/// Analog handle produced by [`AnalogFactory`](crate::factory::AnalogFactory).
pub type AnalogHandle = DeviceHandle<AnalogCell>;

impl<C: StateCell> DeviceHandle<C> {
    /// Creates a zeroed handle and registers it under `code`.
    pub fn register(registry: &Arc<Registry<C>>, code: LogicalCode) -> Self {
        let cell = Arc::new(C::default());
        let id = registry.add(code, Arc::clone(&cell));
        Self {
            registry: Arc::clone(registry),
            cell,
            id,
            code,
        }
    }

    /// Last broadcast value. Never blocks.
    #[inline]
    pub fn poll(&self) -> C::Value {
        self.cell.load()
    }

    pub fn code(&self) -> LogicalCode {
        self.code
    }

    pub fn id(&self) -> RegistrationId {
        self.id
    }
}

impl<C: StateCell> Drop for DeviceHandle<C> {
    fn drop(&mut self) {
        self.registry.remove(self.id);
    }
}

impl<C: StateCell> fmt::Debug for DeviceHandle<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceHandle")
            .field("id", &self.id)
            .field("code", &self.code)
            .field("state", &self.poll())
            .finish()
    }
}

impl ButtonDevice for ButtonHandle {
    fn status(&self) -> bool {
        self.poll()
    }
}

impl AnalogDevice for AnalogHandle {
    fn status(&self) -> (f32, f32) {
        self.poll()
    }
}
