//! Pollable input device capabilities.
//!
//! The emulation core only ever sees these traits. It asks a [`Factory`] for a
//! device once, at setup time, and then polls `status()` once per emulated
//! frame. Implementations must answer without blocking.

use crate::binding::BindingDescriptor;

/// A digital control: pressed or released.
pub trait ButtonDevice: Send + Sync {
    /// Last broadcast state; `false` before any broadcast.
    fn status(&self) -> bool;
}

/// An analog stick: `(x, y)`, conventionally in `[-1.0, 1.0]`.
pub trait AnalogDevice: Send + Sync {
    /// Last broadcast position; `(0.0, 0.0)` before any broadcast.
    fn status(&self) -> (f32, f32);
}

/// Builds devices of kind `D` from binding descriptors.
///
/// `D` is a trait object type (`dyn ButtonDevice` / `dyn AnalogDevice`), so a
/// directory can hold factories from different engines side by side.
pub trait Factory<D: ?Sized>: Send + Sync {
    fn create(&self, params: &BindingDescriptor) -> Box<D>;
}
