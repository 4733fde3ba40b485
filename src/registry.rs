//! Device registry and state cells.
//!
//! A [`Registry`] maps logical codes to the live handles bound to them and
//! pushes broadcast values into those handles. Synchronization is split in two
//! tiers:
//!
//! - **Membership** (the registration list) sits behind one `Mutex` per
//!   registry. `add`, `remove`, `update_by_code` and `update_all` all take it,
//!   so broadcasts are totally ordered and a handle that has finished
//!   deregistering is never written again.
//! - **Values** live in per-handle [`StateCell`]s backed by atomics. Polling a
//!   handle reads its cell directly and never touches the mutex, so the
//!   emulation thread cannot stall behind a UI-thread broadcast.
//!
//! Several registrations may share a code (one key driving several logical
//! controls). Every broadcast reaches all of them.
//!
//! ## Consistency
//! A poll observes the value of the latest completed store to its cell
//! (last write wins). Intermediate values between two polls may be skipped.
//! Analog pairs are packed into one 64-bit word, so `(x, y)` is never torn.

use crate::codes::LogicalCode;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Lock-free storage for one handle's last-known value.
///
/// `Default` must produce the zero value (released / centered).
pub trait StateCell: Default + Send + Sync + 'static {
    type Value: Copy + fmt::Debug + PartialEq + Send + Sync;

    fn load(&self) -> Self::Value;
    fn store(&self, value: Self::Value);
}

/// Pressed/released state of a digital handle.
#[derive(Debug, Default)]
pub struct DigitalCell(AtomicBool);

impl StateCell for DigitalCell {
    type Value = bool;

    #[inline]
    fn load(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    #[inline]
    fn store(&self, pressed: bool) {
        self.0.store(pressed, Ordering::Release);
    }
}

/// `(x, y)` state of an analog handle, stored as one word.
///
/// Low 32 bits hold `x`, high 32 bits hold `y` (IEEE-754 bit patterns). The
/// all-zero word decodes to `(0.0, 0.0)`.
#[derive(Debug, Default)]
pub struct AnalogCell(AtomicU64);

impl AnalogCell {
    #[inline]
    fn pack(x: f32, y: f32) -> u64 {
        u64::from(x.to_bits()) | (u64::from(y.to_bits()) << 32)
    }

    #[inline]
    fn unpack(word: u64) -> (f32, f32) {
        (f32::from_bits(word as u32), f32::from_bits((word >> 32) as u32))
    }
}

impl StateCell for AnalogCell {
    type Value = (f32, f32);

    #[inline]
    fn load(&self) -> (f32, f32) {
        Self::unpack(self.0.load(Ordering::Acquire))
    }

    #[inline]
    fn store(&self, (x, y): (f32, f32)) {
        self.0.store(Self::pack(x, y), Ordering::Release);
    }
}

/// Identifies one registration inside its registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegistrationId(u64);

struct Registration<C> {
    id: RegistrationId,
    code: LogicalCode,
    cell: Arc<C>,
}

struct Registrations<C: StateCell> {
    next_id: u64,
    entries: Vec<Registration<C>>,
    // Last value broadcast to each code that still has a registration.
    last: BTreeMap<LogicalCode, C::Value>,
}

/// Thread-safe map from logical code to the state cells bound to it.
pub struct Registry<C: StateCell> {
    inner: Mutex<Registrations<C>>,
}

/// Registry of digital handles.
pub type ButtonRegistry = Registry<DigitalCell>;
/// Registry of analog handles.
pub type AnalogRegistry = Registry<AnalogCell>;

impl<C: StateCell> Registry<C> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Registrations {
                next_id: 0,
                entries: Vec::new(),
                last: BTreeMap::new(),
            }),
        }
    }

    // The list and the last-value map hold plain data with no cross-field
    // invariant a panic could break, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Registrations<C>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts a registration. Duplicate codes are allowed.
    ///
    /// Only handles register themselves; see [`DeviceHandle::register`](crate::handle::DeviceHandle::register).
    pub(crate) fn add(&self, code: LogicalCode, cell: Arc<C>) -> RegistrationId {
        let mut inner = self.lock();
        let id = RegistrationId(inner.next_id);
        inner.next_id += 1;
        inner.entries.push(Registration { id, code, cell });
        log::trace!("registered {id:?} under code {code}");
        id
    }

    /// Removes a registration. Returns `false` if it was already gone.
    ///
    /// Called from the handle's `Drop` only.
    pub(crate) fn remove(&self, id: RegistrationId) -> bool {
        let mut inner = self.lock();
        let Some(pos) = inner.entries.iter().position(|r| r.id == id) else {
            return false;
        };
        let code = inner.entries.remove(pos).code;
        if !inner.entries.iter().any(|r| r.code == code) {
            inner.last.remove(&code);
        }
        log::trace!("removed {id:?}");
        true
    }

    /// Stores `value` into every cell registered under `code`.
    ///
    /// Returns how many cells were updated; `0` for unknown codes.
    pub fn update_by_code(&self, code: LogicalCode, value: C::Value) -> usize {
        let mut inner = self.lock();
        let mut hits = 0;
        for reg in inner.entries.iter().filter(|r| r.code == code) {
            reg.cell.store(value);
            hits += 1;
        }
        if hits > 0 {
            inner.last.insert(code, value);
        }
        hits
    }

    /// Stores `value` into every registered cell regardless of code.
    pub fn update_all(&self, value: C::Value) -> usize {
        let mut inner = self.lock();
        let Registrations { entries, last, .. } = &mut *inner;
        for reg in entries.iter() {
            reg.cell.store(value);
            last.insert(reg.code, value);
        }
        entries.len()
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    pub(crate) fn contains(&self, id: RegistrationId) -> bool {
        self.lock().entries.iter().any(|r| r.id == id)
    }

    /// Number of registrations bound to `code`.
    pub fn count_for(&self, code: LogicalCode) -> usize {
        self.lock().entries.iter().filter(|r| r.code == code).count()
    }

    /// `(code, value)` for every registration, in registration order.
    pub fn states(&self) -> Vec<(LogicalCode, C::Value)> {
        self.lock()
            .entries
            .iter()
            .map(|r| (r.code, r.cell.load()))
            .collect()
    }

    /// Last value broadcast to each bound code, ordered by code.
    ///
    /// Codes bound but never broadcast to report the zero value. A handle
    /// registered after the broadcast does not change what its code reports.
    pub fn code_states(&self) -> Vec<(LogicalCode, C::Value)> {
        let inner = self.lock();
        let zero = C::default().load();
        let mut codes: Vec<_> = inner.entries.iter().map(|r| r.code).collect();
        codes.sort_unstable();
        codes.dedup();
        codes
            .into_iter()
            .map(|code| (code, inner.last.get(&code).copied().unwrap_or(zero)))
            .collect()
    }
}

impl<C: StateCell> Default for Registry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: StateCell> fmt::Debug for Registry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("registrations", &self.len())
            .finish()
    }
}
