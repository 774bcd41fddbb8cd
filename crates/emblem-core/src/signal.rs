//! Signal/slot system for Emblem.
//!
//! Signals are emitted by widgets when their state changes, and connected
//! slots (callbacks) are invoked in response. Unlike full GUI frameworks,
//! Emblem only supports direct invocation: slots run synchronously on the
//! emitting thread. Cross-thread delivery is the host's responsibility -
//! connect a slot that posts to your own event queue, or use
//! [`RedrawQueue`](crate::RedrawQueue) for the common redraw case.
//!
//! # Example
//!
//! ```
//! use emblem_core::Signal;
//!
//! let redraw_requested = Signal::<()>::new();
//!
//! let id = redraw_requested.connect(|()| {
//!     // schedule a frame
//! });
//!
//! redraw_requested.emit(());
//! redraw_requested.disconnect(id);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via
    /// [`Signal::disconnect`]. The ID remains valid until the connection is
    /// disconnected or the signal is dropped.
    pub struct ConnectionId;
}

type Slot<Args> = Box<dyn Fn(&Args) + Send + Sync + 'static>;

/// A type-safe signal that notifies connected slots when emitted.
///
/// `Signal` is cheap to construct and may be embedded directly in widget
/// structs as a public field, mirroring the "signals as fields" convention.
/// Slots are invoked in connection order.
pub struct Signal<Args: 'static> {
    slots: Arc<Mutex<SlotMap<ConnectionId, Slot<Args>>>>,
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            slots: Arc::new(Mutex::new(SlotMap::with_key())),
        }
    }

    /// Connect a slot to this signal.
    ///
    /// The slot is invoked synchronously on the emitting thread every time
    /// the signal is emitted. Returns an ID that can be passed to
    /// [`disconnect`](Self::disconnect).
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.slots.lock().insert(Box::new(slot))
    }

    /// Remove a connection by ID.
    ///
    /// Returns `true` if the connection existed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.slots.lock().remove(id).is_some()
    }

    /// Emit the signal, invoking every connected slot with `args`.
    pub fn emit(&self, args: Args) {
        tracing::trace!(target: crate::logging::targets::SIGNAL, "emit");
        // Snapshot under the lock is not possible without cloning boxed
        // closures, so slots must not connect/disconnect reentrantly.
        let slots = self.slots.lock();
        for (_, slot) in slots.iter() {
            slot(&args);
        }
    }

    /// Number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.slots.lock().len()
    }
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Clone for Signal<Args> {
    fn clone(&self) -> Self {
        Self {
            slots: Arc::clone(&self.slots),
        }
    }
}

impl<Args: 'static> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connection_count())
            .finish()
    }
}

static_assertions::assert_impl_all!(Signal<()>: Send, Sync);
