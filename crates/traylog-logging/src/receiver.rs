//! Global receiver registration for runtime log events

use crate::simple::PrintfLogger;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use traylog_core::UnitLogger;

/// Global receiver slot
static RECEIVER_SLOT: OnceCell<ReceiverSlot> = OnceCell::new();

struct Active {
    id: u64,
    receiver: Arc<dyn UnitLogger>,
}

/// Holds the single receiver that runtime log events are delivered to
///
/// The slot lock is only held long enough to clone the receiver handle;
/// it is never held while the receiver runs.
pub struct ReceiverSlot {
    active: RwLock<Option<Active>>,
    next_id: AtomicU64,
    fallback: OnceCell<Arc<dyn UnitLogger>>,
}

impl ReceiverSlot {
    /// Create an empty slot
    pub fn new() -> Self {
        Self {
            active: RwLock::new(None),
            next_id: AtomicU64::new(1),
            fallback: OnceCell::new(),
        }
    }

    /// Get the global slot instance
    pub fn global() -> &'static ReceiverSlot {
        RECEIVER_SLOT.get_or_init(ReceiverSlot::new)
    }

    /// Make `receiver` the active receiver
    ///
    /// The returned registration remembers the receiver it displaced and
    /// puts it back when revoked.
    pub fn install(&self, receiver: Arc<dyn UnitLogger>) -> ReceiverRegistration<'_> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let previous = self.active.write().replace(Active { id, receiver });
        tracing::debug!(registration = id, "installed log receiver");
        ReceiverRegistration {
            slot: self,
            id,
            previous,
        }
    }

    /// The active receiver, if one is installed
    pub fn current(&self) -> Option<Arc<dyn UnitLogger>> {
        self.active.read().as_ref().map(|a| a.receiver.clone())
    }

    /// The active receiver, or a stdout printf logger when none is installed
    pub fn receiver(&self) -> Arc<dyn UnitLogger> {
        match self.current() {
            Some(receiver) => receiver,
            None => self
                .fallback
                .get_or_init(|| Arc::new(PrintfLogger::stdout()))
                .clone(),
        }
    }

    /// Whether a receiver has been installed
    pub fn is_installed(&self) -> bool {
        self.active.read().is_some()
    }

    fn revoke(&self, id: u64, previous: Option<Active>) -> bool {
        let mut active = self.active.write();
        let is_current = active.as_ref().is_some_and(|current| current.id == id);
        if is_current {
            *active = previous;
        }
        is_current
    }
}

impl Default for ReceiverSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to one installation of a receiver
///
/// Dropping the handle leaves the receiver installed; call
/// [`revoke`](Self::revoke) to take it out again.
pub struct ReceiverRegistration<'a> {
    slot: &'a ReceiverSlot,
    id: u64,
    previous: Option<Active>,
}

impl ReceiverRegistration<'_> {
    /// Identifier of this registration
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Check whether this registration's receiver is the active one
    pub fn is_active(&self) -> bool {
        self.slot
            .active
            .read()
            .as_ref()
            .is_some_and(|a| a.id == self.id)
    }

    /// Restore the displaced receiver
    ///
    /// Returns `false`, changing nothing, if another receiver has been
    /// installed since.
    pub fn revoke(self) -> bool {
        let revoked = self.slot.revoke(self.id, self.previous);
        if revoked {
            tracing::debug!(registration = self.id, "revoked log receiver");
        }
        revoked
    }
}
