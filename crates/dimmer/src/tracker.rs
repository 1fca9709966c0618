//! Active-item tracking with automatic change notifications.
//!
//! The key insight: mutation = notification. Every state transition also
//! publishes the new state, so consumers cannot observe a stale snapshot.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;

use dimmer_core::{DimmerConfig, ItemId};

use crate::driver::FocusDriver;

/// Callback invoked with the item that became active.
pub type FocusListener = Arc<dyn Fn(&ItemId) + Send + Sync>;

// =============================================================================
// DimState
// =============================================================================

/// Snapshot of the tracker state.
///
/// `dim_inactive` is true exactly while an active item is tracked; the two
/// fields are always updated together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DimState {
    /// Item currently holding active focus, if any.
    pub active_item: Option<ItemId>,

    /// Whether non-active items should render dimmed.
    pub dim_inactive: bool,
}

// =============================================================================
// ActiveItemTracker
// =============================================================================

/// Tracks which item holds active focus and broadcasts activations.
///
/// Consumers have two ways to observe the tracker:
/// - [`register_listener`](Self::register_listener) for activation
///   callbacks, fired in registration order whenever an item becomes active
///   or focus is force-reset onto a placeholder.
/// - [`subscribe`](Self::subscribe) for a watch channel that mirrors every
///   state change. Deactivations show up here but deliberately do not fire
///   listeners: dimming consumers react to "something became active" and
///   infer "nothing is active" from the state channel.
///
/// ## Thread Safety
///
/// Uses `parking_lot::RwLock` for the state (never poisons) and
/// `tokio::sync::watch` for broadcasts. Listeners are invoked after locks
/// are released, so a handler may re-enter the tracker.
pub struct ActiveItemTracker {
    state: RwLock<DimState>,
    listeners: RwLock<Vec<FocusListener>>,
    driver: Option<Arc<dyn FocusDriver>>,
    config: DimmerConfig,
    tx: watch::Sender<DimState>,
    rx: watch::Receiver<DimState>,
}

impl ActiveItemTracker {
    /// Create a tracker with the given configuration and no focus driver.
    pub fn new(config: DimmerConfig) -> Self {
        let (tx, rx) = watch::channel(DimState::default());
        Self {
            state: RwLock::new(DimState::default()),
            listeners: RwLock::new(Vec::new()),
            driver: None,
            config,
            tx,
            rx,
        }
    }

    /// Attach the host focus driver.
    pub fn with_driver(mut self, driver: Arc<dyn FocusDriver>) -> Self {
        self.driver = Some(driver);
        self
    }

    // =========================================================================
    // Mutation Methods (all broadcast automatically)
    // =========================================================================

    /// Record an item's focus transition.
    ///
    /// An activation always wins: `item` becomes the tracked active item,
    /// dimming turns on, and listeners are notified with `item` as payload.
    ///
    /// A deactivation is honoured only while dimming is on and `item` is the
    /// tracked active item. Anything else is a stale or duplicate notice
    /// from an item that never was active, and is ignored.
    pub fn report_item_activity(&self, item: &ItemId, is_active: bool) {
        if is_active {
            let snapshot = {
                let mut state = self.state.write();
                state.active_item = Some(item.clone());
                state.dim_inactive = true;
                state.clone()
            };
            tracing::debug!("Item '{}' active, dimming enabled", item);
            let _ = self.tx.send(snapshot);
            self.notify_listeners(item);
        } else {
            let cleared = {
                let mut state = self.state.write();
                if state.dim_inactive && state.active_item.as_ref() == Some(item) {
                    state.active_item = None;
                    state.dim_inactive = false;
                    Some(state.clone())
                } else {
                    None
                }
            };
            match cleared {
                Some(snapshot) => {
                    tracing::debug!("Item '{}' inactive, dimming disabled", item);
                    let _ = self.tx.send(snapshot);
                }
                None => {
                    tracing::debug!("Ignoring stale deactivation from '{}'", item);
                }
            }
        }
    }

    /// Register an activation listener.
    ///
    /// Listeners are appended and fired in registration order. There is no
    /// deduplication and no removal; listener lifecycle is the caller's
    /// responsibility.
    pub fn register_listener<F>(&self, handler: F)
    where
        F: Fn(&ItemId) + Send + Sync + 'static,
    {
        self.listeners.write().push(Arc::new(handler));
    }

    /// Steal focus onto a placeholder so that no real item is active.
    ///
    /// Asks the focus driver to move host focus onto `dummy`, clears the
    /// tracked item and the dimming flag together, and notifies listeners
    /// with `dummy` as payload. The placeholder never requests dimming
    /// itself.
    pub fn force_no_active(&self, dummy: &ItemId) {
        match &self.driver {
            Some(driver) => driver.request_focus(dummy),
            None => tracing::warn!("No focus driver attached, clearing state only"),
        }
        let snapshot = {
            let mut state = self.state.write();
            state.active_item = None;
            state.dim_inactive = false;
            state.clone()
        };
        tracing::debug!("Focus forced onto placeholder '{}'", dummy);
        let _ = self.tx.send(snapshot);
        self.notify_listeners(dummy);
    }

    // =========================================================================
    // Read Methods
    // =========================================================================

    /// Get a snapshot of the current state.
    pub fn snapshot(&self) -> DimState {
        self.state.read().clone()
    }

    /// Get the currently active item, if any.
    pub fn active_item(&self) -> Option<ItemId> {
        self.state.read().active_item.clone()
    }

    /// Whether non-active items should currently render dimmed.
    pub fn dim_inactive(&self) -> bool {
        self.state.read().dim_inactive
    }

    /// Check whether the given item is the tracked active item.
    pub fn is_active(&self, item: &ItemId) -> bool {
        self.state.read().active_item.as_ref() == Some(item)
    }

    /// Opacity the given item should render with right now.
    ///
    /// Returns the configured inactive opacity while dimming is on and
    /// `item` is not the active one, and full opacity otherwise.
    pub fn opacity_for(&self, item: &ItemId) -> f32 {
        let state = self.state.read();
        if state.dim_inactive && state.active_item.as_ref() != Some(item) {
            self.config.inactive_opacity
        } else {
            1.0
        }
    }

    // =========================================================================
    // Subscription
    // =========================================================================

    /// Subscribe to state changes.
    ///
    /// The receiver holds the current state immediately and sees all future
    /// changes, deactivations included. Clone the receiver for multiple
    /// subscribers.
    pub fn subscribe(&self) -> watch::Receiver<DimState> {
        self.rx.clone()
    }

    /// Force a broadcast of the current state.
    ///
    /// Useful after setup to ensure late subscribers have the initial state.
    pub fn broadcast(&self) {
        let _ = self.tx.send(self.snapshot());
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    /// Invoke all listeners in registration order.
    ///
    /// The list is cloned out of the lock first so a handler may re-enter
    /// the tracker, e.g. to register another listener.
    fn notify_listeners(&self, item: &ItemId) {
        let listeners: Vec<FocusListener> = self.listeners.read().clone();
        for listener in listeners {
            listener(item);
        }
    }
}

impl Default for ActiveItemTracker {
    fn default() -> Self {
        Self::new(DimmerConfig::default())
    }
}

// =============================================================================
// Tests
// =============================================================================
