//! Active-item focus tracking with inactive dimming.
//!
//! When one item in a UI holds "active" focus, every other item should
//! render de-emphasised. This crate tracks the single active item,
//! broadcasts activations to registered listeners, and exposes the dimming
//! state as an observable channel.
//!
//! The tracker is toolkit-independent: the host reports focus transitions
//! with plain method calls, and focus stealing goes through the
//! [`FocusDriver`] trait.

mod driver;
mod tracker;

pub use dimmer_core::{ConfigError, DimmerConfig, ItemId, DEFAULT_INACTIVE_OPACITY};
pub use driver::FocusDriver;
pub use tracker::{ActiveItemTracker, DimState, FocusListener};
