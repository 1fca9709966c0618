//! Host focus integration.

use dimmer_core::ItemId;

/// Capability to hand host-toolkit focus to an arbitrary item.
///
/// Implemented by the host integration layer. The tracker calls it when
/// focus must be stolen onto a placeholder item so that no real item stays
/// active. Keeping this behind a trait keeps the tracker independent of any
/// specific toolkit's focus mechanics and mockable for testing.
#[cfg_attr(test, mockall::automock)]
pub trait FocusDriver: Send + Sync {
    /// Ask the host toolkit to give active focus to `item`.
    fn request_focus(&self, item: &ItemId);
}
