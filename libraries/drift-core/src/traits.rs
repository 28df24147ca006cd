/// Collaborator traits for Drift Player
use crate::error::Result;
use crate::types::Tier;
use std::time::Duration;

/// Read-only view of the current session's subscription tier
///
/// Consulted by feature-gated stores (favorites cap, quality settings).
pub trait SessionStore: Send + Sync {
    /// Current subscription tier
    fn tier(&self) -> Tier;

    /// Convenience check for premium status
    fn is_premium(&self) -> bool {
        self.tier().is_premium()
    }
}

/// Scheduler for local user notifications
///
/// Implemented by the host platform. Scheduling failures are logged and
/// otherwise ignored by callers; a missed notification never affects the
/// component that requested it.
pub trait NotificationScheduler: Send + Sync {
    /// Schedule a notification to fire after the given delay
    fn schedule_completion(&self, id: &str, after: Duration, message: &str) -> Result<()>;

    /// Cancel a previously scheduled notification, if still pending
    fn cancel_pending(&self, id: &str);
}

/// No-op notification scheduler for hosts without notification support
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotificationScheduler;

impl NotificationScheduler for NullNotificationScheduler {
    fn schedule_completion(&self, _id: &str, _after: Duration, _message: &str) -> Result<()> {
        Ok(())
    }

    fn cancel_pending(&self, _id: &str) {}
}
