//! Focus timer orchestration

use crate::{
    error::{FocusError, Result},
    preset::FocusPreset,
    session::{FocusSession, SessionLog},
    timer::{FocusTimer, TimerState},
};
use chrono::Utc;
use drift_core::NotificationScheduler;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Ticks the completed timer stays visible before clearing (UI celebration)
const COMPLETION_GRACE_TICKS: u8 = 3;

/// Notification slot for the single active timer
const NOTIFICATION_ID: &str = "focus-completion";

/// Label recorded for sessions started without a preset
const CUSTOM_LABEL: &str = "Custom";

struct ActiveTimer {
    timer: FocusTimer,
    preset: Option<FocusPreset>,
    grace_ticks: u8,
}

impl ActiveTimer {
    fn label(&self) -> &str {
        self.preset.map_or(CUSTOM_LABEL, FocusPreset::label)
    }
}

/// Manages the single active focus timer and its session history
///
/// Time advances only through [`TimerManager::tick`], which the host drives
/// (once per second in production, see [`crate::ticker`]). The manager never
/// sleeps or reads the wall clock for countdown logic, so behavior is fully
/// deterministic under test.
pub struct TimerManager<N: NotificationScheduler> {
    active: Option<ActiveTimer>,
    log: SessionLog,
    notifier: N,
}

impl<N: NotificationScheduler> TimerManager<N> {
    /// Create a manager over the given session log and notifier
    pub fn new(log: SessionLog, notifier: N) -> Self {
        Self {
            active: None,
            log,
            notifier,
        }
    }

    /// Start a timer for an arbitrary duration
    ///
    /// Rejected with [`FocusError::AlreadyActive`] while a timer is running
    /// or paused; the active timer is never silently replaced. A completed
    /// timer still in its celebration window does not block a new start.
    pub fn start(&mut self, duration: Duration, preset: Option<FocusPreset>) -> Result<()> {
        match &self.active {
            Some(active) if active.timer.state != TimerState::Completed => {
                return Err(FocusError::AlreadyActive);
            }
            _ => {}
        }
        if duration.is_zero() {
            return Err(FocusError::InvalidDuration("duration must be positive".into()));
        }

        let mut timer = FocusTimer::new(duration);
        timer.state = TimerState::Running;
        timer.started_at = Some(Utc::now());

        let label = preset.map_or(CUSTOM_LABEL, FocusPreset::label);
        info!(duration_secs = duration.as_secs(), preset = label, "focus timer started");

        // Notification delivery is best effort.
        let message = format!("{label} complete");
        if let Err(e) = self
            .notifier
            .schedule_completion(NOTIFICATION_ID, duration, &message)
        {
            warn!(error = %e, "failed to schedule completion notification");
        }

        self.active = Some(ActiveTimer {
            timer,
            preset,
            grace_ticks: COMPLETION_GRACE_TICKS,
        });
        Ok(())
    }

    /// Start a preset timer
    pub fn start_preset(&mut self, preset: FocusPreset) -> Result<()> {
        self.start(preset.duration(), Some(preset))
    }

    /// Pause the running timer
    pub fn pause(&mut self) -> Result<()> {
        let active = self.active.as_mut().ok_or(FocusError::NotActive)?;
        if active.timer.state != TimerState::Running {
            return Err(FocusError::InvalidState {
                expected: "running",
                actual: active.timer.state.name(),
            });
        }
        active.timer.state = TimerState::Paused;
        active.timer.paused_at = Some(Utc::now());
        debug!(remaining_secs = active.timer.remaining.as_secs(), "focus timer paused");
        Ok(())
    }

    /// Resume the paused timer
    pub fn resume(&mut self) -> Result<()> {
        let active = self.active.as_mut().ok_or(FocusError::NotActive)?;
        if active.timer.state != TimerState::Paused {
            return Err(FocusError::InvalidState {
                expected: "paused",
                actual: active.timer.state.name(),
            });
        }
        active.timer.state = TimerState::Running;
        active.timer.paused_at = None;
        Ok(())
    }

    /// Stop the active timer, recording the session
    ///
    /// The recorded focus time is the elapsed portion of the countdown, or
    /// the full duration when `completed` is set. Cancels the pending
    /// completion notification.
    pub fn stop(&mut self, completed: bool) -> Result<()> {
        let active = self.active.take().ok_or(FocusError::NotActive)?;
        self.notifier.cancel_pending(NOTIFICATION_ID);

        let focus_time = if completed {
            active.timer.duration
        } else {
            active.timer.elapsed()
        };
        info!(focus_secs = focus_time.as_secs(), completed, "focus timer stopped");
        self.log
            .record(FocusSession::new(active.label(), focus_time, completed))?;
        Ok(())
    }

    /// Adjust the active timer by a signed number of seconds
    ///
    /// Duration and remaining move together; remaining never goes below
    /// zero and duration never drops below remaining.
    pub fn add_time(&mut self, delta_secs: i64) -> Result<()> {
        let active = self.active.as_mut().ok_or(FocusError::NotActive)?;
        if active.timer.state == TimerState::Completed {
            return Err(FocusError::InvalidState {
                expected: "running or paused",
                actual: active.timer.state.name(),
            });
        }

        let delta = Duration::from_secs(delta_secs.unsigned_abs());
        let timer = &mut active.timer;
        if delta_secs >= 0 {
            timer.remaining += delta;
            timer.duration += delta;
        } else {
            timer.remaining = timer.remaining.saturating_sub(delta);
            timer.duration = timer.duration.saturating_sub(delta).max(timer.remaining);
        }
        Ok(())
    }

    /// Advance the countdown by one second
    ///
    /// No-op unless the timer is running or in its post-completion grace
    /// window, so a tick arriving after pause or stop is harmless.
    pub fn tick(&mut self) {
        let Some(active) = self.active.as_mut() else {
            return;
        };

        match active.timer.state {
            TimerState::Running => {
                active.timer.remaining =
                    active.timer.remaining.saturating_sub(Duration::from_secs(1));
                if active.timer.remaining.is_zero() {
                    self.complete();
                }
            }
            TimerState::Completed => {
                active.grace_ticks = active.grace_ticks.saturating_sub(1);
                if active.grace_ticks == 0 {
                    self.active = None;
                }
            }
            TimerState::Idle | TimerState::Paused => {}
        }
    }

    fn complete(&mut self) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        active.timer.state = TimerState::Completed;
        info!(preset = active.label(), "focus timer completed");

        let session = FocusSession::new(active.label(), active.timer.duration, true);
        if let Err(e) = self.log.record(session) {
            warn!(error = %e, "failed to record completed focus session");
        }
    }

    /// The active timer, if any
    pub fn active_timer(&self) -> Option<&FocusTimer> {
        self.active.as_ref().map(|a| &a.timer)
    }

    /// Preset of the active timer
    pub fn active_preset(&self) -> Option<FocusPreset> {
        self.active.as_ref().and_then(|a| a.preset)
    }

    /// Whether a timer is running or paused
    pub fn is_active(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|a| matches!(a.timer.state, TimerState::Running | TimerState::Paused))
    }

    /// Session history
    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    /// Clear all session history
    pub fn clear_history(&mut self) -> Result<()> {
        self.log.clear()
    }
}
