//! Rooms domain: cancellable delayed callbacks for room lifecycle.

use std::time::Duration;

use bevy::prelude::*;

use crate::rooms::node::NodeId;

/// Handle returned when a callback is scheduled; used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Work that can be deferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Finish an exit by deactivating the room's content.
    Sleep(NodeId),
}

#[derive(Debug)]
struct ScheduledCallback {
    handle: TimerHandle,
    timer: Timer,
    action: DeferredAction,
}

/// Pending callbacks, advanced by whatever clock the owner ticks it with.
#[derive(Debug, Default)]
pub struct DeferredScheduler {
    next_handle: u64,
    pending: Vec<ScheduledCallback>,
}

impl DeferredScheduler {
    pub fn schedule(&mut self, delay: Duration, action: DeferredAction) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(ScheduledCallback {
            handle,
            timer: Timer::new(delay, TimerMode::Once),
            action,
        });
        handle
    }

    /// Cancels a pending callback. Cancelling one that already fired or was
    /// already cancelled does nothing and returns `false`.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|callback| callback.handle != handle);
        self.pending.len() != before
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Advances every timer and returns the callbacks that came due, in the
    /// order they were scheduled.
    pub fn tick(&mut self, delta: Duration) -> Vec<(TimerHandle, DeferredAction)> {
        let mut due = Vec::new();
        self.pending.retain_mut(|callback| {
            callback.timer.tick(delta);
            if callback.timer.remaining().is_zero() {
                due.push((callback.handle, callback.action));
                false
            } else {
                true
            }
        });
        due
    }
}
