use std::time::Duration;

/// Identifies one scheduled tick. Handles are never reused.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct TickHandle(u64);

#[derive(Debug, Clone, Copy)]
struct PendingTick {
    handle: TickHandle,
    remaining: Duration,
}

/// Cancellable one-shot tick timer driven by elapsed time.
///
/// At most one tick is pending. Scheduling replaces the pending tick, and a
/// cancelled or replaced handle can never fire.
#[derive(Debug, Clone, Default)]
pub struct TickTimer {
    next_id: u64,
    pending: Option<PendingTick>,
    overshoot: Duration,
}

impl TickTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a tick `after` from now, dropping any tick already pending.
    ///
    /// Time by which the previous tick fired late is taken off the delay.
    pub fn schedule(&mut self, after: Duration) -> TickHandle {
        let handle = TickHandle(self.next_id);
        self.next_id += 1;

        let remaining = after.saturating_sub(self.overshoot);
        self.overshoot = Duration::ZERO;
        self.pending = Some(PendingTick { handle, remaining });

        handle
    }

    /// Cancels the pending tick, returning its handle.
    pub fn cancel(&mut self) -> Option<TickHandle> {
        self.overshoot = Duration::ZERO;
        self.pending.take().map(|pending| pending.handle)
    }

    #[must_use]
    pub fn pending(&self) -> Option<TickHandle> {
        self.pending.map(|pending| pending.handle)
    }

    /// Consumes `handle` if it is the pending tick. Stale handles are rejected.
    pub fn claim(&mut self, handle: TickHandle) -> bool {
        if self.pending() != Some(handle) {
            return false;
        }

        self.pending = None;
        true
    }

    /// Lets `elapsed` pass. Returns the pending handle once its delay is used up.
    pub fn advance(&mut self, elapsed: Duration) -> Option<TickHandle> {
        let pending = self.pending.as_mut()?;

        if elapsed < pending.remaining {
            pending.remaining -= elapsed;
            return None;
        }

        self.overshoot = elapsed - pending.remaining;
        self.pending.take().map(|pending| pending.handle)
    }
}
