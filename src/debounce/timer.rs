//! Timer handle owned by a single debouncer.

use tokio::task::JoinHandle;

/// The one pending timer of a debouncer, plus the generation it was scheduled for.
#[derive(Debug, Default)]
pub(crate) struct TimerSlot {
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl TimerSlot {
    /// Cancel the pending timer, if any. Returns whether one was pending.
    pub(crate) fn cancel(&mut self) -> bool {
        self.generation = self.generation.wrapping_add(1);
        match self.pending.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Cancel the pending timer and install the one built by `spawn`.
    ///
    /// `spawn` receives the generation the new timer must claim when it fires.
    pub(crate) fn reschedule(&mut self, spawn: impl FnOnce(u64) -> JoinHandle<()>) {
        self.cancel();
        self.pending = Some(spawn(self.generation));
    }

    /// Claim the right to fire for `generation`. Clears the slot on success.
    pub(crate) fn claim(&mut self, generation: u64) -> bool {
        if self.generation != generation {
            return false;
        }
        self.pending = None;
        true
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_superseded_generation_cannot_claim() {
        let mut slot = TimerSlot::default();
        let mut first = 0;
        slot.reschedule(|g| {
            first = g;
            tokio::spawn(async {})
        });
        let mut second = 0;
        slot.reschedule(|g| {
            second = g;
            tokio::spawn(async {})
        });

        assert_ne!(first, second);
        assert!(!slot.claim(first));
        assert!(slot.is_pending());
        assert!(slot.claim(second));
        assert!(!slot.is_pending());
    }

    #[tokio::test]
    async fn test_cancel_reports_pending() {
        let mut slot = TimerSlot::default();
        assert!(!slot.cancel());
        slot.reschedule(|_| tokio::spawn(async {}));
        assert!(slot.cancel());
        assert!(!slot.is_pending());
    }
}
