//! One-shot "next tick" scheduler.
//!
//! The host's per-tick event is the only deferred-execution primitive. Tasks
//! registered here fire on the next tick exactly once: [`TickScheduler::take_due`]
//! unsubscribes every task before handing them back for dispatch, so a tick
//! delivered twice cannot run a task twice.

/// Work deferred to the next host tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickTask {
    /// Restore the gift-taste record captured by the gift override.
    RevertGiftDialogue,
}

/// Pending one-shot tasks.
#[derive(Debug, Clone, Default)]
pub struct TickScheduler {
    pending: Vec<TickTask>,
}

impl TickScheduler {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` on the next tick. Scheduling an already-pending task is a
    /// no-op.
    pub fn schedule_once(&mut self, task: TickTask) {
        if !self.pending.contains(&task) {
            self.pending.push(task);
        }
    }

    /// Whether `task` will run on the next tick.
    #[must_use]
    pub fn is_scheduled(&self, task: TickTask) -> bool {
        self.pending.contains(&task)
    }

    /// Whether anything is pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Unsubscribe and return every pending task, in scheduling order.
    pub fn take_due(&mut self) -> Vec<TickTask> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_fires_once() {
        let mut scheduler = TickScheduler::new();
        scheduler.schedule_once(TickTask::RevertGiftDialogue);
        assert!(scheduler.is_scheduled(TickTask::RevertGiftDialogue));

        assert_eq!(scheduler.take_due(), vec![TickTask::RevertGiftDialogue]);
        assert!(scheduler.take_due().is_empty());
        assert!(scheduler.is_idle());
    }

    #[test]
    fn duplicate_schedule_is_collapsed() {
        let mut scheduler = TickScheduler::new();
        scheduler.schedule_once(TickTask::RevertGiftDialogue);
        scheduler.schedule_once(TickTask::RevertGiftDialogue);
        assert_eq!(scheduler.take_due().len(), 1);
    }
}
