//! Cancellable deferred actions driven by the host clock.
//!
//! Hosts own one `DeferredScheduler`, advance it once per tick, and execute
//! whatever comes due. Every task has a `TaskId`, so the entity that scheduled
//! it can cancel it on teardown.

use ascent_core::constants::SCHEDULER_EPSILON;
use ascent_core::types::TaskId;

use crate::host::{ScheduledAction, Timer};

#[derive(Debug, Clone)]
struct ScheduledTask {
    id: TaskId,
    due_secs: f64,
    action: ScheduledAction,
}

/// One-shot timer queue.
#[derive(Debug, Default)]
pub struct DeferredScheduler {
    now_secs: f64,
    next_id: u64,
    tasks: Vec<ScheduledTask>,
}

impl DeferredScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scheduler clock in seconds.
    pub fn now(&self) -> f64 {
        self.now_secs
    }

    /// Advance the clock and return due actions, earliest first. Tasks due at
    /// the same time fire in the order they were scheduled.
    pub fn advance(&mut self, dt: f64) -> Vec<(TaskId, ScheduledAction)> {
        self.now_secs += dt;
        let now = self.now_secs + SCHEDULER_EPSILON;

        let mut due: Vec<ScheduledTask> = Vec::new();
        self.tasks.retain(|task| {
            if task.due_secs <= now {
                due.push(task.clone());
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due_secs.total_cmp(&b.due_secs).then(a.id.cmp(&b.id)));
        due.into_iter().map(|task| (task.id, task.action)).collect()
    }

    /// Drop every pending task.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn is_pending(&self, task: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == task)
    }

    /// Pending tasks with their remaining time, in schedule order.
    pub fn pending(&self) -> impl Iterator<Item = (TaskId, ScheduledAction, f64)> + '_ {
        self.tasks
            .iter()
            .map(|t| (t.id, t.action, (t.due_secs - self.now_secs).max(0.0)))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Timer for DeferredScheduler {
    fn schedule(&mut self, delay_secs: f64, action: ScheduledAction) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(ScheduledTask {
            id,
            due_secs: self.now_secs + delay_secs.max(0.0),
            action,
        });
        id
    }

    fn cancel(&mut self, task: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != task);
        self.tasks.len() != before
    }
}
