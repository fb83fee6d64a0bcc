//! One-shot timers and the frame request
//!
//! Everything that the browser would run through `setTimeout` or
//! `requestAnimationFrame` is queued here instead, so the game can cancel
//! pending work deterministically and tests can drive time by hand.

/// Deferred gameplay actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Bat returns to rest
    EndSwing,
    /// Throw the next pitch
    Pitch,
    /// End the game if it hasn't ended already
    ForceEnd,
}

/// Cancellation handle for a requested frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u32);

#[derive(Debug, Clone)]
struct Pending {
    due_ms: f64,
    task: Task,
}

/// Timer queue plus the single outstanding frame request
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    /// Kept in scheduling order
    pending: Vec<Pending>,
    frame: Option<FrameHandle>,
    next_id: u32,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Run `task` once `delay_ms` has elapsed after `now_ms`
    pub fn after(&mut self, now_ms: f64, delay_ms: f64, task: Task) {
        self.pending.push(Pending {
            due_ms: now_ms + delay_ms,
            task,
        });
    }

    /// Drop every pending task
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Remove and return the earliest task due at `now_ms`.
    /// Tasks due at the same time run in the order they were scheduled.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<Task> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= now_ms)
            .min_by(|(_, a), (_, b)| a.due_ms.total_cmp(&b.due_ms))
            .map(|(i, _)| i)?;
        Some(self.pending.remove(idx).task)
    }

    /// Due time of the next pending task
    pub fn next_due(&self) -> Option<f64> {
        self.pending.iter().map(|p| p.due_ms).min_by(f64::total_cmp)
    }

    pub fn is_scheduled(&self, task: Task) -> bool {
        self.pending.iter().any(|p| p.task == task)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Ask for another frame. Only one request is outstanding at a time.
    pub fn request_frame(&mut self) -> FrameHandle {
        if let Some(handle) = self.frame {
            return handle;
        }
        let handle = FrameHandle(self.next_id());
        self.frame = Some(handle);
        handle
    }

    pub fn cancel_frame(&mut self) {
        self.frame = None;
    }

    /// Consume the outstanding frame request, if any
    pub fn take_frame(&mut self) -> Option<FrameHandle> {
        self.frame.take()
    }

    pub fn frame_requested(&self) -> bool {
        self.frame.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tasks_fire_in_due_order() {
        let mut sched = Scheduler::new();
        sched.after(0.0, 1500.0, Task::Pitch);
        sched.after(0.0, 300.0, Task::EndSwing);
        sched.after(0.0, 2000.0, Task::ForceEnd);

        assert_eq!(sched.next_due(), Some(300.0));
        assert_eq!(sched.pop_due(299.0), None);
        assert_eq!(sched.pop_due(300.0), Some(Task::EndSwing));
        assert_eq!(sched.pop_due(5000.0), Some(Task::Pitch));
        assert_eq!(sched.pop_due(5000.0), Some(Task::ForceEnd));
        assert!(sched.is_empty());
    }

    #[test]
    fn test_ties_keep_scheduling_order() {
        let mut sched = Scheduler::new();
        sched.after(100.0, 400.0, Task::ForceEnd);
        sched.after(200.0, 300.0, Task::Pitch);
        assert_eq!(sched.pop_due(500.0), Some(Task::ForceEnd));
        assert_eq!(sched.pop_due(500.0), Some(Task::Pitch));
    }

    #[test]
    fn test_cancel_all() {
        let mut sched = Scheduler::new();
        sched.after(0.0, 10.0, Task::Pitch);
        sched.after(0.0, 20.0, Task::ForceEnd);
        assert_eq!(sched.len(), 2);

        sched.cancel_all();
        assert!(!sched.is_scheduled(Task::Pitch));
        assert_eq!(sched.pop_due(100.0), None);
    }

    #[test]
    fn test_single_frame_request() {
        let mut sched = Scheduler::new();
        let first = sched.request_frame();
        assert_eq!(sched.request_frame(), first);
        assert_eq!(sched.take_frame(), Some(first));
        assert_eq!(sched.take_frame(), None);

        sched.request_frame();
        sched.cancel_frame();
        assert!(!sched.frame_requested());
    }
}
