use std::time::{Duration, Instant};

/// Work the host runs once after the current import has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeferredTask {
    /// Re-validate every linked geometry library.
    ReloadLibraries,
}

#[derive(Debug, Clone)]
pub(crate) struct ScheduledTask {
    pub task: DeferredTask,
    pub due: Instant,
}

impl ScheduledTask {
    pub fn after(task: DeferredTask, delay: Duration) -> Self {
        Self {
            task,
            due: Instant::now() + delay,
        }
    }
}
