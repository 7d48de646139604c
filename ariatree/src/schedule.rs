//! Deferred structural work.
//!
//! Expand, collapse and native disclosure toggles don't re-project the
//! tree immediately; they queue work that the host drains on its next idle
//! turn. Repeated requests coalesce.

use ariadom::ElementId;

/// A unit of deferred work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Close the groups nested under the item's group if it ended up closed.
    CloseSubfolders(ElementId),
    /// Rebuild the visible set.
    Rescan,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    close: Vec<ElementId>,
    rescan: bool,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, task: Task) {
        match task {
            Task::CloseSubfolders(item) => {
                if !self.close.contains(&item) {
                    self.close.push(item);
                }
            }
            Task::Rescan => self.rescan = true,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.close.is_empty() && !self.rescan
    }

    /// Take everything queued: close requests in arrival order, then a
    /// single rescan. Closing always implies a rescan.
    pub fn drain(&mut self) -> Vec<Task> {
        let mut tasks: Vec<Task> = self.close.drain(..).map(Task::CloseSubfolders).collect();
        if self.rescan || !tasks.is_empty() {
            tasks.push(Task::Rescan);
        }
        self.rescan = false;
        tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rescan_requests_coalesce() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Task::Rescan);
        scheduler.schedule(Task::Rescan);
        assert_eq!(scheduler.drain(), vec![Task::Rescan]);
        assert!(scheduler.is_idle());
        assert!(scheduler.drain().is_empty());
    }
}
