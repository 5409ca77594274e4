/// Page size used when a request leaves `limit` at zero.
pub const DEFAULT_LIMIT: u32 = 100;

/// Range queries per window when a request leaves `concurrency` at zero.
pub const DEFAULT_CONCURRENCY: u32 = 1;

/// A task record. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub status: bool,
    pub description: String,
}

/// Input for creating a task
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewTask {
    pub status: bool,
    pub description: String,
}

/// One slice of the task table.
///
/// `total` is the row count snapshotted when the list or stream started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub tasks: Vec<Task>,
    pub total: u32,
    pub limit: u32,
    pub offset: u32,
}

/// Single-page list request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageRequest {
    pub limit: u32,
    pub offset: u32,
}

impl PageRequest {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }

    /// Limit with the default applied
    pub fn effective_limit(&self) -> u32 {
        if self.limit == 0 { DEFAULT_LIMIT } else { self.limit }
    }
}

/// Export stream parameters, normalized so `limit > 0` and `concurrency >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub limit: u32,
    pub offset: u32,
    pub concurrency: u32,
}

impl Window {
    /// Zero `limit` or `concurrency` select their defaults.
    pub fn new(limit: u32, offset: u32, concurrency: u32) -> Self {
        Self {
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
            offset,
            concurrency: if concurrency == 0 { DEFAULT_CONCURRENCY } else { concurrency },
        }
    }

    /// Cap the worker count per window.
    pub fn clamp_concurrency(mut self, max: Option<u32>) -> Self {
        if let Some(max) = max {
            self.concurrency = self.concurrency.min(max.max(1));
        }
        self
    }

    /// Offset increment between windows: `limit * concurrency`.
    pub fn step(&self) -> u64 {
        u64::from(self.limit) * u64::from(self.concurrency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_applies_defaults() {
        let window = Window::new(0, 5, 0);
        assert_eq!(window.limit, DEFAULT_LIMIT);
        assert_eq!(window.concurrency, DEFAULT_CONCURRENCY);
        assert_eq!(window.offset, 5);
    }

    #[test]
    fn test_window_step_does_not_overflow() {
        let window = Window::new(u32::MAX, 0, u32::MAX);
        assert_eq!(window.step(), u64::from(u32::MAX) * u64::from(u32::MAX));
    }

    #[test]
    fn test_clamp_concurrency() {
        let window = Window::new(10, 0, 64);
        assert_eq!(window.clamp_concurrency(None).concurrency, 64);
        assert_eq!(window.clamp_concurrency(Some(8)).concurrency, 8);
        assert_eq!(window.clamp_concurrency(Some(0)).concurrency, 1);
        assert_eq!(Window::new(10, 0, 2).clamp_concurrency(Some(8)).concurrency, 2);
    }

    #[test]
    fn test_page_request_default_limit() {
        assert_eq!(PageRequest::new(0, 0).effective_limit(), DEFAULT_LIMIT);
        assert_eq!(PageRequest::new(25, 0).effective_limit(), 25);
    }
}
