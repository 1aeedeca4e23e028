//! Activity log: a bounded, timestamped list of status lines
//!
//! The log keeps its own queue of entries and mirrors every change to a
//! [`LogView`], which in the browser is the `<ul>` under the editor.

use std::collections::VecDeque;

/// Default number of entries kept on screen
pub const DEFAULT_LOG_CAPACITY: usize = 16;

/// Source of display timestamps
pub trait Clock {
    /// Current time, already formatted for display
    fn now(&self) -> String;
}

/// Something that renders log lines
pub trait LogView {
    /// Append a rendered line at the end of the view; false if nothing was added
    fn append(&mut self, text: &str) -> bool;

    /// Remove the first (oldest) line from the view
    fn remove_oldest(&mut self);
}

/// A view that renders nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl LogView for NullView {
    fn append(&mut self, _text: &str) -> bool {
        true
    }

    fn remove_oldest(&mut self) {}
}

/// A single log line with the time it was added
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub line: String,
    pub timestamp: String,
}

impl LogEntry {
    pub fn new(line: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Text as shown in the list: `"<line> [<timestamp>]"`
    pub fn render(&self) -> String {
        format!("{} [{}]", self.line, self.timestamp)
    }
}

/// Bounded activity log
pub struct ActivityLog<V: LogView, C: Clock> {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    view: V,
    clock: C,
}

impl<V: LogView, C: Clock> ActivityLog<V, C> {
    /// Create a log holding at most `capacity` entries (at least one)
    pub fn new(capacity: usize, view: V, clock: C) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
            view,
            clock,
        }
    }

    /// Append a line stamped with the current time, evicting the oldest
    /// entry once the capacity is exceeded.
    ///
    /// Entries the view fails to render are dropped so queue and view stay
    /// index-aligned.
    pub fn add(&mut self, line: &str) {
        let entry = LogEntry::new(line, self.clock.now());
        if !self.view.append(&entry.render()) {
            log::warn!("log line not rendered: {}", entry.line);
            return;
        }
        self.entries.push_back(entry);

        if self.entries.len() > self.capacity {
            self.entries.pop_front();
            self.view.remove_oldest();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries, oldest first
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Rendered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(LogEntry::render).collect()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;

    /// Clock returning an increasing tick count
    #[derive(Default)]
    pub struct TickClock {
        tick: Cell<u64>,
    }

    impl Clock for TickClock {
        fn now(&self) -> String {
            let tick = self.tick.get();
            self.tick.set(tick + 1);
            format!("t{}", tick)
        }
    }

    /// View recording what would be on screen
    #[derive(Default)]
    pub struct RecordingView {
        pub items: Vec<String>,
        pub removals: usize,
        /// Reject appends of lines containing this text
        pub reject: Option<String>,
    }

    impl LogView for RecordingView {
        fn append(&mut self, text: &str) -> bool {
            if let Some(reject) = &self.reject {
                if text.contains(reject.as_str()) {
                    return false;
                }
            }
            self.items.push(text.to_string());
            true
        }

        fn remove_oldest(&mut self) {
            if !self.items.is_empty() {
                self.items.remove(0);
            }
            self.removals += 1;
        }
    }

    fn new_log() -> ActivityLog<RecordingView, TickClock> {
        ActivityLog::new(DEFAULT_LOG_CAPACITY, RecordingView::default(), TickClock::default())
    }

    #[test]
    fn test_render_format() {
        let entry = LogEntry::new("保存しました", "Sat Oct 17 2026");
        assert_eq!(entry.render(), "保存しました [Sat Oct 17 2026]");
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut log = new_log();
        log.add("first");
        log.add("second");

        assert_eq!(log.lines(), vec!["first [t0]", "second [t1]"]);
        assert_eq!(log.view().items, log.lines());
    }

    #[test]
    fn test_capacity_never_exceeded() {
        let mut log = new_log();
        for i in 0..100 {
            log.add(&format!("line {}", i));
            assert!(log.len() <= DEFAULT_LOG_CAPACITY);
            assert!(log.view().items.len() <= DEFAULT_LOG_CAPACITY);
        }
        assert_eq!(log.len(), DEFAULT_LOG_CAPACITY);
    }

    #[test]
    fn test_survivors_are_most_recent() {
        let mut log = new_log();
        for i in 0..40 {
            log.add(&format!("line {}", i));
        }

        let survivors: Vec<&str> = log.entries().map(|e| e.line.as_str()).collect();
        let expected: Vec<String> = (24..40).map(|i| format!("line {}", i)).collect();
        assert_eq!(survivors, expected);
        assert_eq!(log.view().items, log.lines());
        assert_eq!(log.view().removals, 24);
    }

    #[test]
    fn test_no_eviction_at_capacity() {
        let mut log = new_log();
        for i in 0..DEFAULT_LOG_CAPACITY {
            log.add(&format!("line {}", i));
        }
        assert_eq!(log.len(), DEFAULT_LOG_CAPACITY);
        assert_eq!(log.view().removals, 0);
        assert_eq!(log.entries().next().map(|e| e.line.as_str()), Some("line 0"));
    }

    #[test]
    fn test_unrendered_lines_not_queued() {
        let view = RecordingView {
            reject: Some("broken".to_string()),
            ..RecordingView::default()
        };
        let mut log = ActivityLog::new(2, view, TickClock::default());

        log.add("a");
        log.add("broken");
        log.add("b");
        assert_eq!(log.len(), 2);
        assert_eq!(log.view().removals, 0);

        log.add("c");
        assert_eq!(log.lines(), vec!["b [t2]", "c [t3]"]);
        assert_eq!(log.view().items, log.lines());
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let mut log = ActivityLog::new(0, NullView, TickClock::default());
        log.add("a");
        log.add("b");
        assert_eq!(log.capacity(), 1);
        assert_eq!(log.last().map(|e| e.line.as_str()), Some("b"));
    }
}
