use std::collections::VecDeque;

use roguelike_core::LOG_CAPACITY;

/// Bounded log of recent session events, most recent first.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    lines: VecDeque<String>,
}

impl EventLog {
    pub(crate) fn record(&mut self, line: String) {
        self.lines.push_front(line);
        self.lines.truncate(LOG_CAPACITY);
    }

    /// Iterator over the retained lines, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Number of retained lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Reports whether nothing has been logged yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
