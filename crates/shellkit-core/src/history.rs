//! In-memory command history
//!
//! Lines are appended on submission, skipping a line identical to the one
//! right before it. The navigation cursor moves with Up/Down and snaps back
//! to one past the newest entry whenever a line is submitted.

/// Submitted lines plus a navigation cursor
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line
    ///
    /// Returns whether the line was appended. Blank lines and consecutive
    /// duplicates are not stored; the cursor is reset either way.
    pub fn record(&mut self, line: &str) -> bool {
        let appended = !line.trim().is_empty()
            && self.entries.last().map(String::as_str) != Some(line);
        if appended {
            self.entries.push(line.to_string());
        }
        self.cursor = self.entries.len();
        appended
    }

    /// Step back to the previous entry
    ///
    /// Stays on the oldest entry once reached.
    pub fn older(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        self.cursor = self.cursor.saturating_sub(1);
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Step forward to the next entry
    ///
    /// Past the newest entry the cursor parks at the end and `None` is
    /// returned, meaning the buffer should be emptied.
    pub fn newer(&mut self) -> Option<&str> {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            self.entries.get(self.cursor).map(String::as_str)
        } else {
            self.cursor = self.entries.len();
            None
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
