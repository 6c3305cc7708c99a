use tracing::debug;

/// Number of lines kept for the lifetime of a session.
pub const HISTORY_CAPACITY: usize = 100;

/// In-memory log of the lines entered this session.
///
/// Append-only and bounded: once full, further lines are dropped and the
/// existing entries are left alone. Nothing is persisted.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Vec<u8>>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Records `line` verbatim, including empty lines. Returns `false` when
    /// the store is full and the line was dropped.
    pub fn record(&mut self, line: &[u8]) -> bool {
        if self.is_full() {
            debug!(capacity = self.capacity, "history full, dropping line");
            return false;
        }
        self.entries.push(line.to_vec());
        true
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries paired with their 1-based position, oldest first.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &[u8])> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (i + 1, entry.as_slice()))
    }
}
