//! Append-only transcript of a session.

use crate::renderable::Renderable;

/// One visible transcript row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEntry {
    /// The submitted line, echoed after the prompt.
    CommandEcho {
        /// Prompt label at submission time.
        directory: String,
        /// The line as typed, trimmed.
        raw_text: String,
    },
    /// Content produced for the preceding echo (or the welcome card).
    Output { content: Renderable },
}

impl TranscriptEntry {
    pub fn is_echo(&self) -> bool {
        matches!(self, TranscriptEntry::CommandEcho { .. })
    }

    /// Output content, if this is an output row.
    pub fn content(&self) -> Option<&Renderable> {
        match self {
            TranscriptEntry::Output { content } => Some(content),
            TranscriptEntry::CommandEcho { .. } => None,
        }
    }
}

/// Ordered transcript, oldest first.
///
/// Entries are never edited once appended; the only other mutation is
/// dropping everything at once. Every mutation bumps `generation`, which
/// lets observers notice changes without diffing.
#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: Vec<TranscriptEntry>,
    generation: u64,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
        self.generation += 1;
    }

    /// Discard all entries. Counts as a mutation even when already empty.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.generation += 1;
    }

    /// Current entries, oldest first.
    pub fn snapshot(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of mutations applied so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
