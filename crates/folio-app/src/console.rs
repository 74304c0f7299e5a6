//! Line-oriented console host.
//!
//! `ConsoleViewport` only records what the controller asked for. `Screen`
//! turns those requests into terminal writes: a scroll request flushes every
//! transcript entry not yet printed, and a transcript that was cleared since
//! the last flush wipes the terminal first.

use std::io::{self, Write};

use folio_terminal::{HistoryLog, TranscriptEntry, Viewport};

use crate::render::{prompt_line, render_entry};

/// ANSI erase-display plus cursor-home.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[derive(Debug, Default)]
pub struct ConsoleViewport {
    focused: bool,
    scroll_requested: bool,
}

impl ConsoleViewport {
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Consume a pending scroll request.
    pub fn take_scroll(&mut self) -> bool {
        std::mem::take(&mut self.scroll_requested)
    }
}

impl Viewport for ConsoleViewport {
    fn focus_input(&mut self) {
        self.focused = true;
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_requested = true;
    }
}

pub struct Screen<W: Write> {
    out: W,
    printed: usize,
    /// History generation as of the last flush.
    generation: u64,
    /// The terminal already shows what the user typed after our prompt.
    echoes_typed: bool,
    prompt_shown: bool,
}

impl<W: Write> Screen<W> {
    /// `echoes_typed` should be true when input comes from an interactive
    /// terminal, so submitted lines are not printed twice.
    pub fn new(out: W, echoes_typed: bool) -> Self {
        Self {
            out,
            printed: 0,
            generation: 0,
            echoes_typed,
            prompt_shown: false,
        }
    }

    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")
    }

    /// Bring the terminal in line with `history`. Nothing is printed unless
    /// a scroll was requested. Either way a shown prompt is considered
    /// consumed.
    pub fn sync(&mut self, history: &HistoryLog, scroll: bool) -> io::Result<()> {
        if !scroll {
            self.prompt_shown = false;
            return Ok(());
        }
        let entries = history.snapshot();
        // Every append bumps the generation once, so any surplus means the
        // log was cleared, even if it was already empty.
        let mutations = history.generation().saturating_sub(self.generation);
        let cleared = entries.len() < self.printed
            || mutations > (entries.len() - self.printed) as u64;
        if cleared {
            write!(self.out, "{CLEAR_SCREEN}")?;
            self.printed = 0;
            self.prompt_shown = false;
        }

        let mut skip_echo = self.echoes_typed && self.prompt_shown;
        for entry in &entries[self.printed..] {
            if skip_echo && matches!(entry, TranscriptEntry::CommandEcho { .. }) {
                skip_echo = false;
                continue;
            }
            skip_echo = false;
            for line in render_entry(entry) {
                writeln!(self.out, "{line}")?;
            }
        }
        self.printed = entries.len();
        self.generation = history.generation();
        self.prompt_shown = false;
        self.out.flush()
    }

    /// Print the input prompt without a trailing newline.
    pub fn prompt(&mut self, directory: &str) -> io::Result<()> {
        write!(self.out, "{}", prompt_line(directory, ""))?;
        self.prompt_shown = true;
        self.out.flush()
    }

    #[cfg(test)]
    fn printed(&self) -> usize {
        self.printed
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}
