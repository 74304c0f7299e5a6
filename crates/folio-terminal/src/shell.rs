//! Line dispatch: trim, tokenize, resolve, execute, record.

use crate::clock::{Clock, SystemClock};
use crate::commands::register_builtins;
use crate::history::{HistoryLog, TranscriptEntry};
use crate::interpreter::{CommandContext, CommandOutput, CommandRegistry, ShellError, tokenize};
use crate::profile::Profile;
use crate::renderable::Renderable;
use crate::session::SessionState;

/// What a submission did to the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank line: nothing recorded.
    Empty,
    /// A registered command ran and its echo (plus any output) was recorded.
    Executed { command: String },
    /// The command asked for a clear; the transcript is now empty.
    Cleared,
    /// No such command; an echo and an error notice were recorded.
    Unknown { name: String },
}

/// A terminal session: command registry, transcript, and prompt state.
///
/// The registry is fixed once the shell is built. The transcript is only
/// written through `submit`, `seed_output`, and `clear_history`.
pub struct Shell {
    registry: CommandRegistry,
    profile: Profile,
    clock: Box<dyn Clock>,
    history: HistoryLog,
    state: SessionState,
}

impl Shell {
    pub fn new(
        registry: CommandRegistry,
        profile: Profile,
        clock: Box<dyn Clock>,
        state: SessionState,
    ) -> Self {
        Self {
            registry,
            profile,
            clock,
            history: HistoryLog::new(),
            state,
        }
    }

    /// A shell with the built-in command set and the system clock.
    pub fn with_builtins(profile: Profile, state: SessionState) -> Self {
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);
        Self::new(registry, profile, Box::new(SystemClock), state)
    }

    /// Process one submitted line. Always leaves the input buffer empty.
    pub fn submit(&mut self, raw_line: &str) -> SubmitOutcome {
        let outcome = self.dispatch(raw_line);
        self.state.input.clear();
        outcome
    }

    fn dispatch(&mut self, raw_line: &str) -> SubmitOutcome {
        let trimmed = raw_line.trim();
        let Some((name, args)) = tokenize(trimmed) else {
            return SubmitOutcome::Empty;
        };
        let echo = TranscriptEntry::CommandEcho {
            directory: self.state.directory().to_string(),
            raw_text: trimmed.to_string(),
        };

        let Some(cmd) = self.registry.lookup(&name) else {
            log::debug!("Unknown command: {name}");
            self.history.append(echo);
            self.history.append(TranscriptEntry::Output {
                content: Renderable::Error(ShellError::UnknownCommand { name: name.clone() }),
            });
            return SubmitOutcome::Unknown { name };
        };

        log::debug!("Dispatching '{name}' with {} argument(s)", args.len());
        let mut ctx = CommandContext::new(&self.registry, &self.profile, self.clock.as_ref());
        let output = cmd.execute(&args, &mut ctx);

        // A clear replaces the whole submission: no echo, no output.
        if ctx.clear_requested() {
            log::debug!("Clearing {} transcript entries", self.history.len());
            self.history.clear();
            return SubmitOutcome::Cleared;
        }

        self.history.append(echo);
        if let CommandOutput::Render(content) = output {
            self.history.append(TranscriptEntry::Output { content });
        }
        SubmitOutcome::Executed { command: name }
    }

    /// Run a command's executor without touching the transcript.
    ///
    /// Returns `None` for unknown commands and for commands with no output.
    /// Clear requests are ignored.
    pub fn render_command(&self, name: &str) -> Option<Renderable> {
        let cmd = self.registry.lookup(name)?;
        let mut ctx = CommandContext::new(&self.registry, &self.profile, self.clock.as_ref());
        match cmd.execute(&[], &mut ctx) {
            CommandOutput::Render(r) => Some(r),
            CommandOutput::None => None,
        }
    }

    /// Append an output entry with no echo (session seeding).
    pub fn seed_output(&mut self, content: Renderable) {
        self.history.append(TranscriptEntry::Output { content });
    }

    /// Discard the transcript (the title-bar reset control).
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }
}
