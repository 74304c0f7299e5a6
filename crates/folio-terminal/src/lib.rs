//! Command interpreter and session state for the folio terminal.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name. The `Shell` trims and
//! tokenizes input lines, resolves the command name, runs the executor, and
//! records the result in an append-only transcript. The `Controller` sits in
//! front of the shell and turns host input events into submissions plus the
//! focus/scroll side effects the host must honor.

pub mod clock;
mod commands;
mod controller;
mod history;
mod interpreter;
pub mod profile;
mod renderable;
mod session;
mod shell;
#[cfg(test)]
pub(crate) mod test_utils;

/// Wall-clock source consulted by `date`.
pub use clock::{Clock, SystemClock};
/// Register the profile command set into a registry.
pub use commands::{SECTIONS, register_builtins};
/// Event-driven front end with the focus/scroll contract.
pub use controller::{Controller, InputResult, Viewport};
/// Append-only transcript.
pub use history::{HistoryLog, TranscriptEntry};
/// A single executable command trait and its collaborators.
pub use interpreter::{Command, CommandContext, CommandOutput, CommandRegistry, ShellError};
/// Biographical content served by the built-in commands.
pub use profile::Profile;
/// Content description produced by commands.
pub use renderable::Renderable;
/// Prompt label and input buffer.
pub use session::SessionState;
/// Dispatcher owning registry, history, and session state.
pub use shell::{Shell, SubmitOutcome};
