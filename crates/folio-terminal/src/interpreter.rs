//! Command trait, registry, and tokenizing.

use std::collections::HashMap;

use crate::clock::Clock;
use crate::profile::Profile;
use crate::renderable::Renderable;

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Content to append to the transcript.
    Render(Renderable),
    /// Command produced no visible output.
    None,
}

impl From<Renderable> for CommandOutput {
    fn from(r: Renderable) -> Self {
        CommandOutput::Render(r)
    }
}

/// Recoverable shell errors. Rendered inline, never propagated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShellError {
    #[error("Command not found: {name}. Type 'help' for available commands.")]
    UnknownCommand { name: String },
}

/// Everything an executor may read, plus the one mutation it may request.
///
/// Executors never touch the transcript directly; `clear` asks for it
/// through `request_clear` and the shell applies it after the executor
/// returns.
pub struct CommandContext<'a> {
    /// The registry the command was resolved from (read-only).
    pub registry: &'a CommandRegistry,
    /// Biographical content.
    pub profile: &'a Profile,
    /// Wall-clock source.
    pub clock: &'a dyn Clock,
    clear_requested: bool,
}

impl<'a> CommandContext<'a> {
    pub fn new(registry: &'a CommandRegistry, profile: &'a Profile, clock: &'a dyn Clock) -> Self {
        Self {
            registry,
            profile,
            clock,
            clear_requested: false,
        }
    }

    /// Ask the shell to discard the whole transcript.
    pub fn request_clear(&mut self) {
        self.clear_requested = true;
    }

    /// Whether `request_clear` was called.
    pub fn clear_requested(&self) -> bool {
        self.clear_requested
    }
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types). Lowercase.
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Execute the command with the given argument tokens.
    fn execute(&self, args: &[&str], ctx: &mut CommandContext<'_>) -> CommandOutput;
}

/// Ordered registry of available commands.
///
/// Iteration follows registration order, which is the order `help` lists.
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same
    /// name, keeping its position.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let key = cmd.name().to_lowercase();
        match self.index.get(&key) {
            Some(&slot) => {
                log::debug!("Replacing command '{key}'");
                self.commands[slot] = cmd;
            },
            None => {
                self.index.insert(key, self.commands.len());
                self.commands.push(cmd);
            },
        }
    }

    /// Resolve a command name. Matching is case-insensitive and exact.
    pub fn lookup(&self, name: &str) -> Option<&dyn Command> {
        self.index
            .get(&name.to_lowercase())
            .map(|&slot| self.commands[slot].as_ref())
    }

    /// Whether a command with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&name.to_lowercase())
    }

    /// Commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.iter().map(|c| c.as_ref())
    }

    /// (name, description) pairs in registration order.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        self.iter().map(|c| (c.name(), c.description())).collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a trimmed line into (lowercased command name, argument tokens).
///
/// Returns `None` for blank input.
pub(crate) fn tokenize(line: &str) -> Option<(String, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let name = tokens.next()?.to_lowercase();
    Some((name, tokens.collect()))
}
