//! folio console entry point.
//!
//! Runs the portfolio shell against stdin/stdout. Each line read is one
//! submission. `:reset` clears the transcript (the title-bar control) and
//! `:quit` or end of input ends the session.
//! Pass a config path as the first argument or via `FOLIO_CONFIG`.

mod console;
mod input;
mod render;

use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;

use console::{ConsoleViewport, Screen};
use folio_terminal::{Controller, InputResult, Profile, SessionState, Shell};
use folio_types::config::{CONFIG_ENV_VAR, FolioConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = config_path(std::env::args().nth(1), std::env::var(CONFIG_ENV_VAR).ok());
    let config = FolioConfig::resolve(path.as_deref())?;

    let profile = match config.profile_path.as_deref() {
        Some(path) => Profile::load(path)?,
        None => Profile::builtin()?,
    };
    let shell = Shell::with_builtins(
        profile,
        SessionState::new(config.directory_label.clone()),
    );
    log::info!(
        "Starting folio for {} ({}, {} commands)",
        shell.profile().name,
        config.title(),
        shell.registry().len()
    );
    let mut controller = Controller::new(shell, config.welcome_shortcuts.clone());
    controller.attach(ConsoleViewport::default());

    let interactive = io::stdin().is_terminal();
    let mut screen = Screen::new(io::stdout().lock(), interactive);
    screen.write_line(&config.title())?;
    screen.write_line("")?;

    controller.mount();
    sync(&mut controller, &mut screen, interactive)?;

    let stdin = io::stdin();
    'outer: for line in stdin.lock().lines() {
        let line = line?;
        for event in input::events_for_line(&line) {
            if controller.handle_event(&event) == InputResult::Quit {
                break 'outer;
            }
        }
        sync(&mut controller, &mut screen, interactive)?;
    }

    log::info!(
        "Session ended with {} transcript entries",
        controller.shell().history().len()
    );
    Ok(())
}

/// Pick the config file: CLI argument first, then the `FOLIO_CONFIG`
/// value. Empty values count as unset.
fn config_path(arg: Option<String>, env: Option<String>) -> Option<PathBuf> {
    arg.filter(|a| !a.is_empty())
        .or_else(|| env.filter(|e| !e.is_empty()))
        .map(PathBuf::from)
}

/// Flush pending viewport requests to the terminal, then prompt if the
/// input field holds focus.
fn sync<W: io::Write>(
    controller: &mut Controller<ConsoleViewport>,
    screen: &mut Screen<W>,
    interactive: bool,
) -> io::Result<()> {
    let (scroll, focused) = match controller.viewport_mut() {
        Some(vp) => (vp.take_scroll(), vp.is_focused()),
        None => (false, false),
    };
    screen.sync(controller.shell().history(), scroll)?;
    if focused && interactive {
        screen.prompt(controller.shell().state().directory())?;
    }
    Ok(())
}
