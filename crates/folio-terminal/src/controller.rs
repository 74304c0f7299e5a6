//! Event-driven front end for a `Shell`.
//!
//! The controller owns the input buffer edits, the one-time welcome seeding,
//! and the side-effect contract with the host: move focus to the input
//! field, and scroll the transcript to the bottom after it changes. Both are
//! fire-and-forget; with no viewport attached they are dropped.

use folio_types::input::InputEvent;

use crate::commands::welcome_card;
use crate::renderable::Renderable;
use crate::shell::Shell;

/// Command whose output opens every session.
pub const SUMMARY_COMMAND: &str = "summary";

/// Host-side UI affordances the controller may request.
pub trait Viewport {
    /// Move keyboard focus to the input field. Must be idempotent.
    fn focus_input(&mut self);

    /// Scroll the transcript so the newest entry is visible.
    fn scroll_to_bottom(&mut self);
}

/// Result of handling a single input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

pub struct Controller<V: Viewport> {
    shell: Shell,
    viewport: Option<V>,
    shortcuts: Vec<String>,
    mounted: bool,
}

impl<V: Viewport> Controller<V> {
    /// Wrap a shell. `shortcuts` are the command names on the welcome card.
    pub fn new(shell: Shell, shortcuts: Vec<String>) -> Self {
        Self {
            shell,
            viewport: None,
            shortcuts,
            mounted: false,
        }
    }

    /// Attach the host viewport. Replaces any previous one.
    pub fn attach(&mut self, viewport: V) {
        self.viewport = Some(viewport);
    }

    pub fn detach(&mut self) -> Option<V> {
        self.viewport.take()
    }

    pub fn viewport(&self) -> Option<&V> {
        self.viewport.as_ref()
    }

    pub fn viewport_mut(&mut self) -> Option<&mut V> {
        self.viewport.as_mut()
    }

    /// Seed the transcript with the summary and welcome card, then request
    /// focus. Only the first call does anything; returns whether it did.
    pub fn mount(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;

        let welcome = welcome_card(&self.shortcuts);
        let content = match self.shell.render_command(SUMMARY_COMMAND) {
            Some(summary) => Renderable::Group(vec![summary, welcome]),
            None => welcome,
        };
        self.shell.seed_output(content);
        log::debug!("Session mounted");

        self.request_scroll();
        self.request_focus();
        true
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// React to one host event.
    pub fn handle_event(&mut self, event: &InputEvent) -> InputResult {
        let before = self.shell.history().generation();

        match event {
            InputEvent::Quit => return InputResult::Quit,
            InputEvent::TextChanged(text) => {
                self.shell.state_mut().input = text.clone();
            },
            InputEvent::TextInput(ch) => {
                self.shell.state_mut().input.push(*ch);
            },
            InputEvent::Backspace => {
                self.shell.state_mut().input.pop();
            },
            e if e.is_commit() => self.submit(),
            // No history recall or completion.
            InputEvent::KeyPress(_) => {},
            InputEvent::PointerClick { .. } => self.request_focus(),
            InputEvent::QuickLaunch(name) => {
                self.shell.state_mut().input = name.clone();
                self.request_focus();
            },
            InputEvent::ResetRequested => self.shell.clear_history(),
        }

        if self.shell.history().generation() != before {
            self.request_scroll();
        }
        InputResult::Continue
    }

    fn submit(&mut self) {
        let line = self.shell.state_mut().take_input();
        let outcome = self.shell.submit(&line);
        log::debug!("Submitted {line:?}: {outcome:?}");
    }

    fn request_focus(&mut self) {
        if let Some(vp) = self.viewport.as_mut() {
            vp.focus_input();
        }
    }

    fn request_scroll(&mut self) {
        if let Some(vp) = self.viewport.as_mut() {
            vp.scroll_to_bottom();
        }
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut Shell {
        &mut self.shell
    }

    /// Current contents of the input field.
    pub fn input(&self) -> &str {
        &self.shell.state().input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::TranscriptEntry;
    use folio_types::input::Key;
    use crate::profile::Profile;
    use crate::session::SessionState;
    use crate::test_utils::{RecordingViewport, ViewportCall};

    fn shortcuts() -> Vec<String> {
        ["about", "experience", "projects", "skills"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn controller() -> Controller<RecordingViewport> {
        let shell = Shell::with_builtins(Profile::builtin().unwrap(), SessionState::default());
        let mut c = Controller::new(shell, shortcuts());
        c.attach(RecordingViewport::default());
        c
    }

    fn type_line(c: &mut Controller<RecordingViewport>, line: &str) {
        for ch in line.chars() {
            c.handle_event(&InputEvent::TextInput(ch));
        }
        c.handle_event(&InputEvent::KeyPress(Key::Enter));
    }

    fn calls(c: &Controller<RecordingViewport>) -> &[ViewportCall] {
        &c.viewport().unwrap().calls
    }

    #[test]
    fn mount_seeds_one_output_entry() {
        let mut c = controller();
        assert!(c.mount());
        let snap = c.shell().history().snapshot();
        assert_eq!(snap.len(), 1);
        let Some(Renderable::Group(parts)) = snap[0].content() else {
            panic!("expected summary + welcome group");
        };
        assert_eq!(Some(&parts[0]), c.shell().render_command("summary").as_ref());
        let welcome = parts[1].plain_text();
        assert!(welcome.contains("Type 'help'"));
        assert!(welcome.contains("experience"));
    }

    #[test]
    fn mount_requests_focus_and_scroll() {
        let mut c = controller();
        c.mount();
        assert_eq!(
            calls(&c),
            &[ViewportCall::ScrollToBottom, ViewportCall::Focus]
        );
    }

    #[test]
    fn mount_is_one_time() {
        let mut c = controller();
        assert!(c.mount());
        assert!(!c.mount());
        assert!(c.is_mounted());
        assert_eq!(c.shell().history().len(), 1);
    }

    #[test]
    fn mount_without_summary_seeds_welcome_only() {
        let shell = Shell::new(
            crate::interpreter::CommandRegistry::new(),
            Profile::default(),
            Box::new(crate::test_utils::FixedClock::epoch()),
            SessionState::default(),
        );
        let mut c: Controller<RecordingViewport> = Controller::new(shell, shortcuts());
        c.mount();
        let content = c.shell().history().snapshot()[0].content().unwrap();
        assert_eq!(content, &welcome_card(&shortcuts()));
    }

    #[test]
    fn mount_without_viewport_is_safe() {
        let shell = Shell::with_builtins(Profile::builtin().unwrap(), SessionState::default());
        let mut c: Controller<RecordingViewport> = Controller::new(shell, shortcuts());
        assert!(c.mount());
        c.handle_event(&InputEvent::PointerClick { x: 0, y: 0 });
        assert!(c.viewport().is_none());
    }

    #[test]
    fn text_changed_replaces_buffer_verbatim() {
        let mut c = controller();
        c.handle_event(&InputEvent::TextChanged("  Ab c ".into()));
        assert_eq!(c.input(), "  Ab c ");
        c.handle_event(&InputEvent::TextChanged(String::new()));
        assert_eq!(c.input(), "");
    }

    #[test]
    fn typing_and_backspace() {
        let mut c = controller();
        c.handle_event(&InputEvent::TextInput('l'));
        c.handle_event(&InputEvent::TextInput('s'));
        c.handle_event(&InputEvent::TextInput('x'));
        c.handle_event(&InputEvent::Backspace);
        assert_eq!(c.input(), "ls");
        c.handle_event(&InputEvent::Backspace);
        c.handle_event(&InputEvent::Backspace);
        c.handle_event(&InputEvent::Backspace);
        assert_eq!(c.input(), "");
    }

    #[test]
    fn enter_submits_and_clears_buffer() {
        let mut c = controller();
        c.mount();
        type_line(&mut c, "whoami");
        assert_eq!(c.input(), "");
        let snap = c.shell().history().snapshot();
        assert_eq!(snap.len(), 3);
        assert_eq!(
            snap[1],
            TranscriptEntry::CommandEcho {
                directory: "~".into(),
                raw_text: "whoami".into()
            }
        );
    }

    #[test]
    fn enter_takes_buffer_for_every_outcome() {
        let mut c = controller();
        for line in ["nope", "   ", "clear", "ABOUT"] {
            c.handle_event(&InputEvent::TextChanged(line.into()));
            c.handle_event(&InputEvent::KeyPress(Key::Enter));
            assert_eq!(c.input(), "", "buffer left after {line:?}");
        }
        let snap = c.shell().history().snapshot();
        assert_eq!(snap.len(), 2);
        assert_eq!(
            snap[0],
            TranscriptEntry::CommandEcho {
                directory: "~".into(),
                raw_text: "ABOUT".into()
            }
        );
    }

    #[test]
    fn non_commit_keys_leave_buffer() {
        let mut c = controller();
        c.handle_event(&InputEvent::TextChanged("help".into()));
        c.handle_event(&InputEvent::KeyPress(Key::Escape));
        c.handle_event(&InputEvent::KeyPress(Key::Down));
        assert_eq!(c.input(), "help");
        assert!(c.shell().history().is_empty());
    }

    #[test]
    fn submission_requests_scroll() {
        let mut c = controller();
        type_line(&mut c, "ls");
        assert_eq!(c.viewport().unwrap().count(ViewportCall::ScrollToBottom), 1);
    }

    #[test]
    fn blank_submission_does_not_scroll() {
        let mut c = controller();
        type_line(&mut c, "   ");
        assert_eq!(c.input(), "");
        assert_eq!(c.viewport().unwrap().count(ViewportCall::ScrollToBottom), 0);
    }

    #[test]
    fn clear_command_scrolls_and_empties() {
        let mut c = controller();
        c.mount();
        type_line(&mut c, "about");
        type_line(&mut c, "clear");
        assert!(c.shell().history().is_empty());
        assert_eq!(c.viewport().unwrap().count(ViewportCall::ScrollToBottom), 3);
    }

    #[test]
    fn keystrokes_do_not_scroll() {
        let mut c = controller();
        c.handle_event(&InputEvent::TextInput('a'));
        c.handle_event(&InputEvent::KeyPress(Key::Up));
        c.handle_event(&InputEvent::KeyPress(Key::Tab));
        assert!(calls(&c).is_empty());
        assert_eq!(c.input(), "a");
    }

    #[test]
    fn pointer_click_requests_focus_each_time() {
        let mut c = controller();
        c.handle_event(&InputEvent::PointerClick { x: 10, y: 20 });
        c.handle_event(&InputEvent::PointerClick { x: 10, y: 20 });
        assert_eq!(calls(&c), &[ViewportCall::Focus, ViewportCall::Focus]);
    }

    #[test]
    fn quick_launch_fills_input_without_submitting() {
        let mut c = controller();
        c.mount();
        c.handle_event(&InputEvent::TextChanged("half-typed".into()));
        c.handle_event(&InputEvent::QuickLaunch("projects".into()));
        assert_eq!(c.input(), "projects");
        assert_eq!(c.shell().history().len(), 1);
        assert_eq!(calls(&c).last(), Some(&ViewportCall::Focus));
    }

    #[test]
    fn reset_clears_transcript_and_scrolls() {
        let mut c = controller();
        c.mount();
        type_line(&mut c, "help");
        c.handle_event(&InputEvent::ResetRequested);
        assert!(c.shell().history().is_empty());
        assert_eq!(calls(&c).last(), Some(&ViewportCall::ScrollToBottom));
    }

    #[test]
    fn quit_is_reported() {
        let mut c = controller();
        assert_eq!(c.handle_event(&InputEvent::Quit), InputResult::Quit);
        assert_eq!(
            c.handle_event(&InputEvent::TextInput('a')),
            InputResult::Continue
        );
    }

    #[test]
    fn detach_stops_side_effects() {
        let mut c = controller();
        let vp = c.detach().unwrap();
        assert!(vp.calls.is_empty());
        type_line(&mut c, "ls");
        assert!(c.viewport().is_none());
        assert_eq!(c.shell().history().len(), 2);
    }
}
