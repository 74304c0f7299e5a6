use folio_types::input::{InputEvent, Key};

/// Host-only line that triggers the title-bar reset control.
pub const RESET_LINE: &str = ":reset";

/// Host-only line that ends the session.
pub const QUIT_LINE: &str = ":quit";

/// Translate one console line into controller events.
///
/// A console delivers whole lines, so each line becomes a buffer change
/// followed by the commit key.
pub fn events_for_line(line: &str) -> Vec<InputEvent> {
    let line = line.trim_end_matches(['\r', '\n']);
    match line.trim() {
        RESET_LINE => vec![InputEvent::ResetRequested],
        QUIT_LINE => vec![InputEvent::Quit],
        _ => vec![
            InputEvent::TextChanged(line.to_string()),
            InputEvent::KeyPress(Key::Enter),
        ],
    }
}
