//! Shared test utilities for folio-terminal tests.

use chrono::{DateTime, FixedOffset};

use crate::clock::Clock;
use crate::controller::Viewport;

/// A clock frozen at one instant.
pub struct FixedClock {
    at: DateTime<FixedOffset>,
}

impl FixedClock {
    /// Parse an RFC 3339 timestamp.
    pub fn at(rfc3339: &str) -> Self {
        Self {
            at: DateTime::parse_from_rfc3339(rfc3339).expect("valid RFC 3339 timestamp"),
        }
    }

    pub fn epoch() -> Self {
        Self::at("1970-01-01T00:00:00+00:00")
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.at
    }
}

/// A recorded side-effect request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportCall {
    Focus,
    ScrollToBottom,
}

/// A viewport that records every request for assertion.
#[derive(Debug, Default)]
pub struct RecordingViewport {
    pub calls: Vec<ViewportCall>,
}

impl RecordingViewport {
    pub fn count(&self, call: ViewportCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }
}

impl Viewport for RecordingViewport {
    fn focus_input(&mut self) {
        self.calls.push(ViewportCall::Focus);
    }

    fn scroll_to_bottom(&mut self) {
        self.calls.push(ViewportCall::ScrollToBottom);
    }
}
