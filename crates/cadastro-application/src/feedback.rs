//! User-facing feedback and navigation values.
//!
//! Presentation surfaces (registration page, login page, listing page) are
//! external collaborators; the services hand them plain data describing what
//! to show and where to go next. The timer for a delayed redirect belongs to
//! the caller; the services only report the delay.

use std::time::Duration;

use serde::Serialize;

/// How long a successful submission lingers before navigating away.
pub const POST_SUBMIT_DELAY: Duration = Duration::from_millis(500);

/// Classification of a feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeedbackKind {
    Success,
    Error,
}

/// A feedback message for the current screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub text: String,
    pub kind: FeedbackKind,
}

impl Feedback {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: FeedbackKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: FeedbackKind::Error,
        }
    }
}

/// Navigation targets the services can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Screen {
    /// Post-login greeting screen.
    Welcome,
    /// Listing of all stored registrations.
    Roster,
}

/// A navigation request with its delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub screen: Screen,
    pub delay: Duration,
}

impl Redirect {
    /// Delayed redirect to the welcome screen after a successful submit.
    pub fn to_welcome() -> Self {
        Self {
            screen: Screen::Welcome,
            delay: POST_SUBMIT_DELAY,
        }
    }

    /// Immediate redirect back to the listing screen.
    pub fn to_roster() -> Self {
        Self {
            screen: Screen::Roster,
            delay: Duration::ZERO,
        }
    }
}
