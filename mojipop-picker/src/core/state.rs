//! Picker state machine
//!
//! The picker is either idle or holds exactly one open session. The popup
//! is visible if and only if the state is `Active`.

use super::session::QuerySession;

/// The current state of the picker.
#[derive(Debug, Default)]
pub enum PickerState {
    /// No popup; waiting for a trigger.
    #[default]
    Idle,

    /// A popup is open for one element and one trigger occurrence.
    Active(QuerySession),
}

impl PickerState {
    /// Check if the picker is idle (no popup visible).
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Get the open session, if any.
    pub fn session(&self) -> Option<&QuerySession> {
        match self {
            Self::Idle => None,
            Self::Active(session) => Some(session),
        }
    }

    /// Get mutable access to the open session.
    pub fn session_mut(&mut self) -> Option<&mut QuerySession> {
        match self {
            Self::Idle => None,
            Self::Active(session) => Some(session),
        }
    }
}
