use serde::{Deserialize, Serialize};

use crate::domain::{NavTrigger, Section, SessionId, SessionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
}

/// Fire-and-forget message shown once after a navigation button is pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub section: Section,
    pub message: String,
}

impl Notice {
    pub fn navigating_to(section: Section) -> Self {
        Self {
            level: NoticeLevel::Info,
            section,
            message: format!("Navigating to {} section...", section.label()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub current_section: Section,
}

impl SessionSnapshot {
    pub fn new(session_id: SessionId, state: SessionState) -> Self {
        Self {
            session_id,
            current_section: state.current_section,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectRequest {
    pub trigger: NavTrigger,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectResponse {
    pub session: SessionSnapshot,
    pub notice: Notice,
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
