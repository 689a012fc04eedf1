use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseLabelError {
    kind: &'static str,
    value: String,
}

/// Tutorial sections a session can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Section {
    #[default]
    #[serde(rename = "Home")]
    Home,
    #[serde(rename = "Document Loaders")]
    DocumentLoaders,
    #[serde(rename = "Embeddings")]
    Embeddings,
    #[serde(rename = "Vector Stores")]
    VectorStores,
    #[serde(rename = "RAG Example")]
    RagExample,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::DocumentLoaders,
        Section::Embeddings,
        Section::VectorStores,
        Section::RagExample,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::DocumentLoaders => "Document Loaders",
            Section::Embeddings => "Embeddings",
            Section::VectorStores => "Vector Stores",
            Section::RagExample => "RAG Example",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Section {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.label() == s)
            .ok_or_else(|| ParseLabelError {
                kind: "section",
                value: s.to_string(),
            })
    }
}

/// One of the four navigation buttons on the page. Home is never a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavTrigger {
    Loaders,
    Embeddings,
    VectorStores,
    Rag,
}

impl NavTrigger {
    pub const ALL: [NavTrigger; 4] = [
        NavTrigger::Loaders,
        NavTrigger::Embeddings,
        NavTrigger::VectorStores,
        NavTrigger::Rag,
    ];

    /// Form value and wire key.
    pub fn key(self) -> &'static str {
        match self {
            NavTrigger::Loaders => "loaders",
            NavTrigger::Embeddings => "embeddings",
            NavTrigger::VectorStores => "vector_stores",
            NavTrigger::Rag => "rag",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            NavTrigger::Loaders => "📄 Document Loaders",
            NavTrigger::Embeddings => "🔤 Embeddings",
            NavTrigger::VectorStores => "🗄️ Vector Stores",
            NavTrigger::Rag => "🤖 RAG Example",
        }
    }

    pub fn section(self) -> Section {
        match self {
            NavTrigger::Loaders => Section::DocumentLoaders,
            NavTrigger::Embeddings => Section::Embeddings,
            NavTrigger::VectorStores => Section::VectorStores,
            NavTrigger::Rag => Section::RagExample,
        }
    }
}

impl FromStr for NavTrigger {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NavTrigger::ALL
            .into_iter()
            .find(|trigger| trigger.key() == s)
            .ok_or_else(|| ParseLabelError {
                kind: "trigger",
                value: s.to_string(),
            })
    }
}

/// Per-session navigation state.
///
/// The label is recorded but nothing reads it back to choose what gets
/// rendered; the page is the same for every value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub current_section: Section,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current_section: Section::Home,
        }
    }

    pub fn select(&mut self, section: Section) {
        self.current_section = section;
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
