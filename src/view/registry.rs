//! Named views the game can switch between

use crate::error::GameError;

/// Views reachable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Start,
    Level,
    Title,
}

impl ViewKind {
    pub fn name(self) -> &'static str {
        match self {
            ViewKind::Start => "start",
            ViewKind::Level => "level",
            ViewKind::Title => "title",
        }
    }
}

/// Ordered name → view table. The first entry is where the game begins.
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    entries: Vec<(String, ViewKind)>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// start, level and title, in that order
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for kind in [ViewKind::Start, ViewKind::Level, ViewKind::Title] {
            registry.register(kind.name(), kind);
        }
        registry
    }

    /// Add or replace a named view
    pub fn register(&mut self, name: impl Into<String>, kind: ViewKind) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = kind,
            None => self.entries.push((name, kind)),
        }
    }

    pub fn lookup(&self, name: &str) -> Result<ViewKind, GameError> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| GameError::UnknownView(name.to_string()))
    }

    /// Name of the first registered view
    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(|(name, _)| name.as_str())
    }
}
