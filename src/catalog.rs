use std::fmt;
use std::str::FromStr;

use crate::error::GalleryError;

/// Patterns the gallery can demonstrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Prototype,
    Flyweight,
    Mediator,
}

impl PatternKind {
    pub const ALL: [PatternKind; 3] = [
        PatternKind::Prototype,
        PatternKind::Flyweight,
        PatternKind::Mediator,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            PatternKind::Prototype => "prototype",
            PatternKind::Flyweight => "flyweight",
            PatternKind::Mediator => "mediator",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PatternKind::Prototype => "Prototype",
            PatternKind::Flyweight => "Flyweight",
            PatternKind::Mediator => "Mediator",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            PatternKind::Prototype => "Clone creative briefs from templates with overrides",
            PatternKind::Flyweight => "Share one icon definition across many badges",
            PatternKind::Mediator => "Route team updates through a single coordinator",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for PatternKind {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_start_matches('/').to_ascii_lowercase();
        PatternKind::ALL
            .into_iter()
            .find(|p| p.slug() == wanted)
            .ok_or_else(|| {
                let slugs: Vec<&str> = PatternKind::ALL.iter().map(|p| p.slug()).collect();
                GalleryError::unknown_pattern(s, &slugs)
            })
    }
}
