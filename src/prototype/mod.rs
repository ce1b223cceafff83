//! Prototype pattern: new creative briefs are cloned from templates and then
//! adjusted with overrides.

pub mod library;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use library::{creative_brief_library, find_brief};

use crate::ids::IdSequence;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tone {
    Playful,
    Balanced,
    Calm,
    Bold,
    Custom(String),
}

impl From<String> for Tone {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Playful" => Tone::Playful,
            "Balanced" => Tone::Balanced,
            "Calm" => Tone::Calm,
            "Bold" => Tone::Bold,
            _ => Tone::Custom(value),
        }
    }
}

impl From<&str> for Tone {
    fn from(value: &str) -> Self {
        Tone::from(value.to_string())
    }
}

impl From<Tone> for String {
    fn from(tone: Tone) -> Self {
        tone.to_string()
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tone::Playful => f.write_str("Playful"),
            Tone::Balanced => f.write_str("Balanced"),
            Tone::Calm => f.write_str("Calm"),
            Tone::Bold => f.write_str("Bold"),
            Tone::Custom(other) => f.write_str(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreativeBriefSpec {
    pub id: String,
    pub name: String,
    pub theme: String,
    pub tone: Tone,
    pub palette: Vec<String>,
    pub keywords: Vec<String>,
    pub deliverables: Vec<String>,
}

/// Fields to replace when cloning. `None` keeps the prototype's value,
/// except `id`, which falls back to a freshly issued one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BriefOverrides {
    pub id: Option<String>,
    pub name: Option<String>,
    pub theme: Option<String>,
    pub tone: Option<Tone>,
    pub palette: Option<Vec<String>>,
    pub keywords: Option<Vec<String>>,
    pub deliverables: Option<Vec<String>>,
}

impl BriefOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    pub fn tone(mut self, tone: impl Into<Tone>) -> Self {
        self.tone = Some(tone.into());
        self
    }

    pub fn palette<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    pub fn keywords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = Some(words.into_iter().map(Into::into).collect());
        self
    }

    pub fn deliverables<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deliverables = Some(items.into_iter().map(Into::into).collect());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreativeBriefPrototype {
    spec: CreativeBriefSpec,
}

impl CreativeBriefPrototype {
    pub fn new(spec: CreativeBriefSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &CreativeBriefSpec {
        &self.spec
    }

    /// New prototype from this one. Collections are copied, never shared.
    pub fn clone_with(&self, overrides: BriefOverrides, ids: &mut IdSequence) -> Self {
        let BriefOverrides {
            id,
            name,
            theme,
            tone,
            palette,
            keywords,
            deliverables,
        } = overrides;

        let spec = CreativeBriefSpec {
            id: id.unwrap_or_else(|| ids.next_id()),
            name: name.unwrap_or_else(|| self.spec.name.clone()),
            theme: theme.unwrap_or_else(|| self.spec.theme.clone()),
            tone: tone.unwrap_or_else(|| self.spec.tone.clone()),
            palette: palette.unwrap_or_else(|| self.spec.palette.clone()),
            keywords: keywords.unwrap_or_else(|| self.spec.keywords.clone()),
            deliverables: deliverables.unwrap_or_else(|| self.spec.deliverables.clone()),
        };
        debug!(source = %self.spec.id, clone = %spec.id, "brief cloned");

        Self { spec }
    }

    pub fn snapshot(&self) -> CreativeBriefSpec {
        self.spec.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> CreativeBriefPrototype {
        CreativeBriefPrototype::new(CreativeBriefSpec {
            id: "brief-0-1".to_string(),
            name: "Aurora onboarding".to_string(),
            theme: "Soft gradients".to_string(),
            tone: Tone::Calm,
            palette: vec!["#7c4dff".to_string(), "#c8b6ff".to_string()],
            keywords: vec!["trust".to_string()],
            deliverables: vec!["Hero illustration".to_string()],
        })
    }

    #[test]
    fn test_clone_without_overrides() {
        let mut ids = IdSequence::with_stamp("brief", 5);
        let source = base();
        let copy = source.clone_with(BriefOverrides::new(), &mut ids);

        assert_eq!(copy.spec().id, "brief-5-1");
        assert_eq!(copy.spec().name, source.spec().name);
        assert_eq!(copy.spec().palette, source.spec().palette);
        assert_eq!(copy.spec().tone, Tone::Calm);
    }

    #[test]
    fn test_clone_does_not_alias_collections() {
        let mut ids = IdSequence::with_stamp("brief", 5);
        let source = base();
        let copy = source.clone_with(BriefOverrides::new(), &mut ids);

        assert_ne!(copy.spec().palette.as_ptr(), source.spec().palette.as_ptr());
        assert_ne!(copy.spec().keywords.as_ptr(), source.spec().keywords.as_ptr());
        assert_ne!(copy.spec().deliverables.as_ptr(), source.spec().deliverables.as_ptr());
    }

    #[test]
    fn test_overrides_apply() {
        let mut ids = IdSequence::with_stamp("brief", 5);
        let copy = base().clone_with(
            BriefOverrides::new()
                .id("custom")
                .name("Aurora dark")
                .tone("Moody")
                .palette(["#000000"]),
            &mut ids,
        );

        assert_eq!(copy.spec().id, "custom");
        assert_eq!(copy.spec().name, "Aurora dark");
        assert_eq!(copy.spec().tone, Tone::Custom("Moody".to_string()));
        assert_eq!(copy.spec().palette, vec!["#000000".to_string()]);
        assert_eq!(copy.spec().keywords, vec!["trust".to_string()]);
        // explicit id does not consume the sequence
        assert_eq!(ids.issued(), 0);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let proto = base();
        let mut snap = proto.snapshot();
        snap.palette.push("#ffffff".to_string());
        snap.name.push_str(" (edited)");

        assert_eq!(proto.spec().palette.len(), 2);
        assert_eq!(proto.spec().name, "Aurora onboarding");
    }

    #[test]
    fn test_tone_round_trip() {
        assert_eq!(Tone::from("Bold"), Tone::Bold);
        assert_eq!(String::from(Tone::Playful), "Playful");
        let json = serde_json::to_string(&Tone::Custom("Retro".to_string())).unwrap();
        assert_eq!(json, "\"Retro\"");
        let parsed: Tone = serde_json::from_str("\"Balanced\"").unwrap();
        assert_eq!(parsed, Tone::Balanced);
    }
}
