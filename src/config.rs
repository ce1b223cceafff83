use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GalleryError, Result};
use crate::flyweight::badges::BADGE_BLUEPRINTS;

// =============================================================================
// Settings
// =============================================================================

pub const MAX_EXTRA_BADGES: usize = 1_000;
pub const MAX_HISTORY_LIMIT: usize = 10_000;

/// Whether the badge builder keeps one icon factory for its whole lifetime
/// or starts a fresh one on every `build()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FactoryScope {
    #[default]
    PerBuild,
    Session,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlyweightConfig {
    pub min_badges: usize,
    /// Added to the blueprint count to get the largest sample size.
    pub extra_badges: usize,
    pub factory_scope: FactoryScope,
}

impl Default for FlyweightConfig {
    fn default() -> Self {
        Self {
            min_badges: 5,
            extra_badges: 2,
            factory_scope: FactoryScope::PerBuild,
        }
    }
}

impl FlyweightConfig {
    pub fn max_badges(&self) -> usize {
        BADGE_BLUEPRINTS.len() + self.extra_badges
    }

    pub fn validate(&self) -> Result<()> {
        if self.extra_badges > MAX_EXTRA_BADGES {
            return Err(GalleryError::invalid_config(
                "flyweight.extra_badges",
                format!("{} exceeds the maximum of {MAX_EXTRA_BADGES}", self.extra_badges),
            ));
        }
        if self.min_badges == 0 {
            return Err(GalleryError::invalid_config(
                "flyweight.min_badges",
                "must be at least 1",
            ));
        }
        if self.min_badges > self.max_badges() {
            return Err(GalleryError::invalid_config(
                "flyweight.min_badges",
                format!(
                    "{} exceeds the largest sample size {}",
                    self.min_badges,
                    self.max_badges()
                ),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediatorConfig {
    /// Log entries kept by the mediator; older ones are dropped first.
    pub history_limit: usize,
}

impl Default for MediatorConfig {
    fn default() -> Self {
        Self { history_limit: 50 }
    }
}

impl MediatorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.history_limit == 0 {
            return Err(GalleryError::invalid_config(
                "mediator.history_limit",
                "must be at least 1",
            ));
        }
        if self.history_limit > MAX_HISTORY_LIMIT {
            return Err(GalleryError::invalid_config(
                "mediator.history_limit",
                format!("{} exceeds the maximum of {MAX_HISTORY_LIMIT}", self.history_limit),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    pub flyweight: FlyweightConfig,
    pub mediator: MediatorConfig,
}

// =============================================================================
// Loading
// =============================================================================

impl GalleryConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GalleryConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|err| GalleryError::io(path.display().to_string(), err))?;
        debug!(path = %path.display(), "loading config");
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        self.flyweight.validate()?;
        self.mediator.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GalleryConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.flyweight.min_badges, 5);
        assert_eq!(config.flyweight.max_badges(), 10);
        assert_eq!(config.flyweight.factory_scope, FactoryScope::PerBuild);
        assert_eq!(config.mediator.history_limit, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GalleryConfig::from_toml_str(
            r#"
            seed = 7

            [flyweight]
            factory_scope = "session"
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.flyweight.factory_scope, FactoryScope::Session);
        assert_eq!(config.flyweight.min_badges, 5);
        assert_eq!(config.mediator, MediatorConfig::default());
    }

    #[test]
    fn test_zero_min_rejected() {
        let err = GalleryConfig::from_toml_str("[flyweight]\nmin_badges = 0\n").unwrap_err();
        assert!(matches!(err, GalleryError::InvalidConfig { .. }));
    }

    #[test]
    fn test_min_above_max_rejected() {
        let config = FlyweightConfig {
            min_badges: 11,
            ..FlyweightConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("exceeds the largest sample size 10"));
    }

    #[test]
    fn test_zero_history_rejected() {
        let config = MediatorConfig { history_limit: 0 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_huge_history_rejected() {
        let err = GalleryConfig::from_toml_str("[mediator]\nhistory_limit = 4611686018427387904\n")
            .unwrap_err();
        assert!(matches!(err, GalleryError::InvalidConfig { .. }));
        assert!(err.to_string().contains("mediator.history_limit"));

        let at_limit = MediatorConfig {
            history_limit: MAX_HISTORY_LIMIT,
        };
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_huge_extra_badges_rejected() {
        let err = GalleryConfig::from_toml_str("[flyweight]\nextra_badges = 4611686018427387904\n")
            .unwrap_err();
        assert!(err.to_string().contains("flyweight.extra_badges"));

        let at_limit = FlyweightConfig {
            extra_badges: MAX_EXTRA_BADGES,
            ..FlyweightConfig::default()
        };
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_bad_toml() {
        let err = GalleryConfig::from_toml_str("seed = \"abc\"").unwrap_err();
        assert!(matches!(err, GalleryError::Toml(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[mediator]\nhistory_limit = 3").unwrap();

        let config = GalleryConfig::from_file(file.path()).unwrap();
        assert_eq!(config.mediator.history_limit, 3);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GalleryConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, GalleryError::Io { .. }));
    }
}
