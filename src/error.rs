use thiserror::Error;

pub type Result<T> = std::result::Result<T, GalleryError>;

/// Errors only appear at the edges: parsing names typed by a user and
/// loading configuration. Lookups inside the pattern modules are total.
#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Unknown icon '{name}' (expected one of: {expected})")]
    UnknownIcon { name: String, expected: String },

    #[error("Unknown discipline '{name}' (expected one of: {expected})")]
    UnknownDiscipline { name: String, expected: String },

    #[error("Unknown pattern '{name}' (expected one of: {expected})")]
    UnknownPattern { name: String, expected: String },

    #[error("No creative brief matches '{name}' (available: {expected})")]
    UnknownBrief { name: String, expected: String },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

impl GalleryError {
    pub fn unknown_icon(name: impl Into<String>, expected: &[&str]) -> Self {
        Self::UnknownIcon {
            name: name.into(),
            expected: expected.join(", "),
        }
    }

    pub fn unknown_discipline(name: impl Into<String>, expected: &[&str]) -> Self {
        Self::UnknownDiscipline {
            name: name.into(),
            expected: expected.join(", "),
        }
    }

    pub fn unknown_pattern(name: impl Into<String>, expected: &[&str]) -> Self {
        Self::UnknownPattern {
            name: name.into(),
            expected: expected.join(", "),
        }
    }

    pub fn unknown_brief(name: impl Into<String>, expected: &[&str]) -> Self {
        Self::UnknownBrief {
            name: name.into(),
            expected: expected.join(", "),
        }
    }

    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
