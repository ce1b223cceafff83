use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GalleryError;

/// Closed set of icon identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconName {
    Spark,
    Leaf,
    Wave,
    Bolt,
}

/// Immutable SVG data for one icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDefinition {
    pub view_box: &'static str,
    pub path: &'static str,
}

const VIEW_BOX: &str = "0 0 24 24";

impl IconName {
    pub const ALL: [IconName; 4] = [IconName::Spark, IconName::Leaf, IconName::Wave, IconName::Bolt];

    pub fn as_str(&self) -> &'static str {
        match self {
            IconName::Spark => "spark",
            IconName::Leaf => "leaf",
            IconName::Wave => "wave",
            IconName::Bolt => "bolt",
        }
    }

    // Exhaustive match: a new variant without a definition will not compile.
    pub fn definition(&self) -> &'static IconDefinition {
        match self {
            IconName::Spark => &SPARK,
            IconName::Leaf => &LEAF,
            IconName::Wave => &WAVE,
            IconName::Bolt => &BOLT,
        }
    }
}

static SPARK: IconDefinition = IconDefinition {
    view_box: VIEW_BOX,
    path: "M12 2l2.4 5.8 6.1.5-4.7 4.1 1.4 6-5.2-3.2-5.2 3.2 1.4-6-4.7-4.1 6.1-.5z",
};

static LEAF: IconDefinition = IconDefinition {
    view_box: VIEW_BOX,
    path: "M4 12c0 4.4 3.6 8 8 8 3.3 0 6.2-2 7.4-4.8.4-.9-.6-1.7-1.4-1.1-1.5 1-3.2 1.5-5 1.5-4.4 0-8-3.6-8-8 0-1.8.6-3.5 1.5-5 .5-.8-.2-1.8-1.1-1.4C6 1.8 4 4.7 4 8v4z",
};

static WAVE: IconDefinition = IconDefinition {
    view_box: VIEW_BOX,
    path: "M3 15c1.5 0 3-1 4.5-3s3-3 4.5-3 3 1 4.5 3 3 3 4.5 3v4c-1.5 0-3-1-4.5-3s-3-3-4.5-3-3 1-4.5 3-3 3-4.5 3V15z",
};

static BOLT: IconDefinition = IconDefinition {
    view_box: VIEW_BOX,
    path: "M13.5 2L6 13h5l-1.5 9L18 11h-5l.5-9z",
};

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconName {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        IconName::ALL
            .into_iter()
            .find(|icon| icon.as_str() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = IconName::ALL.iter().map(|i| i.as_str()).collect();
                GalleryError::unknown_icon(s, &names)
            })
    }
}
