use super::{CreativeBriefPrototype, CreativeBriefSpec, Tone};
use crate::error::{GalleryError, Result};
use crate::ids::IdSequence;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The stock briefs, each with a fresh id from `ids`.
pub fn creative_brief_library(ids: &mut IdSequence) -> Vec<CreativeBriefPrototype> {
    vec![
        CreativeBriefPrototype::new(CreativeBriefSpec {
            id: ids.next_id(),
            name: "Aurora onboarding".to_string(),
            theme: "Soft gradients for fintech onboarding".to_string(),
            tone: Tone::Calm,
            palette: strings(&["#7c4dff", "#c8b6ff", "#f8f2ff"]),
            keywords: strings(&["trust", "onboarding", "financial freedom"]),
            deliverables: strings(&["Hero illustration", "Empty state visuals"]),
        }),
        CreativeBriefPrototype::new(CreativeBriefSpec {
            id: ids.next_id(),
            name: "Pulse dashboard".to_string(),
            theme: "Data-heavy SaaS dashboard with motion hints".to_string(),
            tone: Tone::Balanced,
            palette: strings(&["#0f172a", "#2563eb", "#22d3ee"]),
            keywords: strings(&["analytics", "velocity", "motion"]),
            deliverables: strings(&["Widget cards", "Motion storyboard"]),
        }),
        CreativeBriefPrototype::new(CreativeBriefSpec {
            id: ids.next_id(),
            name: "Sprout wellness".to_string(),
            theme: "Organic ecommerce landing".to_string(),
            tone: Tone::Playful,
            palette: strings(&["#0c6b58", "#8dd9c0", "#f7f1e1"]),
            keywords: strings(&["wellness", "organic", "community"]),
            deliverables: strings(&["Homepage hero", "Social snippets"]),
        }),
    ]
}

/// First brief whose name contains `wanted`, ignoring case.
pub fn find_brief<'a>(
    library: &'a [CreativeBriefPrototype],
    wanted: &str,
) -> Result<&'a CreativeBriefPrototype> {
    let needle = wanted.trim().to_lowercase();
    library
        .iter()
        .find(|p| p.spec().name.to_lowercase().contains(&needle))
        .ok_or_else(|| {
            let names: Vec<&str> = library.iter().map(|p| p.spec().name.as_str()).collect();
            GalleryError::unknown_brief(wanted, &names)
        })
}
