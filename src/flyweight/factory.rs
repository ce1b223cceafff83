use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use tracing::debug;

use super::icons::{IconDefinition, IconName};

/// Shared, read-only wrapper around one static icon definition.
#[derive(Debug)]
pub struct IconFlyweight {
    name: IconName,
    definition: &'static IconDefinition,
}

impl IconFlyweight {
    fn new(name: IconName) -> Self {
        Self {
            name,
            definition: name.definition(),
        }
    }

    pub fn name(&self) -> IconName {
        self.name
    }

    pub fn definition(&self) -> &IconDefinition {
        self.definition
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub cache_size: usize,
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    pub fn hit_rate(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            n => self.hits as f64 / n as f64,
        }
    }
}

/// Hands out one `IconFlyweight` per identifier and counts hits and misses.
///
/// Uses `Rc`, so a factory stays on the thread that created it.
#[derive(Debug, Default)]
pub struct IconFlyweightFactory {
    cache: HashMap<IconName, Rc<IconFlyweight>>,
    hits: u64,
    misses: u64,
}

impl IconFlyweightFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_icon(&mut self, name: IconName) -> Rc<IconFlyweight> {
        if let Some(cached) = self.cache.get(&name) {
            self.hits += 1;
            return Rc::clone(cached);
        }

        let flyweight = Rc::new(IconFlyweight::new(name));
        self.cache.insert(name, Rc::clone(&flyweight));
        self.misses += 1;
        debug!(icon = %name, cache_size = self.cache.len(), "icon cache miss");
        flyweight
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            cache_size: self.cache.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }

    /// Cached identifiers in enum order.
    pub fn cached_icons(&self) -> Vec<IconName> {
        let mut names: Vec<IconName> = self.cache.keys().copied().collect();
        names.sort();
        names
    }
}
