//! Flyweight pattern: badges share one icon definition per identifier.
//!
//! ```
//! use pattern_gallery::flyweight::{IconFlyweightFactory, IconName};
//!
//! let mut factory = IconFlyweightFactory::new();
//! factory.get_icon(IconName::Spark);
//! factory.get_icon(IconName::Spark);
//! factory.get_icon(IconName::Leaf);
//! assert_eq!((factory.hits(), factory.misses(), factory.cache_size()), (1, 2, 2));
//! ```

pub mod badges;
pub mod factory;
pub mod icons;

pub use badges::{
    build_badge_collection, BadgeBlueprint, BadgeCollectionBuilder, BadgeInstance, BuildStats,
    FlyweightBuildResult, BADGE_BLUEPRINTS,
};
pub use factory::{CacheStats, IconFlyweight, IconFlyweightFactory};
pub use icons::{IconDefinition, IconName};
