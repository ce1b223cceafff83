// Pattern Gallery
// Flyweight, Mediator and Prototype demonstrated as small, seedable
// in-memory generators.

pub mod catalog;
pub mod config;
pub mod error;
pub mod flyweight;
pub mod ids;
pub mod logging;
pub mod mediator;
pub mod prototype;

pub use catalog::PatternKind;
pub use config::{FactoryScope, FlyweightConfig, GalleryConfig, MediatorConfig};
pub use error::{GalleryError, Result};
pub use ids::IdSequence;
