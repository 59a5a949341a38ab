//! Value objects - Immutable objects defined by their attributes

mod attributes;
mod ids;

pub use attributes::{Attributes, DerivedAttributes};
pub use ids::*;
