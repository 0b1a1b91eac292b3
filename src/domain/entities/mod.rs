//! Domain Entities
//!
//! Property metadata consumed by the resolver and the mapping plan it
//! produces.

mod annotation;
mod descriptor;
mod plan;

pub use annotation::{ConverterRef, MappingAnnotation};
pub use descriptor::{PropertyDescriptor, TypeDescriptor};
pub use plan::{
    BoundConverter, Direction, MappingPlan, PropertyResolution, ResolutionStrategy, TargetSlot,
};
