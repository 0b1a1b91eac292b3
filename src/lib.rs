//! dtomap - declarative object-to-object property mapping
//!
//! Types describe their properties once (by hand or through
//! [`mappable!`]); a [`Mapper`] resolves a plan per (source, target) type
//! pair from names and annotations, caches it, and executes it against
//! instances. Converters bridge properties whose types differ, in either
//! direction, and can combine several properties into one or split one
//! across several.

#[macro_use]
mod macros;

pub mod application;
pub mod config;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use application::{ConverterRegistry, Mapper, PlanCache};
pub use config::{CacheConfig, CoercionConfig, ConfigWarning, MapperConfig};
pub use domain::entities::{
    BoundConverter, ConverterRef, Direction, MappingAnnotation, MappingPlan, PropertyDescriptor,
    PropertyResolution, ResolutionStrategy, TargetSlot, TypeDescriptor,
};
pub use domain::ports::{
    Converter, ConverterCapability, ConverterDescriptor, EnumField, FieldValue, Mappable,
    ValueConverter,
};
pub use domain::value_objects::{
    EnumInfo, EnumValue, FloatKind, IntKind, PropertyBag, Value, ValueType,
};
pub use error::{MapError, MapResult};
