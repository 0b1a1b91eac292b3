//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Host types and user converters provide the implementations.

pub mod converter;
pub mod field_value;
pub mod mappable;

pub use converter::{
    Converter, ConverterCapability, ConverterDescriptor, ConverterLookup, ValueConverter,
};
pub use field_value::{enum_ordinal, EnumField, FieldValue};
pub use mappable::{unknown_property, Mappable};
