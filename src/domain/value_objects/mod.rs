//! Domain Value Objects
//!
//! Immutable value types that cross the mapper: runtime values, declared
//! types, enum metadata and the dynamic property bag.

mod enum_info;
mod property_bag;
mod value;
mod value_type;

pub use enum_info::{EnumInfo, EnumValue};
pub use property_bag::PropertyBag;
pub use value::Value;
pub use value_type::{FloatKind, IntKind, ValueType};
