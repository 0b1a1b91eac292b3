//! Mappable port - the host-type contract
//!
//! A mappable type describes its properties once and exposes by-name reads
//! and writes. `Default` supplies the zero-value instance a mapping fills in.

use crate::domain::entities::TypeDescriptor;
use crate::domain::value_objects::{PropertyBag, Value};
use crate::error::{MapError, MapResult};

pub trait Mappable: Default + Send + Sync + 'static {
    /// Property table of this type
    fn describe() -> TypeDescriptor;

    /// Current value of `property`, or `None` if the type has no such
    /// readable property
    fn read(&self, property: &str) -> Option<Value>;

    /// Store `value` into `property`. The value has already been coerced
    /// to the property's declared type.
    fn write(&mut self, property: &str, value: Value) -> MapResult<()>;
}

/// A bag describes no static properties; reads and writes go to its entries.
impl Mappable for PropertyBag {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::new("PropertyBag")
    }

    fn read(&self, property: &str) -> Option<Value> {
        self.get(property).cloned()
    }

    fn write(&mut self, property: &str, value: Value) -> MapResult<()> {
        self.insert(property, value);
        Ok(())
    }
}

/// Error for a write to a property the type does not declare
pub fn unknown_property<T: Mappable>(property: &str) -> MapError {
    MapError::UnresolvedTargetProperty {
        property: property.to_string(),
        target_type: T::describe().type_name.to_string(),
    }
}
