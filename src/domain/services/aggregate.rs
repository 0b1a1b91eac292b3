//! Aggregate composition and decomposition
//!
//! Multi-property mappings combine N values into one converter input, or
//! split one converter output across N target properties.

use crate::domain::value_objects::{Value, ValueType};
use crate::error::{MapError, MapResult};

/// Declared type of the composed input for values of `element_types`,
/// shaped after the `expected` converter input
pub fn composed_type(expected: &ValueType, element_types: &[ValueType]) -> ValueType {
    match expected.unwrap_optional() {
        ValueType::Tuple(slots) if slots.len() == element_types.len() => {
            ValueType::Tuple(element_types.to_vec())
        }
        ValueType::List(element) => ValueType::List(element.clone()),
        _ if element_types.len() == 1 => element_types[0].clone(),
        _ => ValueType::list(ValueType::Any),
    }
}

/// Combine `values` into the shape `expected` describes.
///
/// A tuple input takes exactly as many values as it has slots; a list input
/// takes any number. Otherwise a single value is passed bare and several are
/// passed as a raw list.
pub fn compose(values: Vec<Value>, expected: &ValueType) -> MapResult<Value> {
    match expected.unwrap_optional() {
        ValueType::Tuple(slots) => {
            if slots.len() != values.len() {
                return Err(MapError::ArityMismatch {
                    expected: slots.len(),
                    actual: values.len(),
                });
            }
            Ok(Value::Tuple(values))
        }
        ValueType::List(_) => Ok(Value::List(values)),
        _ if values.len() == 1 => Ok(values.into_iter().next().unwrap_or_default()),
        _ => Ok(Value::List(values)),
    }
}

/// Split `aggregate` into one value per name, in order
pub fn decompose(aggregate: Value, names: &[String]) -> MapResult<Vec<(String, Value)>> {
    let items = match aggregate {
        Value::Tuple(items) | Value::List(items) => items,
        other => {
            return Err(MapError::UnsupportedAggregateShape {
                shape: other.value_type(),
            })
        }
    };

    if items.len() != names.len() {
        return Err(MapError::ArityMismatch {
            expected: names.len(),
            actual: items.len(),
        });
    }

    Ok(names.iter().cloned().zip(items).collect())
}
