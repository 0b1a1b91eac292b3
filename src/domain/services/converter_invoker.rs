//! Converter invocation
//!
//! Infers which converter method applies from the declared converter types
//! and the types in play, then calls it.

use std::sync::Arc;

use crate::domain::entities::{BoundConverter, Direction};
use crate::domain::ports::{ConverterDescriptor, ValueConverter};
use crate::domain::value_objects::{Value, ValueType};
use crate::error::{MapError, MapResult};

pub struct ConverterInvoker;

impl ConverterInvoker {
    /// Pick the direction for a value of `value_type` headed for
    /// `destination`.
    ///
    /// Forward needs the value to fit the declared source type and the
    /// declared target type to fit the destination; backward is the mirror
    /// image. With no destination (one-to-many decomposition) only the value
    /// is matched. Forward is checked first, so it wins when both fit.
    pub fn infer_direction(
        descriptor: &ConverterDescriptor,
        value_type: &ValueType,
        destination: Option<&ValueType>,
    ) -> MapResult<Direction> {
        let forward = descriptor.source_type.accepts(value_type)
            && destination.map_or(true, |d| d.accepts(&descriptor.target_type));
        let backward = descriptor.target_type.accepts(value_type)
            && destination.map_or(true, |d| d.accepts(&descriptor.source_type));

        let direction = if forward {
            Direction::Forward
        } else if backward {
            Direction::Backward
        } else {
            return Err(mismatch(descriptor, value_type, destination));
        };

        if direction == Direction::Backward && !descriptor.capability.supports_backward() {
            return Err(MapError::OneWayConverter {
                converter: descriptor.name.clone(),
            });
        }

        Ok(direction)
    }

    /// Call the converter in its bound direction
    pub fn invoke(value: Value, converter: &BoundConverter) -> MapResult<Value> {
        let result = match converter.direction {
            Direction::Forward => converter.converter.convert_to(value),
            Direction::Backward => {
                if !converter.descriptor.capability.supports_backward() {
                    return Err(MapError::OneWayConverter {
                        converter: converter.descriptor.name.clone(),
                    });
                }
                converter.converter.convert_from(value)
            }
        };

        result.map_err(|e| MapError::Converter {
            converter: converter.descriptor.name.clone(),
            source: e.into(),
        })
    }

    /// Infer the direction from type hints, then call the converter
    pub fn invoke_with_hints(
        value: Value,
        converter: Arc<dyn ValueConverter>,
        source_hint: &ValueType,
        target_hint: Option<&ValueType>,
    ) -> MapResult<Value> {
        let direction = Self::infer_direction(&converter.descriptor(), source_hint, target_hint)?;
        Self::invoke(value, &BoundConverter::new(converter, direction))
    }
}

fn mismatch(
    descriptor: &ConverterDescriptor,
    value_type: &ValueType,
    destination: Option<&ValueType>,
) -> MapError {
    let value_arity = value_type.tuple_arity().unwrap_or(1);
    for declared in [&descriptor.source_type, &descriptor.target_type] {
        if let Some(expected) = declared.tuple_arity() {
            if expected != value_arity && !declared.accepts(value_type) {
                return MapError::ArityMismatch {
                    expected,
                    actual: value_arity,
                };
            }
        }
    }

    MapError::ConverterMismatch {
        converter: descriptor.name.clone(),
        declared_source: descriptor.source_type.clone(),
        declared_target: descriptor.target_type.clone(),
        actual: match destination {
            Some(d) => format!("{} into {}", value_type, d),
            None => value_type.to_string(),
        },
    }
}
