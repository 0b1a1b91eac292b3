//! Error types for dtomap
//!
//! Uses `thiserror` for library errors. Every property-level failure reaches
//! the caller wrapped exactly once in [`MapError::Mapping`].

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::{Value, ValueType};

/// Result type alias for dtomap operations
pub type MapResult<T> = Result<T, MapError>;

/// Main error type for dtomap operations
#[derive(Error, Debug)]
pub enum MapError {
    /// A converter reference could not be resolved to a `ValueConverter`
    #[error("converter '{converter}' is not registered or does not implement the converter contract")]
    ConverterContractMissing { converter: String },

    /// Neither converter direction matches the types in play
    #[error("converter '{converter}' ({declared_source} -> {declared_target}) cannot convert {actual}")]
    ConverterMismatch {
        converter: String,
        declared_source: ValueType,
        declared_target: ValueType,
        actual: String,
    },

    /// A reverse call was required from a forward-only converter
    #[error("converter '{converter}' only supports forward conversion")]
    OneWayConverter { converter: String },

    /// Aggregate composition/decomposition count disagreement
    #[error("arity mismatch: expected {expected} values, found {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    /// Converter output is not a decomposable shape
    #[error("cannot decompose value of type {shape} into multiple properties")]
    UnsupportedAggregateShape { shape: ValueType },

    /// An alias names a property the target type does not have
    #[error("target type {target_type} has no writable property '{property}'")]
    UnresolvedTargetProperty {
        property: String,
        target_type: String,
    },

    /// Default value coercion failed
    #[error("cannot coerce '{value}' to {target}: {reason}")]
    Coercion {
        value: String,
        target: ValueType,
        reason: String,
    },

    /// A user converter reported a failure
    #[error("converter '{converter}' failed: {source}")]
    Converter {
        converter: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// A property failed to map; wraps the original cause
    #[error("failed to map property '{property}': {source}")]
    Mapping {
        property: String,
        #[source]
        source: Box<MapError>,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}

impl MapError {
    /// Wrap `cause` as a failure of `property`.
    ///
    /// Already-wrapped errors are returned unchanged so a cause is never
    /// wrapped twice.
    pub fn mapping(property: impl Into<String>, cause: MapError) -> Self {
        match cause {
            MapError::Mapping { .. } => cause,
            other => MapError::Mapping {
                property: property.into(),
                source: Box::new(other),
            },
        }
    }

    pub fn coercion(value: &Value, target: &ValueType, reason: impl Into<String>) -> Self {
        MapError::Coercion {
            value: value.to_string(),
            target: target.clone(),
            reason: reason.into(),
        }
    }

    /// Name of the property a `Mapping` error was raised for
    pub fn property(&self) -> Option<&str> {
        match self {
            MapError::Mapping { property, .. } => Some(property),
            _ => None,
        }
    }

    /// The innermost dtomap error (skips `Mapping` wrappers)
    pub fn root_cause(&self) -> &MapError {
        match self {
            MapError::Mapping { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
