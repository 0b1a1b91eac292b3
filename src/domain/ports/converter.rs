//! Converter ports
//!
//! [`ValueConverter`] is the type-erased contract the engine calls.
//! [`Converter`] is the typed contract users implement; every `Converter`
//! is a `ValueConverter` through the blanket implementation below.

use std::sync::Arc;

use anyhow::anyhow;

use crate::domain::ports::FieldValue;
use crate::domain::value_objects::{Value, ValueType};

/// Which directions a converter supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConverterCapability {
    #[default]
    Bidirectional,
    /// `convert_from` is never called; a required reverse call is an error
    ForwardOnly,
}

impl ConverterCapability {
    pub fn supports_backward(&self) -> bool {
        matches!(self, ConverterCapability::Bidirectional)
    }
}

/// Declared shape of a converter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConverterDescriptor {
    pub name: String,
    pub source_type: ValueType,
    pub target_type: ValueType,
    pub capability: ConverterCapability,
}

impl ConverterDescriptor {
    pub fn new(name: impl Into<String>, source_type: ValueType, target_type: ValueType) -> Self {
        Self {
            name: name.into(),
            source_type,
            target_type,
            capability: ConverterCapability::Bidirectional,
        }
    }

    pub fn forward_only(mut self) -> Self {
        self.capability = ConverterCapability::ForwardOnly;
        self
    }
}

/// Type-erased bidirectional converter
///
/// Implementations must not retain the values they are given.
pub trait ValueConverter: Send + Sync {
    fn descriptor(&self) -> ConverterDescriptor;

    /// Convert a value of the declared source type to the target type
    fn convert_to(&self, value: Value) -> anyhow::Result<Value>;

    /// Convert a value of the declared target type back to the source type
    fn convert_from(&self, value: Value) -> anyhow::Result<Value>;
}

/// Resolves converter names used in annotations
pub trait ConverterLookup {
    fn lookup(&self, name: &str) -> Option<Arc<dyn ValueConverter>>;
}

/// Typed converter between two field types
pub trait Converter: Send + Sync {
    type Source: FieldValue;
    type Target: FieldValue;

    /// Name used in error messages and plan renderings
    const NAME: &'static str;

    const CAPABILITY: ConverterCapability = ConverterCapability::Bidirectional;

    fn convert_to(&self, source: Self::Source) -> anyhow::Result<Self::Target>;

    fn convert_from(&self, _target: Self::Target) -> anyhow::Result<Self::Source> {
        Err(anyhow!("{} does not support reverse conversion", Self::NAME))
    }
}

impl<C: Converter> ValueConverter for C {
    fn descriptor(&self) -> ConverterDescriptor {
        ConverterDescriptor {
            name: C::NAME.to_string(),
            source_type: C::Source::value_type(),
            target_type: C::Target::value_type(),
            capability: C::CAPABILITY,
        }
    }

    fn convert_to(&self, value: Value) -> anyhow::Result<Value> {
        let source = C::Source::from_value(value)?;
        Ok(Converter::convert_to(self, source)?.to_value())
    }

    fn convert_from(&self, value: Value) -> anyhow::Result<Value> {
        let target = C::Target::from_value(value)?;
        Ok(Converter::convert_from(self, target)?.to_value())
    }
}
