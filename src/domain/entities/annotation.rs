//! Mapping annotations
//!
//! Declarative per-property hints: alias names on the other side, an
//! optional converter and an ignore marker. Ignore wins over everything else.

use std::fmt;
use std::sync::Arc;

use crate::domain::ports::ValueConverter;

/// Reference to a converter from an annotation
#[derive(Clone)]
pub enum ConverterRef {
    /// Resolved against the mapper's converter registry when a plan is built
    Named(String),
    /// A converter instance carried by the annotation itself
    Instance(Arc<dyn ValueConverter>),
}

impl ConverterRef {
    pub fn named(name: impl Into<String>) -> Self {
        ConverterRef::Named(name.into())
    }

    pub fn instance<C: ValueConverter + 'static>(converter: C) -> Self {
        ConverterRef::Instance(Arc::new(converter))
    }

    /// Name used for registry lookup and diagnostics
    pub fn name(&self) -> String {
        match self {
            ConverterRef::Named(name) => name.clone(),
            ConverterRef::Instance(c) => c.descriptor().name,
        }
    }
}

impl fmt::Debug for ConverterRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConverterRef::Named(name) => f.debug_tuple("Named").field(name).finish(),
            ConverterRef::Instance(c) => f
                .debug_tuple("Instance")
                .field(&c.descriptor().name)
                .finish(),
        }
    }
}

/// Annotation set carried by one property
#[derive(Debug, Clone, Default)]
pub struct MappingAnnotation {
    pub aliases: Vec<String>,
    pub converter: Option<ConverterRef>,
    pub ignored: bool,
}

impl MappingAnnotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an alias; order is significant for aggregates
    pub fn alias(mut self, name: impl Into<String>) -> Self {
        self.aliases.push(name.into());
        self
    }

    pub fn aliases<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn converter(mut self, converter: ConverterRef) -> Self {
        self.converter = Some(converter);
        self
    }

    pub fn ignore(mut self) -> Self {
        self.ignored = true;
        self
    }
}
