//! Converter registry
//!
//! Named converters available to annotations that reference a converter by
//! name. Names are resolved once, when a plan is built.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::domain::ports::{ConverterLookup, ValueConverter};

#[derive(Clone, Default)]
pub struct ConverterRegistry {
    converters: HashMap<String, Arc<dyn ValueConverter>>,
}

impl ConverterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `converter` under `name`, returning any converter it replaces
    pub fn register<C>(
        &mut self,
        name: impl Into<String>,
        converter: C,
    ) -> Option<Arc<dyn ValueConverter>>
    where
        C: ValueConverter + 'static,
    {
        self.register_shared(name, Arc::new(converter))
    }

    pub fn register_shared(
        &mut self,
        name: impl Into<String>,
        converter: Arc<dyn ValueConverter>,
    ) -> Option<Arc<dyn ValueConverter>> {
        self.converters.insert(name.into(), converter)
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn ValueConverter>> {
        self.converters.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.converters.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.converters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl ConverterLookup for ConverterRegistry {
    fn lookup(&self, name: &str) -> Option<Arc<dyn ValueConverter>> {
        self.get(name)
    }
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterRegistry")
            .field("converters", &self.names())
            .finish()
    }
}
