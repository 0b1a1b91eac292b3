//! Property catalog
//!
//! Name-keyed view of a type's accessible properties. Readable properties
//! feed the source side of a plan, writable ones the target side.

use std::collections::HashMap;

use crate::domain::entities::{PropertyDescriptor, TypeDescriptor};

/// Which accessor a catalog is harvested for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

/// Duplicate-free, declaration-ordered property table
#[derive(Debug, Clone)]
pub struct PropertyCatalog {
    type_name: &'static str,
    entries: Vec<PropertyDescriptor>,
    index: HashMap<String, usize>,
}

impl PropertyCatalog {
    /// Harvest the properties of `descriptor` that support `access`.
    ///
    /// The first property with a given name wins; later duplicates are
    /// dropped.
    pub fn harvest(descriptor: &TypeDescriptor, access: Access) -> Self {
        let mut entries = Vec::new();
        let mut index = HashMap::new();

        for property in &descriptor.properties {
            let accessible = match access {
                Access::Read => property.can_read,
                Access::Write => property.can_write,
            };
            if !accessible || index.contains_key(&property.name) {
                continue;
            }
            index.insert(property.name.clone(), entries.len());
            entries.push(property.clone());
        }

        Self {
            type_name: descriptor.type_name,
            entries,
            index,
        }
    }

    pub fn readable(descriptor: &TypeDescriptor) -> Self {
        Self::harvest(descriptor, Access::Read)
    }

    pub fn writable(descriptor: &TypeDescriptor) -> Self {
        Self::harvest(descriptor, Access::Write)
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn get(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any property carries a mapping annotation
    pub fn is_annotated(&self) -> bool {
        self.entries.iter().any(PropertyDescriptor::is_annotated)
    }
}
