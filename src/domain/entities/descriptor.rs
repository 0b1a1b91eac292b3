//! Type and property descriptors
//!
//! A [`TypeDescriptor`] is the explicit `describe_type` table of a mappable
//! type: one [`PropertyDescriptor`] per accessible property, in declaration
//! order. Hosts build it by hand or through [`mappable!`](crate::mappable).

use super::MappingAnnotation;
use crate::domain::value_objects::ValueType;

/// One accessible property of a type
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    pub name: String,
    pub declared_type: ValueType,
    pub can_read: bool,
    pub can_write: bool,
    pub annotation: Option<MappingAnnotation>,
}

impl PropertyDescriptor {
    pub fn read_write(name: impl Into<String>, declared_type: ValueType) -> Self {
        Self {
            name: name.into(),
            declared_type,
            can_read: true,
            can_write: true,
            annotation: None,
        }
    }

    pub fn read_only(name: impl Into<String>, declared_type: ValueType) -> Self {
        Self {
            can_write: false,
            ..Self::read_write(name, declared_type)
        }
    }

    pub fn write_only(name: impl Into<String>, declared_type: ValueType) -> Self {
        Self {
            can_read: false,
            ..Self::read_write(name, declared_type)
        }
    }

    pub fn annotate(mut self, annotation: MappingAnnotation) -> Self {
        self.annotation = Some(annotation);
        self
    }

    /// Apply `edit` to the annotation, starting from an empty one
    pub fn edit_annotation(
        mut self,
        edit: impl FnOnce(MappingAnnotation) -> MappingAnnotation,
    ) -> Self {
        self.annotation = Some(edit(self.annotation.take().unwrap_or_default()));
        self
    }

    pub fn deny_read(mut self) -> Self {
        self.can_read = false;
        self
    }

    pub fn deny_write(mut self) -> Self {
        self.can_write = false;
        self
    }

    pub fn is_annotated(&self) -> bool {
        self.annotation.is_some()
    }

    pub fn is_ignored(&self) -> bool {
        self.annotation.as_ref().is_some_and(|a| a.ignored)
    }
}

/// Property table of one type
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    pub type_name: &'static str,
    pub properties: Vec<PropertyDescriptor>,
}

impl TypeDescriptor {
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            properties: Vec::new(),
        }
    }

    pub fn property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }
}
