//! Declared type metadata
//!
//! `ValueType` describes the declared type of a property or of a converter's
//! input/output. Runtime values carry no integer width, so compatibility is
//! checked by family and width is restored by coercion.

use std::fmt;

use super::EnumInfo;

/// Integer widths a property may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntKind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
}

impl IntKind {
    /// Inclusive bounds of this width
    pub fn bounds(&self) -> (i128, i128) {
        match self {
            IntKind::I8 => (i8::MIN as i128, i8::MAX as i128),
            IntKind::I16 => (i16::MIN as i128, i16::MAX as i128),
            IntKind::I32 => (i32::MIN as i128, i32::MAX as i128),
            IntKind::I64 => (i64::MIN as i128, i64::MAX as i128),
            IntKind::U8 => (0, u8::MAX as i128),
            IntKind::U16 => (0, u16::MAX as i128),
            IntKind::U32 => (0, u32::MAX as i128),
            IntKind::U64 => (0, u64::MAX as i128),
        }
    }

    pub fn contains(&self, value: i128) -> bool {
        let (min, max) = self.bounds();
        (min..=max).contains(&value)
    }

    pub fn name(&self) -> &'static str {
        match self {
            IntKind::I8 => "i8",
            IntKind::I16 => "i16",
            IntKind::I32 => "i32",
            IntKind::I64 => "i64",
            IntKind::U8 => "u8",
            IntKind::U16 => "u16",
            IntKind::U32 => "u32",
            IntKind::U64 => "u64",
        }
    }
}

/// Floating point widths a property may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatKind {
    F32,
    F64,
}

/// Declared type of a property or converter endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Accepts every value
    Any,
    Bool,
    Int(IntKind),
    Float(FloatKind),
    Decimal,
    Text,
    Date,
    DateTime,
    Uuid,
    Enum(&'static EnumInfo),
    /// Nullable wrapper
    Optional(Box<ValueType>),
    /// Fixed-arity tuple
    Tuple(Vec<ValueType>),
    /// Homogeneous sequence
    List(Box<ValueType>),
    /// Dynamic property bag
    Bag,
    /// A host type the mapper does not look into
    Named(&'static str),
}

impl ValueType {
    pub fn optional(inner: ValueType) -> Self {
        ValueType::Optional(Box::new(inner))
    }

    pub fn list(element: ValueType) -> Self {
        ValueType::List(Box::new(element))
    }

    /// Strip any number of `Optional` wrappers
    pub fn unwrap_optional(&self) -> &ValueType {
        match self {
            ValueType::Optional(inner) => inner.unwrap_optional(),
            other => other,
        }
    }

    /// Number of values a tuple type holds, if this is a tuple
    pub fn tuple_arity(&self) -> Option<usize> {
        match self.unwrap_optional() {
            ValueType::Tuple(elements) => Some(elements.len()),
            _ => None,
        }
    }

    /// Whether a slot of this type can receive a value of type `actual`.
    ///
    /// True for exact identity, when `self` is a superset of `actual`
    /// (`Any`, nullable wrappers, same numeric family), or when both are
    /// aggregates of the same shape. Element types of aggregates are not
    /// compared.
    pub fn accepts(&self, actual: &ValueType) -> bool {
        match (self, actual) {
            (ValueType::Any, _) => true,
            (expected, actual) if expected == actual => true,
            (ValueType::Optional(inner), actual) => inner.accepts(actual),
            (expected, ValueType::Optional(inner)) => expected.accepts(inner),
            (ValueType::Int(_), ValueType::Int(_)) => true,
            (ValueType::Float(_), ValueType::Float(_)) => true,
            (ValueType::Tuple(a), ValueType::Tuple(b)) => a.len() == b.len(),
            (ValueType::List(_), ValueType::List(_)) => true,
            (ValueType::Enum(a), ValueType::Enum(b)) => a.name() == b.name(),
            _ => false,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Any => write!(f, "any"),
            ValueType::Bool => write!(f, "bool"),
            ValueType::Int(kind) => write!(f, "{}", kind.name()),
            ValueType::Float(FloatKind::F32) => write!(f, "f32"),
            ValueType::Float(FloatKind::F64) => write!(f, "f64"),
            ValueType::Decimal => write!(f, "decimal"),
            ValueType::Text => write!(f, "text"),
            ValueType::Date => write!(f, "date"),
            ValueType::DateTime => write!(f, "datetime"),
            ValueType::Uuid => write!(f, "uuid"),
            ValueType::Enum(info) => write!(f, "enum {}", info.name()),
            ValueType::Optional(inner) => write!(f, "Option<{}>", inner),
            ValueType::Tuple(elements) => {
                write!(f, "(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, ")")
            }
            ValueType::List(element) => write!(f, "[{}]", element),
            ValueType::Bag => write!(f, "bag"),
            ValueType::Named(name) => write!(f, "{}", name),
        }
    }
}
