//! FieldValue port - bridge between Rust field types and [`Value`]
//!
//! `from_value` is strict: the engine coerces a value to the field's
//! declared type before handing it over, so only the matching variant (or
//! an in-range integer) is accepted.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::value_objects::{
    EnumInfo, FloatKind, IntKind, PropertyBag, Value, ValueType,
};
use crate::error::{MapError, MapResult};

/// A Rust type that can be stored in a mappable property
pub trait FieldValue: Sized {
    /// Declared type of a property of this Rust type
    fn value_type() -> ValueType;

    fn to_value(&self) -> Value;

    fn from_value(value: Value) -> MapResult<Self>;
}

/// An enumeration registered with [`mappable_enum!`](crate::mappable_enum)
pub trait EnumField: FieldValue {
    fn enum_info() -> &'static EnumInfo;
}

/// Ordinal carried by `value` when it names a member of `T`
pub fn enum_ordinal<T: EnumField>(value: &Value) -> MapResult<i64> {
    let info = T::enum_info();
    match value {
        Value::Enum(e) if e.info().name() == info.name() && info.name_of(e.ordinal()).is_some() => {
            Ok(e.ordinal())
        }
        _ => Err(mismatch::<T>(value)),
    }
}

fn mismatch<T: FieldValue>(value: &Value) -> MapError {
    MapError::coercion(
        value,
        &T::value_type(),
        format!("expected {} value", T::value_type()),
    )
}

macro_rules! int_field {
    ($($t:ty => $kind:ident),* $(,)?) => {
        $(
            impl FieldValue for $t {
                fn value_type() -> ValueType {
                    ValueType::Int(IntKind::$kind)
                }

                fn to_value(&self) -> Value {
                    match i64::try_from(*self) {
                        Ok(i) => Value::Int(i),
                        Err(_) => Value::UInt(*self as u64),
                    }
                }

                fn from_value(value: Value) -> MapResult<Self> {
                    value
                        .as_i128()
                        .and_then(|i| <$t>::try_from(i).ok())
                        .ok_or_else(|| mismatch::<Self>(&value))
                }
            }
        )*
    };
}

int_field!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
);

impl FieldValue for f64 {
    fn value_type() -> ValueType {
        ValueType::Float(FloatKind::F64)
    }

    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    fn from_value(value: Value) -> MapResult<Self> {
        match value {
            Value::Float(x) => Ok(x),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl FieldValue for f32 {
    fn value_type() -> ValueType {
        ValueType::Float(FloatKind::F32)
    }

    fn to_value(&self) -> Value {
        Value::Float(*self as f64)
    }

    fn from_value(value: Value) -> MapResult<Self> {
        match value {
            Value::Float(x) => Ok(x as f32),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

macro_rules! simple_field {
    ($($t:ty => $variant:ident / $ty:ident),* $(,)?) => {
        $(
            impl FieldValue for $t {
                fn value_type() -> ValueType {
                    ValueType::$ty
                }

                fn to_value(&self) -> Value {
                    Value::$variant(self.clone())
                }

                fn from_value(value: Value) -> MapResult<Self> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(mismatch::<Self>(&other)),
                    }
                }
            }
        )*
    };
}

simple_field!(
    bool => Bool / Bool,
    Decimal => Decimal / Decimal,
    String => Text / Text,
    NaiveDate => Date / Date,
    DateTime<Utc> => DateTime / DateTime,
    Uuid => Uuid / Uuid,
    PropertyBag => Bag / Bag,
);

/// Untyped property: any value passes through unchanged
impl FieldValue for Value {
    fn value_type() -> ValueType {
        ValueType::Any
    }

    fn to_value(&self) -> Value {
        self.clone()
    }

    fn from_value(value: Value) -> MapResult<Self> {
        Ok(value)
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn value_type() -> ValueType {
        ValueType::optional(T::value_type())
    }

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: Value) -> MapResult<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn value_type() -> ValueType {
        ValueType::list(T::value_type())
    }

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }

    fn from_value(value: Value) -> MapResult<Self> {
        match value {
            Value::List(items) | Value::Tuple(items) => {
                items.into_iter().map(T::from_value).collect()
            }
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

macro_rules! tuple_field {
    ($len:expr => $($name:ident $var:ident),+) => {
        impl<$($name: FieldValue),+> FieldValue for ($($name,)+) {
            fn value_type() -> ValueType {
                ValueType::Tuple(vec![$($name::value_type()),+])
            }

            fn to_value(&self) -> Value {
                let ($($var,)+) = self;
                Value::Tuple(vec![$($var.to_value()),+])
            }

            fn from_value(value: Value) -> MapResult<Self> {
                match value {
                    Value::Tuple(items) | Value::List(items) => {
                        if items.len() != $len {
                            return Err(MapError::ArityMismatch {
                                expected: $len,
                                actual: items.len(),
                            });
                        }
                        let mut items = items.into_iter();
                        $(
                            let $var = $name::from_value(items.next().unwrap_or_default())?;
                        )+
                        Ok(($($var,)+))
                    }
                    other => Err(mismatch::<Self>(&other)),
                }
            }
        }
    };
}

tuple_field!(2 => A a, B b);
tuple_field!(3 => A a, B b, C c);
tuple_field!(4 => A a, B b, C c, D d);
