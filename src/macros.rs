//! Declarative registration macros
//!
//! `mappable!` implements [`Mappable`](crate::Mappable) for an existing
//! struct from a property table; `mappable_enum!` declares an enum together
//! with its member table.

/// Implement [`Mappable`](crate::Mappable) for a struct.
///
/// Each entry maps a property name to a field. Optional settings follow in
/// braces:
///
/// - `alias: "Name"` / `aliases: ["A", "B"]` - names on the other side
/// - `converter: "name"` - converter registered on the `Mapper`
/// - `converter_with: expr` - converter instance
/// - `ignore` - never mapped
/// - `read_only` / `write_only` - restrict access
///
/// ```
/// use dtomap::mappable;
///
/// #[derive(Debug, Default)]
/// struct Contact {
///     email: String,
///     phone: Option<String>,
/// }
///
/// mappable!(Contact {
///     "Email" => email: String,
///     "Phone" => phone: Option<String> { alias: "Mobile" },
/// });
/// ```
#[macro_export]
macro_rules! mappable {
    ($name:ident { $($prop:literal => $field:ident : $ty:ty $({ $($opt:tt)* })?),* $(,)? }) => {
        impl $crate::domain::ports::Mappable for $name {
            fn describe() -> $crate::domain::entities::TypeDescriptor {
                $crate::domain::entities::TypeDescriptor::new(stringify!($name))
                    $(.property($crate::__mappable_property!(
                        $crate::domain::entities::PropertyDescriptor::read_write(
                            $prop,
                            <$ty as $crate::domain::ports::FieldValue>::value_type(),
                        )
                        $(, $($opt)*)?
                    )))*
            }

            fn read(&self, property: &str) -> ::std::option::Option<$crate::domain::value_objects::Value> {
                match property {
                    $($prop => ::std::option::Option::Some(
                        <$ty as $crate::domain::ports::FieldValue>::to_value(&self.$field),
                    ),)*
                    _ => ::std::option::Option::None,
                }
            }

            #[allow(unused_variables)]
            fn write(
                &mut self,
                property: &str,
                value: $crate::domain::value_objects::Value,
            ) -> $crate::error::MapResult<()> {
                match property {
                    $($prop => {
                        self.$field = <$ty as $crate::domain::ports::FieldValue>::from_value(value)?;
                        ::std::result::Result::Ok(())
                    })*
                    _ => ::std::result::Result::Err(
                        $crate::domain::ports::unknown_property::<Self>(property),
                    ),
                }
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __mappable_property {
    ($d:expr $(,)?) => {
        $d
    };
    ($d:expr, ignore $(, $($rest:tt)*)?) => {
        $crate::__mappable_property!($d.edit_annotation(|a| a.ignore()) $(, $($rest)*)?)
    };
    ($d:expr, read_only $(, $($rest:tt)*)?) => {
        $crate::__mappable_property!($d.deny_write() $(, $($rest)*)?)
    };
    ($d:expr, write_only $(, $($rest:tt)*)?) => {
        $crate::__mappable_property!($d.deny_read() $(, $($rest)*)?)
    };
    ($d:expr, alias: $alias:expr $(, $($rest:tt)*)?) => {
        $crate::__mappable_property!($d.edit_annotation(|a| a.alias($alias)) $(, $($rest)*)?)
    };
    ($d:expr, aliases: [$($alias:expr),* $(,)?] $(, $($rest:tt)*)?) => {
        $crate::__mappable_property!($d.edit_annotation(|a| a $(.alias($alias))*) $(, $($rest)*)?)
    };
    ($d:expr, converter: $converter:expr $(, $($rest:tt)*)?) => {
        $crate::__mappable_property!(
            $d.edit_annotation(|a| a.converter($crate::domain::entities::ConverterRef::named($converter)))
            $(, $($rest)*)?
        )
    };
    ($d:expr, converter_with: $converter:expr $(, $($rest:tt)*)?) => {
        $crate::__mappable_property!(
            $d.edit_annotation(|a| a.converter($crate::domain::entities::ConverterRef::instance($converter)))
            $(, $($rest)*)?
        )
    };
}

/// Declare an enum usable as a mappable field.
///
/// Every variant needs an explicit ordinal. Text is matched against
/// variant names (case-insensitively by default) and integers against
/// ordinals.
///
/// ```
/// dtomap::mappable_enum! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
///     pub enum Level {
///         #[default]
///         Junior = 1,
///         Senior = 2,
///     }
/// }
/// ```
#[macro_export]
macro_rules! mappable_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $ordinal:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $($(#[$vmeta])* $variant = $ordinal,)*
        }

        impl $crate::domain::ports::EnumField for $name {
            fn enum_info() -> &'static $crate::domain::value_objects::EnumInfo {
                static INFO: $crate::domain::value_objects::EnumInfo =
                    $crate::domain::value_objects::EnumInfo::new(
                        stringify!($name),
                        &[$((stringify!($variant), $ordinal)),*],
                    );
                &INFO
            }
        }

        impl $crate::domain::ports::FieldValue for $name {
            fn value_type() -> $crate::domain::value_objects::ValueType {
                $crate::domain::value_objects::ValueType::Enum(
                    <Self as $crate::domain::ports::EnumField>::enum_info(),
                )
            }

            fn to_value(&self) -> $crate::domain::value_objects::Value {
                let ordinal: i64 = match self {
                    $($name::$variant => $ordinal,)*
                };
                $crate::domain::value_objects::Value::Enum(
                    $crate::domain::value_objects::EnumValue::new(
                        <Self as $crate::domain::ports::EnumField>::enum_info(),
                        ordinal,
                    ),
                )
            }

            fn from_value(
                value: $crate::domain::value_objects::Value,
            ) -> $crate::error::MapResult<Self> {
                let ordinal = $crate::domain::ports::enum_ordinal::<Self>(&value)?;
                $(if ordinal == $ordinal {
                    return ::std::result::Result::Ok($name::$variant);
                })*
                ::std::result::Result::Err($crate::error::MapError::coercion(
                    &value,
                    &<Self as $crate::domain::ports::FieldValue>::value_type(),
                    "not a member",
                ))
            }
        }
    };
}
