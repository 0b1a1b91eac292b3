//! Property tests for value coercion.

use proptest::prelude::*;

use dtomap::domain::services::ValueCoercer;
use dtomap::{FloatKind, IntKind, Value, ValueType};

fn targets() -> Vec<ValueType> {
    vec![
        ValueType::Bool,
        ValueType::Int(IntKind::I8),
        ValueType::Int(IntKind::U64),
        ValueType::Float(FloatKind::F32),
        ValueType::Decimal,
        ValueType::Date,
        ValueType::DateTime,
        ValueType::Uuid,
        ValueType::optional(ValueType::Int(IntKind::I32)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: coercing arbitrary text never panics.
    #[test]
    fn property_text_coercion_never_panics(text in ".*") {
        let coercer = ValueCoercer::default();
        for target in targets() {
            let _ = coercer.coerce(Value::text(text.clone()), &target);
        }
    }

    /// PROPERTY: out-of-range floats and integers are rejected, not wrapped.
    #[test]
    fn property_numeric_coercion_never_panics(int in any::<i64>(), float in any::<f64>()) {
        let coercer = ValueCoercer::default();
        for target in targets() {
            let _ = coercer.coerce(Value::Int(int), &target);
            let _ = coercer.coerce(Value::Float(float), &target);
        }

        match coercer.coerce(Value::Int(int), &ValueType::Int(IntKind::I8)) {
            Ok(Value::Int(v)) => prop_assert_eq!(v, int),
            Ok(other) => prop_assert!(false, "unexpected value {:?}", other),
            Err(_) => prop_assert!(i8::try_from(int).is_err()),
        }
    }

    /// PROPERTY: integers survive a trip through text.
    #[test]
    fn property_integer_text_round_trip(int in any::<i64>()) {
        let coercer = ValueCoercer::default();
        let text = coercer.coerce(Value::Int(int), &ValueType::Text).unwrap();
        let back = coercer
            .coerce(text, &ValueType::Int(IntKind::I64))
            .unwrap();
        prop_assert_eq!(back, Value::Int(int));
    }
}
