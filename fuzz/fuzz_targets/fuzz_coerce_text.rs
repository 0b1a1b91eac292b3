#![no_main]

use dtomap::domain::services::ValueCoercer;
use dtomap::{FloatKind, IntKind, Value, ValueType};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let coercer = ValueCoercer::default();
    for target in [
        ValueType::Bool,
        ValueType::Int(IntKind::I16),
        ValueType::Int(IntKind::U64),
        ValueType::Float(FloatKind::F64),
        ValueType::Decimal,
        ValueType::Date,
        ValueType::DateTime,
        ValueType::Uuid,
    ] {
        if let Ok(coerced) = coercer.coerce(Value::text(text), &target) {
            // Whatever parsed must render back to text
            let _ = coercer.coerce(coerced, &ValueType::Text);
        }
    }
});
