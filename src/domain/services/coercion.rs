//! Value coercion
//!
//! Aligns a value to a declared type when no converter applies, or after a
//! converter's raw output. Rules, in order: null passes through, nullable
//! targets are unwrapped, conforming values are returned unchanged, then
//! text, enum and scalar conversions. Anything else passes through.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::CoercionConfig;
use crate::domain::value_objects::{EnumInfo, EnumValue, FloatKind, IntKind, Value, ValueType};
use crate::error::{MapError, MapResult};

#[derive(Debug, Clone, Default)]
pub struct ValueCoercer {
    options: CoercionConfig,
}

impl ValueCoercer {
    pub fn new(options: CoercionConfig) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CoercionConfig {
        &self.options
    }

    /// Coerce `value` to `target`
    pub fn coerce(&self, value: Value, target: &ValueType) -> MapResult<Value> {
        if value.is_null() {
            return Ok(Value::Null);
        }

        let target = target.unwrap_optional();
        if conforms(&value, target) {
            return Ok(value);
        }

        match target {
            ValueType::Text => Ok(Value::Text(value.to_string())),
            ValueType::Enum(info) => self.to_enum(value, info, target),
            ValueType::Bool => to_bool(value, target),
            ValueType::Int(kind) => to_int(value, *kind, target),
            ValueType::Float(kind) => to_float(value, *kind, target),
            ValueType::Decimal => to_decimal(value, target),
            ValueType::Date => self.to_date(value, target),
            ValueType::DateTime => self.to_datetime(value, target),
            ValueType::Uuid => to_uuid(value, target),
            _ => Ok(value),
        }
    }

    fn to_enum(
        &self,
        value: Value,
        info: &'static EnumInfo,
        target: &ValueType,
    ) -> MapResult<Value> {
        let ordinal = match &value {
            Value::Text(s) => info.ordinal_of(s, self.options.enum_ignore_case),
            Value::Enum(e) => Some(e.ordinal()),
            other => other.as_i128().and_then(|i| i64::try_from(i).ok()),
        };

        match ordinal {
            Some(ordinal) if info.name_of(ordinal).is_some() => {
                Ok(Value::Enum(EnumValue::new(info, ordinal)))
            }
            _ => Err(MapError::coercion(
                &value,
                target,
                format!("not a member of {}", info.name()),
            )),
        }
    }

    fn to_date(&self, value: Value, target: &ValueType) -> MapResult<Value> {
        match &value {
            Value::DateTime(dt) => Ok(Value::Date(dt.date_naive())),
            Value::Text(s) => self
                .parse_date(s.trim())
                .map(Value::Date)
                .ok_or_else(|| MapError::coercion(&value, target, "unrecognized date format")),
            _ => Err(unsupported(&value, target)),
        }
    }

    fn to_datetime(&self, value: Value, target: &ValueType) -> MapResult<Value> {
        match &value {
            Value::Date(d) => Ok(Value::DateTime(midnight_utc(*d))),
            Value::Text(s) => self
                .parse_datetime(s.trim())
                .map(Value::DateTime)
                .ok_or_else(|| {
                    MapError::coercion(&value, target, "unrecognized date/time format")
                }),
            _ => Err(unsupported(&value, target)),
        }
    }

    fn parse_date(&self, s: &str) -> Option<NaiveDate> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc).date_naive());
        }
        self.options
            .date_formats
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    }

    fn parse_datetime(&self, s: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        self.options
            .datetime_formats
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(|naive| Utc.from_utc_datetime(&naive))
            .or_else(|| self.parse_date(s).map(midnight_utc))
    }
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN))
}

/// Whether `value` already is a value of `target`
fn conforms(value: &Value, target: &ValueType) -> bool {
    match (target, value) {
        (ValueType::Any, _) => true,
        (ValueType::Bool, Value::Bool(_)) => true,
        (ValueType::Int(kind), v) => v.as_i128().is_some_and(|i| kind.contains(i)),
        (ValueType::Float(kind), Value::Float(x)) => fits_float(*kind, *x),
        (ValueType::Decimal, Value::Decimal(_)) => true,
        (ValueType::Text, Value::Text(_)) => true,
        (ValueType::Date, Value::Date(_)) => true,
        (ValueType::DateTime, Value::DateTime(_)) => true,
        (ValueType::Uuid, Value::Uuid(_)) => true,
        (ValueType::Enum(info), Value::Enum(e)) => e.info().name() == info.name(),
        (ValueType::Tuple(elements), Value::Tuple(items)) => elements.len() == items.len(),
        (ValueType::List(_), Value::List(_)) => true,
        (ValueType::Bag, Value::Bag(_)) => true,
        _ => false,
    }
}

fn unsupported(value: &Value, target: &ValueType) -> MapError {
    MapError::coercion(
        value,
        target,
        format!("no conversion from {}", value.value_type()),
    )
}

fn to_bool(value: Value, target: &ValueType) -> MapResult<Value> {
    match &value {
        Value::Int(_) | Value::UInt(_) => Ok(Value::Bool(value.as_i128() != Some(0))),
        Value::Float(x) => Ok(Value::Bool(*x != 0.0)),
        Value::Decimal(d) => Ok(Value::Bool(!d.is_zero())),
        Value::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => Err(MapError::coercion(&value, target, "expected 'true' or 'false'")),
        },
        _ => Err(unsupported(&value, target)),
    }
}

fn to_int(value: Value, kind: IntKind, target: &ValueType) -> MapResult<Value> {
    let wide: Option<i128> = match &value {
        Value::Int(_) | Value::UInt(_) => value.as_i128(),
        Value::Bool(b) => Some(*b as i128),
        Value::Float(x) if x.is_finite() => x.round().to_i128(),
        Value::Decimal(d) => d.round().to_i128(),
        Value::Enum(e) => Some(e.ordinal() as i128),
        Value::Text(s) => s.trim().parse::<i128>().ok(),
        _ => return Err(unsupported(&value, target)),
    };

    let wide = wide.ok_or_else(|| MapError::coercion(&value, target, "not an integer"))?;
    if !kind.contains(wide) {
        return Err(MapError::coercion(
            &value,
            target,
            format!("out of range for {}", kind.name()),
        ));
    }

    Ok(match i64::try_from(wide) {
        Ok(i) => Value::Int(i),
        Err(_) => Value::UInt(wide as u64),
    })
}

fn to_float(value: Value, kind: FloatKind, target: &ValueType) -> MapResult<Value> {
    let x = match &value {
        Value::Float(x) => Some(*x),
        Value::Int(i) => Some(*i as f64),
        Value::UInt(u) => Some(*u as f64),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Decimal(d) => d.to_f64(),
        Value::Text(s) => s.trim().parse::<f64>().ok(),
        _ => return Err(unsupported(&value, target)),
    };

    let x = x.ok_or_else(|| MapError::coercion(&value, target, "not a number"))?;
    if !fits_float(kind, x) {
        return Err(MapError::coercion(&value, target, "out of range for f32"));
    }
    Ok(Value::Float(match kind {
        FloatKind::F32 => x as f32 as f64,
        FloatKind::F64 => x,
    }))
}

/// Finite values must stay finite once narrowed to `kind`
fn fits_float(kind: FloatKind, x: f64) -> bool {
    match kind {
        FloatKind::F32 => !x.is_finite() || (x as f32).is_finite(),
        FloatKind::F64 => true,
    }
}

fn to_decimal(value: Value, target: &ValueType) -> MapResult<Value> {
    let d = match &value {
        Value::Int(i) => Some(Decimal::from(*i)),
        Value::UInt(u) => Some(Decimal::from(*u)),
        Value::Bool(b) => Some(Decimal::from(*b as i64)),
        Value::Float(x) => Decimal::from_f64(*x),
        Value::Text(s) => s.trim().parse::<Decimal>().ok(),
        _ => return Err(unsupported(&value, target)),
    };

    d.map(Value::Decimal)
        .ok_or_else(|| MapError::coercion(&value, target, "not a decimal number"))
}

fn to_uuid(value: Value, target: &ValueType) -> MapResult<Value> {
    match &value {
        Value::Text(s) => Uuid::parse_str(s.trim())
            .map(Value::Uuid)
            .map_err(|e| MapError::coercion(&value, target, e.to_string())),
        _ => Err(unsupported(&value, target)),
    }
}
