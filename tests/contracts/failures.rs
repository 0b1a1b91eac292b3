//! Failure contracts (FAIL-001 through FAIL-003)
//!
//! Execution-time failures surface as one `Mapping` error naming the
//! property, with the original cause underneath.

use crate::common::*;
use dtomap::{mappable, Converter, ConverterCapability, MapError, Mapper};

#[derive(Debug, Default)]
struct Reading {
    count: String,
}

mappable!(Reading {
    "Count" => count: String,
});

#[derive(Debug, Default)]
struct Tally {
    count: i32,
}

mappable!(Tally {
    "Count" => count: i32,
});

/// Upper-cases a name; yields a single value, never a pair
struct Shout;

impl Converter for Shout {
    type Source = String;
    type Target = String;
    const NAME: &'static str = "shout";
    const CAPABILITY: ConverterCapability = ConverterCapability::ForwardOnly;

    fn convert_to(&self, name: String) -> anyhow::Result<String> {
        Ok(name.to_uppercase())
    }
}

/// Always yields three parts
struct SplitThree;

impl Converter for SplitThree {
    type Source = String;
    type Target = (String, String, String);
    const NAME: &'static str = "split_three";
    const CAPABILITY: ConverterCapability = ConverterCapability::ForwardOnly;

    fn convert_to(&self, name: String) -> anyhow::Result<(String, String, String)> {
        let mut parts = name.splitn(3, ' ').map(str::to_string);
        Ok((
            parts.next().unwrap_or_default(),
            parts.next().unwrap_or_default(),
            parts.next().unwrap_or_default(),
        ))
    }
}

#[derive(Debug, Default)]
struct Headline {
    name: String,
}

mappable!(Headline {
    "Name" => name: String { aliases: ["First", "Last"], converter_with: Shout },
});

#[derive(Debug, Default)]
struct Trio {
    name: String,
}

mappable!(Trio {
    "Name" => name: String { aliases: ["First", "Last"], converter_with: SplitThree },
});

/// CONTRACT FAIL-001: an unparseable value is a coercion error on its property
#[test]
fn contract_coercion_failure_names_the_property() {
    let err = Mapper::new()
        .map::<Reading, Tally>(&Reading {
            count: "abc".into(),
        })
        .unwrap_err();

    assert_eq!(err.property(), Some("Count"));
    assert!(matches!(err.root_cause(), MapError::Coercion { .. }));
}

/// CONTRACT FAIL-002: a scalar converter output cannot feed several targets
#[test]
fn contract_scalar_output_is_unsupported_aggregate_shape() {
    let err = Mapper::new()
        .map::<Headline, PersonRecord>(&Headline {
            name: "Ada Lovelace".into(),
        })
        .unwrap_err();

    assert_eq!(err.property(), Some("Name"));
    assert!(matches!(
        err.root_cause(),
        MapError::UnsupportedAggregateShape { .. }
    ));
}

/// CONTRACT FAIL-003: a decomposed output must match the target count
#[test]
fn contract_decomposed_output_checks_arity() {
    let err = Mapper::new()
        .map::<Trio, PersonRecord>(&Trio {
            name: "Ada King Lovelace".into(),
        })
        .unwrap_err();

    assert_eq!(err.property(), Some("Name"));
    assert!(matches!(
        err.root_cause(),
        MapError::ArityMismatch {
            expected: 2,
            actual: 3
        }
    ));
}
