//! Converter contracts (CONV-001 through CONV-005)

use std::sync::Arc;

use crate::common::*;
use dtomap::domain::services::ConverterInvoker;
use dtomap::{BoundConverter, Direction, MapError, Mapper, Value};

/// CONTRACT CONV-001: a two-value converter on one property is an arity error
#[test]
fn contract_arity_mismatch_never_drops_data() {
    let err = mapper().map::<Employee, BrokenName>(&john()).unwrap_err();

    assert_eq!(err.property(), Some("FullName"));
    assert!(matches!(
        err.root_cause(),
        MapError::ArityMismatch {
            expected: 2,
            actual: 1
        }
    ));
}

/// CONTRACT CONV-002: a forward-only converter is never called backward
#[test]
fn contract_one_way_converter_refuses_reverse() {
    let unmask = BoundConverter::new(Arc::new(MaskEmail), Direction::Backward);

    let err = ConverterInvoker::invoke(Value::text("j***h@example.com"), &unmask).unwrap_err();

    assert!(matches!(
        err,
        MapError::OneWayConverter { ref converter } if converter == "mask_email"
    ));
}

/// CONTRACT CONV-003: an unregistered converter name fails the plan build
#[test]
fn contract_missing_converter_is_reported() {
    let mapper = Mapper::new();
    let err = mapper.map::<Employee, EmployeeDto>(&john()).unwrap_err();

    assert_eq!(err.property(), Some("FullName"));
    assert!(matches!(
        err.root_cause(),
        MapError::ConverterContractMissing { converter } if converter == "full_name"
    ));
    assert!(mapper.cache().is_empty());
}

/// CONTRACT CONV-004: converter failures keep their cause
#[test]
fn contract_converter_failure_is_wrapped_with_property() {
    let employee = Employee {
        email: "not-an-address".into(),
        ..john()
    };

    let err = mapper().map::<Employee, EmployeeDto>(&employee).unwrap_err();

    assert_eq!(err.property(), Some("Email"));
    assert_eq!(
        err.to_string(),
        "failed to map property 'Email': converter 'mask_email' failed: 'not-an-address' is not an email address"
    );
}

/// CONTRACT CONV-005: forward applies whenever the value fits the declared source
#[test]
fn contract_source_annotated_converter_runs_forward() {
    let mapper = mapper();
    let profile = PublicProfile {
        email: "jane.smith@example.com".into(),
    };

    let employee: Employee = mapper.map(&profile).unwrap();

    assert_eq!(employee.email, "j***h@example.com");
    let plan = mapper.plan_for::<PublicProfile, Employee>().unwrap();
    assert_eq!(
        plan.resolutions[0].to_string(),
        "Email <- Email via mask_email (forward)"
    );
}
