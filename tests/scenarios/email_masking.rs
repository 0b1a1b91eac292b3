//! Scenario: masking email addresses for public display
//!
//! Masking is one-way. Asking for the original back must fail instead of
//! fabricating an address.

use std::sync::Arc;

use crate::common::*;
use dtomap::domain::services::ConverterInvoker;
use dtomap::{BoundConverter, Direction, MapError, Value, ValueType};

#[test]
fn scenario_email_is_masked_forward() {
    let masked = ConverterInvoker::invoke_with_hints(
        Value::text("jane.smith@example.com"),
        Arc::new(MaskEmail),
        &ValueType::Text,
        Some(&ValueType::Text),
    )
    .unwrap();

    assert_eq!(masked, Value::text("j***h@example.com"));
}

#[test]
fn scenario_public_profile_masks_on_the_way_out() {
    let profile = PublicProfile {
        email: "jane.smith@example.com".into(),
    };

    let employee: Employee = mapper().map(&profile).unwrap();

    assert_eq!(employee.email, "j***h@example.com");
}

#[test]
fn scenario_unmasking_is_refused() {
    let unmask = BoundConverter::new(Arc::new(MaskEmail), Direction::Backward);

    let err = ConverterInvoker::invoke(Value::text("j***h@example.com"), &unmask).unwrap_err();

    assert_eq!(
        err.to_string(),
        "converter 'mask_email' only supports forward conversion"
    );
    assert!(matches!(err, MapError::OneWayConverter { .. }));
}
