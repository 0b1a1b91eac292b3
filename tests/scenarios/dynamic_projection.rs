//! Scenario: dumping a record for an audit log
//!
//! Records are projected into an untyped bag and serialized; empty values
//! are left out.

use crate::common::*;
use dtomap::{PropertyBag, Value};

#[test]
fn scenario_projection_keeps_populated_properties() {
    let mapper = mapper();
    let bag: PropertyBag = mapper.map(&ada()).unwrap();

    assert_eq!(bag.names().collect::<Vec<_>>(), vec!["First", "Last"]);
    assert_eq!(bag.get("First"), Some(&Value::text("Ada")));
    assert_eq!(
        bag.to_json().unwrap(),
        r#"{"First":"Ada","Last":"Lovelace"}"#
    );
}

#[test]
fn scenario_projection_renders_rich_values() {
    let bag = mapper().project(Some(&john())).unwrap();

    insta::assert_snapshot!(bag.to_string(), @"{FirstName: John, LastName: Doe, BirthDate: 1990-05-15, Salary: 75000.50, Email: john.doe@example.com, Department: Sales}");
}

#[test]
fn scenario_projecting_nothing_yields_empty_bag() {
    let bag = mapper().project::<Employee>(None).unwrap();
    assert!(bag.is_empty());
}
