//! Null-input contracts (NULL-001 through NULL-003)
//!
//! Absent input never fails and never builds a plan.

use crate::common::*;
use dtomap::{Mapper, PropertyBag};

/// CONTRACT NULL-001: absent source yields the target default
#[test]
fn contract_absent_source_yields_default() {
    let mapper = mapper();
    let dto: EmployeeDto = mapper.map_one::<Employee, EmployeeDto>(None).unwrap();

    assert_eq!(dto, EmployeeDto::default());
    assert!(mapper.cache().is_empty(), "no plan may be built for absent input");
}

/// CONTRACT NULL-002: absent sequence yields an empty sequence
#[test]
fn contract_absent_sequence_yields_empty() {
    let mapper = Mapper::new();
    let records: Vec<PersonRecord> = mapper.map_many::<Person, PersonRecord>(None).unwrap();
    assert!(records.is_empty());
}

/// CONTRACT NULL-003: null property values are never written
#[test]
fn contract_null_values_are_not_written() {
    let mapper = Mapper::new();
    let record: PersonRecord = mapper.map(&ada()).unwrap();
    assert_eq!(record.email, None);

    let bag: PropertyBag = mapper.map(&ada()).unwrap();
    assert!(!bag.contains("Email"));
}
