//! Plan cache contracts (CACHE-001 through CACHE-003)

use std::sync::Arc;

use crate::common::*;

/// CONTRACT CACHE-001: a pair is planned once and the plan is reused
#[test]
fn contract_plan_is_built_once_per_pair() {
    let mapper = mapper();
    let first: EmployeeDto = mapper.map(&john()).unwrap();
    let plan_a = mapper.plan_for::<Employee, EmployeeDto>().unwrap();
    let second: EmployeeDto = mapper.map(&john()).unwrap();
    let plan_b = mapper.plan_for::<Employee, EmployeeDto>().unwrap();

    assert_eq!(first, second);
    assert!(Arc::ptr_eq(&plan_a, &plan_b));
    assert_eq!(mapper.cache().len(), 1);
    assert_eq!(mapper.cache().misses(), 1);
    assert_eq!(mapper.cache().hits(), 3);
}

/// CONTRACT CACHE-002: clearing yields a structurally equal, distinct plan
#[test]
fn contract_clear_cache_rebuilds_equal_plan() {
    let mapper = mapper();
    let before = mapper.plan_for::<Employee, EmployeeDto>().unwrap();

    mapper.clear_cache();
    assert!(mapper.cache().is_empty());

    let after = mapper.plan_for::<Employee, EmployeeDto>().unwrap();
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(*before, *after);
}

/// CONTRACT CACHE-003: pairs are ordered; (A, B) and (B, A) are distinct
#[test]
fn contract_pairs_are_directional() {
    let mapper = mapper();
    let _: Contact = mapper.map(&ada()).unwrap();
    let _: Person = mapper.map(&Contact::default()).unwrap();

    assert_eq!(mapper.cache().len(), 2);
    assert!(mapper.cache().contains::<Person, Contact>());
    assert!(mapper.cache().contains::<Contact, Person>());
}

/// CONTRACT CACHE-004: mappers are shareable across threads
#[test]
fn contract_concurrent_mapping_shares_one_plan() {
    let mapper = Arc::new(mapper());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let mapper = Arc::clone(&mapper);
            std::thread::spawn(move || {
                let dto: EmployeeDto = mapper.map(&john()).unwrap();
                dto.full_name
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "John Doe");
    }
    assert_eq!(mapper.cache().len(), 1);
}
