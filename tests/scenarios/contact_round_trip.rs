//! Scenario: editing a contact through a form
//!
//! The form shows one name field. Saving splits it back into first and
//! last name using the same converter in reverse.

use crate::common::*;
use dtomap::ResolutionStrategy;

#[test]
fn scenario_contact_round_trips_through_form() {
    let mapper = mapper();
    let person = Person {
        email: Some("ada@example.com".into()),
        ..ada()
    };

    let contact: Contact = mapper.map(&person).unwrap();
    assert_eq!(contact.name, "Ada Lovelace");
    assert_eq!(contact.email.as_deref(), Some("ada@example.com"));

    let saved: Person = mapper.map(&contact).unwrap();
    assert_eq!(saved, person);
}

#[test]
fn scenario_reverse_plan_decomposes_backward() {
    let mapper = mapper();
    let plan = mapper.plan_for::<Contact, Person>().unwrap();

    assert_eq!(plan.strategy, ResolutionStrategy::SourceDriven);
    insta::assert_snapshot!(plan.to_string(), @r"
    Contact -> Person (source-driven)
      [First, Last] <- Name via full_name (backward)
      Email <- Email
    ");
}

#[test]
fn scenario_single_word_name_leaves_last_name_empty() {
    let contact = Contact {
        name: "Plato".into(),
        email: None,
    };

    let person: Person = mapper().map(&contact).unwrap();

    assert_eq!(person.first, "Plato");
    assert_eq!(person.last, "");
    assert_eq!(person.email, None);
}
