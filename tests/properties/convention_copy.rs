//! Property tests for same-name copying.

use proptest::prelude::*;

use crate::common::*;
use dtomap::Mapper;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: convention mapping preserves every same-named value.
    #[test]
    fn property_convention_copy_preserves_values(
        first in ".*",
        last in ".*",
        email in proptest::option::of(".*"),
    ) {
        let person = Person { first, last, email };

        let record: PersonRecord = Mapper::new().map(&person).unwrap();

        prop_assert_eq!(record.first, person.first);
        prop_assert_eq!(record.last, person.last);
        prop_assert_eq!(record.email, person.email);
    }

    /// PROPERTY: projection holds exactly the non-null properties.
    #[test]
    fn property_projection_omits_only_nulls(
        first in ".*",
        email in proptest::option::of("[a-z]{1,8}@[a-z]{1,8}\\.com"),
    ) {
        let person = Person { first, last: String::new(), email };

        let bag = Mapper::new().project(Some(&person)).unwrap();

        prop_assert_eq!(bag.contains("Email"), person.email.is_some());
        prop_assert!(bag.contains("First"));
        prop_assert!(bag.contains("Last"));
    }
}
