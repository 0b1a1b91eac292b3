//! Enumeration metadata
//!
//! Enums are mapped through their member table: a name and an ordinal per
//! member. Tables are `'static` and are normally declared with
//! [`mappable_enum!`](crate::mappable_enum).

use std::fmt;

/// Member table of a mappable enumeration
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct EnumInfo {
    name: &'static str,
    members: &'static [(&'static str, i64)],
}

impl EnumInfo {
    pub const fn new(name: &'static str, members: &'static [(&'static str, i64)]) -> Self {
        Self { name, members }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn members(&self) -> &'static [(&'static str, i64)] {
        self.members
    }

    /// Look up a member by name, optionally ignoring ASCII case
    pub fn ordinal_of(&self, member: &str, ignore_case: bool) -> Option<i64> {
        let member = member.trim();
        self.members
            .iter()
            .find(|(name, _)| {
                if ignore_case {
                    name.eq_ignore_ascii_case(member)
                } else {
                    *name == member
                }
            })
            .map(|(_, ordinal)| *ordinal)
    }

    pub fn name_of(&self, ordinal: i64) -> Option<&'static str> {
        self.members
            .iter()
            .find(|(_, o)| *o == ordinal)
            .map(|(name, _)| *name)
    }
}

/// A member of a mappable enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumValue {
    info: &'static EnumInfo,
    ordinal: i64,
}

impl EnumValue {
    pub fn new(info: &'static EnumInfo, ordinal: i64) -> Self {
        Self { info, ordinal }
    }

    pub fn info(&self) -> &'static EnumInfo {
        self.info
    }

    pub fn ordinal(&self) -> i64 {
        self.ordinal
    }

    /// Member name, if the ordinal names a declared member
    pub fn member(&self) -> Option<&'static str> {
        self.info.name_of(self.ordinal)
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.member() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "{}", self.ordinal),
        }
    }
}
