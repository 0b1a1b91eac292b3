//! Test fixtures - reusable models, DTOs and converters.

use anyhow::{anyhow, bail};
use chrono::{Datelike, NaiveDate, Utc};
use dtomap::{mappable, mappable_enum, Converter, ConverterCapability, Mapper};
use rust_decimal::Decimal;

mappable_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum Department {
        #[default]
        Engineering = 0,
        Sales = 1,
        Support = 2,
    }
}

/// Domain model with no annotations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Employee {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub salary: Decimal,
    pub email: String,
    pub department: Department,
}

mappable!(Employee {
    "FirstName" => first_name: String,
    "LastName" => last_name: String,
    "BirthDate" => birth_date: Option<NaiveDate>,
    "Salary" => salary: Decimal,
    "Email" => email: String,
    "Department" => department: Department,
});

/// Target-annotated projection of `Employee`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDto {
    pub full_name: String,
    pub age: i32,
    pub salary: f64,
    pub email: String,
    pub department: String,
}

mappable!(EmployeeDto {
    "FullName" => full_name: String { aliases: ["FirstName", "LastName"], converter: "full_name" },
    "Age" => age: i32 { alias: "BirthDate", converter: "age" },
    "Salary" => salary: f64,
    "Email" => email: String { converter: "mask_email" },
    "Department" => department: String,
});

/// Source-annotated view whose email can only be masked, never unmasked
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublicProfile {
    pub email: String,
}

mappable!(PublicProfile {
    "Email" => email: String { converter: "mask_email" },
});

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Person {
    pub first: String,
    pub last: String,
    pub email: Option<String>,
}

mappable!(Person {
    "First" => first: String,
    "Last" => last: String,
    "Email" => email: Option<String>,
});

/// Same shape as `Person`, no annotations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonRecord {
    pub first: String,
    pub last: String,
    pub email: Option<String>,
}

mappable!(PersonRecord {
    "First" => first: String,
    "Last" => last: String,
    "Email" => email: Option<String>,
});

/// Joins `First`/`Last` into `Name` and splits it back
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contact {
    pub name: String,
    pub email: Option<String>,
}

mappable!(Contact {
    "Name" => name: String { aliases: ["First", "Last"], converter: "full_name" },
    "Email" => email: Option<String>,
});

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Legacy {
    pub code: String,
    pub label: String,
}

mappable!(Legacy {
    "Code" => code: String { alias: "Badge" },
    "Label" => label: String,
});

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Badge {
    pub badge: String,
}

mappable!(Badge {
    "Badge" => badge: String { alias: "Label" },
});

/// Feeds a single property to the two-value `full_name` converter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrokenName {
    pub full_name: String,
}

mappable!(BrokenName {
    "FullName" => full_name: String { alias: "FirstName", converter: "full_name" },
});

/// Joins a first/last pair with a space; splits at the first space
pub struct FullName;

impl Converter for FullName {
    type Source = (String, String);
    type Target = String;
    const NAME: &'static str = "full_name";

    fn convert_to(&self, (first, last): (String, String)) -> anyhow::Result<String> {
        Ok(format!("{first} {last}").trim().to_string())
    }

    fn convert_from(&self, full: String) -> anyhow::Result<(String, String)> {
        let (first, last) = full.split_once(' ').unwrap_or((full.as_str(), ""));
        Ok((first.to_string(), last.to_string()))
    }
}

/// Whole years between a birth date and `today`
pub struct AgeFromBirthDate {
    pub today: NaiveDate,
}

impl Default for AgeFromBirthDate {
    fn default() -> Self {
        Self {
            today: Utc::now().date_naive(),
        }
    }
}

impl Converter for AgeFromBirthDate {
    type Source = NaiveDate;
    type Target = i32;
    const NAME: &'static str = "age";
    const CAPABILITY: ConverterCapability = ConverterCapability::ForwardOnly;

    fn convert_to(&self, born: NaiveDate) -> anyhow::Result<i32> {
        Ok(age_on(born, self.today))
    }
}

/// Keeps the first and last character of the local part
pub struct MaskEmail;

impl Converter for MaskEmail {
    type Source = String;
    type Target = String;
    const NAME: &'static str = "mask_email";
    const CAPABILITY: ConverterCapability = ConverterCapability::ForwardOnly;

    fn convert_to(&self, email: String) -> anyhow::Result<String> {
        let (local, domain) = email
            .split_once('@')
            .ok_or_else(|| anyhow!("'{email}' is not an email address"))?;
        let (Some(first), Some(last)) = (local.chars().next(), local.chars().last()) else {
            bail!("'{email}' has an empty local part");
        };
        Ok(format!("{first}***{last}@{domain}"))
    }
}

pub fn age_on(born: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        years -= 1;
    }
    years
}

/// A mapper with every demo converter registered
pub fn mapper() -> Mapper {
    Mapper::new()
        .with_converter("full_name", FullName)
        .with_converter("age", AgeFromBirthDate::default())
        .with_converter("mask_email", MaskEmail)
}

pub fn john() -> Employee {
    Employee {
        first_name: "John".into(),
        last_name: "Doe".into(),
        birth_date: NaiveDate::from_ymd_opt(1990, 5, 15),
        salary: Decimal::new(7_500_050, 2),
        email: "john.doe@example.com".into(),
        department: Department::Sales,
    }
}

pub fn ada() -> Person {
    Person {
        first: "Ada".into(),
        last: "Lovelace".into(),
        email: None,
    }
}
