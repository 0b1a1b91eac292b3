//! Scenario: publishing an employee directory
//!
//! An HR model is projected into a DTO: names are joined, the birth date
//! becomes an age, the email is masked and the enum is rendered as text.

use chrono::Utc;

use crate::common::*;

#[test]
fn scenario_employee_becomes_directory_entry() {
    let mapper = mapper();
    let employee = john();

    let dto: EmployeeDto = mapper.map(&employee).unwrap();

    let born = employee.birth_date.unwrap();
    assert_eq!(dto.full_name, "John Doe");
    assert_eq!(dto.age, age_on(born, Utc::now().date_naive()));
    assert_eq!(dto.salary, 75000.50);
    assert_eq!(dto.email, "j***e@example.com");
    assert_eq!(dto.department, "Sales");
}

#[test]
fn scenario_directory_plan_is_readable() {
    let plan = mapper().plan_for::<Employee, EmployeeDto>().unwrap();

    insta::assert_snapshot!(plan.to_string(), @r"
    Employee -> EmployeeDto (target-driven)
      FullName <- [FirstName, LastName] via full_name (forward)
      Age <- BirthDate via age (forward)
      Salary <- Salary
      Email <- Email via mask_email (forward)
      Department <- Department
    ");
}

#[test]
fn scenario_missing_birth_date_leaves_age_at_default() {
    let employee = Employee {
        birth_date: None,
        ..john()
    };

    let dto: EmployeeDto = mapper().map(&employee).unwrap();

    assert_eq!(dto.age, 0);
    assert_eq!(dto.full_name, "John Doe");
}

#[test]
fn scenario_whole_department_is_mapped_in_order() {
    let staff = vec![
        john(),
        Employee {
            first_name: "Jane".into(),
            last_name: "Smith".into(),
            email: "jane.smith@example.com".into(),
            department: Department::Support,
            ..john()
        },
    ];

    let entries: Vec<EmployeeDto> = mapper().map_many(Some(staff.as_slice())).unwrap();

    let names: Vec<&str> = entries.iter().map(|e| e.full_name.as_str()).collect();
    assert_eq!(names, vec!["John Doe", "Jane Smith"]);
    assert_eq!(entries[1].department, "Support");
    assert_eq!(entries[1].email, "j***h@example.com");
}
