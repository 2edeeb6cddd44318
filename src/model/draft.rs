use chrono::NaiveDate;
use serde::Deserialize;

use super::{Record, RecordId, Status};
use crate::error::FieldViolation;

const JOIN_DATE_FORMAT: &str = "%Y-%m-%d";

/// Partial record as submitted by an add or edit form.
///
/// Numeric fields are signed and the status is free text so that invalid
/// input can be represented and reported rather than rejected by the type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecordDraft {
    pub name: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub age: Option<i64>,
    pub salary: Option<i128>,
    pub status: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub join_date: Option<String>,
}

impl RecordDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    #[must_use]
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    #[must_use]
    pub fn age(mut self, age: i64) -> Self {
        self.age = Some(age);
        self
    }

    #[must_use]
    pub fn salary(mut self, salary: impl Into<i128>) -> Self {
        self.salary = Some(salary.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    #[must_use]
    pub fn join_date(mut self, date: impl Into<String>) -> Self {
        self.join_date = Some(date.into());
        self
    }

    /// Overlay the fields present in `self` onto an existing record.
    #[must_use]
    pub fn merged_onto(&self, record: &Record) -> RecordDraft {
        let base = RecordDraft::from(record);
        RecordDraft {
            name: self.name.clone().or(base.name),
            role: self.role.clone().or(base.role),
            department: self.department.clone().or(base.department),
            age: self.age.or(base.age),
            salary: self.salary.or(base.salary),
            status: self.status.clone().or(base.status),
            email: self.email.clone().or(base.email),
            city: self.city.clone().or(base.city),
            join_date: self.join_date.clone().or(base.join_date),
        }
    }

    /// Check every constraint and build the record, collecting all violations.
    pub fn validate(self, id: RecordId) -> Result<Record, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let name = match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Some(name.to_string()),
            Some(_) => {
                violations.push(FieldViolation::new("name", "must not be empty"));
                None
            }
            None => {
                violations.push(FieldViolation::new("name", "is required"));
                None
            }
        };

        let age = match self.age {
            Some(age) if age < 0 => {
                violations.push(FieldViolation::new("age", "must be at least 0"));
                None
            }
            Some(age) => match u32::try_from(age) {
                Ok(age) => Some(age),
                Err(_) => {
                    violations.push(FieldViolation::new("age", "is out of range"));
                    None
                }
            },
            None => {
                violations.push(FieldViolation::new("age", "is required"));
                None
            }
        };

        let salary = match self.salary {
            Some(salary) if salary < 0 => {
                violations.push(FieldViolation::new("salary", "must be at least 0"));
                None
            }
            Some(salary) => match u64::try_from(salary) {
                Ok(salary) => Some(salary),
                Err(_) => {
                    violations.push(FieldViolation::new("salary", "is out of range"));
                    None
                }
            },
            None => {
                violations.push(FieldViolation::new("salary", "is required"));
                None
            }
        };

        let status = match self.status.as_deref() {
            Some(raw) => match raw.parse::<Status>() {
                Ok(status) => Some(status),
                Err(err) => {
                    violations.push(FieldViolation::new("status", err.to_string()));
                    None
                }
            },
            None => {
                violations.push(FieldViolation::new("status", "is required"));
                None
            }
        };

        let join_date = non_empty(self.join_date);
        if let Some(date) = &join_date
            && NaiveDate::parse_from_str(date, JOIN_DATE_FORMAT).is_err()
        {
            violations.push(FieldViolation::new(
                "joinDate",
                format!("'{date}' is not an ISO date (YYYY-MM-DD)"),
            ));
        }

        match (name, age, salary, status) {
            (Some(name), Some(age), Some(salary), Some(status)) if violations.is_empty() => {
                Ok(Record {
                    id,
                    name,
                    role: self.role.unwrap_or_default(),
                    department: self.department.unwrap_or_default(),
                    age,
                    salary,
                    status,
                    email: non_empty(self.email),
                    city: non_empty(self.city),
                    join_date,
                })
            }
            _ => Err(violations),
        }
    }
}

impl From<&Record> for RecordDraft {
    fn from(record: &Record) -> Self {
        Self {
            name: Some(record.name.clone()),
            role: Some(record.role.clone()),
            department: Some(record.department.clone()),
            age: Some(i64::from(record.age)),
            salary: Some(i128::from(record.salary)),
            status: Some(record.status.as_str().to_string()),
            email: record.email.clone(),
            city: record.city.clone(),
            join_date: record.join_date.clone(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
