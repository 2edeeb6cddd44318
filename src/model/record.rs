use serde::{Deserialize, Serialize};

use super::Status;

/// Stable identifier of a record within a collection.
pub type RecordId = u64;

/// One employee row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub department: String,
    pub age: u32,
    pub salary: u64,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_date: Option<String>,
}

impl Record {
    /// Create a record with the required fields; optional fields start empty.
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        role: impl Into<String>,
        department: impl Into<String>,
        age: u32,
        salary: u64,
        status: Status,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.into(),
            department: department.into(),
            age,
            salary,
            status,
            email: None,
            city: None,
            join_date: None,
        }
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    #[must_use]
    pub fn with_join_date(mut self, date: impl Into<String>) -> Self {
        self.join_date = Some(date.into());
        self
    }
}
