use chrono::{DateTime, NaiveDate, Utc};

/// Domain representation of a roster member
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub duty_count: u32,
    /// `None` means the person has never served as duty officer
    pub last_duty_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Fields for a person that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewPerson {
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum PersonError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Name cannot exceed {max} characters")]
    NameTooLong { max: usize },
    #[error("Person not found: {0}")]
    NotFound(i64),
}
