use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::people::CreatePersonCommand;
use crate::domain::models::{NewPerson, Person, PersonError};
use crate::storage::PersonStorage;

const MAX_NAME_LENGTH: usize = 100;

/// Service for managing the roster
#[derive(Clone)]
pub struct PersonService {
    people: Arc<dyn PersonStorage>,
}

impl PersonService {
    pub fn new(people: Arc<dyn PersonStorage>) -> Self {
        Self { people }
    }

    /// Add a person to the roster
    pub async fn create_person(&self, command: CreatePersonCommand) -> Result<Person> {
        info!("Creating person: name={}", command.name);

        let name = command.name.trim();
        if name.is_empty() {
            return Err(PersonError::EmptyName.into());
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(PersonError::NameTooLong { max: MAX_NAME_LENGTH }.into());
        }

        let person = self
            .people
            .store_person(&NewPerson {
                name: name.to_string(),
                created_at: Utc::now(),
            })
            .await?;

        info!("Created person: {} with ID: {}", person.name, person.id);
        Ok(person)
    }

    /// Get a person by ID
    pub async fn get_person(&self, person_id: i64) -> Result<Person> {
        match self.people.get_person(person_id).await? {
            Some(person) => Ok(person),
            None => {
                warn!("Person not found: {}", person_id);
                Err(PersonError::NotFound(person_id).into())
            }
        }
    }

    /// List the full roster
    pub async fn list_people(&self) -> Result<Vec<Person>> {
        let people = self.people.list_people().await?;
        info!("Found {} people", people.len());
        Ok(people)
    }
}
