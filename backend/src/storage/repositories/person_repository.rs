use anyhow::Result;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::{NewPerson, Person};
use crate::storage::connection::DbConnection;
use crate::storage::traits::PersonStorage;

/// Repository for roster operations
#[derive(Clone)]
pub struct PersonRepository {
    db: DbConnection,
}

impl PersonRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> Person {
        Person {
            id: row.get("id"),
            name: row.get("name"),
            duty_count: row.get("duty_count"),
            last_duty_date: row.get("last_duty_date"),
            created_at: row.get("created_at"),
        }
    }
}

#[async_trait]
impl PersonStorage for PersonRepository {
    async fn store_person(&self, person: &NewPerson) -> Result<Person> {
        let result = sqlx::query(
            r#"
            INSERT INTO people (name, duty_count, last_duty_date, created_at)
            VALUES (?, 0, NULL, ?)
            "#,
        )
        .bind(&person.name)
        .bind(person.created_at)
        .execute(self.db.pool())
        .await?;

        Ok(Person {
            id: result.last_insert_rowid(),
            name: person.name.clone(),
            duty_count: 0,
            last_duty_date: None,
            created_at: person.created_at,
        })
    }

    async fn get_person(&self, person_id: i64) -> Result<Option<Person>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, duty_count, last_duty_date, created_at
            FROM people
            WHERE id = ?
            "#,
        )
        .bind(person_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.as_ref().map(Self::from_row))
    }

    async fn list_people(&self) -> Result<Vec<Person>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, duty_count, last_duty_date, created_at
            FROM people
            ORDER BY name ASC, id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.iter().map(Self::from_row).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    async fn setup_test() -> PersonRepository {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        PersonRepository::new(db)
    }

    fn new_person(name: &str) -> NewPerson {
        NewPerson {
            name: name.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 8, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_store_and_get_person() {
        let repo = setup_test().await;

        let stored = repo.store_person(&new_person("Jane Smith")).await.expect("Failed to store person");
        assert!(stored.id > 0);
        assert_eq!(stored.duty_count, 0);
        assert!(stored.last_duty_date.is_none());

        let fetched = repo.get_person(stored.id).await.expect("Failed to get person");
        assert_eq!(fetched, Some(stored));
    }

    #[tokio::test]
    async fn test_get_missing_person() {
        let repo = setup_test().await;
        assert!(repo.get_person(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_people_ordered_by_name() {
        let repo = setup_test().await;

        for name in ["Mike Johnson", "Alice Ward", "Sarah Davis"] {
            repo.store_person(&new_person(name)).await.unwrap();
        }

        let names: Vec<String> = repo
            .list_people()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();

        assert_eq!(names, vec!["Alice Ward", "Mike Johnson", "Sarah Davis"]);
    }
}
