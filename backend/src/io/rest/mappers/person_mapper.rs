use crate::domain::models::Person as DomainPerson;
use shared::{Person as SharedPerson, PersonListResponse};

/// Mapper from domain roster members to the shared DTO
pub struct PersonMapper;

impl PersonMapper {
    pub fn to_dto(domain: DomainPerson) -> SharedPerson {
        SharedPerson {
            id: domain.id,
            name: domain.name,
            duty_count: domain.duty_count,
            last_duty_date: domain.last_duty_date,
            created_at: domain.created_at,
        }
    }

    pub fn to_person_list_dto(people: Vec<DomainPerson>) -> PersonListResponse {
        PersonListResponse {
            people: people.into_iter().map(Self::to_dto).collect(),
        }
    }
}
