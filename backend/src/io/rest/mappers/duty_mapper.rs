use shared::{ConfirmDutyResponse, DutyAssignment as SharedAssignment, DutyOfficerResponse};

use crate::domain::commands::duty::{ConfirmDutyResult, DutySelectionResult};
use crate::domain::models::DutyAssignment as DomainAssignment;
use crate::io::rest::mappers::person_mapper::PersonMapper;

pub struct DutyMapper;

impl DutyMapper {
    pub fn to_assignment_dto(domain: DomainAssignment) -> SharedAssignment {
        SharedAssignment {
            date: domain.date,
            person_id: domain.person_id,
            assigned_at: domain.assigned_at,
        }
    }

    pub fn to_selection_response(result: DutySelectionResult) -> DutyOfficerResponse {
        DutyOfficerResponse {
            date: result.date,
            selected: result.selected.map(PersonMapper::to_dto),
            eligible_count: result.eligible_count,
            confirmed: result.confirmed.map(Self::to_assignment_dto),
        }
    }

    pub fn to_confirm_response(result: ConfirmDutyResult) -> ConfirmDutyResponse {
        let success_message = format!(
            "{} confirmed as duty officer for {}",
            result.officer.name, result.assignment.date
        );
        ConfirmDutyResponse {
            assignment: Self::to_assignment_dto(result.assignment),
            officer: PersonMapper::to_dto(result.officer),
            success_message,
        }
    }
}
