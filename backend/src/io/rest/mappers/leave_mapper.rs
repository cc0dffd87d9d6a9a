use shared::{LeaveListResponse, LeaveRequest as SharedLeave, LeaveResponse};

use crate::domain::models::LeaveRequest as DomainLeave;

pub struct LeaveMapper;

impl LeaveMapper {
    pub fn to_dto(domain: DomainLeave) -> SharedLeave {
        SharedLeave {
            id: domain.id,
            person_id: domain.person_id,
            leave_type: domain.leave_type,
            start_date: domain.start_date,
            end_date: domain.end_date,
            reason: domain.reason,
            status: domain.status,
            applied_at: domain.applied_at,
            decided_at: domain.decided_at,
        }
    }

    pub fn to_leave_response(domain: DomainLeave, success_message: String) -> LeaveResponse {
        LeaveResponse {
            leave: Self::to_dto(domain),
            success_message,
        }
    }

    pub fn to_leave_list_dto(leaves: Vec<DomainLeave>) -> LeaveListResponse {
        LeaveListResponse {
            leaves: leaves.into_iter().map(Self::to_dto).collect(),
        }
    }
}
