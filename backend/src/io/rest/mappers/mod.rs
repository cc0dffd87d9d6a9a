pub mod attendance_mapper;
pub mod duty_mapper;
pub mod leave_mapper;
pub mod person_mapper;
pub mod task_mapper;
