// Repository modules
pub mod person_repository;
pub mod attendance_repository;
pub mod duty_repository;
pub mod leave_repository;
pub mod task_repository;

// Re-export repository types
pub use person_repository::PersonRepository;
pub use attendance_repository::AttendanceRepository;
pub use duty_repository::DutyRepository;
pub use leave_repository::LeaveRepository;
pub use task_repository::TaskRepository;
