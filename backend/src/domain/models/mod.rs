pub mod person;
pub mod attendance;
pub mod duty;
pub mod leave;
pub mod task;

pub use person::*;
pub use attendance::*;
pub use duty::*;
pub use leave::*;
pub use task::*;
