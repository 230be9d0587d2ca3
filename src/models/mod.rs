//! Domain models stored in MongoDB and their request payloads.

pub mod attendance;
pub mod department;
pub mod employee;
pub mod leave;
pub mod notification;
pub mod payroll;
pub mod task;
pub mod user;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use department::Department;
pub use employee::Employee;
pub use leave::{LeaveRequest, LeaveStatus};
pub use notification::Notification;
pub use payroll::PayrollEntry;
pub use task::{TaskItem, TaskStatus};
pub use user::User;
