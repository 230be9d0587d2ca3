//! Background jobs running outside the request path.

pub mod daily_attendance;

pub use daily_attendance::spawn_daily_attendance_job;
