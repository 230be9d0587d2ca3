//! Attendance records keyed by employee and calendar day.

use chrono::Utc;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Leave,
}

/// One record per employee per day. `date` is `YYYY-MM-DD` so range and
/// equality filters stay lexicographic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub employee_id: ObjectId,
    pub date: String,
    pub check_in: Option<DateTime>,
    pub check_out: Option<DateTime>,
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// A record opened by a check-in.
    pub fn checked_in(employee_id: ObjectId, date: String) -> Self {
        Self {
            id: None,
            employee_id,
            date,
            check_in: Some(DateTime::now()),
            check_out: None,
            status: AttendanceStatus::Present,
        }
    }

    /// A record written by the daily job for employees who never checked in.
    pub fn absent(employee_id: ObjectId, date: String) -> Self {
        Self {
            id: None,
            employee_id,
            date,
            check_in: None,
            check_out: None,
            status: AttendanceStatus::Absent,
        }
    }
}

/// Today's date in the `YYYY-MM-DD` form used by attendance records.
pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Request payload for check-in and check-out.
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub employee_id: String,
}

/// Query parameters for listing attendance records.
#[derive(Debug, Deserialize)]
pub struct ListAttendanceQuery {
    /// Employee id filter.
    pub employee: Option<String>,
    /// Exact date filter, `YYYY-MM-DD`.
    pub date: Option<String>,
}
