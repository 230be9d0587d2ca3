//! Leave requests and their approval workflow.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub employee_id: ObjectId,
    /// Inclusive range, `YYYY-MM-DD`.
    pub from_date: String,
    pub to_date: String,
    pub reason: String,
    pub status: LeaveStatus,
    pub created_at: DateTime,
}

impl LeaveRequest {
    pub fn new(employee_id: ObjectId, req: CreateLeaveRequest) -> Self {
        Self {
            id: None,
            employee_id,
            from_date: req.from_date,
            to_date: req.to_date,
            reason: req.reason,
            status: LeaveStatus::Pending,
            created_at: DateTime::now(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateLeaveRequest {
    pub employee_id: String,
    pub from_date: String,
    pub to_date: String,
    pub reason: String,
}

/// Payload for `PATCH /api/leaves/:id/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateLeaveStatusRequest {
    pub status: LeaveStatus,
}

/// Query parameters for listing leave requests.
#[derive(Debug, Deserialize)]
pub struct ListLeavesQuery {
    pub employee: Option<String>,
    pub status: Option<LeaveStatus>,
}
