//! Employee records and their request payloads.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub department_id: Option<ObjectId>,
    pub position: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    /// Hire date as `YYYY-MM-DD`.
    pub hired_on: Option<String>,
    pub created_at: DateTime,
}

fn default_active() -> bool {
    true
}

impl Employee {
    pub fn new(req: CreateEmployeeRequest, department_id: Option<ObjectId>) -> Self {
        Self {
            id: None,
            name: req.name,
            email: req.email,
            department_id,
            position: req.position,
            active: true,
            hired_on: req.hired_on,
            created_at: DateTime::now(),
        }
    }
}

/// Request payload for creating an employee.
#[derive(Debug, Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub email: String,
    pub department_id: Option<String>,
    pub position: Option<String>,
    pub hired_on: Option<String>,
}

/// Request payload for updating an employee. Absent fields are left as-is.
#[derive(Debug, Deserialize)]
pub struct UpdateEmployeeRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department_id: Option<String>,
    pub position: Option<String>,
    pub active: Option<bool>,
}

/// Query parameters for listing employees.
#[derive(Debug, Deserialize)]
pub struct ListEmployeesQuery {
    /// Department id filter.
    pub department: Option<String>,
}
