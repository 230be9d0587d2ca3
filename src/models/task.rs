use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Open,
    InProgress,
    Done,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskItem {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: Option<String>,
    pub assignee_id: Option<ObjectId>,
    pub status: TaskStatus,
    /// Due date, `YYYY-MM-DD`.
    pub due_date: Option<String>,
    pub created_at: DateTime,
}

impl TaskItem {
    pub fn new(req: CreateTaskRequest, assignee_id: Option<ObjectId>) -> Self {
        Self {
            id: None,
            title: req.title,
            description: req.description,
            assignee_id,
            status: TaskStatus::Open,
            due_date: req.due_date,
            created_at: DateTime::now(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub assignee_id: Option<String>,
    pub due_date: Option<String>,
}

/// Payload for `PATCH /api/tasks/:id/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskStatusRequest {
    pub status: TaskStatus,
}

/// Query parameters for listing tasks.
#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    pub assignee: Option<String>,
    pub status: Option<TaskStatus>,
}
