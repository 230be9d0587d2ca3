use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub recipient_id: ObjectId,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime,
}

impl Notification {
    pub fn new(recipient_id: ObjectId, req: CreateNotificationRequest) -> Self {
        Self {
            id: None,
            recipient_id,
            title: req.title,
            body: req.body,
            read: false,
            created_at: DateTime::now(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateNotificationRequest {
    pub recipient_id: String,
    pub title: String,
    pub body: String,
}

/// Query parameters for listing notifications.
#[derive(Debug, Deserialize)]
pub struct ListNotificationsQuery {
    pub recipient: Option<String>,
    pub unread: Option<bool>,
}
