//! Tasks, the resources owned by identities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A task. `owner_id` is set at creation and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new task.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
}

/// Task fields supplied by clients on create and update.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TaskPost {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl TaskPost {
    pub fn new(title: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            title: title.into(),
            description: description.map(String::from),
        }
    }
}
