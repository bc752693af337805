//! Frontend Models
//!
//! Data structures matching the REST API payloads.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned task identifier (UUID string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Task data structure (matches backend `TaskResponse`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// User data structure (matches backend `UserResponse`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// RFC 3339 or naive ISO-8601 (read as UTC). Anything else becomes `None`
/// rather than failing the whole payload.
fn lenient_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| raw.parse::<NaiveDateTime>().ok().map(|naive| naive.and_utc()))
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskListResponse {
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body for both create and update (`description: null` clears it)
#[derive(Serialize)]
pub struct TaskPayload<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_from_backend_json() {
        let json = r#"{
            "id": "3f1c6a52-9a43-4d0e-9f0b-2f2d1c1b8a11",
            "title": "Buy milk",
            "description": null,
            "is_completed": false,
            "user_id": "a4c1d1e0-0000-4000-8000-000000000001",
            "created_at": "2024-05-01T09:30:00.123456",
            "updated_at": "2024-05-01T09:30:00.123456"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id.as_str(), "3f1c6a52-9a43-4d0e-9f0b-2f2d1c1b8a11");
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, None);
        assert!(!task.is_completed);
        assert!(task.created_at.is_some());
    }

    #[test]
    fn test_timestamps_with_or_without_offset() {
        let naive = parse_timestamp("2024-05-01T09:30:00");
        assert_eq!(naive, parse_timestamp("2024-05-01T09:30:00Z"));
        assert_eq!(naive, parse_timestamp("2024-05-01T11:30:00+02:00"));
        assert!(naive.is_some());
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn test_list_survives_odd_timestamps() {
        let json = r#"{"tasks": [
            {"id": "a", "title": "Zulu", "created_at": "2024-05-01T09:30:00.5Z", "updated_at": null},
            {"id": "b", "title": "Garbled", "created_at": "not a date"}
        ], "total": 2}"#;

        let list: TaskListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(list.tasks.len(), 2);
        assert!(list.tasks[0].created_at.is_some());
        assert_eq!(list.tasks[0].updated_at, None);
        assert_eq!(list.tasks[1].created_at, None);
    }

    #[test]
    fn test_task_minimal_json() {
        let task: Task = serde_json::from_str(r#"{"id": "t1", "title": "Walk"}"#).unwrap();
        assert_eq!(task.id, TaskId::from("t1"));
        assert!(!task.is_completed);
        assert_eq!(task.user_id, None);
    }

    #[test]
    fn test_payload_serializes_null_description() {
        let body = serde_json::to_string(&TaskPayload { title: "Buy milk", description: None }).unwrap();
        assert_eq!(body, r#"{"title":"Buy milk","description":null}"#);
    }

    #[test]
    fn test_task_id_display() {
        assert_eq!(TaskId::from("abc").to_string(), "abc");
    }
}
