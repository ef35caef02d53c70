//! Notification (asynchronous task) domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An asynchronous unit of work on the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub uuid: Uuid,
    pub status: NotificationStatus,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub progress: Option<u8>,
}

/// Task status as reported by the notifications endpoint
///
/// Matching is case-sensitive. Anything outside the known set is kept
/// verbatim in `Unknown` so callers can fail closed on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NotificationStatus {
    Started,
    InProgress,
    Completed,
    Failed,
    Unknown(String),
}

impl NotificationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            NotificationStatus::Started => "started",
            NotificationStatus::InProgress => "in-progress",
            NotificationStatus::Completed => "completed",
            NotificationStatus::Failed => "failed",
            NotificationStatus::Unknown(other) => other,
        }
    }

    /// Whether the task is still running on the platform
    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            NotificationStatus::Started | NotificationStatus::InProgress
        )
    }
}

impl From<String> for NotificationStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "started" => NotificationStatus::Started,
            "in-progress" => NotificationStatus::InProgress,
            "completed" => NotificationStatus::Completed,
            "failed" => NotificationStatus::Failed,
            _ => NotificationStatus::Unknown(value),
        }
    }
}

impl From<&str> for NotificationStatus {
    fn from(value: &str) -> Self {
        NotificationStatus::from(value.to_string())
    }
}

impl From<NotificationStatus> for String {
    fn from(status: NotificationStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses_parse() {
        assert_eq!(NotificationStatus::from("started"), NotificationStatus::Started);
        assert_eq!(
            NotificationStatus::from("in-progress"),
            NotificationStatus::InProgress
        );
        assert_eq!(
            NotificationStatus::from("completed"),
            NotificationStatus::Completed
        );
        assert_eq!(NotificationStatus::from("failed"), NotificationStatus::Failed);
    }

    #[test]
    fn test_status_matching_is_case_sensitive() {
        assert_eq!(
            NotificationStatus::from("Completed"),
            NotificationStatus::Unknown("Completed".to_string())
        );
    }

    #[test]
    fn test_notification_deserializes_unknown_status() {
        let json = serde_json::json!({
            "uuid": "f4b37e3c-1g96-4ed4-ad20-3081fe0f9545",
            "status": "queued"
        });
        // Invalid UUID above must be rejected at deserialization time
        assert!(serde_json::from_value::<Notification>(json).is_err());

        let json = serde_json::json!({
            "uuid": "f4b37e3c-1a96-4ed4-ad20-3081fe0f9545",
            "status": "queued"
        });
        let notification: Notification = serde_json::from_value(json).unwrap();
        assert_eq!(
            notification.status,
            NotificationStatus::Unknown("queued".to_string())
        );
        assert!(!notification.status.is_pending());
    }
}
