//! Asynchronous operation responses
//!
//! Mutating endpoints answer with a message and a set of links. When the
//! work happens asynchronously, one of those links points at the
//! notification resource tracking it.

use serde::{Deserialize, Serialize};

/// Response returned by a mutating API call
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperationResponse {
    #[serde(default)]
    pub message: String,
    #[serde(rename = "_links", default)]
    pub links: OperationLinks,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperationLinks {
    #[serde(rename = "self", default)]
    pub self_link: Option<Link>,
    #[serde(default)]
    pub notification: Option<Link>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

/// Identifier of the notification tracking an asynchronous operation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotificationHandle(String);

impl NotificationHandle {
    pub fn new(uuid: impl Into<String>) -> Self {
        Self(uuid.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NotificationHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl OperationResponse {
    /// Extract the notification handle from the last segment of the notification link
    pub fn notification_handle(&self) -> Option<NotificationHandle> {
        let href = &self.links.notification.as_ref()?.href;
        let segment = href.trim_end_matches('/').rsplit('/').next()?;
        if segment.is_empty() {
            return None;
        }
        Some(NotificationHandle::new(segment))
    }

    /// Build a response pointing at the given notification
    pub fn for_notification(base_url: &str, uuid: &str) -> Self {
        Self {
            message: String::new(),
            links: OperationLinks {
                self_link: None,
                notification: Some(Link {
                    href: format!("{}/notifications/{}", base_url.trim_end_matches('/'), uuid),
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_is_last_path_segment() {
        let json = serde_json::json!({
            "message": "Deploying code.",
            "_links": {
                "self": { "href": "https://cloud.example.com/api/environments/1-abc/code" },
                "notification": {
                    "href": "https://cloud.example.com/api/notifications/42b56cff-0b55-4bdf-a949-1fd0fca61c6c"
                }
            }
        });
        let response: OperationResponse = serde_json::from_value(json).unwrap();
        assert_eq!(
            response.notification_handle(),
            Some(NotificationHandle::new("42b56cff-0b55-4bdf-a949-1fd0fca61c6c"))
        );
    }

    #[test]
    fn test_missing_notification_link() {
        let json = serde_json::json!({
            "message": "Renamed.",
            "_links": { "self": { "href": "https://cloud.example.com/api/applications/x" } }
        });
        let response: OperationResponse = serde_json::from_value(json).unwrap();
        assert!(response.notification_handle().is_none());

        let empty = OperationResponse {
            links: OperationLinks {
                self_link: None,
                notification: Some(Link { href: String::new() }),
            },
            ..Default::default()
        };
        assert!(empty.notification_handle().is_none());
    }
}
