//! Notification endpoints

use crate::CloudClient;
use crate::error::Result;
use hostctl_core::domain::notification::Notification;

impl CloudClient {
    /// Get the current state of an asynchronous task
    ///
    /// # Arguments
    /// * `handle` - The notification UUID, usually taken from the
    ///   `_links.notification` of an operation response
    pub async fn get_notification(&self, handle: &str) -> Result<Notification> {
        let path = format!("/notifications/{}", handle);
        let response = self.get(&path).await?.send().await?;

        self.handle_response(response).await
    }
}
