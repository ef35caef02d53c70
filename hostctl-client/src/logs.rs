//! Log endpoints

use crate::CloudClient;
use crate::error::Result;
use hostctl_core::domain::log::LogFile;
use hostctl_core::dto::operation::OperationResponse;

impl CloudClient {
    /// List the log types available for an environment
    pub async fn list_logs(&self, environment: &str) -> Result<Vec<LogFile>> {
        let path = format!("/environments/{}/logs", environment);
        let response = self.get(&path).await?.send().await?;

        self.handle_collection(response).await
    }

    /// Ask the platform to build a fresh snapshot of a log
    pub async fn create_log_snapshot(&self, environment: &str, log_type: &str) -> Result<OperationResponse> {
        let path = format!("/environments/{}/logs/{}", environment, log_type);
        let response = self.post(&path).await?.send().await?;

        self.handle_operation(response).await
    }

    /// Download the most recent snapshot of a log (gzip bytes)
    pub async fn download_log(&self, environment: &str, log_type: &str) -> Result<Vec<u8>> {
        let path = format!("/environments/{}/logs/{}", environment, log_type);
        let response = self.get(&path).await?.send().await?;

        self.handle_bytes(response).await
    }
}
