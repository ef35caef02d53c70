//! Environment-related API endpoints

use crate::CloudClient;
use crate::error::Result;
use hostctl_core::domain::environment::Environment;
use hostctl_core::dto::collection::ListQuery;
use hostctl_core::dto::environment::{CopyFiles, DisableLiveDev};
use hostctl_core::dto::operation::OperationResponse;
use uuid::Uuid;

impl CloudClient {
    /// List the environments of an application
    pub async fn list_environments(
        &self,
        application: Uuid,
        query: &ListQuery,
    ) -> Result<Vec<Environment>> {
        let path = format!("/applications/{}/environments", application);
        let response = self.get(&path).await?.query(query).send().await?;

        self.handle_collection(response).await
    }

    /// Copy the files directory from one environment into another
    ///
    /// # Arguments
    /// * `to` - The destination environment id
    /// * `req` - Carries the source environment id
    pub async fn copy_files(&self, to: &str, req: &CopyFiles) -> Result<OperationResponse> {
        let path = format!("/environments/{}/files", to);
        let response = self.post(&path).await?.json(req).send().await?;

        self.handle_operation(response).await
    }

    /// Turn production mode on for an environment
    pub async fn enable_production_mode(&self, environment: &str) -> Result<OperationResponse> {
        self.production_mode_action(environment, "enable").await
    }

    /// Turn production mode off for an environment
    pub async fn disable_production_mode(&self, environment: &str) -> Result<OperationResponse> {
        self.production_mode_action(environment, "disable").await
    }

    async fn production_mode_action(
        &self,
        environment: &str,
        action: &str,
    ) -> Result<OperationResponse> {
        let path = format!(
            "/environments/{}/production-mode/actions/{}",
            environment, action
        );
        let response = self.post(&path).await?.send().await?;

        self.handle_operation(response).await
    }

    /// Turn livedev (SFTP write access to the code) on for an environment
    pub async fn enable_livedev(&self, environment: &str) -> Result<OperationResponse> {
        let path = format!("/environments/{}/livedev/actions/enable", environment);
        let response = self.post(&path).await?.send().await?;

        self.handle_operation(response).await
    }

    /// Turn livedev off, discarding uncommitted changes
    pub async fn disable_livedev(&self, environment: &str) -> Result<OperationResponse> {
        let path = format!("/environments/{}/livedev/actions/disable", environment);
        let response = self
            .post(&path)
            .await?
            .json(&DisableLiveDev { discard: true })
            .send()
            .await?;

        self.handle_operation(response).await
    }
}
