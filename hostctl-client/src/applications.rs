//! Application-related API endpoints

use crate::CloudClient;
use crate::error::Result;
use hostctl_core::domain::application::{Application, ApplicationTag};
use hostctl_core::dto::application::{CreateTag, RenameApplication};
use hostctl_core::dto::collection::ListQuery;
use hostctl_core::dto::operation::OperationResponse;
use uuid::Uuid;

impl CloudClient {
    // =============================================================================
    // Applications
    // =============================================================================

    /// List every application the credentials can see
    ///
    /// # Arguments
    /// * `query` - Optional filter, sort and limit parameters
    ///
    /// # Example
    /// ```no_run
    /// # use hostctl_client::{CloudClient, Credentials};
    /// # use hostctl_core::dto::collection::ListQuery;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = CloudClient::new("https://cloud.acquia.com/api", "https://accounts.acquia.com/api/auth/oauth/token", Credentials::new("k", "s"));
    /// let apps = client.list_applications(&ListQuery::filtered("hosting", "@*mysite")).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_applications(&self, query: &ListQuery) -> Result<Vec<Application>> {
        let response = self.get("/applications").await?.query(query).send().await?;

        self.handle_collection(response).await
    }

    /// Get a single application by UUID
    pub async fn get_application(&self, application: Uuid) -> Result<Application> {
        let path = format!("/applications/{}", application);
        let response = self.get(&path).await?.send().await?;

        self.handle_response(response).await
    }

    /// Rename an application
    pub async fn rename_application(
        &self,
        application: Uuid,
        req: &RenameApplication,
    ) -> Result<OperationResponse> {
        let path = format!("/applications/{}", application);
        let response = self.put(&path).await?.json(req).send().await?;

        self.handle_operation(response).await
    }

    // =============================================================================
    // Tags
    // =============================================================================

    /// List the tags of an application
    pub async fn list_application_tags(&self, application: Uuid) -> Result<Vec<ApplicationTag>> {
        let path = format!("/applications/{}/tags", application);
        let response = self.get(&path).await?.send().await?;

        self.handle_collection(response).await
    }

    /// Add a tag to an application
    pub async fn create_application_tag(
        &self,
        application: Uuid,
        req: &CreateTag,
    ) -> Result<OperationResponse> {
        let path = format!("/applications/{}/tags", application);
        let response = self.post(&path).await?.json(req).send().await?;

        self.handle_operation(response).await
    }

    /// Remove a tag from an application
    pub async fn delete_application_tag(
        &self,
        application: Uuid,
        name: &str,
    ) -> Result<OperationResponse> {
        let path = format!("/applications/{}/tags/{}", application, name);
        let response = self.delete(&path).await?.send().await?;

        self.handle_operation(response).await
    }
}
