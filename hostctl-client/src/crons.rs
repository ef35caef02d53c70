//! Scheduled job (cron) endpoints

use crate::CloudClient;
use crate::error::Result;
use hostctl_core::domain::cron::Cron;
use hostctl_core::dto::collection::ListQuery;
use hostctl_core::dto::cron::CreateCron;
use hostctl_core::dto::operation::OperationResponse;

impl CloudClient {
    pub async fn list_crons(&self, environment: &str, query: &ListQuery) -> Result<Vec<Cron>> {
        let path = format!("/environments/{}/crons", environment);
        let response = self.get(&path).await?.query(query).send().await?;

        self.handle_collection(response).await
    }

    pub async fn get_cron(&self, environment: &str, cron: &str) -> Result<Cron> {
        let path = format!("/environments/{}/crons/{}", environment, cron);
        let response = self.get(&path).await?.send().await?;

        self.handle_response(response).await
    }

    pub async fn create_cron(&self, environment: &str, req: &CreateCron) -> Result<OperationResponse> {
        let path = format!("/environments/{}/crons", environment);
        let response = self.post(&path).await?.json(req).send().await?;

        self.handle_operation(response).await
    }

    pub async fn delete_cron(&self, environment: &str, cron: &str) -> Result<OperationResponse> {
        let path = format!("/environments/{}/crons/{}", environment, cron);
        let response = self.delete(&path).await?.send().await?;

        self.handle_operation(response).await
    }

    /// Enable or disable a cron
    pub async fn set_cron_enabled(
        &self,
        environment: &str,
        cron: &str,
        enabled: bool,
    ) -> Result<OperationResponse> {
        let action = if enabled { "enable" } else { "disable" };
        let path = format!("/environments/{}/crons/{}/actions/{}", environment, cron, action);
        let response = self.post(&path).await?.send().await?;

        self.handle_operation(response).await
    }
}
