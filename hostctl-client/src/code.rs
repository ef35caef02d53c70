//! Code (VCS) endpoints

use crate::CloudClient;
use crate::error::Result;
use hostctl_core::domain::code::Branch;
use hostctl_core::dto::code::{DeployCode, SwitchCode};
use hostctl_core::dto::collection::ListQuery;
use hostctl_core::dto::operation::OperationResponse;
use uuid::Uuid;

impl CloudClient {
    /// List the branches and tags available to an application
    pub async fn list_branches(&self, application: Uuid, query: &ListQuery) -> Result<Vec<Branch>> {
        let path = format!("/applications/{}/code", application);
        let response = self.get(&path).await?.query(query).send().await?;

        self.handle_collection(response).await
    }

    /// Deploy the code of one environment onto another
    pub async fn deploy_code(&self, to: &str, req: &DeployCode) -> Result<OperationResponse> {
        let path = format!("/environments/{}/code", to);
        let response = self.post(&path).await?.json(req).send().await?;

        self.handle_operation(response).await
    }

    /// Switch the branch or tag an environment is running
    pub async fn switch_code(&self, environment: &str, req: &SwitchCode) -> Result<OperationResponse> {
        let path = format!("/environments/{}/code/actions/switch", environment);
        let response = self.post(&path).await?.json(req).send().await?;

        self.handle_operation(response).await
    }
}
