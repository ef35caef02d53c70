//! Domain endpoints

use crate::CloudClient;
use crate::error::Result;
use hostctl_core::domain::hostname::{Domain, DomainStatus};
use hostctl_core::dto::collection::ListQuery;
use hostctl_core::dto::domain::{CreateDomain, PurgeDomains};
use hostctl_core::dto::operation::OperationResponse;

impl CloudClient {
    /// List the domains attached to an environment
    pub async fn list_domains(&self, environment: &str, query: &ListQuery) -> Result<Vec<Domain>> {
        let path = format!("/environments/{}/domains", environment);
        let response = self.get(&path).await?.query(query).send().await?;

        self.handle_collection(response).await
    }

    /// Get DNS and activation status for a single domain
    pub async fn get_domain_status(&self, environment: &str, domain: &str) -> Result<DomainStatus> {
        let path = format!("/environments/{}/domains/{}/status", environment, domain);
        let response = self.get(&path).await?.send().await?;

        self.handle_response(response).await
    }

    /// Attach a domain to an environment
    pub async fn create_domain(&self, environment: &str, req: &CreateDomain) -> Result<OperationResponse> {
        let path = format!("/environments/{}/domains", environment);
        let response = self.post(&path).await?.json(req).send().await?;

        self.handle_operation(response).await
    }

    /// Detach a domain from an environment
    pub async fn delete_domain(&self, environment: &str, domain: &str) -> Result<OperationResponse> {
        let path = format!("/environments/{}/domains/{}", environment, domain);
        let response = self.delete(&path).await?.send().await?;

        self.handle_operation(response).await
    }

    /// Clear the Varnish cache for the given domains
    pub async fn purge_domains(&self, environment: &str, req: &PurgeDomains) -> Result<OperationResponse> {
        let path = format!("/environments/{}/domains/actions/clear-varnish", environment);
        let response = self.post(&path).await?.json(req).send().await?;

        self.handle_operation(response).await
    }
}
