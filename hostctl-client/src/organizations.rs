//! Organization endpoints

use crate::CloudClient;
use crate::error::Result;
use hostctl_core::domain::application::Application;
use hostctl_core::domain::organization::{Member, Organization};
use hostctl_core::domain::team::Team;
use uuid::Uuid;

impl CloudClient {
    pub async fn list_organizations(&self) -> Result<Vec<Organization>> {
        let response = self.get("/organizations").await?.send().await?;

        self.handle_collection(response).await
    }

    pub async fn list_organization_applications(&self, organization: Uuid) -> Result<Vec<Application>> {
        self.organization_collection(organization, "applications").await
    }

    pub async fn list_organization_teams(&self, organization: Uuid) -> Result<Vec<Team>> {
        self.organization_collection(organization, "teams").await
    }

    pub async fn list_organization_admins(&self, organization: Uuid) -> Result<Vec<Member>> {
        self.organization_collection(organization, "admins").await
    }

    pub async fn list_organization_members(&self, organization: Uuid) -> Result<Vec<Member>> {
        self.organization_collection(organization, "members").await
    }

    async fn organization_collection<T: serde::de::DeserializeOwned>(
        &self,
        organization: Uuid,
        resource: &str,
    ) -> Result<Vec<T>> {
        let path = format!("/organizations/{}/{}", organization, resource);
        let response = self.get(&path).await?.send().await?;

        self.handle_collection(response).await
    }
}
