//! Team, role and permission endpoints

use crate::CloudClient;
use crate::error::Result;
use hostctl_core::domain::team::{Permission, Role};
use hostctl_core::dto::operation::OperationResponse;
use hostctl_core::dto::team::{AddApplication, CreateRole, CreateTeam, InviteMember, UpdateRole};
use uuid::Uuid;

impl CloudClient {
    // =============================================================================
    // Teams
    // =============================================================================

    /// Create a team inside an organization
    pub async fn create_team(&self, organization: Uuid, req: &CreateTeam) -> Result<OperationResponse> {
        let path = format!("/organizations/{}/teams", organization);
        let response = self.post(&path).await?.json(req).send().await?;

        self.handle_operation(response).await
    }

    /// Invite a user to a team by email
    pub async fn invite_team_member(&self, team: Uuid, req: &InviteMember) -> Result<OperationResponse> {
        let path = format!("/teams/{}/invites", team);
        let response = self.post(&path).await?.json(req).send().await?;

        self.handle_operation(response).await
    }

    /// Grant a team access to an application
    pub async fn add_team_application(&self, team: Uuid, req: &AddApplication) -> Result<OperationResponse> {
        let path = format!("/teams/{}/applications", team);
        let response = self.post(&path).await?.json(req).send().await?;

        self.handle_operation(response).await
    }

    // =============================================================================
    // Roles
    // =============================================================================

    pub async fn list_roles(&self, organization: Uuid) -> Result<Vec<Role>> {
        let path = format!("/organizations/{}/roles", organization);
        let response = self.get(&path).await?.send().await?;

        self.handle_collection(response).await
    }

    pub async fn create_role(&self, organization: Uuid, req: &CreateRole) -> Result<OperationResponse> {
        let path = format!("/organizations/{}/roles", organization);
        let response = self.post(&path).await?.json(req).send().await?;

        self.handle_operation(response).await
    }

    pub async fn update_role(&self, role: Uuid, req: &UpdateRole) -> Result<OperationResponse> {
        let path = format!("/roles/{}", role);
        let response = self.put(&path).await?.json(req).send().await?;

        self.handle_operation(response).await
    }

    pub async fn delete_role(&self, role: Uuid) -> Result<OperationResponse> {
        let path = format!("/roles/{}", role);
        let response = self.delete(&path).await?.send().await?;

        self.handle_operation(response).await
    }

    // =============================================================================
    // Permissions
    // =============================================================================

    /// List every permission that can be granted to a role
    pub async fn list_permissions(&self) -> Result<Vec<Permission>> {
        let response = self.get("/permissions").await?.send().await?;

        self.handle_collection(response).await
    }
}
