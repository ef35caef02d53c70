//! The narrow API surface consumed by identifier resolution, notification
//! waiting and multi-step operations.
//!
//! Keeping these calls behind a trait lets the callers be exercised against
//! scripted fakes instead of a live platform.

use crate::CloudClient;
use crate::error::Result;
use async_trait::async_trait;
use hostctl_core::domain::application::Application;
use hostctl_core::domain::database::Database;
use hostctl_core::domain::environment::Environment;
use hostctl_core::domain::hostname::Domain;
use hostctl_core::domain::notification::Notification;
use hostctl_core::domain::organization::Organization;
use hostctl_core::dto::code::{DeployCode, SwitchCode};
use hostctl_core::dto::collection::ListQuery;
use hostctl_core::dto::database::CopyDatabase;
use hostctl_core::dto::domain::{CreateDomain, PurgeDomains};
use hostctl_core::dto::environment::CopyFiles;
use hostctl_core::dto::operation::OperationResponse;
use uuid::Uuid;

#[async_trait]
pub trait CloudApi: Send + Sync {
    /// Every application visible to the authenticated caller
    async fn list_applications(&self) -> Result<Vec<Application>>;

    async fn list_environments(&self, application: Uuid) -> Result<Vec<Environment>>;

    async fn list_organizations(&self) -> Result<Vec<Organization>>;

    async fn get_notification(&self, handle: &str) -> Result<Notification>;

    /// Databases of an application, optionally narrowed to a single name
    async fn list_databases(&self, application: Uuid, name: Option<&str>) -> Result<Vec<Database>>;

    async fn create_database_backup(&self, environment: &str, database: &str)
    -> Result<OperationResponse>;

    async fn copy_database(&self, from: &str, to: &str, database: &str) -> Result<OperationResponse>;

    async fn copy_files(&self, from: &str, to: &str) -> Result<OperationResponse>;

    async fn deploy_code(&self, from: &str, to: &str) -> Result<OperationResponse>;

    async fn switch_code(&self, environment: &str, branch: &str) -> Result<OperationResponse>;

    async fn create_domain(&self, environment: &str, hostname: &str) -> Result<OperationResponse>;

    async fn delete_domain(&self, environment: &str, hostname: &str) -> Result<OperationResponse>;

    /// Every domain of an environment, ignoring any caller-side list options
    async fn list_domains(&self, environment: &str) -> Result<Vec<Domain>>;

    async fn purge_domains(&self, environment: &str, domains: &[String]) -> Result<OperationResponse>;

    async fn set_production_mode(&self, environment: &str, enabled: bool) -> Result<OperationResponse>;

    async fn restore_database_backup(
        &self,
        environment: &str,
        database: &str,
        backup: u64,
    ) -> Result<OperationResponse>;

    async fn delete_database_backup(
        &self,
        environment: &str,
        database: &str,
        backup: u64,
    ) -> Result<OperationResponse>;
}

#[async_trait]
impl CloudApi for CloudClient {
    async fn list_applications(&self) -> Result<Vec<Application>> {
        CloudClient::list_applications(self, &ListQuery::default()).await
    }

    async fn list_environments(&self, application: Uuid) -> Result<Vec<Environment>> {
        CloudClient::list_environments(self, application, &ListQuery::default()).await
    }

    async fn list_organizations(&self) -> Result<Vec<Organization>> {
        CloudClient::list_organizations(self).await
    }

    async fn get_notification(&self, handle: &str) -> Result<Notification> {
        CloudClient::get_notification(self, handle).await
    }

    async fn list_databases(&self, application: Uuid, name: Option<&str>) -> Result<Vec<Database>> {
        let query = match name {
            Some(name) => ListQuery::filtered("name", name),
            None => ListQuery::default(),
        };
        CloudClient::list_databases(self, application, &query).await
    }

    async fn create_database_backup(
        &self,
        environment: &str,
        database: &str,
    ) -> Result<OperationResponse> {
        CloudClient::create_database_backup(self, environment, database).await
    }

    async fn copy_database(&self, from: &str, to: &str, database: &str) -> Result<OperationResponse> {
        let req = CopyDatabase {
            name: database.to_string(),
            source: from.to_string(),
        };
        CloudClient::copy_database(self, to, &req).await
    }

    async fn copy_files(&self, from: &str, to: &str) -> Result<OperationResponse> {
        let req = CopyFiles {
            source: from.to_string(),
        };
        CloudClient::copy_files(self, to, &req).await
    }

    async fn deploy_code(&self, from: &str, to: &str) -> Result<OperationResponse> {
        let req = DeployCode {
            source: from.to_string(),
        };
        CloudClient::deploy_code(self, to, &req).await
    }

    async fn switch_code(&self, environment: &str, branch: &str) -> Result<OperationResponse> {
        let req = SwitchCode {
            branch: branch.to_string(),
        };
        CloudClient::switch_code(self, environment, &req).await
    }

    async fn create_domain(&self, environment: &str, hostname: &str) -> Result<OperationResponse> {
        let req = CreateDomain {
            hostname: hostname.to_string(),
        };
        CloudClient::create_domain(self, environment, &req).await
    }

    async fn delete_domain(&self, environment: &str, hostname: &str) -> Result<OperationResponse> {
        CloudClient::delete_domain(self, environment, hostname).await
    }

    async fn list_domains(&self, environment: &str) -> Result<Vec<Domain>> {
        CloudClient::list_domains(self, environment, &ListQuery::default()).await
    }

    async fn purge_domains(&self, environment: &str, domains: &[String]) -> Result<OperationResponse> {
        let req = PurgeDomains {
            domains: domains.to_vec(),
        };
        CloudClient::purge_domains(self, environment, &req).await
    }

    async fn set_production_mode(&self, environment: &str, enabled: bool) -> Result<OperationResponse> {
        if enabled {
            CloudClient::enable_production_mode(self, environment).await
        } else {
            CloudClient::disable_production_mode(self, environment).await
        }
    }

    async fn restore_database_backup(
        &self,
        environment: &str,
        database: &str,
        backup: u64,
    ) -> Result<OperationResponse> {
        CloudClient::restore_database_backup(self, environment, database, backup).await
    }

    async fn delete_database_backup(
        &self,
        environment: &str,
        database: &str,
        backup: u64,
    ) -> Result<OperationResponse> {
        CloudClient::delete_database_backup(self, environment, database, backup).await
    }
}
