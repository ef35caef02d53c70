//! Database-related API endpoints

use crate::CloudClient;
use crate::error::Result;
use hostctl_core::domain::database::{Database, DatabaseBackup};
use hostctl_core::dto::collection::ListQuery;
use hostctl_core::dto::database::{CopyDatabase, CreateDatabase};
use hostctl_core::dto::operation::OperationResponse;
use uuid::Uuid;

impl CloudClient {
    // =============================================================================
    // Application databases
    // =============================================================================

    /// List the databases of an application
    ///
    /// Pass `ListQuery::filtered("name", db)` to look up a single database.
    pub async fn list_databases(&self, application: Uuid, query: &ListQuery) -> Result<Vec<Database>> {
        let path = format!("/applications/{}/databases", application);
        let response = self.get(&path).await?.query(query).send().await?;

        self.handle_collection(response).await
    }

    /// Create a database in every environment of an application
    pub async fn create_database(
        &self,
        application: Uuid,
        req: &CreateDatabase,
    ) -> Result<OperationResponse> {
        let path = format!("/applications/{}/databases", application);
        let response = self.post(&path).await?.json(req).send().await?;

        self.handle_operation(response).await
    }

    /// Delete a database from every environment of an application
    pub async fn delete_database(&self, application: Uuid, name: &str) -> Result<OperationResponse> {
        let path = format!("/applications/{}/databases/{}", application, name);
        let response = self.delete(&path).await?.send().await?;

        self.handle_operation(response).await
    }

    /// Drop every table of a database
    pub async fn erase_database(&self, application: Uuid, name: &str) -> Result<OperationResponse> {
        let path = format!("/applications/{}/databases/{}/actions/erase", application, name);
        let response = self.post(&path).await?.send().await?;

        self.handle_operation(response).await
    }

    // =============================================================================
    // Environment databases
    // =============================================================================

    /// Copy a database from one environment into another
    ///
    /// # Arguments
    /// * `to` - The destination environment id
    /// * `req` - Database name and source environment id
    pub async fn copy_database(&self, to: &str, req: &CopyDatabase) -> Result<OperationResponse> {
        let path = format!("/environments/{}/databases", to);
        let response = self.post(&path).await?.json(req).send().await?;

        self.handle_operation(response).await
    }

    // =============================================================================
    // Backups
    // =============================================================================

    /// Create an on-demand backup of a database in an environment
    pub async fn create_database_backup(
        &self,
        environment: &str,
        database: &str,
    ) -> Result<OperationResponse> {
        let path = format!("/environments/{}/databases/{}/backups", environment, database);
        let response = self.post(&path).await?.send().await?;

        self.handle_operation(response).await
    }

    /// List the backups of a database on an environment
    pub async fn list_database_backups(
        &self,
        environment: &str,
        database: &str,
        query: &ListQuery,
    ) -> Result<Vec<DatabaseBackup>> {
        let path = format!("/environments/{}/databases/{}/backups", environment, database);
        let response = self.get(&path).await?.query(query).send().await?;

        self.handle_collection(response).await
    }

    /// Restore a backup over the database it was taken from
    pub async fn restore_database_backup(
        &self,
        environment: &str,
        database: &str,
        backup: u64,
    ) -> Result<OperationResponse> {
        let path = format!("{}/actions/restore", backup_path(environment, database, backup));
        let response = self.post(&path).await?.send().await?;

        self.handle_operation(response).await
    }

    /// Delete an on-demand backup
    pub async fn delete_database_backup(
        &self,
        environment: &str,
        database: &str,
        backup: u64,
    ) -> Result<OperationResponse> {
        let path = backup_path(environment, database, backup);
        let response = self.delete(&path).await?.send().await?;

        self.handle_operation(response).await
    }

    /// URL a backup can be downloaded from with a bearer token
    pub fn database_backup_link(&self, environment: &str, database: &str, backup: u64) -> String {
        format!(
            "{}{}/actions/download",
            self.base_url(),
            backup_path(environment, database, backup)
        )
    }

    /// Download a backup (gzipped SQL dump)
    pub async fn download_database_backup(
        &self,
        environment: &str,
        database: &str,
        backup: u64,
    ) -> Result<Vec<u8>> {
        let path = format!("{}/actions/download", backup_path(environment, database, backup));
        let response = self.get(&path).await?.send().await?;

        self.handle_bytes(response).await
    }
}

fn backup_path(environment: &str, database: &str, backup: u64) -> String {
    format!(
        "/environments/{}/databases/{}/backups/{}",
        environment, database, backup
    )
}
