//! Multi-step operations
//!
//! Each operation resolves its environments, asks for confirmation, then runs
//! its steps strictly in order, waiting on every asynchronous task before the
//! next step starts. The first failing step aborts the rest; steps that
//! already completed (a finished backup, a deleted domain) are left as they
//! are.

use std::sync::Arc;

use hostctl_client::CloudApi;
use hostctl_core::domain::environment::{Environment, PRODUCTION};
use tracing::info;
use uuid::Uuid;

use crate::error::{CliError, Entity};
use crate::id_resolver::Resolver;
use crate::progress::ProgressReporter;
use crate::prompt::Confirmation;
use crate::waiter::NotificationWaiter;

/// How a confirmed operation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The operator answered no; nothing was changed
    Declined,
}

pub struct Orchestrator {
    api: Arc<dyn CloudApi>,
    resolver: Arc<Resolver>,
    waiter: Arc<NotificationWaiter>,
    reporter: Arc<dyn ProgressReporter>,
    confirm: Arc<dyn Confirmation>,
}

impl Orchestrator {
    pub fn new(
        api: Arc<dyn CloudApi>,
        resolver: Arc<Resolver>,
        waiter: Arc<NotificationWaiter>,
        reporter: Arc<dyn ProgressReporter>,
        confirm: Arc<dyn Confirmation>,
    ) -> Self {
        Self {
            api,
            resolver,
            waiter,
            reporter,
            confirm,
        }
    }

    // =============================================================================
    // Databases
    // =============================================================================

    /// Copy one database between environments, backing it up on the destination first
    pub async fn copy_database(
        &self,
        app: &str,
        from: &str,
        to: &str,
        database: &str,
        backup: bool,
    ) -> Result<Outcome, CliError> {
        let application = self.resolver.resolve_application(app).await?;
        let from = self.resolver.resolve_environment(application, from).await?;
        let to = self.resolver.resolve_environment(application, to).await?;

        let question = format!(
            "Are you sure you want to copy database {} from {} to {}?",
            database, from.label, to.label
        );
        if !self.confirm.confirm(&question)? {
            return Ok(Outcome::Declined);
        }

        self.move_databases(application, &from, &to, Some(database), backup)
            .await?;
        Ok(Outcome::Completed)
    }

    /// Copy every database of the application between environments
    pub async fn copy_all_databases(
        &self,
        app: &str,
        from: &str,
        to: &str,
        backup: bool,
    ) -> Result<Outcome, CliError> {
        let application = self.resolver.resolve_application(app).await?;
        let from = self.resolver.resolve_environment(application, from).await?;
        let to = self.resolver.resolve_environment(application, to).await?;

        let question = format!(
            "Are you sure you want to copy all databases from {} to {}?",
            from.label, to.label
        );
        if !self.confirm.confirm(&question)? {
            return Ok(Outcome::Declined);
        }

        self.move_databases(application, &from, &to, None, backup)
            .await?;
        Ok(Outcome::Completed)
    }

    /// Back up a single database on one environment
    pub async fn backup(&self, app: &str, environment: &str, database: &str) -> Result<(), CliError> {
        let application = self.resolver.resolve_application(app).await?;
        let environment = self.resolver.resolve_environment(application, environment).await?;
        self.backup_database(&environment, database).await
    }

    /// For each database (optionally only `name`): back it up on `to`, then copy it from `from`
    pub async fn move_databases(
        &self,
        application: Uuid,
        from: &Environment,
        to: &Environment,
        name: Option<&str>,
        backup: bool,
    ) -> Result<(), CliError> {
        let databases = self.api.list_databases(application, name).await?;
        if let Some(name) = name
            && databases.is_empty()
        {
            return Err(CliError::not_found(Entity::Database, name));
        }

        for database in &databases {
            if backup {
                self.backup_database(to, &database.name).await?;
            }

            self.reporter.step(&format!(
                "Moving DB ({}) from {} to {}",
                database.name, from.label, to.label
            ));
            let response = self
                .api
                .copy_database(&from.uuid, &to.uuid, &database.name)
                .await?;
            self.waiter.wait(&response).await?;
        }

        info!(
            "Moved {} database(s) from {} to {}",
            databases.len(),
            from.name,
            to.name
        );
        Ok(())
    }

    /// Back up every database of the application on one environment
    pub async fn backup_all_databases(
        &self,
        application: Uuid,
        environment: &Environment,
    ) -> Result<(), CliError> {
        for database in self.api.list_databases(application, None).await? {
            self.backup_database(environment, &database.name).await?;
        }
        Ok(())
    }

    pub async fn backup_database(
        &self,
        environment: &Environment,
        database: &str,
    ) -> Result<(), CliError> {
        self.reporter.step(&format!(
            "Backing up DB ({}) on {}",
            database, environment.label
        ));
        let response = self
            .api
            .create_database_backup(&environment.uuid, database)
            .await?;
        self.waiter.wait(&response).await
    }

    /// Resolve `app` and `environment`, then back up each database there
    pub async fn backup_environment(&self, app: &str, environment: &str) -> Result<(), CliError> {
        let application = self.resolver.resolve_application(app).await?;
        let environment = self.resolver.resolve_environment(application, environment).await?;
        self.backup_all_databases(application, &environment).await
    }

    /// Restore a backup over its database
    pub async fn restore_backup(
        &self,
        app: &str,
        environment: &str,
        database: &str,
        backup: u64,
    ) -> Result<Outcome, CliError> {
        let application = self.resolver.resolve_application(app).await?;
        let environment = self.resolver.resolve_environment(application, environment).await?;

        let question = format!(
            "Are you sure you want to restore backup {} to {} on {}?",
            backup, database, environment.label
        );
        if !self.confirm.confirm(&question)? {
            return Ok(Outcome::Declined);
        }

        self.reporter.step(&format!(
            "Restoring backup {} to {} on {}",
            backup, database, environment.label
        ));
        let response = self
            .api
            .restore_database_backup(&environment.uuid, database, backup)
            .await?;
        self.waiter.wait(&response).await?;
        Ok(Outcome::Completed)
    }

    pub async fn delete_backup(
        &self,
        app: &str,
        environment: &str,
        database: &str,
        backup: u64,
    ) -> Result<Outcome, CliError> {
        let application = self.resolver.resolve_application(app).await?;
        let environment = self.resolver.resolve_environment(application, environment).await?;

        let question = format!(
            "Are you sure you want to delete backup {} of {} on {}?",
            backup, database, environment.label
        );
        if !self.confirm.confirm(&question)? {
            return Ok(Outcome::Declined);
        }

        self.reporter.step(&format!(
            "Deleting backup {} of {} on {}",
            backup, database, environment.label
        ));
        let response = self
            .api
            .delete_database_backup(&environment.uuid, database, backup)
            .await?;
        self.waiter.wait(&response).await?;
        Ok(Outcome::Completed)
    }

    // =============================================================================
    // Deployments
    // =============================================================================

    /// Pull databases and files from `from` (production by default) into a
    /// non-production environment
    ///
    /// # Errors
    /// `InvalidDomainState` before any API call when `to` is production
    pub async fn deploy_prepare(
        &self,
        app: &str,
        to: &str,
        from: Option<&str>,
    ) -> Result<Outcome, CliError> {
        if to == PRODUCTION {
            return Err(CliError::InvalidDomainState(
                "Cannot use deploy:prepare on the production environment".to_string(),
            ));
        }

        let application = self.resolver.resolve_application(app).await?;
        let from = self
            .resolver
            .resolve_environment(application, from.unwrap_or(PRODUCTION))
            .await?;
        let to = self.resolver.resolve_environment(application, to).await?;

        let question = format!(
            "Are you sure you want to copy all databases and files from {} to {}?",
            from.label, to.label
        );
        if !self.confirm.confirm(&question)? {
            return Ok(Outcome::Declined);
        }

        self.move_databases(application, &from, &to, None, true)
            .await?;
        self.transfer_files(&from, &to).await?;
        Ok(Outcome::Completed)
    }

    /// Deploy the code of one environment onto another
    pub async fn deploy_code(
        &self,
        app: &str,
        from: &str,
        to: &str,
        backup: bool,
    ) -> Result<Outcome, CliError> {
        let application = self.resolver.resolve_application(app).await?;
        let from = self.resolver.resolve_environment(application, from).await?;
        let to = self.resolver.resolve_environment(application, to).await?;

        let question = format!(
            "Are you sure you want to deploy code from {} to {}?",
            from.label, to.label
        );
        if !self.confirm.confirm(&question)? {
            return Ok(Outcome::Declined);
        }

        if backup {
            self.backup_all_databases(application, &to).await?;
        }

        self.reporter.step(&format!(
            "Deploying code from the {} environment to the {} environment",
            from.label, to.label
        ));
        let response = self.api.deploy_code(&from.uuid, &to.uuid).await?;
        self.waiter.wait(&response).await?;
        Ok(Outcome::Completed)
    }

    /// Switch the branch or tag an environment runs
    pub async fn switch_code(
        &self,
        app: &str,
        environment: &str,
        branch: &str,
        backup: bool,
    ) -> Result<Outcome, CliError> {
        let application = self.resolver.resolve_application(app).await?;
        let environment = self.resolver.resolve_environment(application, environment).await?;

        let question = format!(
            "Are you sure you want to switch code on the {} environment to branch: {}?",
            environment.name, branch
        );
        if !self.confirm.confirm(&question)? {
            return Ok(Outcome::Declined);
        }

        if backup {
            self.backup_all_databases(application, &environment).await?;
        }

        self.reporter.step(&format!(
            "Switching {} environment to {} branch",
            environment.label, branch
        ));
        let response = self.api.switch_code(&environment.uuid, branch).await?;
        self.waiter.wait(&response).await?;
        Ok(Outcome::Completed)
    }

    // =============================================================================
    // Files and domains
    // =============================================================================

    pub async fn copy_files(&self, app: &str, from: &str, to: &str) -> Result<Outcome, CliError> {
        let application = self.resolver.resolve_application(app).await?;
        let from = self.resolver.resolve_environment(application, from).await?;
        let to = self.resolver.resolve_environment(application, to).await?;

        let question = format!(
            "Are you sure you want to copy files from {} to {}?",
            from.label, to.label
        );
        if !self.confirm.confirm(&question)? {
            return Ok(Outcome::Declined);
        }

        self.transfer_files(&from, &to).await?;
        Ok(Outcome::Completed)
    }

    async fn transfer_files(&self, from: &Environment, to: &Environment) -> Result<(), CliError> {
        self.reporter.step(&format!(
            "Copying files from {} to {}",
            from.label, to.label
        ));
        let response = self.api.copy_files(&from.uuid, &to.uuid).await?;
        self.waiter.wait(&response).await
    }

    /// Move a domain by deleting it from `from` and recreating it on `to`
    ///
    /// Not atomic: if the create step fails the domain is attached to neither
    /// environment.
    pub async fn move_domain(
        &self,
        app: &str,
        domain: &str,
        from: &str,
        to: &str,
    ) -> Result<Outcome, CliError> {
        let application = self.resolver.resolve_application(app).await?;
        let from = self.resolver.resolve_environment(application, from).await?;
        let to = self.resolver.resolve_environment(application, to).await?;

        let question = format!(
            "Are you sure you want to move {} from environment {} to {}?",
            domain, from.label, to.label
        );
        if !self.confirm.confirm(&question)? {
            return Ok(Outcome::Declined);
        }

        self.reporter.step(&format!(
            "Moving {} from {} to {}",
            domain, from.label, to.label
        ));

        let deleted = match self.api.delete_domain(&from.uuid, domain).await {
            Ok(response) => response,
            Err(e) if e.is_not_found() => return Err(CliError::not_found(Entity::Domain, domain)),
            Err(e) => return Err(e.into()),
        };
        self.waiter.wait(&deleted).await?;

        let created = self.api.create_domain(&to.uuid, domain).await?;
        self.waiter.wait(&created).await?;
        Ok(Outcome::Completed)
    }

    /// Clear the Varnish cache for one domain, or for every domain of the environment
    ///
    /// Purging production asks for confirmation first.
    pub async fn purge_varnish(
        &self,
        app: &str,
        environment: &str,
        domain: Option<&str>,
    ) -> Result<Outcome, CliError> {
        let application = self.resolver.resolve_application(app).await?;
        let environment = self.resolver.resolve_environment(application, environment).await?;

        if environment.is_production()
            && !self
                .confirm
                .confirm("Are you sure you want to purge varnish on the production environment?")?
        {
            return Ok(Outcome::Declined);
        }

        let domains = match domain {
            Some(domain) => vec![domain.to_string()],
            None => self
                .api
                .list_domains(&environment.uuid)
                .await?
                .into_iter()
                .map(|d| d.hostname)
                .collect(),
        };

        self.reporter.step(&format!(
            "Purging varnish cache for {} on {}",
            domains.join(", "),
            environment.label
        ));
        let response = self.api.purge_domains(&environment.uuid, &domains).await?;
        self.waiter.wait(&response).await?;
        Ok(Outcome::Completed)
    }

    // =============================================================================
    // Production mode
    // =============================================================================

    /// Turn production mode on or off; disabling asks for confirmation
    ///
    /// # Errors
    /// `InvalidDomainState` before any API call unless `environment` is production
    pub async fn set_production_mode(
        &self,
        app: &str,
        environment: &str,
        enabled: bool,
    ) -> Result<Outcome, CliError> {
        ensure_production(environment)?;
        let application = self.resolver.resolve_application(app).await?;
        let environment = self.resolver.resolve_environment(application, environment).await?;

        if !enabled {
            let question = format!(
                "Are you sure you want to disable production mode on {}?",
                environment.label
            );
            if !self.confirm.confirm(&question)? {
                return Ok(Outcome::Declined);
            }
        }

        let action = if enabled { "Enabling" } else { "Disabling" };
        self.reporter.step(&format!(
            "{} production mode on {}",
            action, environment.label
        ));
        let response = self
            .api
            .set_production_mode(&environment.uuid, enabled)
            .await?;
        self.waiter.wait(&response).await?;
        Ok(Outcome::Completed)
    }
}

/// Guard for operations that only make sense on the production environment
///
/// Checked on the environment name so it fails before anything is resolved.
fn ensure_production(environment: &str) -> Result<(), CliError> {
    if environment == PRODUCTION {
        Ok(())
    } else {
        Err(CliError::InvalidDomainState(format!(
            "Production mode may only be changed on the production environment, not '{}'",
            environment
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{APP_UUID, FakeApi, FixedAnswer, MemoryCache, SilentReporter};
    use crate::waiter::WaitOptions;
    use std::time::Duration;

    struct Harness {
        api: Arc<FakeApi>,
        reporter: Arc<SilentReporter>,
        confirm: Arc<FixedAnswer>,
        orchestrator: Orchestrator,
    }

    fn harness(api: FakeApi, confirm: FixedAnswer) -> Harness {
        let api = Arc::new(api);
        let reporter = Arc::new(SilentReporter::default());
        let confirm = Arc::new(confirm);
        let resolver = Arc::new(Resolver::new(
            api.clone(),
            Arc::new(MemoryCache::new()),
            "prod",
        ));
        let waiter = Arc::new(NotificationWaiter::new(
            api.clone(),
            WaitOptions {
                skip_wait: false,
                poll_interval: Duration::from_secs(5),
                timeout: Duration::from_secs(300),
            },
            reporter.clone(),
        ));
        let orchestrator = Orchestrator::new(
            api.clone(),
            resolver,
            waiter,
            reporter.clone(),
            confirm.clone(),
        );
        Harness {
            api,
            reporter,
            confirm,
            orchestrator,
        }
    }

    /// Mutating calls only, with resolution and polling filtered out
    fn mutations(api: &FakeApi) -> Vec<String> {
        api.calls()
            .into_iter()
            .filter(|c| !c.starts_with("list_") && !c.starts_with("get_notification"))
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_all_databases_backs_up_then_copies_each() {
        let h = harness(FakeApi::with_site(), FixedAnswer::yes());

        let outcome = h
            .orchestrator
            .copy_all_databases("mysite", "prod", "stage", true)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(
            mutations(&h.api),
            vec![
                "backup 2-stage db1",
                "copy_database 3-prod 2-stage db1",
                "backup 2-stage db2",
                "copy_database 3-prod 2-stage db2",
            ]
        );
        assert_eq!(
            *h.confirm.questions.lock().unwrap(),
            vec!["Are you sure you want to copy all databases from PROD to STAGE?"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_backup_aborts_the_move() {
        let h = harness(FakeApi::with_site(), FixedAnswer::yes());
        h.api.fail_task("backup 2-stage db1");

        let err = h
            .orchestrator
            .copy_all_databases("mysite", "prod", "stage", true)
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::OperationFailed { .. }));
        assert_eq!(mutations(&h.api), vec!["backup 2-stage db1"]);
        assert_eq!(h.api.count("copy_database"), 0);
        assert!(!h.api.calls().iter().any(|c| c.contains("db2")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_single_database_filters_by_name() {
        let h = harness(FakeApi::with_site(), FixedAnswer::yes());

        h.orchestrator
            .copy_database("mysite", "prod", "dev", "db2", false)
            .await
            .unwrap();

        assert_eq!(h.api.count(&format!("list_databases {} db2", APP_UUID)), 1);
        assert_eq!(mutations(&h.api), vec!["copy_database 3-prod 1-dev db2"]);
        assert_eq!(
            *h.reporter.steps.lock().unwrap(),
            vec!["Moving DB (db2) from PROD to DEV"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_unknown_database() {
        let h = harness(FakeApi::with_site(), FixedAnswer::yes());

        let err = h
            .orchestrator
            .copy_database("mysite", "prod", "dev", "db9", true)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CliError::NotFound {
                entity: Entity::Database,
                ..
            }
        ));
        assert!(mutations(&h.api).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_deploy_prepare_refuses_production_without_api_calls() {
        let h = harness(FakeApi::with_site(), FixedAnswer::yes());

        let err = h
            .orchestrator
            .deploy_prepare("mysite", "prod", None)
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::InvalidDomainState(_)));
        assert!(h.api.calls().is_empty());
        assert!(h.confirm.questions.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_deploy_prepare_defaults_to_production_source() {
        let h = harness(FakeApi::with_site(), FixedAnswer::yes());

        h.orchestrator
            .deploy_prepare("mysite", "dev", None)
            .await
            .unwrap();

        assert_eq!(
            mutations(&h.api),
            vec![
                "backup 1-dev db1",
                "copy_database 3-prod 1-dev db1",
                "backup 1-dev db2",
                "copy_database 3-prod 1-dev db2",
                "copy_files 3-prod 1-dev",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_declined_confirmation_changes_nothing() {
        let h = harness(FakeApi::with_site(), FixedAnswer::no());

        let outcome = h
            .orchestrator
            .deploy_code("mysite", "dev", "stage", true)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Declined);
        assert!(mutations(&h.api).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_deploy_code_backs_up_target_first() {
        let h = harness(FakeApi::with_site(), FixedAnswer::yes());

        h.orchestrator
            .deploy_code("mysite", "dev", "stage", true)
            .await
            .unwrap();

        assert_eq!(
            mutations(&h.api),
            vec![
                "backup 2-stage db1",
                "backup 2-stage db2",
                "deploy_code 1-dev 2-stage",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_switch_code_without_backup() {
        let h = harness(FakeApi::with_site(), FixedAnswer::yes());

        h.orchestrator
            .switch_code("mysite", "dev", "feature/x", false)
            .await
            .unwrap();

        assert_eq!(mutations(&h.api), vec!["switch_code 1-dev feature/x"]);
        assert_eq!(
            *h.confirm.questions.lock().unwrap(),
            vec!["Are you sure you want to switch code on the dev environment to branch: feature/x?"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_domain_move_leaves_domain_deleted_when_create_fails() {
        let h = harness(FakeApi::with_site(), FixedAnswer::yes());
        h.api.fail_task("create_domain 2-stage www.example.com");

        let err = h
            .orchestrator
            .move_domain("mysite", "www.example.com", "dev", "stage")
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::OperationFailed { .. }));
        assert_eq!(
            mutations(&h.api),
            vec![
                "delete_domain 1-dev www.example.com",
                "create_domain 2-stage www.example.com",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_domain_move_of_unknown_domain() {
        let h = harness(FakeApi::with_site(), FixedAnswer::yes());

        let err = h
            .orchestrator
            .move_domain("mysite", "missing.example.com", "dev", "stage")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CliError::NotFound {
                entity: Entity::Domain,
                ..
            }
        ));
        assert_eq!(h.api.count("create_domain"), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_switch_to_nested_branch() {
        let h = harness(FakeApi::with_site(), FixedAnswer::yes());
        h.api.fail_task("switch_code 1-dev feature/x");

        let err = h
            .orchestrator
            .switch_code("mysite", "dev", "feature/x", false)
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::OperationFailed { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_backup_environment_covers_every_database() {
        let h = harness(FakeApi::with_site(), FixedAnswer::yes());

        h.orchestrator.backup_environment("mysite", "dev").await.unwrap();

        assert_eq!(
            mutations(&h.api),
            vec!["backup 1-dev db1", "backup 1-dev db2"]
        );
        assert_eq!(
            *h.reporter.steps.lock().unwrap(),
            vec!["Backing up DB (db1) on DEV", "Backing up DB (db2) on DEV"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_restore_backup_waits_for_the_task() {
        let h = harness(FakeApi::with_site(), FixedAnswer::yes());
        h.api.script(&["in-progress", "completed"]);

        let outcome = h
            .orchestrator
            .restore_backup("mysite", "dev", "db1", 1234)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(mutations(&h.api), vec!["restore_backup 1-dev db1 1234"]);
        assert_eq!(h.api.count("get_notification"), 2);
        assert_eq!(
            *h.confirm.questions.lock().unwrap(),
            vec!["Are you sure you want to restore backup 1234 to db1 on DEV?"]
        );
        assert_eq!(
            *h.reporter.steps.lock().unwrap(),
            vec!["Restoring backup 1234 to db1 on DEV"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_declined_restore_changes_nothing() {
        let h = harness(FakeApi::with_site(), FixedAnswer::no());

        let outcome = h
            .orchestrator
            .restore_backup("mysite", "prod", "db1", 7)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Declined);
        assert!(mutations(&h.api).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_backup_delete() {
        let h = harness(FakeApi::with_site(), FixedAnswer::yes());
        h.api.fail_task("delete_backup 2-stage db2 9");

        let err = h
            .orchestrator
            .delete_backup("mysite", "stage", "db2", 9)
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::OperationFailed { .. }));
        assert_eq!(mutations(&h.api), vec!["delete_backup 2-stage db2 9"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_purge_without_domain_covers_every_domain() {
        let h = harness(FakeApi::with_site(), FixedAnswer::yes());

        h.orchestrator
            .purge_varnish("mysite", "prod", None)
            .await
            .unwrap();

        assert_eq!(
            mutations(&h.api),
            vec!["purge_domains 3-prod prod.example.com,www.example.com"]
        );
        assert_eq!(
            *h.confirm.questions.lock().unwrap(),
            vec!["Are you sure you want to purge varnish on the production environment?"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_purge_single_domain_outside_production_needs_no_confirmation() {
        let h = harness(FakeApi::with_site(), FixedAnswer::no());

        let outcome = h
            .orchestrator
            .purge_varnish("mysite", "dev", Some("dev.example.com"))
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(h.api.count("list_domains"), 0);
        assert_eq!(mutations(&h.api), vec!["purge_domains 1-dev dev.example.com"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_production_mode_refused_outside_production_without_api_calls() {
        let h = harness(FakeApi::with_site(), FixedAnswer::yes());

        for enabled in [true, false] {
            let err = h
                .orchestrator
                .set_production_mode("mysite", "stage", enabled)
                .await
                .unwrap_err();
            assert!(matches!(err, CliError::InvalidDomainState(_)));
        }

        assert!(h.api.calls().is_empty());
        assert!(h.confirm.questions.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabling_production_mode_asks_first() {
        let h = harness(FakeApi::with_site(), FixedAnswer::no());

        let outcome = h
            .orchestrator
            .set_production_mode("mysite", "prod", false)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Declined);
        assert!(mutations(&h.api).is_empty());
        assert_eq!(h.confirm.questions.lock().unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_enabling_production_mode() {
        let h = harness(FakeApi::with_site(), FixedAnswer::no());

        let outcome = h
            .orchestrator
            .set_production_mode("mysite", "prod", true)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(mutations(&h.api), vec!["production_mode 3-prod true"]);
        assert!(h.confirm.questions.lock().unwrap().is_empty());
    }

    #[test]
    fn test_production_guard() {
        assert!(ensure_production("prod").is_ok());
        assert!(matches!(
            ensure_production("stage"),
            Err(CliError::InvalidDomainState(_))
        ));
    }
}
