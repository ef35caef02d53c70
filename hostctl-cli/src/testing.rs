//! Scripted fakes shared by unit tests

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use hostctl_client::{ClientError, CloudApi};
use hostctl_core::domain::application::{Application, Hosting};
use hostctl_core::domain::database::Database;
use hostctl_core::domain::environment::{Environment, EnvironmentFlags, Vcs};
use hostctl_core::domain::hostname::{Domain, DomainFlags};
use hostctl_core::domain::notification::{Notification, NotificationStatus};
use hostctl_core::domain::organization::Organization;
use hostctl_core::dto::operation::OperationResponse;
use serde_json::Value;
use uuid::Uuid;

use crate::cache::{CacheError, IdentifierCache};
use crate::error::CliError;
use crate::progress::ProgressReporter;
use crate::prompt::Confirmation;

pub const APP_UUID: &str = "a47ac10b-58cc-4372-a567-0e02b2c3d479";

pub fn application(uuid: &str, hosting_id: &str) -> Application {
    Application {
        uuid: Uuid::parse_str(uuid).unwrap(),
        name: hosting_id.to_string(),
        hosting: Hosting {
            hosting_type: "acp".to_string(),
            id: hosting_id.to_string(),
        },
    }
}

pub fn environment(id: &str, name: &str) -> Environment {
    Environment {
        uuid: id.to_string(),
        name: name.to_string(),
        label: name.to_uppercase(),
        domains: vec![format!("{}.example.com", name)],
        vcs: Vcs {
            vcs_type: Some("git".to_string()),
            path: "master".to_string(),
            url: None,
        },
        flags: EnvironmentFlags::default(),
    }
}

pub fn organization(name: &str) -> Organization {
    Organization {
        uuid: Uuid::new_v4(),
        name: name.to_string(),
        owner: None,
        subscriptions_total: 0,
        admins_total: 0,
        users_total: 0,
        teams_total: 0,
        roles_total: 0,
    }
}

/// Call-recording `CloudApi` with scripted notification statuses
///
/// Every mutating call is recorded as a call string (e.g. `backup 2-stage db1`)
/// and answers with a fresh `task-N` notification handle. Tasks whose call was
/// registered with `fail_task` report `failed`; other handles pop the scripted
/// status queue and report `completed` once it is empty.
#[derive(Default)]
pub struct FakeApi {
    pub applications: Vec<Application>,
    pub environments: HashMap<Uuid, Vec<Environment>>,
    pub organizations: Vec<Organization>,
    pub databases: Vec<Database>,
    statuses: Mutex<VecDeque<NotificationStatus>>,
    failing: Mutex<HashSet<String>>,
    tasks: Mutex<HashMap<String, String>>,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard fixture: one application with dev, stage and prod
    pub fn with_site() -> Self {
        let app = Uuid::parse_str(APP_UUID).unwrap();
        let mut api = Self::new();
        api.applications = vec![
            application("0b5ec8d5-bf34-4b6d-a1f1-0fa7a0b0f5a2", "prod:othersite"),
            application(APP_UUID, "prod:mysite"),
        ];
        api.environments.insert(
            app,
            vec![
                environment("1-dev", "dev"),
                environment("2-stage", "stage"),
                {
                    let mut prod = environment("3-prod", "prod");
                    prod.domains.push("www.example.com".to_string());
                    prod
                },
            ],
        );
        api.databases = vec![
            Database { name: "db1".into() },
            Database { name: "db2".into() },
        ];
        api
    }

    pub fn script(&self, statuses: &[&str]) {
        let mut queue = self.statuses.lock().unwrap();
        queue.extend(statuses.iter().map(|s| NotificationStatus::from(*s)));
    }

    /// Make the task started by `call` (e.g. `switch_code 1-dev feature/x`) fail
    pub fn fail_task(&self, call: &str) {
        self.failing.lock().unwrap().insert(call.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn operation(&self, call: String) -> hostctl_client::Result<OperationResponse> {
        let handle = {
            let mut tasks = self.tasks.lock().unwrap();
            let handle = format!("task-{}", tasks.len() + 1);
            tasks.insert(handle.clone(), call.clone());
            handle
        };
        self.record(call);
        Ok(OperationResponse::for_notification(
            "https://cloud.example.com/api",
            &handle,
        ))
    }
}

#[async_trait]
impl CloudApi for FakeApi {
    async fn list_applications(&self) -> hostctl_client::Result<Vec<Application>> {
        self.record("list_applications".into());
        Ok(self.applications.clone())
    }

    async fn list_environments(&self, application: Uuid) -> hostctl_client::Result<Vec<Environment>> {
        self.record(format!("list_environments {}", application));
        Ok(self.environments.get(&application).cloned().unwrap_or_default())
    }

    async fn list_organizations(&self) -> hostctl_client::Result<Vec<Organization>> {
        self.record("list_organizations".into());
        Ok(self.organizations.clone())
    }

    async fn get_notification(&self, handle: &str) -> hostctl_client::Result<Notification> {
        self.record(format!("get_notification {}", handle));
        let call = self.tasks.lock().unwrap().get(handle).cloned();
        let failed = call.is_some_and(|call| self.failing.lock().unwrap().contains(&call));
        let status = if failed {
            NotificationStatus::Failed
        } else {
            self.statuses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(NotificationStatus::Completed)
        };
        Ok(Notification {
            uuid: Uuid::new_v4(),
            status,
            event: None,
            label: None,
            description: None,
            created_at: None,
            completed_at: None,
            progress: None,
        })
    }

    async fn list_databases(
        &self,
        application: Uuid,
        name: Option<&str>,
    ) -> hostctl_client::Result<Vec<Database>> {
        self.record(format!("list_databases {} {}", application, name.unwrap_or("*")));
        Ok(self
            .databases
            .iter()
            .filter(|db| name.is_none_or(|n| db.name == n))
            .cloned()
            .collect())
    }

    async fn create_database_backup(
        &self,
        environment: &str,
        database: &str,
    ) -> hostctl_client::Result<OperationResponse> {
        self.operation(format!("backup {} {}", environment, database))
    }

    async fn copy_database(
        &self,
        from: &str,
        to: &str,
        database: &str,
    ) -> hostctl_client::Result<OperationResponse> {
        self.operation(format!("copy_database {} {} {}", from, to, database))
    }

    async fn copy_files(&self, from: &str, to: &str) -> hostctl_client::Result<OperationResponse> {
        self.operation(format!("copy_files {} {}", from, to))
    }

    async fn deploy_code(&self, from: &str, to: &str) -> hostctl_client::Result<OperationResponse> {
        self.operation(format!("deploy_code {} {}", from, to))
    }

    async fn switch_code(
        &self,
        environment: &str,
        branch: &str,
    ) -> hostctl_client::Result<OperationResponse> {
        self.operation(format!("switch_code {} {}", environment, branch))
    }

    async fn create_domain(
        &self,
        environment: &str,
        hostname: &str,
    ) -> hostctl_client::Result<OperationResponse> {
        self.operation(format!("create_domain {} {}", environment, hostname))
    }

    async fn delete_domain(
        &self,
        environment: &str,
        hostname: &str,
    ) -> hostctl_client::Result<OperationResponse> {
        if hostname == "missing.example.com" {
            self.record(format!("delete_domain {} {}", environment, hostname));
            return Err(ClientError::api_error(404, "domain not found"));
        }
        self.operation(format!("delete_domain {} {}", environment, hostname))
    }

    async fn list_domains(&self, environment: &str) -> hostctl_client::Result<Vec<Domain>> {
        self.record(format!("list_domains {}", environment));
        Ok(self
            .environments
            .values()
            .flatten()
            .filter(|env| env.uuid == environment)
            .flat_map(|env| env.domains.iter())
            .map(|hostname| Domain {
                hostname: hostname.clone(),
                flags: DomainFlags::default(),
            })
            .collect())
    }

    async fn purge_domains(
        &self,
        environment: &str,
        domains: &[String],
    ) -> hostctl_client::Result<OperationResponse> {
        self.operation(format!("purge_domains {} {}", environment, domains.join(",")))
    }

    async fn set_production_mode(
        &self,
        environment: &str,
        enabled: bool,
    ) -> hostctl_client::Result<OperationResponse> {
        self.operation(format!("production_mode {} {}", environment, enabled))
    }

    async fn restore_database_backup(
        &self,
        environment: &str,
        database: &str,
        backup: u64,
    ) -> hostctl_client::Result<OperationResponse> {
        self.operation(format!("restore_backup {} {} {}", environment, database, backup))
    }

    async fn delete_database_backup(
        &self,
        environment: &str,
        database: &str,
        backup: u64,
    ) -> hostctl_client::Result<OperationResponse> {
        self.operation(format!("delete_backup {} {} {}", environment, database, backup))
    }
}

/// In-memory cache that counts lookups and can be switched to always fail
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Value>>,
    lookups: AtomicUsize,
    broken: bool,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<_> = self.entries.lock().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl IdentifierCache for MemoryCache {
    fn get(&self, key: &str) -> Result<Option<Value>, CacheError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.broken {
            return Err(CacheError::Unavailable);
        }
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), CacheError> {
        if self.broken {
            return Err(CacheError::Unavailable);
        }
        self.entries.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    fn clear(&self) -> Result<(), CacheError> {
        self.entries.lock().unwrap().clear();
        Ok(())
    }
}

#[derive(Default)]
pub struct SilentReporter {
    pub steps: Mutex<Vec<String>>,
}

impl ProgressReporter for SilentReporter {
    fn step(&self, message: &str) {
        self.steps.lock().unwrap().push(message.to_string());
    }
}

/// Confirmation with a fixed answer that records every question
pub struct FixedAnswer {
    answer: bool,
    pub questions: Mutex<Vec<String>>,
}

impl FixedAnswer {
    pub fn yes() -> Self {
        Self {
            answer: true,
            questions: Mutex::new(Vec::new()),
        }
    }

    pub fn no() -> Self {
        Self {
            answer: false,
            questions: Mutex::new(Vec::new()),
        }
    }
}

impl Confirmation for FixedAnswer {
    fn confirm(&self, question: &str) -> Result<bool, CliError> {
        self.questions.lock().unwrap().push(question.to_string());
        Ok(self.answer)
    }
}
