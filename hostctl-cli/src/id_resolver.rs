//! ID resolver module
//!
//! Turns human-friendly references (`[realm:]site`, environment names,
//! organization names) into platform identifiers. The API offers no
//! lookup-by-name, so resolution lists everything and scans; application and
//! environment results are memoized in the identifier cache.

use std::sync::Arc;

use hostctl_client::CloudApi;
use hostctl_core::domain::environment::Environment;
use hostctl_core::domain::organization::Organization;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::cache::{IdentifierCache, application_key, environment_key};
use crate::error::{CliError, Entity};
use crate::types::ApplicationRef;

pub struct Resolver {
    api: Arc<dyn CloudApi>,
    cache: Arc<dyn IdentifierCache>,
    realm: String,
}

impl Resolver {
    /// # Arguments
    /// * `realm` - Realm used to qualify bare site names
    pub fn new(
        api: Arc<dyn CloudApi>,
        cache: Arc<dyn IdentifierCache>,
        realm: impl Into<String>,
    ) -> Self {
        Self {
            api,
            cache,
            realm: realm.into(),
        }
    }

    /// Resolve an application UUID or `[realm:]site` reference to a UUID
    ///
    /// UUIDs are returned without touching the cache or the API.
    ///
    /// # Errors
    /// `NotFound(application)` when no visible application has the hosting id
    pub async fn resolve_application(&self, reference: &str) -> Result<Uuid, CliError> {
        let parsed = ApplicationRef::parse(reference, &self.realm);
        let (key, hosting_id) = match &parsed {
            ApplicationRef::Uuid(uuid) => return Ok(*uuid),
            ApplicationRef::Hosted { realm, site } => {
                (application_key(realm, site), parsed.to_string())
            }
        };

        if let Some(uuid) = self.cached::<Uuid>(&key) {
            return Ok(uuid);
        }

        debug!("Searching applications for hosting id {}", hosting_id);

        let applications = self.api.list_applications().await?;
        let application = applications
            .into_iter()
            .find(|app| app.hosting_id() == hosting_id)
            .ok_or_else(|| CliError::not_found(Entity::Application, reference))?;

        self.store(&key, &application.uuid);
        Ok(application.uuid)
    }

    /// Resolve an environment of an application by name (`dev`, `stage`, `prod`, ...)
    ///
    /// The full environment object is cached since callers need its id, vcs
    /// path and flags.
    pub async fn resolve_environment(
        &self,
        application: Uuid,
        name: &str,
    ) -> Result<Environment, CliError> {
        let key = environment_key(application, name);
        if let Some(environment) = self.cached::<Environment>(&key) {
            return Ok(environment);
        }

        let environment = self
            .api
            .list_environments(application)
            .await?
            .into_iter()
            .find(|env| env.name == name)
            .ok_or_else(|| CliError::not_found(Entity::Environment, name))?;

        self.store(&key, &environment);
        Ok(environment)
    }

    /// Resolve an organization by exact name. Not cached.
    pub async fn resolve_organization(&self, name: &str) -> Result<Organization, CliError> {
        self.api
            .list_organizations()
            .await?
            .into_iter()
            .find(|org| org.name == name)
            .ok_or_else(|| CliError::not_found(Entity::Organization, name))
    }

    /// Cache read where every failure degrades to a miss
    fn cached<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = match self.cache.get(key) {
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!("Cache miss for {}", key);
                return None;
            }
            Err(e) => {
                warn!("Ignoring identifier cache: {}", e);
                return None;
            }
        };

        match serde_json::from_value(value) {
            Ok(parsed) => {
                debug!("Cache hit for {}", key);
                Some(parsed)
            }
            Err(e) => {
                warn!("Ignoring unreadable cache entry {}: {}", key, e);
                None
            }
        }
    }

    fn store<T: Serialize>(&self, key: &str, value: &T) {
        let result = serde_json::to_value(value)
            .map_err(|e| e.to_string())
            .and_then(|value| self.cache.set(key, value).map_err(|e| e.to_string()));

        if let Err(e) = result {
            warn!("Could not cache {}: {}", key, e);
        }
    }
}
