//! Per-invocation wiring of the API client, cache, resolver, waiter and
//! orchestrator. Built once in `main` and passed to command handlers.

use std::sync::Arc;

use hostctl_client::{CloudApi, CloudClient, Credentials};
use hostctl_core::dto::collection::ListQuery;
use tracing::warn;

use crate::cache::{FileCache, IdentifierCache};
use crate::config::Config;
use crate::id_resolver::Resolver;
use crate::orchestrator::Orchestrator;
use crate::progress::{ProgressReporter, TerminalReporter};
use crate::prompt::{Confirmation, TerminalConfirmation};
use crate::waiter::{NotificationWaiter, WaitOptions};

/// Options that apply to every command
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub realm: String,
    pub assume_yes: bool,
    pub no_wait: bool,
    pub limit: Option<u32>,
    pub filter: Option<String>,
    pub sort: Option<String>,
}

pub struct Context {
    pub client: Arc<CloudClient>,
    pub cache: Arc<dyn IdentifierCache>,
    pub resolver: Arc<Resolver>,
    pub waiter: Arc<NotificationWaiter>,
    pub orchestrator: Orchestrator,
    pub confirm: Arc<dyn Confirmation>,
    /// Limit, filter and sort forwarded to list endpoints
    pub query: ListQuery,
}

impl Context {
    pub fn new(config: &Config, options: &GlobalOptions) -> Self {
        let client = Arc::new(CloudClient::new(
            &config.api_url,
            &config.token_url,
            Credentials::new(&config.key, &config.secret),
        ));
        let api: Arc<dyn CloudApi> = client.clone();

        let cache: Arc<dyn IdentifierCache> = match FileCache::open_default() {
            Ok(cache) => Arc::new(cache),
            Err(e) => {
                warn!("{}; caching identifiers in the temp directory", e);
                Arc::new(FileCache::new(
                    std::env::temp_dir().join("hostctl").join("identifiers.json"),
                ))
            }
        };

        let reporter: Arc<dyn ProgressReporter> = Arc::new(TerminalReporter::new());
        let confirm: Arc<dyn Confirmation> = Arc::new(TerminalConfirmation::new(options.assume_yes));

        let resolver = Arc::new(Resolver::new(api.clone(), cache.clone(), &options.realm));
        let waiter = Arc::new(NotificationWaiter::new(
            api.clone(),
            WaitOptions {
                skip_wait: options.no_wait,
                poll_interval: config.task_wait,
                timeout: config.timeout,
            },
            reporter.clone(),
        ));
        let orchestrator = Orchestrator::new(
            api,
            resolver.clone(),
            waiter.clone(),
            reporter,
            confirm.clone(),
        );

        Self {
            client,
            cache,
            resolver,
            waiter,
            orchestrator,
            confirm,
            query: ListQuery {
                limit: options.limit,
                filter: options.filter.clone(),
                sort: options.sort.clone(),
            },
        }
    }
}
