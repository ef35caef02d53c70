//! Error taxonomy for command execution
//!
//! Multi-step operations branch on these variants (a timeout is not a
//! failure of the remote task), so they stay distinct instead of being
//! flattened into strings.

use std::fmt;
use std::time::Duration;

use hostctl_client::ClientError;
use thiserror::Error;

use crate::cache::CacheError;

/// Kind of platform object a reference failed to resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Application,
    Environment,
    Organization,
    Domain,
    Database,
    Backup,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::Application => "application",
            Entity::Environment => "environment",
            Entity::Organization => "organization",
            Entity::Domain => "domain",
            Entity::Database => "database",
            Entity::Backup => "backup",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("No {entity} found matching '{reference}'")]
    NotFound { entity: Entity, reference: String },

    #[error("The task with notification uuid {handle} failed")]
    OperationFailed { handle: String },

    #[error("Timed out after {}s waiting for task {handle}; it may still complete remotely", .elapsed.as_secs())]
    Timeout { handle: String, elapsed: Duration },

    #[error("Task {handle} reported an unknown status '{status}'")]
    UnknownStatus { handle: String, status: String },

    #[error("The response did not include a notification link to wait on")]
    MissingHandle,

    #[error("{0}")]
    InvalidDomainState(String),

    #[error(transparent)]
    Api(#[from] ClientError),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn not_found(entity: Entity, reference: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            reference: reference.into(),
        }
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        Self::Prompt(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_single_line() {
        let errors = [
            CliError::not_found(Entity::Environment, "qa"),
            CliError::OperationFailed {
                handle: "abc".into(),
            },
            CliError::Timeout {
                handle: "abc".into(),
                elapsed: Duration::from_secs(300),
            },
            CliError::MissingHandle,
        ];
        for err in errors {
            assert!(!err.to_string().contains('\n'));
        }
    }

    #[test]
    fn test_not_found_names_entity() {
        let err = CliError::not_found(Entity::Organization, "Acme");
        assert_eq!(err.to_string(), "No organization found matching 'Acme'");
    }
}
