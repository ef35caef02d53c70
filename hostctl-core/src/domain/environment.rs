//! Environment domain types

use serde::{Deserialize, Serialize};

/// Name of the production environment of every application
pub const PRODUCTION: &str = "prod";

/// A deployable instance of an application (dev, stage, prod, ...)
///
/// Environment identifiers are opaque strings (`<n>-<uuid>`), not bare UUIDs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    #[serde(rename = "id")]
    pub uuid: String,
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub vcs: Vcs,
    #[serde(default)]
    pub flags: EnvironmentFlags,
}

impl Environment {
    /// Branch or tag currently deployed
    pub fn vcs_path(&self) -> &str {
        &self.vcs.path
    }

    pub fn is_production(&self) -> bool {
        self.name == PRODUCTION
    }
}

/// Version control state of an environment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vcs {
    #[serde(rename = "type", default)]
    pub vcs_type: Option<String>,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentFlags {
    #[serde(default)]
    pub livedev: bool,
    #[serde(default)]
    pub production_mode: bool,
}
