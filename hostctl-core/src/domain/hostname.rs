//! Domain name types
//!
//! Named `hostname` to avoid clashing with the `domain` module itself.

use serde::{Deserialize, Serialize};

/// A hostname attached to an environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Domain {
    pub hostname: String,
    #[serde(default)]
    pub flags: DomainFlags,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DomainFlags {
    #[serde(default)]
    pub default: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub uptime: bool,
}

/// DNS status of a single hostname
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainStatus {
    pub hostname: String,
    #[serde(default)]
    pub flags: DomainStatusFlags,
    #[serde(default)]
    pub ip_addresses: Vec<String>,
    #[serde(default)]
    pub cnames: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DomainStatusFlags {
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub dns_resolves: bool,
}
