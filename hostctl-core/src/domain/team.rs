//! Team, role and permission domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub uuid: Uuid,
    pub name: String,
}

/// A named bundle of permissions within an organization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub uuid: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

/// A single platform permission, e.g. `deploy to non-prod`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permission {
    pub name: String,
    #[serde(default)]
    pub label: String,
}
