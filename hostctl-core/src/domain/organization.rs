//! Organization domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An organization the caller belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub uuid: Uuid,
    pub name: String,
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default)]
    pub subscriptions_total: u32,
    #[serde(default)]
    pub admins_total: u32,
    #[serde(default)]
    pub users_total: u32,
    #[serde(default)]
    pub teams_total: u32,
    #[serde(default)]
    pub roles_total: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub username: String,
}

/// A user who is an administrator or member of an organization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub uuid: Uuid,
    pub username: String,
    #[serde(default)]
    pub mail: String,
    #[serde(default)]
    pub teams: Vec<MemberTeam>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberTeam {
    pub name: String,
}
