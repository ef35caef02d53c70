//! Account domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated caller's account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    #[serde(default)]
    pub mail: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_login_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub flags: AccountFlags,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AccountFlags {
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub tfa: bool,
}
