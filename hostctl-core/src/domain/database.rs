//! Database domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A database belonging to an application
///
/// Databases are application-scoped; every environment carries a copy of each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    pub name: String,
}

/// A backup of one database on one environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseBackup {
    pub id: u64,
    /// `daily` or `ondemand`
    #[serde(rename = "type")]
    pub backup_type: String,
    #[serde(default)]
    pub database: Option<Database>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}
