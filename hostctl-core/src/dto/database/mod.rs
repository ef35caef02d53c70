//! Database DTOs

use serde::{Deserialize, Serialize};

/// Request to create an application database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDatabase {
    pub name: String,
}

/// Request to copy database `name` from environment `source` into the target environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyDatabase {
    pub name: String,
    pub source: String,
}
