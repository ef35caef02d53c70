//! Application DTOs

use serde::{Deserialize, Serialize};

/// Request to rename an application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameApplication {
    pub name: String,
}

/// Request to create an application tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTag {
    pub name: String,
    pub color: String,
}
