//! Domain DTOs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDomain {
    pub hostname: String,
}

/// Request to clear the edge cache for a set of hostnames
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurgeDomains {
    pub domains: Vec<String>,
}
