//! Environment DTOs

use serde::{Deserialize, Serialize};

/// Request to copy files into an environment from `source`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyFiles {
    pub source: String,
}

/// Body of the livedev disable action; `discard` drops uncommitted changes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisableLiveDev {
    pub discard: bool,
}
