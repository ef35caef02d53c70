//! Log domain types

use serde::{Deserialize, Serialize};

/// A log type available for download on an environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogFile {
    #[serde(rename = "type")]
    pub log_type: String,
    pub label: String,
    #[serde(default)]
    pub flags: LogFlags,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LogFlags {
    #[serde(default)]
    pub available: bool,
}
