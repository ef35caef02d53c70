//! Code DTOs

use serde::{Deserialize, Serialize};

/// Request to deploy the code of environment `source` into the target environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployCode {
    pub source: String,
}

/// Request to switch the target environment onto another branch or tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchCode {
    pub branch: String,
}
