//! Code (VCS) domain types

use serde::{Deserialize, Serialize};

/// A branch or tag in an application's repository
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    #[serde(default)]
    pub flags: BranchFlags,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BranchFlags {
    #[serde(default)]
    pub tag: bool,
}
