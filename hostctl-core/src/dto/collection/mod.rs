//! Collection envelopes and list query parameters

use serde::{Deserialize, Serialize};

/// HAL collection envelope: `{ "total": n, "_embedded": { "items": [...] } }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection<T> {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(rename = "_embedded")]
    pub embedded: Embedded<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Embedded<T> {
    pub items: Vec<T>,
}

impl<T> Collection<T> {
    pub fn into_items(self) -> Vec<T> {
        self.embedded.items
    }
}

/// Optional `limit`, `filter` and `sort` parameters accepted by list endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl ListQuery {
    /// Query matching a single field exactly, e.g. `name=db1`
    pub fn filtered(field: &str, value: &str) -> Self {
        Self {
            filter: Some(format!("{}={}", field, value)),
            ..Self::default()
        }
    }
}
