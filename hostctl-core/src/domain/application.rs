//! Application domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A hosted application (site) visible to the authenticated caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub uuid: Uuid,
    pub name: String,
    pub hosting: Hosting,
}

impl Application {
    /// Fully qualified hosting identifier, e.g. `prod:mysite`
    pub fn hosting_id(&self) -> &str {
        &self.hosting.id
    }
}

/// Where and how an application is hosted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hosting {
    #[serde(rename = "type")]
    pub hosting_type: String,
    pub id: String,
}

/// A free-form tag attached to an application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationTag {
    pub name: String,
    pub color: String,
}
