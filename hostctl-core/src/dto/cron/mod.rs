//! Cron DTOs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCron {
    pub command: String,
    pub frequency: String,
    pub label: String,
}
