//! Cron task domain types

use serde::{Deserialize, Serialize};

/// A scheduled task on an environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cron {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    pub command: String,
    pub minute: String,
    pub hour: String,
    pub day_month: String,
    pub month: String,
    pub day_week: String,
    #[serde(default)]
    pub flags: CronFlags,
    #[serde(default)]
    pub environment: Option<CronEnvironment>,
}

impl Cron {
    /// Schedule in crontab notation
    pub fn frequency(&self) -> String {
        [
            self.minute.as_str(),
            self.hour.as_str(),
            self.day_month.as_str(),
            self.month.as_str(),
            self.day_week.as_str(),
        ]
        .join(" ")
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CronFlags {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub system: bool,
    #[serde(default)]
    pub on_any_web: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CronEnvironment {
    pub name: String,
}
