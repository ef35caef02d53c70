//! Common types used across CLI modules

use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

static UUID_V4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("UUID pattern is a valid regex")
});

/// Whether the input is a canonical UUID v4 string
pub fn is_uuid_v4(input: &str) -> bool {
    UUID_V4.is_match(input)
}

/// Reference to an application: either its UUID or a `[realm:]site` name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationRef {
    /// Canonical UUID, used as-is
    Uuid(Uuid),
    /// Hosting name that must be looked up
    Hosted { realm: String, site: String },
}

impl ApplicationRef {
    /// Parse user input, qualifying bare site names with `default_realm`
    pub fn parse(input: &str, default_realm: &str) -> Self {
        if is_uuid_v4(input)
            && let Ok(uuid) = Uuid::parse_str(input)
        {
            return ApplicationRef::Uuid(uuid);
        }

        match input.split_once(':') {
            Some((realm, site)) => ApplicationRef::Hosted {
                realm: realm.to_string(),
                site: site.to_string(),
            },
            None => ApplicationRef::Hosted {
                realm: default_realm.to_string(),
                site: input.to_string(),
            },
        }
    }
}

impl std::fmt::Display for ApplicationRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationRef::Uuid(uuid) => write!(f, "{}", uuid),
            ApplicationRef::Hosted { realm, site } => write!(f, "{}:{}", realm, site),
        }
    }
}
