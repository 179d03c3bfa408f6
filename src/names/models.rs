// nct: Name data models
//
// Shapes of the objects namecoind returns from `name_show` and `name_list`.

use std::fmt;

use serde::Deserialize;

/// One name as reported by the daemon.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NameRecord {
    pub name: String,
    /// Opaque payload; JSON by convention but not required to be.
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub address: Option<String>,
    /// Blocks until expiry; negative once expired.
    #[serde(default)]
    pub expires_in: i64,
}

impl NameRecord {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            address: None,
            expires_in: 0,
        }
    }
}

/// Tab-separated listing line: `name  address  expires_in`.
impl fmt::Display for NameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}",
            self.name,
            self.address.as_deref().unwrap_or(""),
            self.expires_in
        )
    }
}
