//! Stations — physical observation points identified by a unique code.

use std::fmt;

use serde::{Deserialize, Serialize};

/// External identifier of a weather station (e.g. `USC00519281`).
///
/// Codes are assigned by the upstream dataset, not generated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationCode(String);

impl StationCode {
    /// Access the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for StationCode {
    fn from(code: &str) -> Self {
        Self(code.to_owned())
    }
}

impl From<String> for StationCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

/// Metadata for one physical weather station.
///
/// One row per station in the backing dataset. Geographic attributes are
/// optional; the upstream loader does not guarantee them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub code: StationCode,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
}
