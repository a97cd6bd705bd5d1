use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A single disaster incident record as persisted in the report document.
///
/// Field order here is the key order in the stored JSON. `None` is the
/// absent marker and serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: u64,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub location: Option<String>,
    pub severity: Option<String>,
    pub affected_estimate: Option<String>,
    pub notes: Option<String>,
    pub reporter_name: Option<String>,
    pub reporter_phone: Option<String>,
}

/// Disaster categories offered by the submission form.
///
/// Stored reports keep the submitted text verbatim, so this is not used to
/// validate anything on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisasterType {
    Earthquake,
    Flood,
    Storm,
    Fire,
    Landslide,
    Tsunami,
    Other,
}

impl DisasterType {
    pub const ALL: [DisasterType; 7] = [
        DisasterType::Earthquake,
        DisasterType::Flood,
        DisasterType::Storm,
        DisasterType::Fire,
        DisasterType::Landslide,
        DisasterType::Tsunami,
        DisasterType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DisasterType::Earthquake => "Earthquake",
            DisasterType::Flood => "Flood",
            DisasterType::Storm => "Storm",
            DisasterType::Fire => "Fire",
            DisasterType::Landslide => "Landslide",
            DisasterType::Tsunami => "Tsunami",
            DisasterType::Other => "Other",
        }
    }
}

impl Display for DisasterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
