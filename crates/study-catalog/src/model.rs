use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Academic track of a guide, from standard coursework up to IB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Level {
    #[serde(rename = "S")]
    Standard,
    #[serde(rename = "S+")]
    StandardPlus,
    #[serde(rename = "H")]
    Honors,
    #[serde(rename = "AP")]
    AdvancedPlacement,
    #[serde(rename = "IB")]
    InternationalBaccalaureate,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Standard,
        Level::StandardPlus,
        Level::Honors,
        Level::AdvancedPlacement,
        Level::InternationalBaccalaureate,
    ];

    /// Short code as printed on guide cards, e.g. "S+" or "AP".
    pub fn code(self) -> &'static str {
        match self {
            Level::Standard => "S",
            Level::StandardPlus => "S+",
            Level::Honors => "H",
            Level::AdvancedPlacement => "AP",
            Level::InternationalBaccalaureate => "IB",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::Standard => "Standard",
            Level::StandardPlus => "Standard+",
            Level::Honors => "Honors",
            Level::AdvancedPlacement => "Advanced Placement",
            Level::InternationalBaccalaureate => "International Baccalaureate",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Level {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Level::ALL
            .into_iter()
            .find(|level| level.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| CatalogError::InvalidLevel(s.to_string()))
    }
}

/// A downloadable study guide (e.g. "Work & Energy Guide", grade 10, Physics, Honors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Guide {
    /// School grade, 9 through 12
    pub grade: u8,
    /// Free-text subject label, e.g. "Chemistry"
    pub subject: &'static str,
    pub level: Level,
    /// Display title
    pub name: &'static str,
    /// Site-relative path to the document, e.g. "/guides/cells.pdf"
    pub url: &'static str,
}

/// A third-party learning tool or site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExternalLink {
    pub name: &'static str,
    pub description: &'static str,
    /// Free-text grouping label, e.g. "Mathematics"
    pub category: &'static str,
    /// Absolute web address
    pub url: &'static str,
    /// Accent color for the link card (`#rrggbb`); presentation only
    pub color: &'static str,
}
