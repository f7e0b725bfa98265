//! The closed set of business categories that interests aggregate into.

use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// One of the four fixed business groupings.
///
/// Variants are declared in priority order. The derived [`Ord`] follows that
/// order and is what breaks ties when two categories have the same count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Security & Infrastructure")]
    SecurityInfrastructure,
    #[serde(rename = "Growth & Marketing")]
    GrowthMarketing,
    #[serde(rename = "Development & Training")]
    DevelopmentTraining,
    #[serde(rename = "Business Strategy")]
    BusinessStrategy,
}

impl Category {
    /// All categories, in priority order.
    pub const ALL: [Category; 4] = [
        Category::SecurityInfrastructure,
        Category::GrowthMarketing,
        Category::DevelopmentTraining,
        Category::BusinessStrategy,
    ];

    /// Display name, also used as the JSON key in persisted profiles.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SecurityInfrastructure => "Security & Infrastructure",
            Category::GrowthMarketing => "Growth & Marketing",
            Category::DevelopmentTraining => "Development & Training",
            Category::BusinessStrategy => "Business Strategy",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Category::ALL.iter().find(|c| c.as_str() == s) {
            Some(c) => Ok(*c),
            None => bail!(
                "Unknown category: '{}'. Must be one of: {}",
                s,
                Category::ALL
                    .iter()
                    .map(|c| c.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
}
