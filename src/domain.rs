use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::PLACEHOLDER_PORTRAIT_BASE;

/// The two participant partitions, each backed by its own source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    A,
    B,
}

impl Group {
    pub fn all() -> [Group; 2] {
        [Group::A, Group::B]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Group::A => "a",
            Group::B => "b",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Group {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Group::A),
            "b" => Ok(Group::B),
            other => Err(format!("unknown group '{other}' (expected 'a' or 'b')")),
        }
    }
}

/// One participant's normalized attendance entry.
///
/// `group` + `identifier` is the unique key; identifiers are not
/// namespaced across groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub identifier: i64,
    pub display_name: String,
    /// Rounded for display; eligibility is decided on the unrounded value
    pub attendance_percentage: i64,
    pub group: Group,
    pub is_eligible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portrait_reference: Option<String>,
}

impl Record {
    /// Portrait reference, or a generated avatar URL built from the display name
    pub fn portrait_or_placeholder(&self) -> String {
        if let Some(portrait) = &self.portrait_reference {
            return portrait.clone();
        }
        match reqwest::Url::parse_with_params(
            PLACEHOLDER_PORTRAIT_BASE,
            &[("name", self.display_name.as_str()), ("background", "random")],
        ) {
            Ok(url) => url.to_string(),
            Err(_) => PLACEHOLDER_PORTRAIT_BASE.to_string(),
        }
    }
}
