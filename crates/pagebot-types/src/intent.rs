//! Intent tags assigned to visitor utterances.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Closed set of topics the assistant can answer.
///
/// `Fallback` is a first-class intent: anything that matches no keyword
/// rule lands here instead of producing an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Projects,
    Skills,
    Ai,
    Contact,
    Experience,
    About,
    Fallback,
}

impl Intent {
    /// Every intent, in declaration order.
    pub const ALL: [Intent; 7] = [
        Intent::Projects,
        Intent::Skills,
        Intent::Ai,
        Intent::Contact,
        Intent::Experience,
        Intent::About,
        Intent::Fallback,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Projects => "projects",
            Intent::Skills => "skills",
            Intent::Ai => "ai",
            Intent::Contact => "contact",
            Intent::Experience => "experience",
            Intent::About => "about",
            Intent::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Intent::ALL
            .into_iter()
            .find(|intent| intent.as_str() == lower)
            .ok_or_else(|| format!("invalid intent: '{s}'"))
    }
}
