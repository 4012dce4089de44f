//! 説明レベル（フォールバックの締めの一文だけに効く）

use common::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExplainLevel {
    #[default]
    Beginner,
    Intermediate,
    Pro,
}

impl ExplainLevel {
    pub const ALL: [ExplainLevel; 3] = [
        ExplainLevel::Beginner,
        ExplainLevel::Intermediate,
        ExplainLevel::Pro,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ExplainLevel::Beginner => "Beginner",
            ExplainLevel::Intermediate => "Intermediate",
            ExplainLevel::Pro => "Pro",
        }
    }
}

impl fmt::Display for ExplainLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ExplainLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(ExplainLevel::Beginner),
            "intermediate" => Ok(ExplainLevel::Intermediate),
            "pro" => Ok(ExplainLevel::Pro),
            other => Err(Error::invalid_argument(format!(
                "Unknown level '{}'. Expected one of: beginner, intermediate, pro",
                other
            ))),
        }
    }
}
