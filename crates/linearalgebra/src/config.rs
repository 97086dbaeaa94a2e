use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::LinalgError;

/// Central configuration for the vector operations in the crate.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinalgConfig {
    #[serde(default)]
    pub length_policy: LengthPolicy,
}

/// How binary vector operations treat operands of different lengths.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LengthPolicy {
    /// Unequal lengths are an error.
    #[default]
    Strict,
    /// Pair elements up to the shorter length and drop the rest.
    Truncate,
}

impl LengthPolicy {
    /// Number of element pairs a binary operation should produce for
    /// operands of length `left` and `right`.
    pub fn pair_len(self, left: usize, right: usize) -> Result<usize, LinalgError> {
        if left == right {
            return Ok(left);
        }
        match self {
            LengthPolicy::Strict => {
                log::debug!("rejecting operands of length {} and {}", left, right);
                Err(LinalgError::LengthMismatch { left, right })
            }
            LengthPolicy::Truncate => {
                let len = left.min(right);
                log::warn!(
                    "truncating operands of length {} and {} to {}",
                    left,
                    right,
                    len
                );
                Ok(len)
            }
        }
    }
}

impl FromStr for LengthPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(LengthPolicy::Strict),
            "truncate" => Ok(LengthPolicy::Truncate),
            _ => Err(format!(
                "Unknown length policy: {}. Expected `strict` or `truncate`",
                s
            )),
        }
    }
}

impl LinalgConfig {
    pub fn new(length_policy: LengthPolicy) -> Self {
        Self { length_policy }
    }
}
