//! Domain enums shared by the backend and API types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of stored advice record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AdviceType {
    Diet,
    Exercise,
    General,
}

impl AdviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdviceType::Diet => "diet",
            AdviceType::Exercise => "exercise",
            AdviceType::General => "general",
        }
    }
}

impl FromStr for AdviceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "diet" => Ok(AdviceType::Diet),
            "exercise" => Ok(AdviceType::Exercise),
            "general" => Ok(AdviceType::General),
            _ => Err(format!("Unknown advice type: {}", s)),
        }
    }
}

impl fmt::Display for AdviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the advice text came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AdviceSource {
    /// Generated by the language model
    Llm,
    /// Canned text used when the model was unavailable
    Fallback,
}
