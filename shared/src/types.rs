//! Common types used across the dashboard

use serde::{Deserialize, Serialize};

/// Produce quality grade assigned at purchase time
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Quality {
    #[default]
    A,
    B,
    C,
    /// Any grade outside A/B/C read from stored data; never counted in a bucket
    #[serde(other)]
    Unknown,
}

impl Quality {
    /// All grades in display order
    pub const ALL: [Quality; 3] = [Quality::A, Quality::B, Quality::C];

    /// Label shown on the quality chart (e.g. "Loại A")
    pub fn label(&self) -> String {
        format!("Loại {}", self)
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quality::A => write!(f, "A"),
            Quality::B => write!(f, "B"),
            Quality::C => write!(f, "C"),
            Quality::Unknown => write!(f, "?"),
        }
    }
}

impl std::str::FromStr for Quality {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Quality::A),
            "B" | "b" => Ok(Quality::B),
            "C" | "c" => Ok(Quality::C),
            _ => Err("Quality must be one of A, B, C"),
        }
    }
}

/// Registration status of a planting area
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AreaStatus {
    #[default]
    Active,
    Inactive,
}
