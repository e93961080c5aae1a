//! Season and location categories with their demand multipliers
//!
//! Both enums are closed. Labels that match no known category fall back to
//! the neutral variant (`Season::Regular`, `LocationType::Rural`) when parsed,
//! so a lookup can never fail.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where the product is sold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum LocationType {
    Urban,
    Suburban,
    Rural,
}

impl LocationType {
    /// Every location type, in form order
    pub const ALL: [LocationType; 3] = [
        LocationType::Urban,
        LocationType::Suburban,
        LocationType::Rural,
    ];

    /// Parse a form label; anything unrecognised is treated as rural
    pub fn from_label(label: &str) -> Self {
        match label {
            "urban" => LocationType::Urban,
            "suburban" => LocationType::Suburban,
            _ => LocationType::Rural,
        }
    }

    /// Label used by the form and in JSON
    pub fn label(self) -> &'static str {
        match self {
            LocationType::Urban => "urban",
            LocationType::Suburban => "suburban",
            LocationType::Rural => "rural",
        }
    }

    /// Demand scaling for this kind of location
    pub fn multiplier(self) -> f64 {
        match self {
            LocationType::Urban => 1.4,
            LocationType::Suburban => 1.1,
            LocationType::Rural => 0.9,
        }
    }
}

impl From<String> for LocationType {
    fn from(label: String) -> Self {
        LocationType::from_label(&label)
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Selling period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Season {
    Festival,
    Summer,
    Winter,
    Monsoon,
    Regular,
}

impl Season {
    /// Every season, in form order
    pub const ALL: [Season; 5] = [
        Season::Festival,
        Season::Summer,
        Season::Winter,
        Season::Monsoon,
        Season::Regular,
    ];

    /// Parse a form label; anything unrecognised is a regular period
    pub fn from_label(label: &str) -> Self {
        match label {
            "festival" => Season::Festival,
            "summer" => Season::Summer,
            "winter" => Season::Winter,
            "monsoon" => Season::Monsoon,
            _ => Season::Regular,
        }
    }

    /// Label used by the form and in JSON
    pub fn label(self) -> &'static str {
        match self {
            Season::Festival => "festival",
            Season::Summer => "summer",
            Season::Winter => "winter",
            Season::Monsoon => "monsoon",
            Season::Regular => "regular",
        }
    }

    /// Demand scaling for this period
    pub fn multiplier(self) -> f64 {
        match self {
            Season::Festival => 2.5,
            Season::Summer => 1.3,
            Season::Winter => 1.5,
            Season::Monsoon => 0.8,
            Season::Regular => 1.0,
        }
    }
}

impl From<String> for Season {
    fn from(label: String) -> Self {
        Season::from_label(&label)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
