//! Festival types

use serde::{Deserialize, Serialize};

/// Festival category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FestivalType {
    /// Traditional lunar-calendar festivals (春节, 中秋节, ...)
    Traditional,
    /// Modern Gregorian festivals (国庆节, 劳动节, ...)
    Modern,
    /// International Gregorian festivals (圣诞节, 母亲节, ...)
    International,
    /// One of the 24 solar terms
    SolarTerm,
}

/// A festival entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Festival {
    /// Festival name (e.g., "春节")
    pub name: String,
    pub kind: FestivalType,
    /// Whether month/day are on the lunar calendar
    pub is_lunar: bool,
    /// Month (1-12), lunar or Gregorian per `is_lunar`
    pub month: u32,
    /// Day of month, lunar or Gregorian per `is_lunar`
    pub day: u32,
    /// Display priority, lower is more prominent
    pub priority: u8,
    /// Display color (e.g., "#FF4444")
    pub color: String,
    pub description: String,
}

impl Festival {
    pub fn is_traditional(&self) -> bool {
        self.kind == FestivalType::Traditional
    }

    pub fn is_modern(&self) -> bool {
        self.kind == FestivalType::Modern
    }

    pub fn is_international(&self) -> bool {
        self.kind == FestivalType::International
    }
}
