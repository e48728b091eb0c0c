//! Lunar date types

use serde::{Deserialize, Serialize};

/// A date on the Chinese lunar calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarDate {
    /// Lunar year (e.g., 2025)
    pub year: i32,
    /// Lunar month (1-12)
    pub month: u32,
    /// Lunar day (1-30)
    pub day: u32,
    /// Whether the month is the intercalary (leap) month
    pub is_leap_month: bool,
    /// Sexagenary year name (e.g., "乙巳年")
    pub year_name: String,
    /// Chinese month name (e.g., "腊月", "闰二月")
    pub month_name: String,
    /// Chinese day name (e.g., "初一", "十五")
    pub day_name: String,
}

impl LunarDate {
    /// Full date string, e.g. "乙巳年腊月十一"
    pub fn full_date_string(&self) -> String {
        format!("{}{}{}", self.year_name, self.month_name, self.day_name)
    }

    /// Short display form: the first day of a month shows the month name,
    /// every other day shows the day name.
    pub fn display_string(&self) -> &str {
        if self.day == 1 {
            &self.month_name
        } else {
            &self.day_name
        }
    }

    /// Lunar New Year's Day (正月初一)
    pub fn is_lunar_new_year(&self) -> bool {
        self.month == 1 && self.day == 1 && !self.is_leap_month
    }

    pub fn is_first_day_of_month(&self) -> bool {
        self.day == 1
    }
}

/// Lunar annotation for one Gregorian day: the lunar date, any festivals,
/// and the solar term falling on it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayLunarInfo {
    pub lunar: LunarDate,
    /// Festival names, highest priority first
    pub festivals: Vec<String>,
    /// Solar term name, when one falls on this day
    pub solar_term: Option<String>,
}
