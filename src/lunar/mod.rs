//! Chinese lunar calendar: date conversion, festivals and solar terms

pub mod calendar;
pub mod festival;
pub mod solar_term;

pub use calendar::{solar_to_lunar, LunarError};

use crate::types::{DayLunarInfo, Festival};

/// Full lunar annotation for one Gregorian day: the lunar date, every
/// festival falling on it (lunar and Gregorian, highest priority first)
/// and the solar term, if any.
pub fn day_info(year: i32, month: u32, day: u32) -> Result<DayLunarInfo, LunarError> {
    let lunar = calendar::solar_to_lunar(year, month, day)?;

    let mut festivals: Vec<Festival> = festival::festivals_for(&lunar)?;
    festivals.extend(festival::by_solar_date(month, day));
    festivals.sort_by_key(|f| f.priority);

    Ok(DayLunarInfo {
        solar_term: solar_term::term_for_date(year, month, day).map(|t| t.name),
        festivals: festivals.into_iter().map(|f| f.name).collect(),
        lunar,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_info_spring_festival() {
        let info = day_info(2025, 1, 29).unwrap();
        assert!(info.lunar.is_lunar_new_year());
        assert_eq!(info.festivals, vec!["春节".to_string()]);
    }

    #[test]
    fn test_day_info_mixed_calendars() {
        // 2025-01-01 is 元旦 on the Gregorian side, no lunar festival
        let info = day_info(2025, 1, 1).unwrap();
        assert_eq!(info.festivals, vec!["元旦".to_string()]);
        assert_eq!(info.lunar.year, 2024);
    }

    #[test]
    fn test_day_info_plain_day() {
        let info = day_info(2025, 11, 3).unwrap();
        assert!(info.festivals.is_empty());
    }
}
