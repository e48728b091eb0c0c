//! Solar to lunar date conversion
//!
//! Table-walk conversion covering 1900-01-31 (lunar 1900 正月初一) through
//! 2100-12-31. Each `LUNAR_INFO` entry encodes one lunar year: bits 4-15
//! flag the 30-day months, bits 0-3 hold the leap month number (0 = none),
//! bit 16 the leap month's length.

use chrono::NaiveDate;
use thiserror::Error;

use crate::types::LunarDate;

/// First supported Gregorian year
pub const MIN_YEAR: i32 = 1900;
/// Last supported Gregorian year
pub const MAX_YEAR: i32 = 2100;

#[rustfmt::skip]
const LUNAR_INFO: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2,
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977,
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970,
    0x06566, 0x0d4a0, 0x0ea50, 0x06e95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950,
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557,
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5d0, 0x14573, 0x052d0, 0x0a9a8, 0x0e950, 0x06aa0,
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0,
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b5a0, 0x195a6,
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570,
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x055c0, 0x0ab60, 0x096d5, 0x092e0,
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5,
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930,
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530,
    0x05aa0, 0x076a3, 0x096d0, 0x04bd7, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45,
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0,
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0,
    0x0a2e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4,
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0,
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160,
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252,
    0x0d520,
];

const HEAVENLY_STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

const EARTHLY_BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const LUNAR_MONTHS: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "冬月", "腊月",
];

#[rustfmt::skip]
const LUNAR_DAYS: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十",
    "十一", "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十",
    "廿一", "廿二", "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

/// A date the conversion tables cannot answer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LunarError {
    #[error("year {0} outside supported range ({MIN_YEAR}-{MAX_YEAR})")]
    YearOutOfRange(i32),
    #[error("{year}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("dates before 1900-01-31 precede the lunar epoch")]
    BeforeEpoch,
    #[error("month {0} outside 1-12")]
    InvalidMonth(u32),
}

/// Convert a Gregorian date to its lunar date.
///
/// Walks whole lunar years from the 1900-01-31 epoch, then whole months
/// (visiting the leap month right after its host month), leaving the day.
pub fn solar_to_lunar(year: i32, month: u32, day: u32) -> Result<LunarDate, LunarError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(LunarError::YearOutOfRange(year));
    }
    let date =
        NaiveDate::from_ymd_opt(year, month, day).ok_or(LunarError::InvalidDate { year, month, day })?;

    let mut remaining = days_since_epoch(date);
    if remaining < 0 {
        return Err(LunarError::BeforeEpoch);
    }

    let mut lunar_year = MIN_YEAR;
    while remaining > 0 {
        let year_days = i64::from(lunar_year_days(lunar_year));
        if remaining < year_days {
            break;
        }
        remaining -= year_days;
        lunar_year += 1;
    }

    let leap = leap_month_of(lunar_year);
    let mut lunar_month = 1u32;
    let mut in_leap_month = false;
    while remaining > 0 {
        let month_days = i64::from(if in_leap_month {
            leap_month_days(lunar_year)
        } else {
            lunar_month_days(lunar_year, lunar_month)
        });
        if remaining < month_days {
            break;
        }
        remaining -= month_days;
        if in_leap_month {
            in_leap_month = false;
            lunar_month += 1;
        } else if lunar_month == leap {
            in_leap_month = true;
        } else {
            lunar_month += 1;
        }
    }
    let lunar_day = remaining as u32 + 1;

    Ok(LunarDate {
        year: lunar_year,
        month: lunar_month,
        day: lunar_day,
        is_leap_month: in_leap_month,
        year_name: year_name(lunar_year),
        month_name: month_name(lunar_month, in_leap_month),
        day_name: day_name(lunar_day),
    })
}

/// Days in a regular lunar month (29 or 30)
pub fn days_in_lunar_month(year: i32, month: u32) -> Result<u32, LunarError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(LunarError::YearOutOfRange(year));
    }
    if !(1..=12).contains(&month) {
        return Err(LunarError::InvalidMonth(month));
    }
    Ok(lunar_month_days(year, month))
}

/// The leap month of a lunar year (0 when the year has none)
pub fn leap_month(year: i32) -> Result<u32, LunarError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(LunarError::YearOutOfRange(year));
    }
    Ok(leap_month_of(year))
}

fn days_since_epoch(date: NaiveDate) -> i64 {
    // 1900-01-31 is lunar 1900 正月初一
    let epoch = NaiveDate::from_ymd_opt(MIN_YEAR, 1, 31).expect("epoch is a valid date");
    date.signed_duration_since(epoch).num_days()
}

fn info(year: i32) -> u32 {
    LUNAR_INFO[(year - MIN_YEAR) as usize]
}

fn leap_month_of(year: i32) -> u32 {
    info(year) & 0xf
}

fn leap_month_days(year: i32) -> u32 {
    if leap_month_of(year) == 0 {
        0
    } else if info(year) & 0x10000 != 0 {
        30
    } else {
        29
    }
}

fn lunar_month_days(year: i32, month: u32) -> u32 {
    if info(year) & (0x10000 >> month) != 0 {
        30
    } else {
        29
    }
}

fn lunar_year_days(year: i32) -> u32 {
    let mut days = 348; // twelve 29-day months
    let mut mask = 0x8000;
    while mask > 0x8 {
        if info(year) & mask != 0 {
            days += 1;
        }
        mask >>= 1;
    }
    days + leap_month_days(year)
}

/// Sexagenary cycle name, e.g. 2025 -> "乙巳年"
fn year_name(year: i32) -> String {
    let stem = ((year - 4).rem_euclid(10)) as usize;
    let branch = ((year - 4).rem_euclid(12)) as usize;
    format!("{}{}年", HEAVENLY_STEMS[stem], EARTHLY_BRANCHES[branch])
}

fn month_name(month: u32, is_leap_month: bool) -> String {
    let prefix = if is_leap_month { "闰" } else { "" };
    format!("{}{}", prefix, LUNAR_MONTHS[(month - 1) as usize])
}

fn day_name(day: u32) -> String {
    LUNAR_DAYS[(day - 1) as usize].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_festival_2025() {
        let lunar = solar_to_lunar(2025, 1, 29).unwrap();
        assert_eq!(lunar.year, 2025);
        assert_eq!(lunar.month, 1);
        assert_eq!(lunar.day, 1);
        assert!(!lunar.is_leap_month);
        assert_eq!(lunar.year_name, "乙巳年");
        assert_eq!(lunar.month_name, "正月");
        assert_eq!(lunar.day_name, "初一");
        assert!(lunar.is_lunar_new_year());
    }

    #[test]
    fn test_mid_autumn_2025() {
        let lunar = solar_to_lunar(2025, 10, 6).unwrap();
        assert_eq!((lunar.year, lunar.month, lunar.day), (2025, 8, 15));
        assert_eq!(lunar.month_name, "八月");
        assert_eq!(lunar.day_name, "十五");
    }

    #[test]
    fn test_known_dates() {
        // (solar y, m, d) -> (lunar y, m, d)
        let cases = [
            ((2024, 2, 10), (2024, 1, 1)),  // 2024 春节
            ((2024, 9, 17), (2024, 8, 15)), // 2024 中秋
            ((2023, 1, 22), (2023, 1, 1)),  // 2023 春节
            ((2023, 1, 21), (2022, 12, 30)), // 除夕 on a 30-day 腊月
            ((2025, 1, 28), (2024, 12, 29)), // 除夕 on a 29-day 腊月
        ];
        for ((sy, sm, sd), (ly, lm, ld)) in cases {
            let lunar = solar_to_lunar(sy, sm, sd).unwrap();
            assert_eq!((lunar.year, lunar.month, lunar.day), (ly, lm, ld));
            assert!(!lunar.is_leap_month);
        }
    }

    #[test]
    fn test_new_years_day_2025_is_previous_lunar_year() {
        let lunar = solar_to_lunar(2025, 1, 1).unwrap();
        assert_eq!(lunar.year, 2024);
        assert_eq!(lunar.year_name, "甲辰年");
    }

    #[test]
    fn test_leap_month_2023() {
        // 2023 has a leap second month; 2023-03-22 is its first day
        assert_eq!(leap_month(2023).unwrap(), 2);
        let lunar = solar_to_lunar(2023, 3, 22).unwrap();
        assert_eq!((lunar.year, lunar.month, lunar.day), (2023, 2, 1));
        assert!(lunar.is_leap_month);
        assert_eq!(lunar.month_name, "闰二月");
    }

    #[test]
    fn test_year_range_is_enforced() {
        assert_eq!(
            solar_to_lunar(1899, 1, 1).unwrap_err(),
            LunarError::YearOutOfRange(1899)
        );
        assert_eq!(
            solar_to_lunar(2101, 1, 1).unwrap_err(),
            LunarError::YearOutOfRange(2101)
        );

        // boundaries convert fine
        let first = solar_to_lunar(1900, 1, 31).unwrap();
        assert_eq!((first.year, first.month, first.day), (1900, 1, 1));
        assert!(solar_to_lunar(2100, 12, 31).is_ok());
    }

    #[test]
    fn test_dates_before_epoch_are_rejected() {
        assert_eq!(
            solar_to_lunar(1900, 1, 30).unwrap_err(),
            LunarError::BeforeEpoch
        );
    }

    #[test]
    fn test_invalid_calendar_date() {
        assert_eq!(
            solar_to_lunar(2025, 2, 30).unwrap_err(),
            LunarError::InvalidDate {
                year: 2025,
                month: 2,
                day: 30
            }
        );
    }

    #[test]
    fn test_month_lengths() {
        // lunar 2024 腊月 has 29 days, lunar 2022 腊月 has 30
        assert_eq!(days_in_lunar_month(2024, 12).unwrap(), 29);
        assert_eq!(days_in_lunar_month(2022, 12).unwrap(), 30);
        assert_eq!(
            days_in_lunar_month(2024, 13).unwrap_err(),
            LunarError::InvalidMonth(13)
        );
    }

    #[test]
    fn test_every_supported_date_converts() {
        // sweep a spread of dates across the whole range; all must convert
        // to an in-range lunar date
        for i in 0..1000 {
            let year = 1901 + (i % 199);
            let month = (i % 12) as u32 + 1;
            let day = (i % 28) as u32 + 1;
            let lunar = solar_to_lunar(year, month, day).unwrap();
            assert!((1..=12).contains(&lunar.month));
            assert!((1..=30).contains(&lunar.day));
            assert!((MIN_YEAR..=MAX_YEAR).contains(&lunar.year));
        }
    }
}
