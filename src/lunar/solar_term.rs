//! Twenty-four solar term calculation
//!
//! Each term's moment for a year is extrapolated from its 2000 base Julian
//! day by whole tropical years, then converted to a calendar date. This is
//! the mean-motion approximation; it carries no perturbation correction, so
//! dates can drift a day or two from astronomical tables.

use chrono::NaiveDate;

use crate::types::{Season, SolarTerm};

/// Julian day of each term's moment in the 2000 reference year
#[rustfmt::skip]
const BASE_TERMS_2000: [f64; 24] = [
    2451623.897, 2451639.586, 2451654.891, 2451670.969, 2451686.170, 2451701.935,
    2451717.441, 2451732.942, 2451748.461, 2451764.023, 2451779.642, 2451795.323,
    2451811.068, 2451826.878, 2451842.756, 2451858.703, 2451874.721, 2451890.811,
    2451906.973, 2451923.208, 2451939.516, 2451955.898, 2451972.353, 2451988.882,
];

/// Mean length of the tropical year in days
const TROPICAL_YEAR: f64 = 365.2422;

/// All 24 solar terms of a year with their dates, in term order
pub fn terms_for_year(year: i32) -> Vec<(SolarTerm, NaiveDate)> {
    (1..=24)
        .filter_map(|order| {
            let (y, m, d) = julian_day_to_ymd(term_julian_day(year, order));
            let date = NaiveDate::from_ymd_opt(y, m, d)?;
            Some((term(order), date))
        })
        .collect()
}

/// The solar term falling exactly on a date, if any.
///
/// Searches the given year's term list; entries that spill past December
/// belong to the next year's dates and never match.
pub fn term_for_date(year: i32, month: u32, day: u32) -> Option<SolarTerm> {
    let target = NaiveDate::from_ymd_opt(year, month, day)?;
    terms_for_year(year)
        .into_iter()
        .find(|(_, date)| *date == target)
        .map(|(term, _)| term)
}

fn term(order: u8) -> SolarTerm {
    let season = season_of(order);
    SolarTerm {
        name: SolarTerm::name_by_order(order).unwrap_or("未知").to_string(),
        order,
        season,
        description: description(order).to_string(),
        color: season.color().to_string(),
    }
}

fn season_of(order: u8) -> Season {
    match (order - 1) / 6 {
        0 => Season::Spring,
        1 => Season::Summer,
        2 => Season::Autumn,
        _ => Season::Winter,
    }
}

fn term_julian_day(year: i32, order: u8) -> f64 {
    BASE_TERMS_2000[usize::from(order) - 1] + f64::from(year - 2000) * TROPICAL_YEAR
}

/// Julian day to a (year, month, day) calendar date
fn julian_day_to_ymd(julian_day: f64) -> (i32, u32, u32) {
    let jd = julian_day + 0.5;
    let z = jd.trunc() as i64;

    let a = if z < 2_299_161 {
        z
    } else {
        let alpha = ((z as f64 - 1_867_216.25) / 36_524.25).trunc() as i64;
        z + 1 + alpha - alpha / 4
    };

    let b = a + 1524;
    let c = ((b as f64 - 122.1) / 365.25).trunc() as i64;
    let d = (365.25 * c as f64).trunc() as i64;
    let e = ((b - d) as f64 / 30.6001).trunc() as i64;

    let day = b - d - (30.6001 * e as f64).trunc() as i64;
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };

    (year as i32, month as u32, day as u32)
}

fn description(order: u8) -> &'static str {
    match order {
        1 => "春季开始",
        2 => "雨水增多",
        3 => "春雷始鸣",
        4 => "昼夜等长",
        5 => "清明时节",
        6 => "雨生百谷",
        7 => "夏季开始",
        8 => "麦粒饱满",
        9 => "芒种时节",
        10 => "夏日最长",
        11 => "小暑时节",
        12 => "大暑时节",
        13 => "秋季开始",
        14 => "处暑时节",
        15 => "白露降临",
        16 => "秋分时节",
        17 => "寒露时节",
        18 => "霜降时节",
        19 => "冬季开始",
        20 => "小雪时节",
        21 => "大雪时节",
        22 => "冬日最短",
        23 => "小寒时节",
        24 => "大寒时节",
        _ => "未知节气",
    }
}
