//! Integration tests: lunar conversion, festivals and solar terms working
//! together through the public API.

use envreport::lunar::{self, calendar, festival};

#[test]
fn spring_festival_2025_end_to_end() {
    let info = lunar::day_info(2025, 1, 29).unwrap();

    assert_eq!(info.lunar.year, 2025);
    assert_eq!(info.lunar.full_date_string(), "乙巳年正月初一");
    assert_eq!(info.lunar.display_string(), "正月");
    assert_eq!(info.festivals, vec!["春节".to_string()]);
}

#[test]
fn new_years_eve_tracks_month_length() {
    // lunar 2024 腊月 runs only 29 days, so 除夕 falls on 2025-01-28
    let eve = lunar::day_info(2025, 1, 28).unwrap();
    assert_eq!(eve.lunar.day_name, "廿九");
    assert!(eve.festivals.contains(&"除夕".to_string()));

    // lunar 2022 腊月 runs the full 30
    let eve = lunar::day_info(2023, 1, 21).unwrap();
    assert_eq!(eve.lunar.day_name, "三十");
    assert!(eve.festivals.contains(&"除夕".to_string()));
}

#[test]
fn childrens_day_is_gregorian_only() {
    let info = lunar::day_info(2024, 6, 1).unwrap();
    assert_eq!(info.festivals, vec!["儿童节".to_string()]);
    assert_eq!((info.lunar.month, info.lunar.day), (4, 25));
}

#[test]
fn conversion_errors_surface_through_day_info() {
    assert!(lunar::day_info(1899, 12, 31).is_err());
    assert!(lunar::day_info(2101, 1, 1).is_err());
}

#[test]
fn festival_database_is_consistent_with_conversion() {
    // every traditional festival sits on a valid lunar month/day
    for f in festival::traditional() {
        assert!(f.is_lunar);
        assert!((1..=12).contains(&f.month));
        let days = calendar::days_in_lunar_month(2025, f.month).unwrap();
        assert!(f.day <= 30 && days >= 29);
    }
}
