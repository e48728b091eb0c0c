//! Chinese festival database
//!
//! Three fixed groups: traditional festivals on lunar dates, modern and
//! international festivals on Gregorian dates. Lookup is by date, type,
//! name or priority.

use crate::lunar::calendar::{self, LunarError};
use crate::types::{Festival, FestivalType, LunarDate};

fn festival(
    name: &str,
    kind: FestivalType,
    is_lunar: bool,
    month: u32,
    day: u32,
    priority: u8,
    color: &str,
    description: &str,
) -> Festival {
    Festival {
        name: name.to_string(),
        kind,
        is_lunar,
        month,
        day,
        priority,
        color: color.to_string(),
        description: description.to_string(),
    }
}

/// Traditional festivals, on lunar dates
pub fn traditional() -> Vec<Festival> {
    use FestivalType::Traditional;
    vec![
        festival("春节", Traditional, true, 1, 1, 1, "#FF4444", "农历新年"),
        festival("元宵节", Traditional, true, 1, 15, 2, "#FF4444", "正月十五"),
        festival("龙抬头", Traditional, true, 2, 2, 3, "#FF4444", "二月二"),
        festival("端午节", Traditional, true, 5, 5, 1, "#FF4444", "五月初五"),
        festival("七夕节", Traditional, true, 7, 7, 2, "#FF4444", "七月初七"),
        festival("中元节", Traditional, true, 7, 15, 3, "#FF4444", "七月十五"),
        festival("中秋节", Traditional, true, 8, 15, 1, "#FF4444", "八月十五"),
        festival("重阳节", Traditional, true, 9, 9, 2, "#FF4444", "九月初九"),
        festival("腊八节", Traditional, true, 12, 8, 3, "#FF4444", "腊月初八"),
        festival("小年", Traditional, true, 12, 23, 2, "#FF4444", "腊月二十三"),
        festival("除夕", Traditional, true, 12, 30, 1, "#FF4444", "腊月三十"),
    ]
}

/// Modern festivals, on Gregorian dates
pub fn modern() -> Vec<Festival> {
    use FestivalType::Modern;
    vec![
        festival("元旦", Modern, false, 1, 1, 1, "#4444FF", "公历新年"),
        festival("植树节", Modern, false, 3, 12, 3, "#4444FF", "植树造林"),
        festival("消费者权益日", Modern, false, 3, 15, 4, "#4444FF", "消费者保护"),
        festival("清明节", Modern, false, 4, 5, 1, "#4444FF", "祭祖扫墓"),
        festival("劳动节", Modern, false, 5, 1, 1, "#4444FF", "国际劳动节"),
        festival("青年节", Modern, false, 5, 4, 2, "#4444FF", "五四青年节"),
        festival("护士节", Modern, false, 5, 12, 3, "#4444FF", "国际护士节"),
        festival("儿童节", Modern, false, 6, 1, 2, "#4444FF", "六一儿童节"),
        festival("建党节", Modern, false, 7, 1, 2, "#4444FF", "中国共产党成立"),
        festival("建军节", Modern, false, 8, 1, 2, "#4444FF", "中国人民解放军建军"),
        festival("教师节", Modern, false, 9, 10, 2, "#4444FF", "尊师重教"),
        festival("国庆节", Modern, false, 10, 1, 1, "#4444FF", "中华人民共和国成立"),
    ]
}

/// International festivals, on Gregorian dates
pub fn international() -> Vec<Festival> {
    use FestivalType::International;
    vec![
        festival("情人节", International, false, 2, 14, 3, "#44AA44", "西方情人节"),
        festival("妇女节", International, false, 3, 8, 2, "#44AA44", "国际妇女节"),
        festival("愚人节", International, false, 4, 1, 4, "#44AA44", "愚人节"),
        festival("地球日", International, false, 4, 22, 3, "#44AA44", "世界地球日"),
        festival("母亲节", International, false, 5, 8, 2, "#44AA44", "母亲节"),
        festival("环境日", International, false, 6, 5, 3, "#44AA44", "世界环境日"),
        festival("父亲节", International, false, 6, 19, 3, "#44AA44", "父亲节"),
        festival("万圣节", International, false, 10, 31, 4, "#44AA44", "万圣节"),
        festival("圣诞节", International, false, 12, 25, 3, "#44AA44", "圣诞节"),
    ]
}

/// All festivals across the three groups
pub fn all() -> Vec<Festival> {
    let mut festivals = traditional();
    festivals.extend(modern());
    festivals.extend(international());
    festivals
}

/// Gregorian-date festivals on a month/day, highest priority first
pub fn by_solar_date(month: u32, day: u32) -> Vec<Festival> {
    let mut matches: Vec<Festival> = all()
        .into_iter()
        .filter(|f| !f.is_lunar && f.month == month && f.day == day)
        .collect();
    matches.sort_by_key(|f| f.priority);
    matches
}

/// Lunar-date festivals on a month/day, highest priority first
pub fn by_lunar_date(month: u32, day: u32) -> Vec<Festival> {
    let mut matches: Vec<Festival> = all()
        .into_iter()
        .filter(|f| f.is_lunar && f.month == month && f.day == day)
        .collect();
    matches.sort_by_key(|f| f.priority);
    matches
}

/// Festivals falling on a converted lunar date.
///
/// 除夕 is pinned at 腊月三十 in the table, but 腊月 only has 29 days in
/// some years; in those years 除夕 falls on 腊月廿九, which the month
/// length from the conversion tables decides.
pub fn festivals_for(lunar: &LunarDate) -> Result<Vec<Festival>, LunarError> {
    let mut matches = by_lunar_date(lunar.month, lunar.day);
    if !lunar.is_leap_month
        && lunar.month == 12
        && lunar.day == 29
        && calendar::days_in_lunar_month(lunar.year, 12)? == 29
    {
        matches.extend(all().into_iter().filter(|f| f.name == "除夕"));
        matches.sort_by_key(|f| f.priority);
    }
    Ok(matches)
}

/// Festivals of one category
pub fn by_type(kind: FestivalType) -> Vec<Festival> {
    all().into_iter().filter(|f| f.kind == kind).collect()
}

/// Festivals whose name contains the query
pub fn search(name: &str) -> Vec<Festival> {
    all().into_iter().filter(|f| f.name.contains(name)).collect()
}

/// Festivals at or above a priority threshold (lower number = higher)
pub fn by_priority(max_priority: u8) -> Vec<Festival> {
    all()
        .into_iter()
        .filter(|f| f.priority <= max_priority)
        .collect()
}

/// Whether any festival falls on the month/day
pub fn is_festival(month: u32, day: u32, is_lunar: bool) -> bool {
    if is_lunar {
        !by_lunar_date(month, day).is_empty()
    } else {
        !by_solar_date(month, day).is_empty()
    }
}

/// Name of the most prominent festival on the month/day
pub fn primary_name(month: u32, day: u32, is_lunar: bool) -> Option<String> {
    let festivals = if is_lunar {
        by_lunar_date(month, day)
    } else {
        by_solar_date(month, day)
    };
    festivals.into_iter().next().map(|f| f.name)
}
