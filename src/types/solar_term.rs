//! Solar term types

use serde::{Deserialize, Serialize};

/// The 24 solar term names, in calendar order
pub const SOLAR_TERM_NAMES: [&str; 24] = [
    "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", // 春
    "立夏", "小满", "芒种", "夏至", "小暑", "大暑", // 夏
    "立秋", "处暑", "白露", "秋分", "寒露", "霜降", // 秋
    "立冬", "小雪", "大雪", "冬至", "小寒", "大寒", // 冬
];

/// Season of the year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub fn chinese_name(self) -> &'static str {
        match self {
            Season::Spring => "春",
            Season::Summer => "夏",
            Season::Autumn => "秋",
            Season::Winter => "冬",
        }
    }

    /// Display color for the season
    pub fn color(self) -> &'static str {
        match self {
            Season::Spring => "#44AA44",
            Season::Summer => "#FF6644",
            Season::Autumn => "#FFAA44",
            Season::Winter => "#4488FF",
        }
    }
}

/// One of the 24 solar terms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarTerm {
    /// Term name (e.g., "立春")
    pub name: String,
    /// Position in the yearly cycle (1-24)
    pub order: u8,
    pub season: Season,
    pub description: String,
    /// Display color, inherited from the season
    pub color: String,
}

impl SolarTerm {
    /// Term name for an order (1-24)
    pub fn name_by_order(order: u8) -> Option<&'static str> {
        if (1..=24).contains(&order) {
            Some(SOLAR_TERM_NAMES[usize::from(order) - 1])
        } else {
            None
        }
    }

    /// Order (1-24) for a term name
    pub fn order_by_name(name: &str) -> Option<u8> {
        SOLAR_TERM_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|i| i as u8 + 1)
    }

    /// 立春, 立夏, 立秋 and 立冬 open their seasons
    pub fn is_season_start(&self) -> bool {
        matches!(self.order, 1 | 7 | 13 | 19)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_order_round_trip() {
        assert_eq!(SolarTerm::name_by_order(1), Some("立春"));
        assert_eq!(SolarTerm::name_by_order(24), Some("大寒"));
        assert_eq!(SolarTerm::name_by_order(25), None);
        assert_eq!(SolarTerm::order_by_name("冬至"), Some(22));
        assert_eq!(SolarTerm::order_by_name("圣诞"), None);
    }

    #[test]
    fn test_season_colors() {
        assert_eq!(Season::Spring.color(), "#44AA44");
        assert_eq!(Season::Winter.chinese_name(), "冬");
    }
}
