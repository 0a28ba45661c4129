use chrono::NaiveDate;
use std::collections::HashMap;

// South Australian public holidays, late 2024 through 2026. Dates outside
// this window are treated as regular workdays, so the table needs a refresh
// once 2027 entries are published.
const HOLIDAYS: &[(i32, u32, u32, &str)] = &[
    (2024, 12, 24, "Christmas Eve"),
    (2024, 12, 25, "Christmas Day"),
    (2024, 12, 26, "Proclamation Day"),
    (2024, 12, 31, "New Year's Eve"),
    (2025, 1, 1, "New Year's Day"),
    (2025, 1, 27, "Australia Day"),
    (2025, 3, 10, "Adelaide Cup Day"),
    (2025, 4, 18, "Good Friday"),
    (2025, 4, 19, "Easter Saturday"),
    (2025, 4, 20, "Easter Sunday"),
    (2025, 4, 21, "Easter Monday"),
    (2025, 4, 25, "ANZAC Day"),
    (2025, 6, 9, "King’s Birthday"),
    (2025, 10, 6, "Labour Day"),
    (2025, 12, 24, "Christmas Eve"),
    (2025, 12, 25, "Christmas Day"),
    (2025, 12, 26, "Proclamation Day"),
    (2025, 12, 31, "New Year's Eve"),
    (2026, 1, 1, "New Year's Day"),
    (2026, 1, 26, "Australia Day"),
    (2026, 3, 9, "Adelaide Cup Day"),
    (2026, 4, 3, "Good Friday"),
    (2026, 4, 4, "Easter Saturday"),
    (2026, 4, 5, "Easter Sunday"),
    (2026, 4, 6, "Easter Monday"),
    (2026, 4, 25, "ANZAC Day"),
    (2026, 6, 8, "King’s Birthday"),
    (2026, 10, 5, "Labour Day"),
    (2026, 12, 24, "Christmas Eve"),
    (2026, 12, 25, "Christmas Day"),
    (2026, 12, 26, "Proclamation Day"),
    (2026, 12, 31, "New Year's Eve"),
];

/// Immutable lookup from calendar date to holiday label.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    days: HashMap<NaiveDate, &'static str>,
}

impl HolidayCalendar {
    /// The built-in South Australian table.
    pub fn south_australia() -> Self {
        let days = HOLIDAYS
            .iter()
            .filter_map(|&(y, m, d, label)| NaiveDate::from_ymd_opt(y, m, d).map(|date| (date, label)))
            .collect();
        Self { days }
    }

    pub fn label_for(&self, date: NaiveDate) -> Option<&'static str> {
        self.days.get(&date).copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
