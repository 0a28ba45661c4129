use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::entry::{DayDecision, SkipReason};
use crate::models::holiday::HolidayCalendar;

/// Decides whether a calendar date should receive a time entry.
///
/// The weekend check runs before the holiday lookup, so a holiday falling on
/// a Saturday or Sunday is reported as a weekend skip. That ordering matches
/// the behaviour users have come to expect from the tool.
pub fn classify(date: NaiveDate, holidays: &HolidayCalendar) -> DayDecision {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => DayDecision::Skipped(SkipReason::Weekend),
        _ => match holidays.label_for(date) {
            Some(label) => DayDecision::Skipped(SkipReason::Holiday(label)),
            None => DayDecision::Workable,
        },
    }
}
