use std::fmt;

use chrono::NaiveDate;

use crate::models::holiday::HolidayCalendar;

/// Toggl project id shared by both leave projects.
pub const LEAVE_PROJECT_ID: u64 = 206_124_728;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveType {
    Annual,
    PersonalCarers,
}

impl LeaveType {
    pub const ALL: [LeaveType; 2] = [LeaveType::Annual, LeaveType::PersonalCarers];

    pub fn project_id(self) -> u64 {
        LEAVE_PROJECT_ID
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaveType::Annual => write!(f, "Annual Leave"),
            LeaveType::PersonalCarers => write!(f, "Personal/Carer's Leave"),
        }
    }
}

/// Inclusive calendar-day range. The prompt layer guarantees end is strictly
/// after start before a run begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Weekend,
    Holiday(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayDecision {
    Workable,
    Skipped(SkipReason),
}

/// Everything one run needs for every write, built once after the prompts.
#[derive(Debug, Clone)]
pub struct EntryConfig {
    pub holidays: HolidayCalendar,
    pub project_id: u64,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_leave_types_map_to_the_same_project() {
        assert_eq!(LeaveType::Annual.project_id(), LEAVE_PROJECT_ID);
        assert_eq!(LeaveType::PersonalCarers.project_id(), LEAVE_PROJECT_ID);
    }

    #[test]
    fn leave_type_labels() {
        assert_eq!(LeaveType::Annual.to_string(), "Annual Leave");
        assert_eq!(LeaveType::PersonalCarers.to_string(), "Personal/Carer's Leave");
    }
}
