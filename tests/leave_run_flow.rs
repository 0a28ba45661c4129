use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use togglWings::models::entry::{DateRange, EntryConfig, LeaveType};
use togglWings::models::holiday::HolidayCalendar;
use togglWings::service::entry_run::{run_leave_entries, EntryWriter};

struct ScriptedWriter {
    written: Mutex<Vec<NaiveDate>>,
    outcomes: Mutex<Vec<Result<(), String>>>,
}

impl ScriptedWriter {
    fn new(outcomes: Vec<Result<(), String>>) -> Self {
        Self {
            written: Mutex::new(Vec::new()),
            outcomes: Mutex::new(outcomes),
        }
    }

    fn written(&self) -> Vec<NaiveDate> {
        self.written.lock().unwrap().clone()
    }
}

#[async_trait]
impl EntryWriter for ScriptedWriter {
    async fn create_entry(
        &self,
        date: NaiveDate,
        _config: &EntryConfig,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.written.lock().unwrap().push(date);
        match self.outcomes.lock().unwrap().pop() {
            Some(Ok(())) | None => Ok(()),
            Some(Err(msg)) => Err(msg.into()),
        }
    }
}

fn config() -> EntryConfig {
    EntryConfig {
        holidays: HolidayCalendar::south_australia(),
        project_id: LeaveType::Annual.project_id(),
        description: "ALG-78: on holiday".to_string(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn thursday_to_monday_skips_the_weekend() {
    let writer = ScriptedWriter::new(vec![]);
    let range = DateRange {
        start: date(2024, 12, 5),
        end: date(2024, 12, 9),
    };

    run_leave_entries(range, &config(), &writer).await;

    assert_eq!(
        writer.written(),
        vec![date(2024, 12, 5), date(2024, 12, 6), date(2024, 12, 9)]
    );
}

#[tokio::test]
async fn christmas_week_only_writes_the_bookends() {
    let writer = ScriptedWriter::new(vec![]);
    let range = DateRange {
        start: date(2024, 12, 23),
        end: date(2024, 12, 27),
    };

    run_leave_entries(range, &config(), &writer).await;

    // 24th through 26th are Christmas Eve, Christmas Day and Proclamation Day.
    assert_eq!(writer.written(), vec![date(2024, 12, 23), date(2024, 12, 27)]);
}

#[tokio::test]
async fn a_plain_working_week_gets_five_entries_in_order() {
    let writer = ScriptedWriter::new(vec![]);
    let range = DateRange {
        start: date(2025, 7, 14),
        end: date(2025, 7, 18),
    };

    run_leave_entries(range, &config(), &writer).await;

    let written = writer.written();
    assert_eq!(written.len(), 5);
    assert!(written.windows(2).all(|pair| pair[0] < pair[1]));
}

#[tokio::test]
async fn failures_are_swallowed_and_later_days_still_succeed() {
    // Outcomes pop from the back, so the middle day's write fails.
    let writer = ScriptedWriter::new(vec![
        Ok(()),
        Err("503 Service Unavailable".to_string()),
        Ok(()),
    ]);
    let range = DateRange {
        start: date(2025, 7, 14),
        end: date(2025, 7, 16),
    };

    run_leave_entries(range, &config(), &writer).await;

    assert_eq!(
        writer.written(),
        vec![date(2025, 7, 14), date(2025, 7, 15), date(2025, 7, 16)]
    );
}

#[tokio::test]
async fn a_weekend_only_range_writes_nothing() {
    let writer = ScriptedWriter::new(vec![]);
    let range = DateRange {
        start: date(2024, 12, 7),
        end: date(2024, 12, 8),
    };

    run_leave_entries(range, &config(), &writer).await;

    assert!(writer.written().is_empty());
}
