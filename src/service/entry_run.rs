use async_trait::async_trait;
use chrono::{Days, NaiveDate};

use crate::models::entry::{DateRange, DayDecision, EntryConfig, SkipReason};
use crate::service::classifier::classify;

/// Seam for the remote write so the driver can run against a fake in tests.
#[async_trait]
pub trait EntryWriter: Send + Sync {
    async fn create_entry(
        &self,
        date: NaiveDate,
        config: &EntryConfig,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Walks the range one calendar day at a time, in order. Each workable day
/// gets exactly one awaited write; the next day is only started after the
/// previous outcome is known. A failed write is printed and skipped over,
/// never retried.
pub async fn run_leave_entries(range: DateRange, config: &EntryConfig, writer: &dyn EntryWriter) {
    let mut current = range.start;
    while current <= range.end {
        match classify(current, &config.holidays) {
            DayDecision::Skipped(SkipReason::Weekend) => {
                println!("⏭️  Skipping {} since it's the weekend", current);
            }
            DayDecision::Skipped(SkipReason::Holiday(label)) => {
                println!("⏭️  Skipping {} since it's {}", current, label);
            }
            DayDecision::Workable => {
                println!("Processing {}", current);
                match writer.create_entry(current, config).await {
                    Ok(()) => println!("✅ Recorded {}", current),
                    Err(err) => {
                        eprintln!("{}", err);
                        println!("❌ Failed {}", current);
                    }
                }
            }
        }
        current = current + Days::new(1);
    }
    println!("All done!");
}
