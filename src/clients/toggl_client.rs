use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Australia::Adelaide;
use serde::Serialize;

use crate::models::entry::EntryConfig;
use crate::service::entry_run::EntryWriter;

const TIME_ENTRIES_URL: &str = "https://api.track.toggl.com/api/v9/time_entries";
const CREATED_WITH: &str = "toggl with wings";
const WORKSPACE_ID: u64 = 8_818_825;
/// One full 7.6-hour workday, in seconds.
const ENTRY_DURATION_SECS: u32 = 27_360;
const ENTRY_START_HOUR: u32 = 9;
// The original tool had no timeout at all, so one unresponsive request
// stalled the whole remaining run. Cap each request instead and let the
// per-day error handling deal with it.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct TimeEntryRequest<'a> {
    created_with: &'static str,
    description: &'a str,
    duration: u32,
    pid: u64,
    wid: u64,
    start: String,
}

pub struct TogglClient {
    client: reqwest::Client,
    auth_header: String,
}

impl TogglClient {
    pub fn new(api_token: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            auth_header: basic_auth_header(api_token),
        })
    }
}

/// Toggl's token auth scheme: base64 of `<token>:api_token` behind Basic.
pub fn basic_auth_header(api_token: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:api_token", api_token)))
}

/// Entries start at 09:00 Adelaide time on the entry's calendar date,
/// converted to UTC for the wire.
pub fn entry_start_utc(date: NaiveDate) -> Option<DateTime<Utc>> {
    let local = date.and_hms_opt(ENTRY_START_HOUR, 0, 0)?;
    Adelaide
        .from_local_datetime(&local)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

#[async_trait]
impl EntryWriter for TogglClient {
    async fn create_entry(
        &self,
        date: NaiveDate,
        config: &EntryConfig,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let start = entry_start_utc(date)
            .ok_or_else(|| format!("No unambiguous 09:00 local time on {}", date))?;
        let body = TimeEntryRequest {
            created_with: CREATED_WITH,
            description: &config.description,
            duration: ENTRY_DURATION_SECS,
            pid: config.project_id,
            wid: WORKSPACE_ID,
            start: start.to_rfc3339(),
        };

        let response = self
            .client
            .post(TIME_ENTRIES_URL)
            .header("Authorization", &self.auth_header)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?; // read the body once

        if !status.is_success() {
            return Err(format!("Toggl rejected the entry for {}: {} {}", date, status, text).into());
        }
        Ok(())
    }
}
