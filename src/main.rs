#![allow(non_snake_case)]

use std::env;
use std::process;

use clap::Parser;

use togglWings::cli::{self, CliArgs};
use togglWings::clients::toggl_client::TogglClient;
use togglWings::config::AppConfig;
use togglWings::models::entry::EntryConfig;
use togglWings::models::holiday::HolidayCalendar;
use togglWings::service::entry_run::run_leave_entries;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    let config = match env::var("CONFIG_FILE") {
        Ok(path) => AppConfig::from_file(&path).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    };
    let get_prop = |key: &str| -> Option<String> {
        config.get(key).or_else(|| env::var(key).ok())
    };

    cli::print_intro();

    let inputs = match cli::collect_inputs(args, get_prop("TOGGL_API_TOKEN")) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("Could not collect run inputs: {}", e);
            process::exit(1);
        }
    };

    let client = match TogglClient::new(&inputs.api_token) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Could not build the Toggl client: {}", e);
            process::exit(1);
        }
    };

    let entry_config = EntryConfig {
        holidays: HolidayCalendar::south_australia(),
        project_id: inputs.leave_type.project_id(),
        description: inputs.description,
    };

    run_leave_entries(inputs.range, &entry_config, &client).await;
}
