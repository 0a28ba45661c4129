use chrono::NaiveDate;
use clap::Parser;
use inquire::{InquireError, Select, Text};

use crate::models::entry::{DateRange, LeaveType};

const DEFAULT_START: &str = "2024-12-05";
const DEFAULT_END: &str = "2024-12-09";
const DEFAULT_DESCRIPTION: &str = "ALG-78: on holiday";

const BANNER: &str = r"  _____                 _
 |_   _|__   __ _  __ _| |
   | |/ _ \ / _` |/ _` | |
   | | (_) | (_| | (_| | |
   |_|\___/ \__, |\__, |_|
 __        _|___/ |___/
 \ \      / (_) |_| |__
  \ \ /\ / /| | __| '_ \
   \ V  V / | | |_| | | |
 __ \_/\_/ _|_|\__|_| |_|
 \ \      / (_)_ __   __ _ ___
  \ \ /\ / /| | '_ \ / _` / __|
   \ V  V / | | | | | (_| \__ \
    \_/\_/  |_|_| |_|\__, |___/
                     |___/";

#[derive(Parser)]
#[command(name = "togglWings", about = "Helper for recording holiday entries in Toggl")]
pub struct CliArgs {
    /// Toggl API token
    #[arg(short = 't')]
    pub token: Option<String>,
    /// Start date in YYYY-MM-DD format
    #[arg(short = 's')]
    pub start: Option<String>,
    /// End date in YYYY-MM-DD format
    #[arg(short = 'e')]
    pub end: Option<String>,
}

/// The validated bundle the driver runs on.
pub struct RunInputs {
    pub api_token: String,
    pub range: DateRange,
    pub leave_type: LeaveType,
    pub description: String,
}

pub fn print_intro() {
    println!("Toggl With Wings, helper for recording holiday entries");
    println!("{}", BANNER);
    println!();
    println!("    Options");
    println!();
    println!("      -t Toggl API Token");
    println!("      -s Start date in YYYY-MM-DD format");
    println!("      -e End date in YYYY-MM-DD format");
    println!();
}

/// Resolves every input, preferring flags, then config/env for the token,
/// then interactive prompts. Nothing runs until all of them validate.
pub fn collect_inputs(
    args: CliArgs,
    token_from_env: Option<String>,
) -> Result<RunInputs, Box<dyn std::error::Error>> {
    let api_token = match args.token.or(token_from_env) {
        Some(token) if !token.trim().is_empty() => token,
        _ => prompt_api_token()?,
    };

    let start = match args.start.as_deref().and_then(parse_date) {
        Some(date) => date,
        None => prompt_start_date()?,
    };

    let end = match args.end.as_deref().and_then(parse_date).filter(|e| *e > start) {
        Some(date) => date,
        None => prompt_end_date(start)?,
    };

    let leave_type = Select::new("Pick leave type.", LeaveType::ALL.to_vec()).prompt()?;
    let description = prompt_description()?;

    Ok(RunInputs {
        api_token,
        range: DateRange { start, end },
        leave_type,
        description,
    })
}

/// Strict `YYYY-MM-DD` only; shorter forms like `2024-1-5` are rejected.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn prompt_api_token() -> Result<String, InquireError> {
    loop {
        let value = Text::new(
            "What is your Toggl API key? Visit https://track.toggl.com/profile to get the key",
        )
        .prompt()?;
        if !value.trim().is_empty() {
            return Ok(value);
        }
        println!("API Key is required!");
    }
}

fn prompt_start_date() -> Result<NaiveDate, InquireError> {
    loop {
        let value = Text::new("When does your holidays start?")
            .with_placeholder("YYYY-MM-DD")
            .with_initial_value(DEFAULT_START)
            .prompt()?;
        if let Some(date) = parse_date(&value) {
            return Ok(date);
        }
        println!("Invalid date, needs to be in YYYY-MM-DD format.");
    }
}

fn prompt_end_date(start: NaiveDate) -> Result<NaiveDate, InquireError> {
    loop {
        let value = Text::new("When does your holidays end?")
            .with_placeholder("YYYY-MM-DD")
            .with_initial_value(DEFAULT_END)
            .prompt()?;
        match parse_date(&value) {
            None => println!("Invalid date, needs to be in YYYY-MM-DD format."),
            Some(end) if end <= start => println!("End date should come after start date!"),
            Some(end) => return Ok(end),
        }
    }
}

fn prompt_description() -> Result<String, InquireError> {
    loop {
        let value = Text::new("Add a description to the entries")
            .with_initial_value(DEFAULT_DESCRIPTION)
            .prompt()?;
        if !value.is_empty() {
            return Ok(value);
        }
        println!("Description can't be empty.");
    }
}
