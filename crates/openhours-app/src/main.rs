use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDateTime, Utc};
use chrono_tz::Tz;
use openhours_core::config::load_config;
use openhours_rules::format::{compact_summary, messages, today_hours};
use openhours_rules::validate::validate_schedule;
use openhours_service::column::{ColumnOptions, render_column};
use openhours_service::entry::render_entry;
use openhours_service::state::decode_state;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::CliArgs;

fn main() -> Result<ExitCode> {
    let settings = load_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Configuration loaded: {:?}", settings);

    let args = CliArgs::parse(std::env::args().skip(1))?;
    let raw = std::fs::read_to_string(&args.path)
        .with_context(|| format!("reading {}", args.path))?;

    let Some(data) = decode_state(Some(&raw))? else {
        println!("{}", messages::NOT_SET);
        return Ok(ExitCode::SUCCESS);
    };

    if let Err(errors) = validate_schedule(&data) {
        for (field, error) in errors.iter() {
            eprintln!("{field}: {error}");
        }
        return Ok(ExitCode::FAILURE);
    }

    let now = local_now(&settings.display.timezone)?;
    tracing::info!(%now, path = %args.path, "Rendering schedule");

    let view = render_entry(Some(&data), now, &settings.display);
    let options = ColumnOptions::new(args.mode.unwrap_or(settings.display.table_column_mode));
    let cell = render_column(Some(&data), &options, now);

    println!("{}:", messages::WEEKLY_SCHEDULE);
    println!("{}", view.weekly.to_plain_text());
    println!();
    if let Some(exceptions) = &view.exceptions {
        println!("{}:", messages::EXCEPTIONS);
        println!("{}", exceptions.to_plain_text());
        println!();
    }
    if let Some(flags) = &view.options {
        println!("{}: {flags}", messages::OPTIONS);
    }
    println!("{}", compact_summary(&data.weekly));
    println!("{}", today_hours(&data.weekly, now.date().weekday().into()));
    println!("{}: {}", messages::CURRENT_STATUS, view.status.to_plain_text());
    println!("[{}] {}", cell.color, cell.text);

    Ok(ExitCode::SUCCESS)
}

/// Current wall-clock time in the configured zone.
fn local_now(timezone: &str) -> Result<NaiveDateTime> {
    let tz: Tz = timezone
        .parse()
        .with_context(|| format!("invalid timezone: {timezone}"))?;
    Ok(Utc::now().with_timezone(&tz).naive_local())
}
