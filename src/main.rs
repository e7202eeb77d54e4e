mod app;
mod cli;
mod config;
mod consts;
mod data;
mod detail;
mod error;
mod output;
mod utils;

use chrono::Utc;
use clap::Parser;

use app::CommandContext;
use cli::Cli;
use config::Config;
use data::load_data;
use error::AppError;
use utils::{Timezone, parse_date};

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse().with_config(&Config::load());

    let since = cli.since.as_deref().map(parse_date).transpose()?;
    let until = cli.until.as_deref().map(parse_date).transpose()?;
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let now = Utc::now();

    // "today" narrows the range to today's date in the display timezone
    let (since, until) = match &cli.command {
        Some(cmd) if cmd.needs_today_filter() => {
            let today = timezone.date_of(now);
            (Some(today), Some(today))
        }
        _ => (since, until),
    };

    let data = load_data(since, until, timezone)?;

    let ctx = CommandContext {
        cli: &cli,
        timezone,
        now,
    };
    app::run(&data, &ctx);
    Ok(())
}
