pub mod init;
pub mod list;
pub mod sweep;
pub mod task;
pub mod update;
pub mod user;
pub mod watch;

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Register and list users")]
    User(user::UserArgs),
    #[command(about = "Create a task", arg_required_else_help = true)]
    Task(task::TaskArgs),
    #[command(about = "Search and list tasks")]
    List(list::ListArgs),
    #[command(about = "Update a task's status or category", arg_required_else_help = true)]
    Update(update::UpdateArgs),
    #[command(about = "Run the archival sweep once")]
    Sweep,
    #[command(about = "Watch for due reminders and run the daily archival sweep")]
    Watch,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::User(args) => user::cmd(args),
            Commands::Task(args) => task::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Update(args) => update::cmd(args),
            Commands::Sweep => sweep::cmd(),
            Commands::Watch => watch::cmd().await,
        }
    }
}

/// Parses a date argument, accepting `YYYY-MM-DD HH:MM` or a bare date
/// (midnight).
pub(crate) fn parse_datetime(raw: &str) -> Result<NaiveDateTime> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M") {
        return Ok(datetime);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_hms_opt(0, 0, 0).unwrap_or_default());
    }
    Err(msg_error_anyhow!(Message::InvalidDateInput(raw.to_string())))
}

#[cfg(test)]
mod tests {
    use super::parse_datetime;

    #[test]
    fn parses_full_and_bare_dates() {
        assert_eq!(parse_datetime("2026-03-01 09:30").unwrap().to_string(), "2026-03-01 09:30:00");
        assert_eq!(parse_datetime("2026-03-01").unwrap().to_string(), "2026-03-01 00:00:00");
        assert!(parse_datetime("tomorrow").is_err());
    }
}
