//! Display implementation for taskdo application messages.
//!
//! Converts structured `Message` variants into the human-readable text shown
//! on the terminal. All user-facing text lives here, in one place, so the
//! wording stays consistent and parameters stay type-checked.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let message = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TasksNotFound => "No tasks found".to_string(),
            Message::ReminderScheduled(fire_at) => format!("Reminder scheduled for {}", fire_at),
            Message::TasksArchived(count) => format!("Archived {} tasks", count),
            Message::ArchiveSweepFailed(err) => format!("Archival sweep failed: {}", err),

            // === USER MESSAGES ===
            Message::UserCreated(email) => format!("User {} registered", email),
            Message::UserEmailExists(email) => format!("User with email {} already exists", email),
            Message::UserNotFound(email) => format!("User with email {} not found", email),
            Message::UsersNotFound => "No users registered yet. Run 'taskdo user add' first".to_string(),

            // === REMINDER DISPATCH MESSAGES ===
            Message::ReminderSending(recipient) => format!("Sending reminder email to {}", recipient),
            Message::ReminderSent(recipient) => format!("Reminder email sent to {}", recipient),
            Message::ReminderSendFailed(err) => format!("Failed to send reminder email: {}", err),
            Message::ReminderDispatchFailed(err) => format!("Reminder dispatch failed: {}", err),
            Message::RemindersDispatched(count) => format!("Dispatched {} reminders", count),

            // === WATCHER MESSAGES ===
            Message::WatcherStarted { poll_interval, archive_hour } => {
                format!(
                    "Watcher started: polling reminders every {}s, archival sweep at {:02}:00",
                    poll_interval, archive_hour
                )
            }
            Message::WatcherReceivedCtrlC => "Received Ctrl+C, shutting down...".to_string(),
            Message::WatcherCtrlCListenFailed(err) => format!("Failed to listen for Ctrl+C: {}", err),
            Message::WatcherShuttingDown => "Watcher stopped".to_string(),

            // === MAILER MESSAGES ===
            Message::MailerNotConfigured => "Mailer is not configured. Run 'taskdo init' to set it up".to_string(),
            Message::MailerRejected(status) => format!("Mail gateway rejected the message: {}", status),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptMailerApiUrl => "Mail gateway URL".to_string(),
            Message::PromptMailerFrom => "Sender address (From)".to_string(),
            Message::PromptMailerToken => "Mail gateway auth token (leave empty for none)".to_string(),
            Message::PromptPollInterval => "Reminder poll interval in seconds".to_string(),
            Message::PromptArchiveHour => "Hour of day for the archival sweep (0-23)".to_string(),

            // === GENERAL MESSAGES ===
            Message::InvalidDateInput(raw) => format!("Invalid date '{}', expected YYYY-MM-DD HH:MM", raw),
        };
        write!(f, "{}", message)
    }
}
