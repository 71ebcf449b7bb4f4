#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),             // title
    TaskUpdated(i64),                // id
    TasksNotFound,
    ReminderScheduled(String),       // fire time
    TasksArchived(usize),            // affected rows
    ArchiveSweepFailed(String),      // error

    // === USER MESSAGES ===
    UserCreated(String),         // email
    UserEmailExists(String),     // email
    UserNotFound(String),        // email
    UsersNotFound,

    // === REMINDER DISPATCH MESSAGES ===
    ReminderSending(String),        // recipient
    ReminderSent(String),           // recipient
    ReminderSendFailed(String),     // error
    ReminderDispatchFailed(String), // error
    RemindersDispatched(usize),     // count

    // === WATCHER MESSAGES ===
    WatcherStarted {
        poll_interval: u64,
        archive_hour: u32,
    },
    WatcherReceivedCtrlC,
    WatcherCtrlCListenFailed(String), // error
    WatcherShuttingDown,

    // === MAILER MESSAGES ===
    MailerNotConfigured,
    MailerRejected(String), // status

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    AllMigrationsCompleted,
    DatabaseUpToDate,

    // === PROMPTS ===
    PromptSelectModules,
    PromptMailerApiUrl,
    PromptMailerFrom,
    PromptMailerToken,
    PromptPollInterval,
    PromptArchiveHour,

    // === GENERAL MESSAGES ===
    InvalidDateInput(String), // raw value
}
