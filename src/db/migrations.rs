//! Database schema migration management and versioning.
//!
//! Tracks applied migrations in a dedicated table and applies pending ones
//! inside transactions during database initialization. Migrations are
//! registered in version order and are deterministic across installs.

use crate::libs::messages::Message;
use crate::{msg_debug, msg_info};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

/// SQL schema for the migrations tracking table.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A single schema migration with its transformation function.
#[derive(Debug, Clone)]
struct Migration {
    /// Unique version number for ordering and tracking
    version: u32,
    /// Human-readable name describing the migration's purpose
    name: &'static str,
    /// Applies the schema changes within a transaction
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations, applied in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    /// Registers all database migrations in chronological order.
    fn register_migrations(&mut self) {
        self.migrations.push(Migration {
            version: 1,
            name: "create_users_and_tasks",
            up: |tx| {
                tx.execute(
                    "CREATE TABLE users (
                        id INTEGER PRIMARY KEY,
                        name TEXT NOT NULL,
                        email TEXT NOT NULL UNIQUE,
                        created_at TIMESTAMP DEFAULT (datetime(CURRENT_TIMESTAMP, 'localtime'))
                    )",
                    [],
                )?;
                // Title uniqueness is checked by the lifecycle, not enforced
                // here, mirroring the check-then-insert behavior it models.
                tx.execute(
                    "CREATE TABLE tasks (
                        id INTEGER PRIMARY KEY,
                        title TEXT NOT NULL,
                        summary TEXT,
                        category TEXT,
                        status TEXT NOT NULL DEFAULT 'PENDING',
                        deadline TIMESTAMP,
                        reminder TIMESTAMP,
                        user_id INTEGER NOT NULL,
                        created_at TIMESTAMP DEFAULT (datetime(CURRENT_TIMESTAMP, 'localtime')),
                        updated_at TIMESTAMP DEFAULT (datetime(CURRENT_TIMESTAMP, 'localtime')),
                        FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
                    )",
                    [],
                )?;
                tx.execute("CREATE INDEX idx_tasks_title ON tasks(title)", [])?;
                tx.execute("CREATE INDEX idx_tasks_user ON tasks(user_id)", [])?;
                tx.execute("CREATE INDEX idx_tasks_deadline ON tasks(deadline)", [])?;
                Ok(())
            },
        });

        self.migrations.push(Migration {
            version: 2,
            name: "create_reminder_queue",
            up: |tx| {
                tx.execute(
                    "CREATE TABLE reminders (
                        id INTEGER PRIMARY KEY,
                        task_id INTEGER NOT NULL,
                        recipient TEXT NOT NULL,
                        title TEXT NOT NULL,
                        fire_at TIMESTAMP NOT NULL,
                        created_at TIMESTAMP DEFAULT (datetime(CURRENT_TIMESTAMP, 'localtime')),
                        attempted_at TIMESTAMP
                    )",
                    [],
                )?;
                tx.execute("CREATE INDEX idx_reminders_fire_at ON reminders(fire_at)", [])?;
                Ok(())
            },
        });
    }

    /// Applies all migrations newer than the current database version.
    pub fn migrate(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current = get_db_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current).collect();

        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }
        msg_debug!(Message::MigrationsFound(pending.len()));

        for migration in pending {
            msg_info!(Message::RunningMigration(migration.version, migration.name.to_string()));
            let tx = conn.transaction()?;
            (migration.up)(&tx)?;
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
            tx.commit()?;
            msg_debug!(Message::MigrationCompleted(migration.version));
        }
        msg_debug!(Message::AllMigrationsCompleted);

        Ok(())
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Ensures the schema exists and is at the latest version.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().migrate(conn)
}

/// Returns the highest applied migration version, 0 for a fresh database.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;
    Ok(version.unwrap_or(0))
}
