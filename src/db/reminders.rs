//! Delayed reminder job queue backed by the application database.
//!
//! Each row is one scheduled reminder carrying the recipient address, the
//! task id and its title, with a fire time. The watcher polls for due rows
//! and marks each attempted exactly once, whether or not delivery succeeded.

use crate::db::db::Db;
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Row};

const INSERT_REMINDER: &str = "INSERT INTO reminders (task_id, recipient, title, fire_at) VALUES (?1, ?2, ?3, ?4)";
const SELECT_DUE: &str = "SELECT id, task_id, recipient, title, fire_at, attempted_at FROM reminders
    WHERE attempted_at IS NULL AND fire_at <= ?1 ORDER BY fire_at";
const MARK_ATTEMPTED: &str = "UPDATE reminders SET attempted_at = ?2 WHERE id = ?1";
const COUNT_PENDING: &str = "SELECT COUNT(*) FROM reminders WHERE attempted_at IS NULL";

/// A scheduled reminder job.
#[derive(Debug, Clone)]
pub struct ReminderJob {
    pub id: Option<i64>,
    pub task_id: i64,
    pub recipient: String,
    pub title: String,
    pub fire_at: NaiveDateTime,
    pub attempted_at: Option<NaiveDateTime>,
}

pub struct Reminders {
    conn: Connection,
}

impl Reminders {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Enqueues a reminder to fire at the given time. Returns the job id.
    pub fn schedule(&mut self, task_id: i64, recipient: &str, title: &str, fire_at: NaiveDateTime) -> Result<i64> {
        self.conn.execute(INSERT_REMINDER, params![task_id, recipient, title, fire_at])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Returns all unattempted jobs whose fire time has passed, oldest first.
    pub fn due(&self, now: NaiveDateTime) -> Result<Vec<ReminderJob>> {
        let mut stmt = self.conn.prepare(SELECT_DUE)?;
        let job_iter = stmt.query_map(params![now], Self::map_row)?;
        let mut jobs = Vec::new();
        for job in job_iter {
            jobs.push(job?);
        }
        Ok(jobs)
    }

    /// Marks a job attempted so it is never picked up again. Delivery
    /// failures still count as an attempt; there is no retry.
    pub fn mark_attempted(&mut self, id: i64, now: NaiveDateTime) -> Result<()> {
        self.conn.execute(MARK_ATTEMPTED, params![id, now])?;
        Ok(())
    }

    pub fn pending_count(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(COUNT_PENDING, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn map_row(row: &Row) -> rusqlite::Result<ReminderJob> {
        Ok(ReminderJob {
            id: row.get(0)?,
            task_id: row.get(1)?,
            recipient: row.get(2)?,
            title: row.get(3)?,
            fire_at: row.get(4)?,
            attempted_at: row.get(5)?,
        })
    }
}
