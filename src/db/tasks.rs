//! Task storage operations.
//!
//! Holds the const SQL for task persistence plus the dynamically assembled
//! search query (ownership filter, optional deadline range, whitelisted sort
//! column, pagination with a pre-pagination count) and the bulk archival
//! predicate used by the nightly sweep.

use crate::db::db::Db;
use crate::libs::task::{Task, TaskQuery, TaskStatus};
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::types::Type;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row, ToSql};

const TASK_COLUMNS: &str = "id, title, summary, category, status, deadline, reminder, user_id, created_at, updated_at";

const INSERT_TASK: &str = "INSERT INTO tasks (title, summary, category, status, deadline, reminder, user_id)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const UPDATE_TASK: &str = "UPDATE tasks
    SET status = ?2, category = ?3, updated_at = datetime(CURRENT_TIMESTAMP, 'localtime')
    WHERE id = ?1";
const ARCHIVE_OVERDUE: &str = "UPDATE tasks
    SET status = 'ARCHIVED', updated_at = datetime(CURRENT_TIMESTAMP, 'localtime')
    WHERE (status IN ('PENDING', 'IN_PROGRESS') AND deadline < ?1) OR status = 'COMPLETED'";

pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Persists a new task and returns the stored row with its generated id
    /// and timestamps.
    pub fn insert(&mut self, task: &Task) -> Result<Task> {
        self.conn.execute(
            INSERT_TASK,
            params![
                task.title,
                task.summary,
                task.category,
                task.status.as_str(),
                task.deadline,
                task.reminder,
                task.user_id
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        let saved = self
            .find_by_id(id)?
            .ok_or_else(|| anyhow::anyhow!("task {} vanished after insert", id))?;
        Ok(saved)
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<Task>> {
        let sql = format!("SELECT {} FROM tasks WHERE id = ?1", TASK_COLUMNS);
        let task = self.conn.query_row(&sql, params![id], Self::map_row).optional()?;
        Ok(task)
    }

    /// Title lookup across all users; the title uniqueness check is global.
    pub fn find_by_title(&self, title: &str) -> Result<Option<Task>> {
        let sql = format!("SELECT {} FROM tasks WHERE title = ?1 LIMIT 1", TASK_COLUMNS);
        let task = self.conn.query_row(&sql, params![title], Self::map_row).optional()?;
        Ok(task)
    }

    /// Writes back the mutable fields (status, category) and refreshes
    /// updated_at. All other columns stay untouched.
    pub fn update(&mut self, task: &Task) -> Result<()> {
        let id = task.id.ok_or_else(|| anyhow::anyhow!("cannot update task without id"))?;
        self.conn.execute(UPDATE_TASK, params![id, task.status.as_str(), task.category])?;
        Ok(())
    }

    /// Runs the filtered, ordered, paginated search for one user's tasks.
    ///
    /// Returns the page rows together with the total number of matching rows
    /// before pagination.
    pub fn search(&self, user_id: i64, query: &TaskQuery) -> Result<(Vec<Task>, usize)> {
        let mut predicates = String::from("WHERE user_id = ?");
        let mut binds: Vec<&dyn ToSql> = vec![&user_id];

        match (&query.deadline_from, &query.deadline_to) {
            (Some(from), Some(to)) => {
                predicates.push_str(" AND deadline BETWEEN ? AND ?");
                binds.push(from);
                binds.push(to);
            }
            (Some(from), None) => {
                predicates.push_str(" AND deadline >= ?");
                binds.push(from);
            }
            (None, Some(to)) => {
                predicates.push_str(" AND deadline <= ?");
                binds.push(to);
            }
            (None, None) => {}
        }

        let count_sql = format!("SELECT COUNT(*) FROM tasks {}", predicates);
        let item_count: i64 = self
            .conn
            .query_row(&count_sql, params_from_iter(binds.iter().copied()), |row| row.get(0))?;

        // Sort column and direction come from closed enums, not user text
        let limit = query.limit as i64;
        let offset = ((query.page - 1) * query.limit) as i64;
        let page_sql = format!(
            "SELECT {} FROM tasks {} ORDER BY {} {} LIMIT ? OFFSET ?",
            TASK_COLUMNS,
            predicates,
            query.sort.column(),
            query.order.keyword()
        );
        binds.push(&limit);
        binds.push(&offset);

        let mut stmt = self.conn.prepare(&page_sql)?;
        let task_iter = stmt.query_map(params_from_iter(binds.iter().copied()), Self::map_row)?;
        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }

        Ok((tasks, item_count as usize))
    }

    /// Bulk-archives stale and completed tasks across the whole store.
    ///
    /// Archives every task that is PENDING or IN_PROGRESS with a deadline
    /// older than the cutoff, plus every COMPLETED task. Returns the number
    /// of affected rows; zero matches is a valid outcome, which also makes
    /// the sweep idempotent.
    pub fn archive_overdue(&mut self, overdue_cutoff: NaiveDateTime) -> Result<usize> {
        let affected = self.conn.execute(ARCHIVE_OVERDUE, params![overdue_cutoff])?;
        Ok(affected)
    }

    fn map_row(row: &Row) -> rusqlite::Result<Task> {
        let status: String = row.get(4)?;
        let status: TaskStatus = status
            .parse()
            .map_err(|e: String| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, e.into()))?;
        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            summary: row.get(2)?,
            category: row.get(3)?,
            status,
            deadline: row.get(5)?,
            reminder: row.get(6)?,
            user_id: row.get(7)?,
            created_at: row.get(8)?,
            updated_at: row.get(9)?,
        })
    }
}
