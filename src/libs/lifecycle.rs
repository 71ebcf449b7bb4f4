//! Task lifecycle management.
//!
//! The lifecycle owns the task store, the reminder queue and a clock, all
//! injected explicitly so "now" is controllable in tests. It enforces the
//! temporal invariants on creation, runs the paginated search, applies
//! updates, and carries the archival sweep logic the periodic trigger calls.
//!
//! Creation persists the task first and enqueues the reminder job second,
//! without a wrapping transaction: a crash between the two leaves a task
//! with no scheduled reminder. Updates never touch the queue, so a reminder
//! can still fire for a task that was completed or archived in the meantime.

use crate::db::reminders::Reminders;
use crate::db::tasks::Tasks;
use crate::db::users::User;
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::messages::Message;
use crate::libs::task::{NewTask, Task, TaskPage, TaskQuery, TaskStatus, TaskUpdate};
use crate::{msg_debug, msg_info};
use anyhow::Result;
use chrono::Duration;
use thiserror::Error;

/// Grace period before a pending or in-progress task with a passed deadline
/// is considered abandoned by the sweep.
pub const OVERDUE_GRACE_DAYS: i64 = 3;

/// Validation and lookup failures surfaced to the caller. None of these are
/// retried.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task with title '{0}' already exists")]
    DuplicateTitle(String),
    #[error("reminder date cannot be after the deadline date")]
    InvalidReminderOrder,
    #[error("reminder date cannot be in the past")]
    ReminderInPast,
    #[error("task with id {0} not found")]
    TaskNotFound(i64),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub struct Lifecycle {
    tasks: Tasks,
    reminders: Reminders,
    clock: Box<dyn Clock>,
}

impl Lifecycle {
    pub fn new() -> Result<Self> {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Result<Self> {
        Ok(Self {
            tasks: Tasks::new()?,
            reminders: Reminders::new()?,
            clock,
        })
    }

    /// Creates a task for the given user, scheduling its reminder when one
    /// is set.
    ///
    /// Validation runs in a fixed order: global title uniqueness, reminder
    /// vs. deadline ordering, reminder vs. now. Only then is the task
    /// persisted and, if a reminder is present, exactly one job enqueued
    /// with a delay of `reminder - now`.
    pub fn create(&mut self, new_task: NewTask, user: &User) -> Result<Task, TaskError> {
        let now = self.clock.now();

        if self.tasks.find_by_title(&new_task.title)?.is_some() {
            return Err(TaskError::DuplicateTitle(new_task.title));
        }
        if let (Some(reminder), Some(deadline)) = (new_task.reminder, new_task.deadline) {
            if reminder > deadline {
                return Err(TaskError::InvalidReminderOrder);
            }
        }
        if let Some(reminder) = new_task.reminder {
            if reminder < now {
                return Err(TaskError::ReminderInPast);
            }
        }

        let user_id = user.id.ok_or_else(|| anyhow::anyhow!("user '{}' has no id", user.email))?;
        let task = Task {
            id: None,
            title: new_task.title,
            summary: new_task.summary,
            category: new_task.category,
            status: new_task.status.unwrap_or(TaskStatus::Pending),
            deadline: new_task.deadline,
            reminder: new_task.reminder,
            user_id,
            created_at: None,
            updated_at: None,
        };
        let saved = self.tasks.insert(&task)?;

        if let Some(reminder) = saved.reminder {
            let delay = reminder - now;
            let fire_at = now + delay;
            let task_id = saved.id.ok_or_else(|| anyhow::anyhow!("saved task has no id"))?;
            self.reminders.schedule(task_id, &user.email, &saved.title, fire_at)?;
            msg_debug!(Message::ReminderScheduled(fire_at.format("%Y-%m-%d %H:%M:%S").to_string()));
        }

        Ok(saved)
    }

    /// Paginated search over the requesting user's tasks.
    pub fn find_all(&self, user_id: i64, query: TaskQuery) -> Result<TaskPage> {
        let query = query.normalized();
        let (data, item_count) = self.tasks.search(user_id, &query)?;
        let total_pages = (item_count as u32).div_ceil(query.limit);

        Ok(TaskPage {
            data,
            item_count,
            page: query.page,
            total_pages,
        })
    }

    /// Applies a status and/or category change to an existing task.
    ///
    /// Status only needs to be a member of the enum; a completed task can be
    /// reopened through this path. Already scheduled reminders are left alone.
    pub fn update(&mut self, id: i64, update: TaskUpdate) -> Result<Task, TaskError> {
        let mut task = self.tasks.find_by_id(id)?.ok_or(TaskError::TaskNotFound(id))?;

        if let Some(status) = update.status {
            task.status = status;
        }
        if let Some(category) = update.category {
            task.category = Some(category);
        }
        self.tasks.update(&task)?;

        let task = self.tasks.find_by_id(id)?.ok_or(TaskError::TaskNotFound(id))?;
        Ok(task)
    }

    /// Runs the archival sweep over the entire store.
    ///
    /// Archives tasks overdue past the grace period and all completed tasks.
    /// Idempotent; logs and returns the affected-row count.
    pub fn archive_overdue(&mut self) -> Result<usize> {
        let cutoff = self.clock.now() - Duration::days(OVERDUE_GRACE_DAYS);
        let archived = self.tasks.archive_overdue(cutoff)?;
        msg_info!(Message::TasksArchived(archived));
        Ok(archived)
    }
}
