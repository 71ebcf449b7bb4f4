use crate::commands::parse_datetime;
use crate::db::users::Users;
use crate::libs::lifecycle::Lifecycle;
use crate::libs::messages::Message;
use crate::libs::task::{NewTask, TaskStatus};
use crate::libs::view::View;
use crate::{msg_error_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TaskArgs {
    /// Task title, unique across all users
    #[arg(required = true, value_parser = parse_title)]
    title: String,

    /// Email of the owning user
    #[arg(short, long, required = true)]
    user: String,

    /// Free-form description
    #[arg(long)]
    summary: Option<String>,

    /// Category label
    #[arg(short, long)]
    category: Option<String>,

    /// Initial status, pending (default) or in_progress
    #[arg(short, long, value_parser = parse_initial_status)]
    status: Option<TaskStatus>,

    /// Deadline, YYYY-MM-DD [HH:MM]
    #[arg(short, long)]
    deadline: Option<String>,

    /// Reminder time, YYYY-MM-DD [HH:MM]; must not be after the deadline
    #[arg(short, long)]
    reminder: Option<String>,
}

fn parse_title(raw: &str) -> Result<String, String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err("title must not be empty".to_string());
    }
    Ok(title.to_string())
}

/// Creation accepts only the two initial statuses; completed and archived
/// are reached later in the lifecycle.
fn parse_initial_status(raw: &str) -> Result<TaskStatus, String> {
    match raw.parse::<TaskStatus>()? {
        status @ (TaskStatus::Pending | TaskStatus::InProgress) => Ok(status),
        other => Err(format!("status must be PENDING or IN_PROGRESS, got {}", other)),
    }
}

pub fn cmd(task_args: TaskArgs) -> Result<()> {
    let user = Users::new()?
        .find_by_email(&task_args.user)?
        .ok_or_else(|| msg_error_anyhow!(Message::UserNotFound(task_args.user.clone())))?;

    let new_task = NewTask {
        title: task_args.title,
        summary: task_args.summary,
        category: task_args.category,
        status: task_args.status,
        deadline: task_args.deadline.as_deref().map(parse_datetime).transpose()?,
        reminder: task_args.reminder.as_deref().map(parse_datetime).transpose()?,
    };

    let task = Lifecycle::new()?.create(new_task, &user)?;
    msg_success!(Message::TaskCreated(task.title.clone()));
    View::tasks(&[task])
}
