use crate::libs::lifecycle::Lifecycle;
use crate::libs::messages::Message;
use crate::libs::task::{TaskStatus, TaskUpdate};
use crate::libs::view::View;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Id of the task to update
    #[arg(required = true)]
    id: i64,

    /// New status: pending, in_progress, completed or archived
    #[arg(short, long)]
    status: Option<TaskStatus>,

    /// New category label
    #[arg(short, long)]
    category: Option<String>,
}

pub fn cmd(update_args: UpdateArgs) -> Result<()> {
    let update = TaskUpdate {
        status: update_args.status,
        category: update_args.category,
    };

    let task = Lifecycle::new()?.update(update_args.id, update)?;
    msg_success!(Message::TaskUpdated(update_args.id));
    View::tasks(&[task])
}
