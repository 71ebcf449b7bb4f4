use crate::commands::parse_datetime;
use crate::db::users::Users;
use crate::libs::lifecycle::Lifecycle;
use crate::libs::messages::Message;
use crate::libs::task::{SortField, SortOrder, TaskQuery, DEFAULT_PAGE_LIMIT};
use crate::libs::view::View;
use crate::{msg_error_anyhow, msg_info};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Email of the requesting user; only their tasks are listed
    #[arg(short, long, required = true)]
    user: String,

    /// Lower deadline bound, YYYY-MM-DD [HH:MM]
    #[arg(long)]
    from: Option<String>,

    /// Upper deadline bound, YYYY-MM-DD [HH:MM]
    #[arg(long)]
    to: Option<String>,

    /// Sort field: title, summary, category, status, deadline or reminder
    #[arg(short, long, default_value = "title")]
    sort: SortField,

    /// Sort direction: asc or desc
    #[arg(short, long, default_value = "asc")]
    order: SortOrder,

    /// Page number, starting at 1
    #[arg(short, long, default_value_t = 1)]
    page: u32,

    /// Page size (1-50)
    #[arg(short, long, default_value_t = DEFAULT_PAGE_LIMIT)]
    limit: u32,
}

pub fn cmd(list_args: ListArgs) -> Result<()> {
    let user = Users::new()?
        .find_by_email(&list_args.user)?
        .ok_or_else(|| msg_error_anyhow!(Message::UserNotFound(list_args.user.clone())))?;
    let user_id = user.id.ok_or_else(|| msg_error_anyhow!(Message::UserNotFound(user.email.clone())))?;

    let query = TaskQuery {
        deadline_from: list_args.from.as_deref().map(parse_datetime).transpose()?,
        deadline_to: list_args.to.as_deref().map(parse_datetime).transpose()?,
        sort: list_args.sort,
        order: list_args.order,
        page: list_args.page,
        limit: list_args.limit,
    };

    let page = Lifecycle::new()?.find_all(user_id, query)?;
    if page.data.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }
    View::task_page(&page)
}
