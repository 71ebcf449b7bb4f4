use crate::db::users::User;
use crate::libs::task::{Task, TaskPage};
use anyhow::Result;
use prettytable::{row, Table};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "CATEGORY", "STATUS", "DEADLINE", "REMINDER"]);
        for task in tasks {
            table.add_row(row![
                task.id.unwrap_or(0),
                task.title,
                task.category.as_deref().unwrap_or("-"),
                task.status,
                Self::fmt_date(&task.deadline),
                Self::fmt_date(&task.reminder)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn task_page(page: &TaskPage) -> Result<()> {
        Self::tasks(&page.data)?;
        println!("Page {} of {} ({} tasks)", page.page, page.total_pages, page.item_count);

        Ok(())
    }

    pub fn users(users: &[User]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "EMAIL"]);
        for user in users {
            table.add_row(row![user.id.unwrap_or(0), user.name, user.email]);
        }
        table.printstd();

        Ok(())
    }

    fn fmt_date(date: &Option<chrono::NaiveDateTime>) -> String {
        date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_else(|| "-".to_string())
    }
}
