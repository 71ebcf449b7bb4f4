use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a task.
///
/// User-driven transitions go PENDING/IN_PROGRESS -> COMPLETED; the archival
/// sweep moves overdue and completed tasks to ARCHIVED. The update path
/// accepts any of the four values (enum membership is the only check).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Archived,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "PENDING",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Completed => "COMPLETED",
            TaskStatus::Archived => "ARCHIVED",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDING" => Ok(TaskStatus::Pending),
            "IN_PROGRESS" => Ok(TaskStatus::InProgress),
            "COMPLETED" => Ok(TaskStatus::Completed),
            "ARCHIVED" => Ok(TaskStatus::Archived),
            other => Err(format!("unknown task status '{}'", other)),
        }
    }
}

/// A persisted task row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub title: String,
    pub summary: Option<String>,
    pub category: Option<String>,
    pub status: TaskStatus,
    pub deadline: Option<NaiveDateTime>,
    pub reminder: Option<NaiveDateTime>,
    pub user_id: i64,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Fields accepted when creating a task.
///
/// Status is restricted to Pending or InProgress here; omitting it defaults
/// to Pending. The owning user comes from the caller's context, not from
/// this payload.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub summary: Option<String>,
    pub category: Option<String>,
    pub status: Option<TaskStatus>,
    pub deadline: Option<NaiveDateTime>,
    pub reminder: Option<NaiveDateTime>,
}

/// Fields mutable through the update path. Only status and category.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub status: Option<TaskStatus>,
    pub category: Option<String>,
}

/// Sortable columns for task search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Summary,
    Category,
    Status,
    Deadline,
    Reminder,
}

impl SortField {
    /// Column name used when building the ORDER BY clause. Values are a
    /// closed set, never user input, so interpolation is safe.
    pub fn column(&self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Summary => "summary",
            SortField::Category => "category",
            SortField::Status => "status",
            SortField::Deadline => "deadline",
            SortField::Reminder => "reminder",
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(SortField::Title),
            "summary" => Ok(SortField::Summary),
            "category" => Ok(SortField::Category),
            "status" => Ok(SortField::Status),
            "deadline" => Ok(SortField::Deadline),
            "reminder" => Ok(SortField::Reminder),
            other => Err(format!("unknown sort field '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn keyword(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order '{}'", other)),
        }
    }
}

pub const DEFAULT_PAGE_LIMIT: u32 = 10;
pub const MAX_PAGE_LIMIT: u32 = 50;

/// Search parameters for the paginated task listing.
#[derive(Debug, Clone)]
pub struct TaskQuery {
    pub deadline_from: Option<NaiveDateTime>,
    pub deadline_to: Option<NaiveDateTime>,
    pub sort: SortField,
    pub order: SortOrder,
    pub page: u32,
    pub limit: u32,
}

impl Default for TaskQuery {
    fn default() -> Self {
        Self {
            deadline_from: None,
            deadline_to: None,
            sort: SortField::Title,
            order: SortOrder::Asc,
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl TaskQuery {
    /// Clamps page and limit into their valid ranges (page >= 1, limit 1..=50).
    pub fn normalized(mut self) -> Self {
        if self.page < 1 {
            self.page = 1;
        }
        if self.limit < 1 {
            self.limit = DEFAULT_PAGE_LIMIT;
        }
        if self.limit > MAX_PAGE_LIMIT {
            self.limit = MAX_PAGE_LIMIT;
        }
        self
    }
}

/// One page of search results plus pre-pagination totals.
#[derive(Debug, Clone)]
pub struct TaskPage {
    pub data: Vec<Task>,
    pub item_count: usize,
    pub page: u32,
    pub total_pages: u32,
}
