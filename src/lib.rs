//! # Taskdo - Task Management with Reminder Scheduling
//!
//! A command-line utility for tracking tasks with deadlines and reminders,
//! delivering reminder notifications and archiving stale tasks nightly.
//!
//! ## Features
//!
//! - **Task Management**: Create, search, and update tasks with deadlines
//! - **Reminder Delivery**: Delayed reminder jobs dispatched by email at the scheduled time
//! - **Overdue Archival**: Daily sweep archiving stale and completed tasks
//! - **Multi-User Storage**: Tasks are owned by registered users
//! - **Search and Pagination**: Deadline-range filtering, sorting, paginated listing
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdo::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
