//! Database layer for the taskdo application.
//!
//! Provides the SQLite persistence layer: connection management, versioned
//! schema migrations, and one module per table. The task store is the single
//! source of truth; the reminders table doubles as the delayed-job queue.

/// Core database connection and initialization.
pub mod db;

/// Versioned schema migration system.
pub mod migrations;

/// Delayed reminder job queue.
pub mod reminders;

/// Task storage: search, update, and the bulk archival predicate.
pub mod tasks;

/// Registered users owning tasks and receiving reminders.
pub mod users;
