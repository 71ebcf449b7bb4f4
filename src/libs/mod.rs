//! Core library modules for the taskdo application.
//!
//! - **Task lifecycle**: validation, persistence, reminder scheduling, archival
//! - **Scheduling**: the watch daemon's periodic trigger and reminder dispatch
//! - **Infrastructure**: configuration, data storage, messaging, presentation

pub mod clock;
pub mod config;
pub mod data_storage;
pub mod dispatcher;
pub mod lifecycle;
pub mod messages;
pub mod scheduler;
pub mod task;
pub mod view;
