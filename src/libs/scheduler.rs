//! Periodic trigger driving reminder dispatch and the daily archival sweep.
//!
//! Replaces an external cron dependency with a ticker owned by the watch
//! daemon. Every poll interval the due reminders are dispatched; once per
//! local day, at the configured hour, the archival sweep runs. The sweep
//! itself lives in the lifecycle and stays trigger-agnostic, so it can also
//! be invoked on demand through the `sweep` command.

use crate::libs::clock::Clock;
use crate::libs::config::SchedulerConfig;
use crate::libs::dispatcher::Dispatcher;
use crate::libs::lifecycle::Lifecycle;
use crate::libs::messages::Message;
use crate::{msg_error, msg_info};
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use tokio::time::{self, Duration};

pub struct Scheduler {
    config: SchedulerConfig,
    dispatcher: Dispatcher,
    lifecycle: Lifecycle,
    clock: Box<dyn Clock>,
    last_sweep: Option<NaiveDate>,
}

impl Scheduler {
    pub fn new(config: SchedulerConfig, dispatcher: Dispatcher, lifecycle: Lifecycle, clock: Box<dyn Clock>) -> Self {
        Self {
            config,
            dispatcher,
            lifecycle,
            clock,
            last_sweep: None,
        }
    }

    /// Runs the trigger loop until the surrounding task is cancelled.
    pub async fn run(&mut self) -> Result<()> {
        msg_info!(Message::WatcherStarted {
            poll_interval: self.config.poll_interval,
            archive_hour: self.config.archive_hour,
        });

        loop {
            self.tick().await;
            time::sleep(Duration::from_secs(self.config.poll_interval)).await;
        }
    }

    /// One scheduler cycle: dispatch due reminders, then run the sweep when
    /// its daily slot has been reached.
    pub async fn tick(&mut self) {
        let now = self.clock.now();

        if let Err(e) = self.dispatcher.dispatch_due(now).await {
            msg_error!(Message::ReminderDispatchFailed(e.to_string()));
        }

        if self.sweep_due(now) {
            if let Err(e) = self.lifecycle.archive_overdue() {
                // Fatal for this cycle only; the next daily slot retries
                msg_error!(Message::ArchiveSweepFailed(e.to_string()));
            }
            self.last_sweep = Some(now.date());
        }
    }

    /// The sweep fires at most once per local day, once the configured hour
    /// has been reached.
    fn sweep_due(&self, now: NaiveDateTime) -> bool {
        now.hour() >= self.config.archive_hour && self.last_sweep.map_or(true, |date| date < now.date())
    }
}
