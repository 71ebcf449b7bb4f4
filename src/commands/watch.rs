//! Runs the reminder watcher and daily archival sweep in the foreground.

use crate::api::mailer::Mailer;
use crate::libs::clock::SystemClock;
use crate::libs::config::Config;
use crate::libs::dispatcher::Dispatcher;
use crate::libs::lifecycle::Lifecycle;
use crate::libs::messages::Message;
use crate::libs::scheduler::Scheduler;
use crate::{msg_error, msg_error_anyhow, msg_info};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let mailer_config = config.mailer.ok_or_else(|| msg_error_anyhow!(Message::MailerNotConfigured))?;
    let scheduler_config = config.scheduler.unwrap_or_default();

    let dispatcher = Dispatcher::new(Mailer::new(&mailer_config))?;
    let lifecycle = Lifecycle::new()?;
    let mut scheduler = Scheduler::new(scheduler_config, dispatcher, lifecycle, Box::new(SystemClock));

    tokio::select! {
        result = scheduler.run() => result,
        ctrl_c = tokio::signal::ctrl_c() => {
            match ctrl_c {
                Ok(()) => msg_info!(Message::WatcherReceivedCtrlC),
                Err(e) => msg_error!(Message::WatcherCtrlCListenFailed(e.to_string())),
            }
            msg_info!(Message::WatcherShuttingDown);
            Ok(())
        }
    }
}
