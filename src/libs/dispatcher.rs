//! Reminder dispatch: consumes due jobs and sends notification emails.
//!
//! Each due job is attempted exactly once. A failed send is logged and the
//! job is still marked attempted; the failure never propagates to the
//! create request that enqueued it, which completed long ago.

use crate::api::mailer::Mailer;
use crate::db::reminders::Reminders;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info};
use anyhow::Result;
use chrono::NaiveDateTime;

pub struct Dispatcher {
    reminders: Reminders,
    mailer: Mailer,
}

impl Dispatcher {
    pub fn new(mailer: Mailer) -> Result<Self> {
        Ok(Self {
            reminders: Reminders::new()?,
            mailer,
        })
    }

    /// Sends every reminder due at `now` and marks each attempted.
    ///
    /// Returns the number of jobs attempted.
    pub async fn dispatch_due(&mut self, now: NaiveDateTime) -> Result<usize> {
        let jobs = self.reminders.due(now)?;
        let count = jobs.len();

        for job in jobs {
            msg_debug!(Message::ReminderSending(job.recipient.clone()));
            let subject = format!("Reminder: {}", job.title);
            let text = format!(
                "This is a reminder for your task: \"{}\". Please complete it on time!",
                job.title
            );

            match self.mailer.send(&job.recipient, &subject, &text).await {
                Ok(()) => msg_info!(Message::ReminderSent(job.recipient.clone())),
                Err(e) => msg_error!(Message::ReminderSendFailed(e.to_string())),
            }

            if let Some(id) = job.id {
                self.reminders.mark_attempted(id, now)?;
            }
        }

        if count > 0 {
            msg_debug!(Message::RemindersDispatched(count));
        }
        Ok(count)
    }
}
