#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use parking_lot::Mutex;
    use std::sync::Arc;
    use taskdo::api::mailer::{Mailer, MailerConfig};
    use taskdo::db::users::{User, Users};
    use taskdo::libs::clock::{Clock, FixedClock};
    use taskdo::libs::config::SchedulerConfig;
    use taskdo::libs::dispatcher::Dispatcher;
    use taskdo::libs::lifecycle::Lifecycle;
    use taskdo::libs::scheduler::Scheduler;
    use taskdo::libs::task::{NewTask, TaskQuery, TaskStatus, MAX_PAGE_LIMIT};
    use tempfile::TempDir;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Redirects application storage into a temp dir for the duration of
    /// the returned guard.
    fn isolated_home() -> (parking_lot::MutexGuard<'static, ()>, TempDir) {
        let guard = ENV_LOCK.lock();
        let temp_dir = tempfile::tempdir().unwrap();
        std::env::set_var("HOME", temp_dir.path());
        std::env::set_var("LOCALAPPDATA", temp_dir.path());
        (guard, temp_dir)
    }

    /// Clock whose current time the test moves forward between ticks.
    #[derive(Clone)]
    struct SteppingClock {
        now: Arc<Mutex<NaiveDateTime>>,
    }

    impl SteppingClock {
        fn new(now: NaiveDateTime) -> Self {
            Self {
                now: Arc::new(Mutex::new(now)),
            }
        }

        fn set(&self, now: NaiveDateTime) {
            *self.now.lock() = now;
        }
    }

    impl Clock for SteppingClock {
        fn now(&self) -> NaiveDateTime {
            *self.now.lock()
        }
    }

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 6, day).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    /// A gateway nothing listens on; the queue stays empty in these tests so
    /// it is never contacted.
    fn unreachable_mailer() -> Mailer {
        Mailer::new(&MailerConfig {
            api_url: "http://127.0.0.1:9/send".to_string(),
            from: "taskdo@example.com".to_string(),
            auth_token: None,
        })
    }

    fn scheduler(archive_hour: u32, clock: &SteppingClock) -> Scheduler {
        let config = SchedulerConfig {
            poll_interval: 1,
            archive_hour,
        };
        let dispatcher = Dispatcher::new(unreachable_mailer()).unwrap();
        let lifecycle = Lifecycle::with_clock(Box::new(clock.clone())).unwrap();
        Scheduler::new(config, dispatcher, lifecycle, Box::new(clock.clone()))
    }

    /// Creates a pending task whose deadline is long past the grace period.
    fn seed_stale(user: &User, title: &str, now: NaiveDateTime) {
        let mut lifecycle = Lifecycle::with_clock(Box::new(FixedClock::new(now))).unwrap();
        let task = NewTask {
            title: title.to_string(),
            summary: None,
            category: None,
            status: None,
            deadline: Some(now - Duration::days(10)),
            reminder: None,
        };
        lifecycle.create(task, user).unwrap();
    }

    fn status_of(user: &User, title: &str) -> TaskStatus {
        let lifecycle = Lifecycle::with_clock(Box::new(FixedClock::new(at(1, 12)))).unwrap();
        let query = TaskQuery {
            limit: MAX_PAGE_LIMIT,
            ..Default::default()
        };
        let page = lifecycle.find_all(user.id.unwrap(), query).unwrap();
        page.data.iter().find(|task| task.title == title).unwrap().status
    }

    #[tokio::test]
    async fn test_sweep_runs_at_most_once_per_day() {
        let (_guard, _temp_dir) = isolated_home();
        let user = Users::new().unwrap().register(&User::new("Test User", "alice@example.com")).unwrap();
        let clock = SteppingClock::new(at(1, 12));
        let mut scheduler = scheduler(0, &clock);

        seed_stale(&user, "first stale", at(1, 12));
        scheduler.tick().await;
        assert_eq!(status_of(&user, "first stale"), TaskStatus::Archived);

        // Later the same day nothing sweeps again
        seed_stale(&user, "second stale", at(1, 12));
        clock.set(at(1, 18));
        scheduler.tick().await;
        assert_eq!(status_of(&user, "second stale"), TaskStatus::Pending);

        // The next day's first tick past the hour sweeps again
        clock.set(at(2, 0));
        scheduler.tick().await;
        assert_eq!(status_of(&user, "second stale"), TaskStatus::Archived);
    }

    #[tokio::test]
    async fn test_sweep_waits_for_configured_hour() {
        let (_guard, _temp_dir) = isolated_home();
        let user = Users::new().unwrap().register(&User::new("Test User", "alice@example.com")).unwrap();
        let clock = SteppingClock::new(at(1, 12));
        let mut scheduler = scheduler(15, &clock);

        seed_stale(&user, "before the hour", at(1, 12));

        // Hour 12 is before the 15:00 slot
        scheduler.tick().await;
        assert_eq!(status_of(&user, "before the hour"), TaskStatus::Pending);

        clock.set(at(1, 15));
        scheduler.tick().await;
        assert_eq!(status_of(&user, "before the hour"), TaskStatus::Archived);
    }

    #[tokio::test]
    async fn test_hour_slot_is_reached_any_time_after_it() {
        let (_guard, _temp_dir) = isolated_home();
        let user = Users::new().unwrap().register(&User::new("Test User", "alice@example.com")).unwrap();
        // First tick happens hours past the configured slot, e.g. after the
        // daemon was down at 03:00
        let clock = SteppingClock::new(at(1, 20));
        let mut scheduler = scheduler(3, &clock);

        seed_stale(&user, "missed the slot", at(1, 20));
        scheduler.tick().await;
        assert_eq!(status_of(&user, "missed the slot"), TaskStatus::Archived);
    }
}
