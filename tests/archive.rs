#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use parking_lot::{Mutex, MutexGuard};
    use taskdo::db::users::{User, Users};
    use taskdo::libs::clock::FixedClock;
    use taskdo::libs::lifecycle::Lifecycle;
    use taskdo::libs::task::{NewTask, TaskQuery, TaskStatus, TaskUpdate, MAX_PAGE_LIMIT};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct ArchiveTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for ArchiveTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock();
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ArchiveTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 6, 1).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    fn lifecycle() -> Lifecycle {
        Lifecycle::with_clock(Box::new(FixedClock::new(fixed_now()))).unwrap()
    }

    fn seed(lifecycle: &mut Lifecycle, user: &User, title: &str, status: TaskStatus, deadline_offset_days: Option<i64>) -> i64 {
        let initial = match status {
            TaskStatus::InProgress => Some(TaskStatus::InProgress),
            _ => None,
        };
        let task = NewTask {
            title: title.to_string(),
            summary: None,
            category: None,
            status: initial,
            deadline: deadline_offset_days.map(|days| fixed_now() + Duration::days(days)),
            reminder: None,
        };
        let id = lifecycle.create(task, user).unwrap().id.unwrap();
        if status == TaskStatus::Completed {
            lifecycle
                .update(id, TaskUpdate { status: Some(TaskStatus::Completed), category: None })
                .unwrap();
        }
        id
    }

    fn status_of(lifecycle: &Lifecycle, user: &User, title: &str) -> TaskStatus {
        let query = TaskQuery {
            limit: MAX_PAGE_LIMIT,
            ..Default::default()
        };
        let page = lifecycle.find_all(user.id.unwrap(), query).unwrap();
        page.data.iter().find(|task| task.title == title).unwrap().status
    }

    #[test_context(ArchiveTestContext)]
    #[test]
    fn test_sweep_archives_stale_and_completed(_ctx: &mut ArchiveTestContext) {
        let user = Users::new().unwrap().register(&User::new("Test User", "alice@example.com")).unwrap();
        let mut lifecycle = lifecycle();

        seed(&mut lifecycle, &user, "pending stale", TaskStatus::Pending, Some(-5));
        seed(&mut lifecycle, &user, "in progress stale", TaskStatus::InProgress, Some(-4));
        seed(&mut lifecycle, &user, "pending recent", TaskStatus::Pending, Some(-1));
        seed(&mut lifecycle, &user, "pending dateless", TaskStatus::Pending, None);
        seed(&mut lifecycle, &user, "completed", TaskStatus::Completed, None);
        seed(&mut lifecycle, &user, "pending future", TaskStatus::Pending, Some(5));

        let archived = lifecycle.archive_overdue().unwrap();
        assert_eq!(archived, 3);

        assert_eq!(status_of(&lifecycle, &user, "pending stale"), TaskStatus::Archived);
        assert_eq!(status_of(&lifecycle, &user, "in progress stale"), TaskStatus::Archived);
        assert_eq!(status_of(&lifecycle, &user, "completed"), TaskStatus::Archived);
        // Within grace period, dateless, or not yet due: untouched
        assert_eq!(status_of(&lifecycle, &user, "pending recent"), TaskStatus::Pending);
        assert_eq!(status_of(&lifecycle, &user, "pending dateless"), TaskStatus::Pending);
        assert_eq!(status_of(&lifecycle, &user, "pending future"), TaskStatus::Pending);
    }

    #[test_context(ArchiveTestContext)]
    #[test]
    fn test_sweep_is_idempotent(_ctx: &mut ArchiveTestContext) {
        let user = Users::new().unwrap().register(&User::new("Test User", "alice@example.com")).unwrap();
        let mut lifecycle = lifecycle();

        seed(&mut lifecycle, &user, "pending stale", TaskStatus::Pending, Some(-10));
        seed(&mut lifecycle, &user, "completed", TaskStatus::Completed, None);

        assert_eq!(lifecycle.archive_overdue().unwrap(), 2);
        // Nothing newly qualifying, nothing further archived
        assert_eq!(lifecycle.archive_overdue().unwrap(), 0);
    }

    #[test_context(ArchiveTestContext)]
    #[test]
    fn test_grace_boundary_is_strict(_ctx: &mut ArchiveTestContext) {
        let user = Users::new().unwrap().register(&User::new("Test User", "alice@example.com")).unwrap();
        let mut lifecycle = lifecycle();

        // Deadline exactly at the cutoff is not yet overdue
        seed(&mut lifecycle, &user, "on the line", TaskStatus::Pending, Some(-3));

        assert_eq!(lifecycle.archive_overdue().unwrap(), 0);
        assert_eq!(status_of(&lifecycle, &user, "on the line"), TaskStatus::Pending);
    }

    #[test_context(ArchiveTestContext)]
    #[test]
    fn test_sweep_spans_all_users(_ctx: &mut ArchiveTestContext) {
        let alice = Users::new().unwrap().register(&User::new("Alice", "alice@example.com")).unwrap();
        let bob = Users::new().unwrap().register(&User::new("Bob", "bob@example.com")).unwrap();
        let mut lifecycle = lifecycle();

        seed(&mut lifecycle, &alice, "alice stale", TaskStatus::Pending, Some(-6));
        seed(&mut lifecycle, &bob, "bob stale", TaskStatus::Pending, Some(-6));

        assert_eq!(lifecycle.archive_overdue().unwrap(), 2);
        assert_eq!(status_of(&lifecycle, &alice, "alice stale"), TaskStatus::Archived);
        assert_eq!(status_of(&lifecycle, &bob, "bob stale"), TaskStatus::Archived);
    }
}
