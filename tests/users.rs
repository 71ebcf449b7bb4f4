#[cfg(test)]
mod tests {
    use parking_lot::{Mutex, MutexGuard};
    use taskdo::db::users::{User, Users};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct UserTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for UserTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock();
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            UserTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_register_assigns_id(_ctx: &mut UserTestContext) {
        let user = Users::new().unwrap().register(&User::new("Alice", "alice@example.com")).unwrap();
        assert!(user.id.is_some());
        assert_eq!(user.email, "alice@example.com");
        assert!(user.created_at.is_some());
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_duplicate_email_rejected(_ctx: &mut UserTestContext) {
        let mut users = Users::new().unwrap();
        users.register(&User::new("Alice", "alice@example.com")).unwrap();

        let err = users.register(&User::new("Other Alice", "alice@example.com")).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_lookup_by_email(_ctx: &mut UserTestContext) {
        let mut users = Users::new().unwrap();
        users.register(&User::new("Alice", "alice@example.com")).unwrap();

        let found = users.find_by_email("alice@example.com").unwrap().unwrap();
        assert_eq!(found.name, "Alice");
        assert!(users.find_by_email("nobody@example.com").unwrap().is_none());
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_fetch_all_sorted_by_email(_ctx: &mut UserTestContext) {
        let mut users = Users::new().unwrap();
        users.register(&User::new("Bob", "bob@example.com")).unwrap();
        users.register(&User::new("Alice", "alice@example.com")).unwrap();

        let all = users.fetch_all().unwrap();
        let emails: Vec<_> = all.iter().map(|user| user.email.as_str()).collect();
        assert_eq!(emails, vec!["alice@example.com", "bob@example.com"]);
    }
}
