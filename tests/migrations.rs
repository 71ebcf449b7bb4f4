#[cfg(test)]
mod tests {
    use parking_lot::{Mutex, MutexGuard};
    use taskdo::db::db::Db;
    use taskdo::db::migrations::get_db_version;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct MigrationsTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for MigrationsTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock();
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            MigrationsTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(MigrationsTestContext)]
    #[test]
    fn test_fresh_database_is_fully_migrated(_ctx: &mut MigrationsTestContext) {
        let db = Db::new().unwrap();
        assert_eq!(get_db_version(&db.conn).unwrap(), 2);

        // All three tables must exist after a fresh init.
        for table in ["users", "tasks", "reminders"] {
            let count: i64 = db
                .conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "table {} missing", table);
        }
    }

    #[test_context(MigrationsTestContext)]
    #[test]
    fn test_reopening_is_idempotent(_ctx: &mut MigrationsTestContext) {
        {
            let db = Db::new().unwrap();
            db.conn
                .execute(
                    "INSERT INTO users (name, email) VALUES (?1, ?2)",
                    ["Ada", "ada@example.com"],
                )
                .unwrap();
        }

        // A second open runs the migration check again without reapplying
        // anything or touching existing rows.
        let db = Db::new().unwrap();
        assert_eq!(get_db_version(&db.conn).unwrap(), 2);
        let users: i64 = db
            .conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .unwrap();
        assert_eq!(users, 1);
    }
}
