#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};
    use studentdb::libs::config::{Config, DatabaseConfig, DATABASE_ENV, DB_FILE_NAME};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// The tests below rewrite process-wide environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Test context to ensure a clean environment for each config test.
    /// It sets up a temporary directory to act as the user's home/appdata directory.
    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            std::env::remove_var(DATABASE_ENV);
            ConfigTestContext { _guard: guard, temp_dir }
        }

        fn teardown(self) {
            std::env::remove_var(DATABASE_ENV);
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.database.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_database_in_data_dir(ctx: &mut ConfigTestContext) {
        let database = Config::default().database().unwrap();
        assert!(database.path.ends_with(DB_FILE_NAME));
        assert!(database.path.starts_with(&*ctx.temp_dir.path().to_string_lossy()));
        assert!(!database.is_in_memory());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(_ctx: &mut ConfigTestContext) {
        let config = Config {
            database: Some(DatabaseConfig::new("/srv/school/students.db")),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.database, Some(DatabaseConfig::new("/srv/school/students.db")));
        assert_eq!(loaded.database().unwrap().path, "/srv/school/students.db");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_env_overrides_file(_ctx: &mut ConfigTestContext) {
        let config = Config {
            database: Some(DatabaseConfig::new("/srv/school/students.db")),
        };
        std::env::set_var(DATABASE_ENV, ":memory:");

        let database = config.database().unwrap();
        assert!(database.is_in_memory());

        std::env::set_var(DATABASE_ENV, "   ");
        assert_eq!(config.database().unwrap().path, "/srv/school/students.db");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete(_ctx: &mut ConfigTestContext) {
        assert!(!Config::delete().unwrap());

        Config::default().save().unwrap();
        assert!(Config::delete().unwrap());
        assert!(Config::read().unwrap().database.is_none());
    }
}
