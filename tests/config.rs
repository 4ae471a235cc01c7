#[cfg(test)]
mod tests {
    use standup::libs::config::{AppConfig, ConfigError, ConfigFile, ConfigOverrides, DEFAULT_BREAK_MESSAGE};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl ConfigTestContext {
        fn write_config(&self, yaml: &str) -> PathBuf {
            let path = self.temp_dir.path().join("standup_config.yml");
            fs::write(&path, yaml).unwrap();
            path
        }
    }

    fn complete_file() -> ConfigFile {
        ConfigFile {
            work_time_minutes: Some(30),
            break_time_minutes: Some(5),
            csv_file: Some(PathBuf::from("logs/sessions.csv")),
            state_file: Some(PathBuf::from("logs/state.json")),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_converts_minutes_and_applies_defaults() {
        let config = AppConfig::resolve(complete_file(), &ConfigOverrides::default()).unwrap();

        assert_eq!(config.work_duration_sec, 1800);
        assert_eq!(config.break_duration_sec, 300);
        assert_eq!(config.activation_threshold_sec, 10);
        assert_eq!(config.csv_file, Some(PathBuf::from("logs/sessions.csv")));
        assert_eq!(config.state_file, PathBuf::from("logs/state.json"));
        assert!(!config.test_mode);
        assert_eq!(config.break_messages, vec![DEFAULT_BREAK_MESSAGE.to_string()]);
    }

    #[test]
    fn test_resolve_reports_missing_fields() {
        for field in ["work_time_minutes", "break_time_minutes", "csv_file", "state_file"] {
            let mut file = complete_file();
            match field {
                "work_time_minutes" => file.work_time_minutes = None,
                "break_time_minutes" => file.break_time_minutes = None,
                "csv_file" => file.csv_file = None,
                _ => file.state_file = None,
            }

            let err = AppConfig::resolve(file, &ConfigOverrides::default()).unwrap_err();
            assert!(matches!(err, ConfigError::MissingField(name) if name == field), "{}", field);
        }
    }

    #[test]
    fn test_resolve_rejects_zero_durations() {
        let file = ConfigFile {
            break_time_minutes: Some(0),
            ..complete_file()
        };
        let err = AppConfig::resolve(file, &ConfigOverrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositive("break_time_minutes")));

        let overrides = ConfigOverrides {
            work_time_minutes: Some(0),
            ..Default::default()
        };
        let err = AppConfig::resolve(complete_file(), &overrides).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositive("work_time_minutes")));
    }

    #[test]
    fn test_resolve_rejects_minutes_that_overflow_seconds() {
        let mut file = complete_file();
        file.work_time_minutes = Some(u64::MAX);
        let err = AppConfig::resolve(file, &ConfigOverrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::TooLarge("work_time_minutes")));
        assert_eq!(err.to_string(), "Configuration value 'work_time_minutes' is too large");

        let overrides = ConfigOverrides {
            break_time_minutes: Some(u64::MAX / 60 + 1),
            ..Default::default()
        };
        let err = AppConfig::resolve(complete_file(), &overrides).unwrap_err();
        assert!(matches!(err, ConfigError::TooLarge("break_time_minutes")));
    }

    #[test]
    fn test_resolve_rejects_empty_break_messages() {
        let file = ConfigFile {
            break_messages: Some(vec![]),
            ..complete_file()
        };
        let err = AppConfig::resolve(file, &ConfigOverrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyBreakMessages));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let overrides = ConfigOverrides {
            work_time_minutes: Some(45),
            break_time_minutes: Some(10),
            csv_file: Some(PathBuf::from("other.csv")),
            test_mode: false,
        };
        let config = AppConfig::resolve(complete_file(), &overrides).unwrap();

        assert_eq!(config.work_duration_sec, 2700);
        assert_eq!(config.break_duration_sec, 600);
        assert_eq!(config.csv_file, Some(PathBuf::from("other.csv")));
    }

    #[test]
    fn test_test_mode_redirects_session_log() {
        let overrides = ConfigOverrides {
            test_mode: true,
            ..Default::default()
        };
        let config = AppConfig::resolve(complete_file(), &overrides).unwrap();

        assert!(config.test_mode);
        assert_eq!(config.csv_file, Some(PathBuf::from("logs/test_sessions.csv")));
        assert_eq!(config.raw_log_file(), Some(PathBuf::from("logs/test_sessions_raw.csv")));
        assert_eq!(config.state_file, PathBuf::from("logs/state.json"));
    }

    #[test]
    fn test_raw_log_sits_next_to_session_log() {
        let config = AppConfig::resolve(complete_file(), &ConfigOverrides::default()).unwrap();
        assert_eq!(config.raw_log_file(), Some(PathBuf::from("logs/sessions_raw.csv")));

        let no_log = AppConfig { csv_file: None, ..config };
        assert_eq!(no_log.raw_log_file(), None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_load_reads_yaml_and_creates_directories(ctx: &mut ConfigTestContext) {
        let logs = ctx.temp_dir.path().join("data").join("logs");
        let path = ctx.write_config(&format!(
            "work_time_minutes: 25\n\
             break_time_minutes: 5\n\
             csv_file: {csv}\n\
             state_file: {state}\n\
             activation_threshold_seconds: 0\n\
             break_messages:\n  - Stand up!\n  - Walk around!\n",
            csv = logs.join("sessions.csv").display(),
            state = ctx.temp_dir.path().join("run").join("state.json").display(),
        ));

        let config = AppConfig::load(Some(&path), &ConfigOverrides::default()).unwrap();

        assert_eq!(config.work_duration_sec, 1500);
        assert_eq!(config.activation_threshold_sec, 0);
        assert_eq!(config.break_messages, vec!["Stand up!", "Walk around!"]);
        assert!(logs.is_dir());
        assert!(ctx.temp_dir.path().join("run").is_dir());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_load_reads_test_mode_from_file(ctx: &mut ConfigTestContext) {
        let path = ctx.write_config(&format!(
            "work_time_minutes: 1\nbreak_time_minutes: 1\ncsv_file: {}\nstate_file: {}\ntest_mode: true\n",
            ctx.temp_dir.path().join("log.csv").display(),
            ctx.temp_dir.path().join("state.json").display(),
        ));

        let config = AppConfig::load(Some(&path), &ConfigOverrides::default()).unwrap();

        assert!(config.test_mode);
        assert_eq!(config.csv_file, Some(ctx.temp_dir.path().join("test_log.csv")));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_load_missing_explicit_file_fails(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("nope.yml");

        let err = AppConfig::load(Some(&path), &ConfigOverrides::default()).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(ref p) if p == &path));
        assert!(err.to_string().contains("nope.yml"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_load_empty_file_reports_missing_field(ctx: &mut ConfigTestContext) {
        let path = ctx.write_config("");

        let err = AppConfig::load(Some(&path), &ConfigOverrides::default()).unwrap_err();

        assert!(matches!(err, ConfigError::MissingField("work_time_minutes")));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_load_invalid_yaml_is_parse_error(ctx: &mut ConfigTestContext) {
        let path = ctx.write_config("work_time_minutes: [not, a, number\n");

        let err = AppConfig::load(Some(&path), &ConfigOverrides::default()).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_locate_prefers_explicit_path() {
        let explicit = Path::new("/somewhere/custom.yml");
        assert_eq!(AppConfig::locate(Some(explicit)), explicit.to_path_buf());
    }
}
