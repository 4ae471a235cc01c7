#[cfg(test)]
mod tests {
    use standup::libs::config::AppConfig;
    use standup::libs::session_log::{should_log_session, SessionLogger};
    use standup::libs::state::ActivityType;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    const HEADER: &str = "Activity Type;Start Time;End Time;Duration (HH:MM:SS)";
    const T0: f64 = 1_700_000_000.0;

    struct SessionLogContext {
        _temp_dir: TempDir,
        csv_path: PathBuf,
        config: AppConfig,
    }

    impl TestContext for SessionLogContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let csv_path = temp_dir.path().join("sessions.csv");
            let config = AppConfig {
                work_duration_sec: 1800,
                break_duration_sec: 300,
                activation_threshold_sec: 10,
                csv_file: Some(csv_path.clone()),
                state_file: temp_dir.path().join("state.json"),
                test_mode: false,
                break_messages: vec!["Time for a break!".to_string()],
            };
            SessionLogContext {
                _temp_dir: temp_dir,
                csv_path,
                config,
            }
        }
    }

    impl SessionLogContext {
        fn lines(&self) -> Vec<String> {
            fs::read_to_string(&self.csv_path)
                .unwrap()
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    #[test]
    fn test_minimum_duration_is_exclusive() {
        assert!(!should_log_session(0.0));
        assert!(!should_log_session(1.0));
        assert!(should_log_session(1.001));
        assert!(!should_log_session(-30.0));
    }

    #[test_context(SessionLogContext)]
    #[test]
    fn test_header_written_once(ctx: &mut SessionLogContext) {
        let logger = SessionLogger::new();
        logger.log(&ctx.config, ActivityType::Work, T0, T0 + 1500.0, 1500.0);
        logger.log(&ctx.config, ActivityType::Break, T0 + 1500.0, T0 + 1800.0, 300.0);

        let lines = ctx.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert!(lines[1].starts_with("Work;"));
        assert!(lines[1].ends_with(";0:25:00"));
        assert!(lines[2].starts_with("Break;"));
        assert!(lines[2].ends_with(";0:05:00"));
    }

    #[test_context(SessionLogContext)]
    #[test]
    fn test_existing_log_is_appended_without_header(ctx: &mut SessionLogContext) {
        SessionLogger::new().log(&ctx.config, ActivityType::Work, T0, T0 + 60.0, 60.0);
        // A second process run gets a fresh logger.
        SessionLogger::new().log(&ctx.config, ActivityType::Work, T0 + 120.0, T0 + 180.0, 60.0);

        let lines = ctx.lines();
        assert_eq!(lines.iter().filter(|l| l.as_str() == HEADER).count(), 1);
        assert_eq!(lines.len(), 3);
    }

    #[test_context(SessionLogContext)]
    #[test]
    fn test_empty_file_gets_header(ctx: &mut SessionLogContext) {
        fs::write(&ctx.csv_path, "").unwrap();

        SessionLogger::new().log(&ctx.config, ActivityType::Break, T0, T0 + 90.0, 90.0);

        let lines = ctx.lines();
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines.len(), 2);
    }

    #[test_context(SessionLogContext)]
    #[test]
    fn test_row_has_local_iso_timestamps(ctx: &mut SessionLogContext) {
        SessionLogger::new().log(&ctx.config, ActivityType::Work, T0, T0 + 90.0, 90.0);

        let lines = ctx.lines();
        let fields: Vec<&str> = lines[1].split(';').collect();
        assert_eq!(fields.len(), 4);

        let start = chrono::DateTime::parse_from_rfc3339(fields[1]).unwrap();
        let end = chrono::DateTime::parse_from_rfc3339(fields[2]).unwrap();
        assert_eq!(start.timestamp(), T0 as i64);
        assert_eq!(end.timestamp(), T0 as i64 + 90);
        assert_eq!(fields[3], "0:01:30");
    }

    #[test_context(SessionLogContext)]
    #[test]
    fn test_duration_over_a_day_does_not_wrap(ctx: &mut SessionLogContext) {
        SessionLogger::new().log(&ctx.config, ActivityType::Break, T0, T0 + 90_000.0, 90_000.0);

        assert!(ctx.lines()[1].ends_with(";25:00:00"));
    }

    #[test_context(SessionLogContext)]
    #[test]
    fn test_short_sessions_are_skipped(ctx: &mut SessionLogContext) {
        SessionLogger::new().log(&ctx.config, ActivityType::Work, T0, T0 + 1.0, 1.0);

        assert!(!ctx.csv_path.exists());
    }

    #[test_context(SessionLogContext)]
    #[test]
    fn test_test_mode_truncates_once_per_run(ctx: &mut SessionLogContext) {
        fs::write(&ctx.csv_path, format!("{}\nWork;old;old;9:00:00\n", HEADER)).unwrap();
        ctx.config.test_mode = true;

        let logger = SessionLogger::new();
        logger.log(&ctx.config, ActivityType::Work, T0, T0 + 5.0, 5.0);
        logger.clone().log(&ctx.config, ActivityType::Break, T0 + 5.0, T0 + 10.0, 5.0);

        let lines = ctx.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert!(lines.iter().all(|l| !l.contains("old")));
    }

    #[test_context(SessionLogContext)]
    #[test]
    fn test_unwritable_path_is_not_fatal(ctx: &mut SessionLogContext) {
        ctx.config.csv_file = Some(ctx.csv_path.join("missing-dir").join("sessions.csv"));

        // Errors are reported, never propagated.
        SessionLogger::new().log(&ctx.config, ActivityType::Work, T0, T0 + 60.0, 60.0);
    }
}
