#[cfg(test)]
mod tests {
    use standup::commands::{reset, status};
    use standup::libs::config::{AppConfig, ConfigOverrides};
    use standup::libs::persistence::StatePersistence;
    use standup::libs::state::{AppState, State};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    const T0: f64 = 1_700_000_000.0;

    struct CommandTestContext {
        temp_dir: TempDir,
        config_path: PathBuf,
    }

    impl TestContext for CommandTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let data = temp_dir.path().join("data");
            let config_path = temp_dir.path().join("standup_config.yml");
            let yaml = format!(
                "work_time_minutes: 30\nbreak_time_minutes: 3\ncsv_file: {}\nstate_file: {}\n",
                data.join("sessions.csv").display(),
                data.join("last_state.json").display(),
            );
            fs::write(&config_path, yaml).unwrap();

            CommandTestContext { temp_dir, config_path }
        }
    }

    impl CommandTestContext {
        fn config(&self) -> AppConfig {
            AppConfig::load(Some(&self.config_path), &ConfigOverrides::default()).unwrap()
        }

        fn status(&self) -> anyhow::Result<()> {
            status::cmd(status::StatusArgs {
                config: Some(self.config_path.clone()),
            })
        }

        fn reset(&self) -> anyhow::Result<()> {
            reset::cmd(reset::ResetArgs {
                config: Some(self.config_path.clone()),
            })
        }
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_status_then_reset_round_trip(ctx: &mut CommandTestContext) {
        let config = ctx.config();
        let state = AppState::initial(T0, 0.0).begin_session(State::Active, T0, 0.0);
        StatePersistence::new().save(&config, &state, T0 + 42.0);
        let session_log = config.csv_file.clone().unwrap();
        fs::write(&session_log, "activity_type;start_time;end_time;duration\n").unwrap();

        assert!(ctx.status().is_ok());
        assert!(config.state_file.exists());

        assert!(ctx.reset().is_ok());
        assert!(!config.state_file.exists());
        assert!(StatePersistence::new().load(&config).is_none());
        // Reset forgets the runtime state only.
        assert!(session_log.exists());

        assert!(ctx.status().is_ok());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_reset_without_saved_state_succeeds(ctx: &mut CommandTestContext) {
        assert!(ctx.reset().is_ok());
        assert!(!ctx.config().state_file.exists());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_status_with_corrupt_state_file_succeeds(ctx: &mut CommandTestContext) {
        let config = ctx.config();
        fs::write(&config.state_file, "{not json").unwrap();

        assert!(ctx.status().is_ok());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_commands_fail_on_missing_config(ctx: &mut CommandTestContext) {
        let missing = ctx.temp_dir.path().join("absent.yml");

        let err = status::cmd(status::StatusArgs {
            config: Some(missing.clone()),
        })
        .unwrap_err();
        assert!(err.to_string().contains("not found"));

        assert!(reset::cmd(reset::ResetArgs { config: Some(missing) }).is_err());
    }
}
