use crate::libs::config::{AppConfig, ConfigOverrides};
use crate::libs::formatter::format_timestamp;
use crate::libs::messages::Message;
use crate::libs::persistence::StatePersistence;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct StatusArgs {
    #[arg(long, short, help = "Path to the configuration file")]
    pub config: Option<PathBuf>,
}

pub fn cmd(args: StatusArgs) -> Result<()> {
    let config = AppConfig::load(args.config.as_deref(), &ConfigOverrides::default())
        .map_err(|e| msg_error_anyhow!(Message::ConfigInvalid(e.to_string())))?;

    let Some(saved) = StatePersistence::new().load(&config) else {
        msg_print!(Message::StatusNoSavedState);
        return Ok(());
    };

    let unknown = || "unknown".to_string();

    msg_print!(Message::StatusHeader, true);
    msg_print!(Message::StatusState(saved.current_state.unwrap_or_else(unknown)));
    msg_print!(Message::StatusSessionStart(
        saved.session_start_time.map(format_timestamp).unwrap_or_else(unknown)
    ));
    msg_print!(Message::StatusLastActivity(
        saved.last_activity_time.map(format_timestamp).unwrap_or_else(unknown)
    ));
    msg_print!(Message::StatusBreakReminder(saved.break_reminder_shown.unwrap_or(false)));
    msg_print!(Message::StatusStateFile(config.state_file.display().to_string()));

    Ok(())
}
