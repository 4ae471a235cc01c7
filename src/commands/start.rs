use crate::libs::config::{AppConfig, ConfigOverrides};
use crate::libs::daemon;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error_anyhow};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct StartArgs {
    #[arg(long, short, help = "Path to the configuration file")]
    config: Option<PathBuf>,

    #[arg(long, short, help = "Work time before a break reminder, in minutes")]
    work_time: Option<u64>,

    #[arg(long, short, help = "Inactivity that counts as a break, in minutes")]
    break_time: Option<u64>,

    #[arg(long, help = "Session log CSV file")]
    csv_file: Option<PathBuf>,

    #[arg(long, short, help = "Fast ticks, short run and a separate test_ log file")]
    test: bool,
}

impl StartArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            work_time_minutes: self.work_time,
            break_time_minutes: self.break_time,
            csv_file: self.csv_file.clone(),
            test_mode: self.test,
        }
    }
}

pub async fn cmd(args: StartArgs) -> Result<()> {
    // Configuration problems are fatal before anything is touched on disk
    let config = AppConfig::load(args.config.as_deref(), &args.overrides())
        .map_err(|e| msg_error_anyhow!(Message::ConfigInvalid(e.to_string())))?;
    msg_debug!(Message::ConfigLoaded(AppConfig::locate(args.config.as_deref()).display().to_string()));

    daemon::run_with_signal_handling(config).await
}
