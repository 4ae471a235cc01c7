use crate::libs::config::{AppConfig, ConfigOverrides};
use crate::libs::messages::Message;
use crate::libs::persistence::StatePersistence;
use crate::{msg_error_anyhow, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ResetArgs {
    #[arg(long, short, help = "Path to the configuration file")]
    pub config: Option<PathBuf>,
}

/// Forgets the saved session so the next start begins fresh. The session log is kept.
pub fn cmd(args: ResetArgs) -> Result<()> {
    let config = AppConfig::load(args.config.as_deref(), &ConfigOverrides::default())
        .map_err(|e| msg_error_anyhow!(Message::ConfigInvalid(e.to_string())))?;

    if StatePersistence::new().clear(&config) {
        msg_success!(Message::StateReset);
    }

    Ok(())
}
