pub mod reset;
pub mod start;
pub mod status;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Watch activity, remind about breaks and log sessions")]
    Start(start::StartArgs),
    #[command(about = "Show the saved runtime state")]
    Status(status::StatusArgs),
    #[command(about = "Delete the saved runtime state")]
    Reset(reset::ResetArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Start(args) => start::cmd(args).await,
            Commands::Status(args) => status::cmd(args),
            Commands::Reset(args) => reset::cmd(args),
        }
    }
}
