use standup::commands::Cli;
use standup::libs::messages::macros::is_debug_mode;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if is_debug_mode() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = fmt().with_env_filter(filter).try_init();
    }

    Cli::menu().await
}
