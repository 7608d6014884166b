//! Shared components for CLI commands
//!
//! Logging setup and the common fetch-then-load step used by both commands.

use tracing::{debug, info};

use crate::Result;
use crate::app::services::dataset::Session;
use crate::app::services::sheet_client::SheetClient;
use crate::config::Config;

/// Set up structured logging for CLI commands
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("inventory_lookup={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Validate the configuration, fetch the sheet and return a loaded session
pub async fn fetch_session(config: Config) -> Result<Session> {
    config.validate()?;

    let page_size = config.rows_per_page;
    let client = SheetClient::new(config);
    let mut session = Session::new(page_size);
    session.refresh(&client).await?;

    info!(
        "Session ready: {} records, last updated {}",
        session.dataset().len(),
        session.last_updated().unwrap_or("unknown")
    );

    Ok(session)
}
