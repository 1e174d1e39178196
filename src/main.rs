use std::sync::Arc;

use hearth::config::Config;
use hearth::http::status::StatusTable;
use hearth::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Arc::new(Config::load()?);
    let statuses = Arc::new(StatusTable::default());

    tokio::select! {
        res = server::listener::run(cfg, statuses) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
