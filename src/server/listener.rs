use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{Instrument, info, info_span};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::http::status::StatusTable;

/// Accepts connections forever, serving each one on its own task.
///
/// Every connection still carries exactly one request and is closed after
/// it; the task per connection only keeps a slow client from holding up
/// the next accept.
pub async fn run(cfg: Arc<Config>, statuses: Arc<StatusTable>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(cfg.listen_addr()).await?;
    info!("Listening on {}", cfg.listen_addr());

    serve(listener, cfg, statuses).await
}

pub async fn serve(
    listener: TcpListener,
    cfg: Arc<Config>,
    statuses: Arc<StatusTable>,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let cfg = cfg.clone();
        let statuses = statuses.clone();
        tokio::spawn(
            async move {
                let mut conn = Connection::new(socket, cfg, statuses);
                if let Err(e) = conn.run().await {
                    tracing::error!("Connection error from {}: {}", peer, e);
                }
            }
            .instrument(info_span!("conn", %peer)),
        );
    }
}
