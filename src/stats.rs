// Periodic app-stats logger (active WS clients), stopped via oneshot on
// shutdown.

use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use tokio::time::{Duration, interval};

pub struct StatsDeps {
    pub ws_connections: Arc<AtomicUsize>,
    pub shutdown_rx: tokio::sync::oneshot::Receiver<()>,
}

pub fn spawn(deps: StatsDeps, stats_log_interval_secs: u64) -> tokio::task::JoinHandle<()> {
    let StatsDeps {
        ws_connections,
        mut shutdown_rx,
    } = deps;

    tokio::spawn(async move {
        let mut stats_log_tick = interval(Duration::from_secs(stats_log_interval_secs));
        stats_log_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = stats_log_tick.tick() => {
                    tracing::info!(
                        ws_clients = ws_connections.load(std::sync::atomic::Ordering::Relaxed),
                        "app stats"
                    );
                }
                _ = &mut shutdown_rx => {
                    tracing::debug!("Stats logger shutting down");
                    break;
                }
            }
        }
    })
}
