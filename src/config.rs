use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub publishing: PublishingConfig,
    pub retention: RetentionConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PublishingConfig {
    /// Tick period for the combined /ws/telemetry feed.
    pub telemetry_interval_ms: u64,
    /// Tick period for the trend-only /ws/trend feed.
    pub trend_interval_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RetentionConfig {
    /// Max alert events kept client-side; oldest evicted beyond the cap.
    #[serde(default = "default_alert_history_cap")]
    pub alert_history_cap: usize,
    /// Max points kept per (device, metric) trend window.
    #[serde(default = "default_trend_window_capacity")]
    pub trend_window_capacity: usize,
}

fn default_alert_history_cap() -> usize {
    100
}

fn default_trend_window_capacity() -> usize {
    50
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoringConfig {
    /// How often to log app stats (active WS clients) at INFO level.
    pub stats_log_interval_secs: u64,
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            self.publishing.telemetry_interval_ms > 0,
            "publishing.telemetry_interval_ms must be > 0, got {}",
            self.publishing.telemetry_interval_ms
        );
        anyhow::ensure!(
            self.publishing.trend_interval_ms > 0,
            "publishing.trend_interval_ms must be > 0, got {}",
            self.publishing.trend_interval_ms
        );
        anyhow::ensure!(
            self.retention.alert_history_cap > 0,
            "retention.alert_history_cap must be > 0, got {}",
            self.retention.alert_history_cap
        );
        anyhow::ensure!(
            self.retention.trend_window_capacity > 0,
            "retention.trend_window_capacity must be > 0, got {}",
            self.retention.trend_window_capacity
        );
        anyhow::ensure!(
            self.monitoring.stats_log_interval_secs > 0,
            "monitoring.stats_log_interval_secs must be > 0, got {}",
            self.monitoring.stats_log_interval_secs
        );
        Ok(())
    }
}
