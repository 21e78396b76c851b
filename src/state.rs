use crate::config::AppConfig;
use crate::gizi::client::{GiziClient, HttpGiziClient};
use std::sync::{atomic::AtomicBool, Arc};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub client: Arc<dyn GiziClient>,
    /// Single in-flight slot for `/check`; a second concurrent submit is refused.
    pub in_flight: Arc<AtomicBool>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let client = Arc::new(HttpGiziClient::new(config.gizi_endpoint.clone())) as Arc<dyn GiziClient>;
        tracing::info!(endpoint = %config.gizi_endpoint, "gizi client configured");
        Ok(Self::from_parts(config, client))
    }

    pub fn from_parts(config: Arc<AppConfig>, client: Arc<dyn GiziClient>) -> Self {
        Self {
            config,
            client,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }
}
