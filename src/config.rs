use serde::Deserialize;

pub const DEFAULT_GIZI_ENDPOINT: &str = "http://127.0.0.1:5000/check_gizi";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub gizi_endpoint: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var("APP_PORT") {
            Ok(v) => v.parse::<u16>()?,
            Err(_) => 8080,
        };
        Ok(Self {
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port,
            gizi_endpoint: std::env::var("GIZI_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_GIZI_ENDPOINT.into()),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            gizi_endpoint: DEFAULT_GIZI_ENDPOINT.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_endpoint() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.gizi_endpoint, "http://127.0.0.1:5000/check_gizi");
        assert_eq!(cfg.port, 8080);
    }
}
