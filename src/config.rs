use serde::Deserialize;

/// Runtime configuration, loaded from the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
        };

        tracing::debug!("Server Host: {}", config.host);
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_env_unset() {
        // Env vars are process-global; only assert the defaults when the
        // variables are genuinely absent.
        if std::env::var("PORT").is_err() && std::env::var("HOST").is_err() {
            let config = Config::from_env().unwrap();
            assert_eq!(config.port, 8000);
            assert_eq!(config.host, "0.0.0.0");
        }
    }
}
