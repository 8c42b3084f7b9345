use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_METRICS_BIND: &str = "0.0.0.0:9090";

// API server configuration sourced from environment variables.
#[derive(Debug, Clone)]
pub struct ApiServerConfig {
    pub bind_addr: SocketAddr,
    pub metrics_bind: SocketAddr,
    pub seed_demo_sessions: bool,
}

#[derive(Debug, Deserialize)]
struct ApiServerConfigOverride {
    bind_addr: Option<String>,
    metrics_bind: Option<String>,
    seed_demo_sessions: Option<bool>,
}

impl ApiServerConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = std::env::var("LARDER_API_BIND")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .with_context(|| "parse LARDER_API_BIND")?;
        let metrics_bind = std::env::var("LARDER_METRICS_BIND")
            .unwrap_or_else(|_| DEFAULT_METRICS_BIND.to_string())
            .parse()
            .with_context(|| "parse LARDER_METRICS_BIND")?;
        let seed_demo_sessions = match std::env::var("LARDER_SEED_DEMO_SESSIONS") {
            Ok(value) => parse_bool(&value).with_context(|| "parse LARDER_SEED_DEMO_SESSIONS")?,
            Err(_) => false,
        };
        Ok(Self {
            bind_addr,
            metrics_bind,
            seed_demo_sessions,
        })
    }

    pub fn from_env_or_yaml() -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Ok(path) = std::env::var("LARDER_API_CONFIG") {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("read LARDER_API_CONFIG: {path}"))?;
            config.apply_yaml(&contents)?;
        }
        Ok(config)
    }

    fn apply_yaml(&mut self, contents: &str) -> Result<()> {
        let override_cfg: ApiServerConfigOverride =
            serde_yaml::from_str(contents).with_context(|| "parse api server config yaml")?;
        if let Some(value) = override_cfg.bind_addr {
            self.bind_addr = value.parse().with_context(|| "parse bind_addr")?;
        }
        if let Some(value) = override_cfg.metrics_bind {
            self.metrics_bind = value.parse().with_context(|| "parse metrics_bind")?;
        }
        if let Some(value) = override_cfg.seed_demo_sessions {
            self.seed_demo_sessions = value;
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("invalid boolean: {other}"),
    }
}
