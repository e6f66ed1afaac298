use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use hepa_features::derive::LogPolicy;
use hepa_scorer::loader::DEFAULT_MODEL_DIR;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Runtime configuration, read from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub model_dir: PathBuf,
    /// The HTTP service guards its logs against non-positive inputs unless
    /// told otherwise.
    pub log_policy: LogPolicy,
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bind_addr = lookup("HEPA_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .map_err(|e| eyre::eyre!("invalid HEPA_BIND_ADDR '{bind_addr}': {e}"))?;

        let model_dir = lookup("HEPA_MODEL_DIR").unwrap_or_else(|| DEFAULT_MODEL_DIR.to_string());

        let log_policy = match lookup("HEPA_LOG_POLICY") {
            Some(raw) => raw
                .parse::<LogPolicy>()
                .map_err(|e| eyre::eyre!("invalid HEPA_LOG_POLICY: {e}"))?,
            None => LogPolicy::ZeroOnNonPositive,
        };

        Ok(Self {
            bind_addr,
            model_dir: PathBuf::from(model_dir),
            log_policy,
        })
    }
}
