//! Host configuration read from the process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("invalid {key}: {value}")]
    InvalidEnv { key: &'static str, value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where the SSR host listens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub bind_addr: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, bind_addr: DEFAULT_BIND_ADDR.to_owned() }
    }
}

impl HostConfig {
    /// Build from `PORT` and `BIND_ADDR`, falling back to `0.0.0.0:3000`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::InvalidEnv`] if `PORT` is set but not a valid port.
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_env_keys("PORT", "BIND_ADDR")
    }

    fn from_env_keys(port_key: &'static str, addr_key: &'static str) -> Result<Self, HostError> {
        let port = env_parse_u16(port_key)?.unwrap_or(DEFAULT_PORT);
        let bind_addr = std::env::var(addr_key)
            .ok()
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        Ok(Self { port, bind_addr })
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn env_parse_u16(key: &'static str) -> Result<Option<u16>, HostError> {
    let Ok(raw) = std::env::var(key) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u16>()
        .map(Some)
        .map_err(|_| HostError::InvalidEnv { key, value: raw })
}
