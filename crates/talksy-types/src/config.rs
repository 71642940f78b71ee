use serde::{Deserialize, Serialize};

use crate::{Result, TalksyError};

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 3000;

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TalksyConfig {
    pub backend: BackendConfig,
}

impl TalksyConfig {
    pub fn validate(&self) -> Result<()> {
        self.backend.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Origin of the voice-processing backend, without a trailing path
    pub api_base: String,
    /// Liveness probe timeout
    pub probe_timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            probe_timeout_ms: DEFAULT_PROBE_TIMEOUT_MS,
        }
    }
}

impl BackendConfig {
    pub fn validate(&self) -> Result<()> {
        let base = self.api_base.trim();
        if base.is_empty() {
            return Err(TalksyError::Config("backend URL is empty".to_string()));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(TalksyError::Config(format!(
                "backend URL must start with http:// or https://: {}",
                base
            )));
        }
        if self.probe_timeout_ms == 0 {
            return Err(TalksyError::Config(
                "probe timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Base URL with surrounding whitespace and trailing slashes removed
    pub fn normalized_base(&self) -> String {
        self.api_base.trim().trim_end_matches('/').to_string()
    }
}
