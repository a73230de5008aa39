use serde::{Deserialize, Serialize};
use crate::impact::ReductionRates;
use crate::models::industry::Industry;

pub const DEFAULT_CACHE_ENTRIES: usize = 1024;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AuditConfig {
    pub rates: Option<RatesConfig>,
    pub server: Option<ServerConfig>,
    pub cache: Option<CacheConfig>,
    pub presentation: Option<PresentationConfig>,
}

/// Overrides for the two reduction benchmarks, as fractions in `[0, 1]`.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct RatesConfig {
    pub maintenance_reduction: Option<f64>,
    pub downtime_reduction: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CacheConfig {
    pub enabled: Option<bool>,
    pub max_entries: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct PresentationConfig {
    pub default_industry: Option<Industry>,
    /// Show the staged progress display before printing results.
    pub simulate_latency: Option<bool>,
}

impl AuditConfig {
    pub fn reduction_rates(&self) -> ReductionRates {
        let defaults = ReductionRates::default();
        match &self.rates {
            Some(r) => ReductionRates {
                maintenance: r.maintenance_reduction.unwrap_or(defaults.maintenance),
                downtime: r.downtime_reduction.unwrap_or(defaults.downtime),
            },
            None => defaults,
        }
    }

    /// Zero when caching is disabled.
    pub fn cache_capacity(&self) -> usize {
        match &self.cache {
            Some(c) if c.enabled == Some(false) => 0,
            Some(c) => c.max_entries.unwrap_or(DEFAULT_CACHE_ENTRIES),
            None => DEFAULT_CACHE_ENTRIES,
        }
    }

    pub fn default_industry(&self) -> Industry {
        self.presentation
            .as_ref()
            .and_then(|p| p.default_industry)
            .unwrap_or_default()
    }

    pub fn simulate_latency(&self) -> bool {
        self.presentation
            .as_ref()
            .and_then(|p| p.simulate_latency)
            .unwrap_or(true)
    }

    pub fn server_host(&self) -> Option<&str> {
        self.server.as_ref()?.host.as_deref()
    }

    pub fn server_port(&self) -> Option<u16> {
        self.server.as_ref()?.port
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_config_default() {
        let config = AuditConfig::default();
        assert!(config.rates.is_none());
        assert_eq!(config.reduction_rates(), ReductionRates::default());
        assert_eq!(config.cache_capacity(), DEFAULT_CACHE_ENTRIES);
        assert_eq!(config.default_industry(), Industry::Manufacturing);
        assert!(config.simulate_latency());
        assert!(config.server_host().is_none());
    }

    #[test]
    fn test_partial_rate_override() {
        let config = AuditConfig {
            rates: Some(RatesConfig {
                maintenance_reduction: Some(0.5),
                downtime_reduction: None,
            }),
            ..Default::default()
        };
        let rates = config.reduction_rates();
        assert_eq!(rates.maintenance, 0.5);
        assert_eq!(rates.downtime, 0.70);
    }

    #[test]
    fn test_disabled_cache_has_zero_capacity() {
        let config = AuditConfig {
            cache: Some(CacheConfig { enabled: Some(false), max_entries: Some(64) }),
            ..Default::default()
        };
        assert_eq!(config.cache_capacity(), 0);
    }

    #[test]
    fn test_yaml_deserialize() {
        let yaml = "rates:\n  maintenance_reduction: 0.6\nserver:\n  port: 9000\npresentation:\n  default_industry: defense\n  simulate_latency: false\n";
        let config: AuditConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.reduction_rates().maintenance, 0.6);
        assert_eq!(config.server_port(), Some(9000));
        assert_eq!(config.default_industry(), Industry::Defense);
        assert!(!config.simulate_latency());
    }
}
