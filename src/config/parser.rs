use std::path::Path;
use crate::errors::AuditError;
use super::types::AuditConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::{debug, warn};

pub async fn parse_config(path: &Path) -> Result<AuditConfig, AuditError> {
    if !path.exists() {
        return Err(AuditError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(AuditError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;

    // An empty file is a valid config with every default
    if yaml.is_null() {
        debug!(path = %path.display(), "Empty config file, using defaults");
        return Ok(AuditConfig::default());
    }

    // JSON Schema validation
    validate_schema(&yaml)?;

    // Parse into typed config
    let config: AuditConfig = serde_yaml::from_value(yaml)?;

    validate_rates(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), AuditError> {
    // Convert YAML value to JSON for schema validation
    let json_str = serde_json::to_string(yaml)
        .map_err(|e| AuditError::Config(format!("Config conversion error: {}", e)))?;
    let json_value: serde_json::Value = serde_json::from_str(&json_str)
        .map_err(|e| AuditError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| AuditError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        // Advisory only; typed parsing and rate checks are authoritative
        for e in errors {
            warn!(validation_error = %format!("{} at {}", e, e.instance_path), "Config schema warning");
        }
    }

    Ok(())
}

/// Reduction rates are fractions of a baseline and must lie in `[0, 1]`.
fn validate_rates(config: &AuditConfig) -> Result<(), AuditError> {
    let rates = config.reduction_rates();
    for (name, value) in [
        ("maintenance_reduction", rates.maintenance),
        ("downtime_reduction", rates.downtime),
    ] {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(AuditError::Config(format!(
                "rates.{} must be between 0 and 1, got {}",
                name, value
            )));
        }
    }

    if rates.maintenance == 0.0 && rates.downtime == 0.0 {
        warn!("Both reduction rates are zero; every forecast will show no savings");
    }

    Ok(())
}
