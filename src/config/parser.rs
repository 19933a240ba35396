use std::path::Path;
use crate::errors::OpenQuestError;
use crate::models::ComparableField;
use super::types::{ForkRules, OpenQuestConfig};
use super::schema::CONFIG_SCHEMA;
use tracing::{debug, warn};

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub async fn parse_config(path: &Path) -> Result<OpenQuestConfig, OpenQuestError> {
    if !path.exists() {
        return Err(OpenQuestError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(OpenQuestError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config = parse_config_str(&content)?;
    debug!(path = %path.display(), "Loaded configuration");
    Ok(config)
}

/// Load the config at `path`, or the defaults when no path is given.
pub async fn load_or_default(path: Option<&Path>) -> Result<OpenQuestConfig, OpenQuestError> {
    match path {
        Some(p) => parse_config(p).await,
        None => Ok(OpenQuestConfig::default()),
    }
}

pub fn parse_config_str(content: &str) -> Result<OpenQuestConfig, OpenQuestError> {
    // An empty document means "all defaults"
    if content.trim().is_empty() {
        return Ok(OpenQuestConfig::default());
    }

    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
    if yaml.is_null() {
        return Ok(OpenQuestConfig::default());
    }

    validate_schema(&yaml)?;

    let config: OpenQuestConfig = serde_yaml::from_value(yaml)?;

    if let Some(rules) = &config.fork {
        validate_rules(rules)?;
    }

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), OpenQuestError> {
    // Convert YAML value to JSON for schema validation
    let json_str = serde_json::to_string(yaml)
        .map_err(|e| OpenQuestError::Config(format!("Config conversion error: {}", e)))?;
    let json_value: serde_json::Value = serde_json::from_str(&json_str)
        .map_err(|e| OpenQuestError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| OpenQuestError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        let messages: Vec<String> = errors
            .map(|e| format!("{} at {}", e, e.instance_path))
            .collect();
        if !messages.is_empty() {
            for msg in &messages {
                warn!(validation_error = %msg, "Config schema violation");
            }
            return Err(OpenQuestError::Config(messages.join("; ")));
        }
    }

    Ok(())
}

/// Semantic checks the schema cannot express.
pub fn validate_rules(rules: &ForkRules) -> Result<(), OpenQuestError> {
    let weight_total: u32 = ComparableField::ALL
        .iter()
        .map(|&f| u32::from(rules.weights.get(f)))
        .sum();
    if weight_total != 100 {
        return Err(OpenQuestError::Config(format!(
            "Field weights must sum to 100, got {}",
            weight_total
        )));
    }

    for field in ComparableField::ALL {
        let threshold = rules.thresholds.get(field);
        if threshold > 100 {
            return Err(OpenQuestError::Config(format!(
                "{} threshold must be at most 100, got {}",
                field.label(),
                threshold
            )));
        }
    }

    let bands = rules.indicator;
    if bands.medium == 0 || bands.medium >= bands.high || bands.high > 100 {
        return Err(OpenQuestError::Config(format!(
            "Indicator bands must satisfy 0 < medium < high <= 100, got medium={} high={}",
            bands.medium, bands.high
        )));
    }

    Ok(())
}
