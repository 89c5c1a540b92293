//! Configuration validation rules.

use super::schema::Config;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["text", "json"];

/// Validate configuration and return aggregated validation errors.
pub fn validate_config(config: &Config) -> crate::Result<()> {
    let mut errors = Vec::new();

    let level = config.logging.level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.level must be one of {}",
            LOG_LEVELS.join(", ")
        ));
    }
    let format = config.logging.format.trim().to_ascii_lowercase();
    if !LOG_FORMATS.contains(&format.as_str()) {
        errors.push("logging.format must be text or json".to_string());
    }
    if config.logging.dir.trim().is_empty() {
        errors.push("logging.dir must not be empty".to_string());
    }
    for (module, level) in &config.logging.overrides {
        if module.trim().is_empty() {
            errors.push("logging.overrides keys must not be empty".to_string());
        }
        if !LOG_LEVELS.contains(&level.trim().to_ascii_lowercase().as_str()) {
            errors.push(format!("logging.overrides.{} has invalid level", module));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(crate::Error::Validation(errors.join("; ")))
    }
}
