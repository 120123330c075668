use crate::conf::error::ConfigError;
use crate::conf::types::ViewerConfig;
use crate::record::Level;
use std::fs;
use std::path::Path;

/// Upper bound for `display.cycles_per_update`.
pub const MAX_CYCLES_PER_UPDATE: u64 = 1_000;

pub fn load_config(path: &Path) -> Result<ViewerConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let config = parse_config(&raw).map_err(|e| match e {
        ParseOrInvalid::Parse(source) => ConfigError::parse(path, source),
        ParseOrInvalid::Invalid(err) => err,
    })?;
    Ok(config)
}

/// Loads `path` when given, otherwise the defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<ViewerConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(ViewerConfig::default()),
    }
}

enum ParseOrInvalid {
    Parse(hcl::Error),
    Invalid(ConfigError),
}

fn parse_config(raw: &str) -> Result<ViewerConfig, ParseOrInvalid> {
    let config: ViewerConfig = hcl::from_str(raw).map_err(ParseOrInvalid::Parse)?;
    validate(&config).map_err(ParseOrInvalid::Invalid)?;
    Ok(config)
}

pub fn validate(config: &ViewerConfig) -> Result<(), ConfigError> {
    config
        .min_level
        .parse::<Level>()
        .map_err(|e| ConfigError::invalid("min_level", e.to_string()))?;

    if config.queue_capacity == 0 {
        return Err(ConfigError::invalid("queue_capacity", "must be at least 1"));
    }

    if config.tick_interval_ms == 0 {
        return Err(ConfigError::invalid("tick_interval_ms", "must be at least 1"));
    }

    if config.progress_sentinel.trim().is_empty() {
        return Err(ConfigError::invalid("progress_sentinel", "must not be empty"));
    }

    if config.display.progress_width == 0 {
        return Err(ConfigError::invalid("display.progress_width", "must be at least 1"));
    }

    if !(1..=MAX_CYCLES_PER_UPDATE).contains(&config.display.cycles_per_update) {
        return Err(ConfigError::invalid(
            "display.cycles_per_update",
            format!("must be between 1 and {MAX_CYCLES_PER_UPDATE}"),
        ));
    }

    Ok(())
}
