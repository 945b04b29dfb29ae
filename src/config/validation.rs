//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (failover names existing providers)
//! - Validate value ranges (interval > 0, thresholds >= 1, rates in [0, 1])
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: NavConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use thiserror::Error;
use crate::config::schema::NavConfig;
use crate::routing::Location;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("probe.success_rate must be within [0, 1]")]
    SuccessRateOutOfRange,

    #[error("duplicate provider name '{0}'")]
    DuplicateProvider(String),

    #[error("{field} references unknown provider '{name}'")]
    UnknownProvider { field: &'static str, name: String },

    #[error("failover.primary and failover.fallback are both '{0}'")]
    SameProvider(String),

    #[error("{field} is not a valid location")]
    InvalidLocation { field: &'static str },
}

pub fn validate_config(config: &NavConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.monitor.interval_ms == 0 {
        errors.push(ValidationError::Zero { field: "monitor.interval_ms" });
    }
    if config.monitor.missed_threshold == 0 {
        errors.push(ValidationError::Zero { field: "monitor.missed_threshold" });
    }
    if config.monitor.restore_threshold == 0 {
        errors.push(ValidationError::Zero { field: "monitor.restore_threshold" });
    }
    if !(0.0..=1.0).contains(&config.probe.success_rate) {
        errors.push(ValidationError::SuccessRateOutOfRange);
    }

    let mut names = HashSet::new();
    for provider in &config.providers.source {
        if !names.insert(provider.name.as_str()) {
            errors.push(ValidationError::DuplicateProvider(provider.name.clone()));
        }
    }

    let failover = &config.failover;
    for (field, name) in [("failover.primary", &failover.primary), ("failover.fallback", &failover.fallback)] {
        if !names.contains(name.as_str()) {
            errors.push(ValidationError::UnknownProvider { field, name: name.clone() });
        }
    }
    if failover.primary == failover.fallback {
        errors.push(ValidationError::SameProvider(failover.primary.clone()));
    }

    check_location(&mut errors, "navigation.origin", config.navigation.origin);
    check_location(&mut errors, "navigation.destination", config.navigation.destination);
    if config.navigation.update_interval_ms == 0 {
        errors.push(ValidationError::Zero { field: "navigation.update_interval_ms" });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_location(errors: &mut Vec<ValidationError>, field: &'static str, location: Location) {
    if !location.is_valid() {
        errors.push(ValidationError::InvalidLocation { field });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&NavConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = NavConfig::default();
        config.monitor.missed_threshold = 0;
        config.probe.success_rate = 1.5;
        config.failover.fallback = "satellite".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::Zero { field: "monitor.missed_threshold" }));
        assert!(errors.contains(&ValidationError::SuccessRateOutOfRange));
        assert!(errors.contains(&ValidationError::UnknownProvider {
            field: "failover.fallback",
            name: "satellite".into(),
        }));
    }

    #[test]
    fn test_same_primary_and_fallback() {
        let mut config = NavConfig::default();
        config.failover.fallback = config.failover.primary.clone();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::SameProvider("cellular".into())]);
    }

    #[test]
    fn test_duplicate_provider() {
        let mut config = NavConfig::default();
        let dup = config.providers.source[0].clone();
        config.providers.source.push(dup);

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::DuplicateProvider("cellular".into())]);
    }
}
