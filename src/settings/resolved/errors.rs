use thiserror::Error;

use super::SettingSource;

/// A configuration value that could not be used, with where it came from.
#[derive(Debug, Error)]
#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
pub(crate) struct ConfigError {
    pub(crate) key: &'static str,
    pub(crate) value: String,
    pub(crate) origin: SettingSource,
    pub(crate) reason: String,
}

impl ConfigError {
    pub(crate) fn invalid(
        key: &'static str,
        value: impl Into<String>,
        origin: SettingSource,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            key,
            value: value.into(),
            origin,
            reason: reason.into(),
        }
    }

    /// The value is not one of a closed set of names.
    pub(crate) fn not_one_of(
        key: &'static str,
        value: impl Into<String>,
        origin: SettingSource,
        choices: &[&str],
    ) -> Self {
        Self::invalid(key, value, origin, format!("expected one of {}", choices.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_are_listed_in_the_message() {
        let err = ConfigError::not_one_of(
            "view.direction",
            "up",
            SettingSource::CliFlag("--direction"),
            &["asc", "desc"],
        );
        assert_eq!(
            err.to_string(),
            "invalid value for view.direction from CLI flag `--direction`: \
             expected one of asc, desc (value: up)"
        );
    }
}
