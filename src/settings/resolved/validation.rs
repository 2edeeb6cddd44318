use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.page_size == 0 {
		return Err(ConfigError::invalid(
			"view.page_size",
			config.page_size.to_string(),
			sources.source_for("view.page_size"),
			"must be greater than zero",
		));
	}

	if let Some(sort) = config.sort
		&& !config.columns().is_sortable(sort.field)
	{
		return Err(ConfigError::invalid(
			"view.sort",
			sort.field.key(),
			sources.source_for("view.sort"),
			"column is not sortable",
		));
	}

	Ok(())
}
