use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let mut lines = vec!["Effective configuration:".to_string()];
	match &config.data_path {
		Some(path) => lines.push(format!("  Data: {}", path.display())),
		None => lines.push("  Data: (built-in sample)".to_string()),
	}
	lines.push(format!("  Prompt title: {}", config.title));
	if !config.query.is_empty() {
		lines.push(format!("  Initial query: {}", config.query));
	}
	if config.statuses.is_empty() {
		lines.push("  Statuses: (all)".to_string());
	} else {
		let statuses: Vec<&str> = config.statuses.iter().map(|status| status.as_str()).collect();
		lines.push(format!("  Statuses: {}", statuses.join(", ")));
	}
	match config.sort {
		Some(sort) => lines.push(format!("  Sort: {} {}", sort.field, sort.direction)),
		None => lines.push("  Sort: (base order)".to_string()),
	}
	lines.push(format!("  Page size: {}", config.page_size));
	lines.push(format!("  Page: {}", config.page + 1));
	lines.push(format!("  Column preset: {}", config.preset.as_str()));
	let columns = config.columns();
	let labels: Vec<&str> = columns.labels().collect();
	lines.push(format!("  Headers: {}", labels.join(", ")));
	lines.push(format!("  Log level: {}", config.log_level));
	if let Some(file) = &config.log_file {
		lines.push(format!("  Log file: {}", file.display()));
	}
	lines
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use tabview::{ColumnPreset, Status};

	use super::*;

	#[test]
	fn summary_mentions_overrides() {
		let config = ResolvedConfig {
			data_path: Some(PathBuf::from("/tmp/people.json")),
			query: "dev".into(),
			statuses: vec![Status::Active, Status::Vacation],
			preset: ColumnPreset::Korean,
			headers: Some(vec!["성명".into()]),
			..ResolvedConfig::default()
		};

		let lines = summary_lines(&config);
		assert!(lines.contains(&"  Data: /tmp/people.json".to_string()));
		assert!(lines.contains(&"  Initial query: dev".to_string()));
		assert!(lines.contains(&"  Statuses: active, vacation".to_string()));
		assert!(lines.iter().any(|line| line.starts_with("  Headers: 성명, 직책")));
	}

	#[test]
	fn summary_prints_without_panic() {
		print_summary(&ResolvedConfig::default());
	}
}
