use std::collections::HashSet;

/// Remove empty headers and trim whitespace from the provided values.
pub(super) fn sanitize_headers(headers: Vec<String>) -> Vec<String> {
    headers
        .into_iter()
        .map(|header| header.trim().to_string())
        .filter(|header| !header.is_empty())
        .collect()
}

/// Trim, lowercase and deduplicate list entries, keeping first occurrences.
pub(super) fn sanitize_names(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut cleaned = Vec::new();
    for value in values {
        let normalized = value.trim().to_lowercase();
        if normalized.is_empty() {
            continue;
        }
        if seen.insert(normalized.clone()) {
            cleaned.push(normalized);
        }
    }
    cleaned
}
