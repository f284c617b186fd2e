// Copyright 2025 Alexandre D. Díaz

/// Normalizes a route prefix to `/a/b` form.
///
/// The root collapses to an empty string so that `format!("{base}/asset")`
/// never yields a protocol-relative `//asset`.
pub fn normalize(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }
    format!("/{}", trimmed)
}

pub fn join(base: &str, segment: &str) -> String {
    format!("{}{}", normalize(base), normalize(segment))
}
