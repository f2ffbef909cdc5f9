use url::Url;

use crate::domain::{DomainError, LanguageMode, ServiceIdentifier};

/// Placeholder replaced by the service key in n-gram base URL templates.
pub const SERVICE_PLACEHOLDER: &str = "{service}";

/// The n-gram service routes on `/`, so slashes in a query travel as `@`.
pub fn escape_slashes(text: &str) -> String {
    text.replace('/', "@")
}

/// Path segment of the n-gram query endpoint for a service and query language.
pub fn query_path(service: ServiceIdentifier, mode: LanguageMode) -> &'static str {
    match (service, mode) {
        (ServiceIdentifier::X, LanguageMode::Zh) => "equery",
        _ => "query",
    }
}

/// Substitute the service key into a base URL template.
pub fn render_template(template: &str, service: ServiceIdentifier) -> String {
    template.replace(SERVICE_PLACEHOLDER, service.as_str())
}

pub fn parse_base(base: &str) -> Result<Url, DomainError> {
    let url = Url::parse(base)
        .map_err(|e| DomainError::invalid_input(format!("invalid base URL {base}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(DomainError::invalid_input(format!(
            "base URL cannot carry a path: {base}"
        )));
    }
    Ok(url)
}

/// Append `segments` to `base`, percent-encoding each one individually.
///
/// A `/` inside a segment is encoded, never treated as a separator. An empty
/// final segment yields a trailing slash.
///
/// A segment of exactly `.` or `..` cannot be carried: URL parsing folds it
/// (and its `%2E` spellings) into the path structure, so the request would
/// reach the parent route without the input. Such segments are rejected.
pub fn join_segments(base: &Url, segments: &[&str]) -> Result<Url, DomainError> {
    if let Some(dots) = segments.iter().find(|s| is_dot_segment(s)) {
        return Err(DomainError::invalid_input(format!(
            "path segment {dots:?} cannot be sent to {base}"
        )));
    }

    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| DomainError::parse(format!("base URL cannot carry a path: {base}")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}
