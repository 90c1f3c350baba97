//! Name sanitization for Argo resource names

use uuid::Uuid;

/// Rewrites `name` so Argo accepts it as a resource name.
///
/// Underscores and periods become hyphens; every other character is kept,
/// so the output length always matches the input. No further validation is
/// done: leading, trailing, and adjacent hyphens are all permitted. `None`
/// passes through unchanged.
pub fn argo_safe_name(name: Option<&str>) -> Option<String> {
    name.map(sanitize)
}

pub(crate) fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '_' | '.' => '-',
            other => other,
        })
        .collect()
}

/// Sanitized `base` with a short random suffix, for callers that need
/// collision-free step names within one manifest.
pub fn unique_step_name(base: &str) -> String {
    format!("{}-{}", sanitize(base), short_suffix())
}

fn short_suffix() -> String {
    let id = Uuid::new_v4().simple().to_string();
    id[..8].to_string()
}
