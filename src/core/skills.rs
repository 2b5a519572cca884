use std::collections::BTreeSet;

/// Split a comma-separated skill string into trimmed tokens
///
/// Case is preserved and empty tokens are kept, so `""` yields `[""]`.
/// This is the path the matcher uses.
#[inline]
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_string()).collect()
}

/// Same as [`split_skills`] with empty tokens dropped
///
/// This is the path the analytics use.
#[inline]
pub fn split_skills_filtered(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Deduplicated, sorted, non-empty tokens of one skill string
pub fn distinct_skills(raw: &str) -> BTreeSet<String> {
    split_skills_filtered(raw).into_iter().collect()
}

/// Storage form of a list of selected skills
pub fn join_skills<S: AsRef<str>>(selected: &[S]) -> String {
    selected
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}
