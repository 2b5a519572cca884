/// Lower-case and trim a list of skill tokens for comparison
#[inline]
pub fn normalize_for_matching<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens
        .iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .collect()
}

/// Overlap score between two normalised token lists
///
/// Counts every pair (v, r) where one token contains the other. Equal tokens
/// count, and an empty token matches anything. Pairs are not deduplicated, so
/// one volunteer token can contribute once per role token it matches.
#[inline]
pub fn overlap_score<V: AsRef<str>, R: AsRef<str>>(volunteer: &[V], required: &[R]) -> u32 {
    let mut score = 0;
    for v in volunteer {
        let v = v.as_ref();
        for r in required {
            let r = r.as_ref();
            if v.contains(r) || r.contains(v) {
                score += 1;
            }
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert_eq!(overlap_score(&["excel"], &["excel", "accuracy"]), 1);
    }

    #[test]
    fn test_substring_either_direction() {
        assert_eq!(overlap_score(&["data"], &["data entry"]), 1);
        assert_eq!(overlap_score(&["data entry"], &["data"]), 1);
    }

    #[test]
    fn test_no_dedup() {
        // "media" is inside both role tokens
        assert_eq!(overlap_score(&["media"], &["social media", "media buying"]), 2);
        assert_eq!(overlap_score(&["social media", "media"], &["media"]), 2);
    }

    #[test]
    fn test_empty_token_matches_everything() {
        assert_eq!(overlap_score(&[""], &["logistics", "marketing"]), 2);
        assert_eq!(overlap_score(&["excel"], &[""]), 1);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_for_matching(&[" Excel ", "DATA"]), vec!["excel", "data"]);
    }
}
