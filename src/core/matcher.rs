use crate::core::scoring::{normalize_for_matching, overlap_score};
use crate::models::{Role, ScoredRole};

/// Number of roles suggested per volunteer
pub const DEFAULT_TOP_ROLES: usize = 3;

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredRole>,
    pub total_roles: usize,
}

/// Ranks roles for a volunteer by skill overlap
///
/// # Pipeline Stages
/// 1. Lower-case and trim volunteer and role tokens
/// 2. Score every role by substring containment
/// 3. Stable sort by score, descending
/// 4. Keep the top `top_n`
#[derive(Debug, Clone)]
pub struct Matcher {
    top_n: usize,
}

impl Matcher {
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Score `roles` against a volunteer's unfiltered skill tokens
    ///
    /// Roles keep their input order on equal scores.
    pub fn find_matches<S: AsRef<str>>(&self, volunteer_skills: &[S], roles: &[Role]) -> MatchResult {
        let volunteer = normalize_for_matching(volunteer_skills);

        let mut matches: Vec<ScoredRole> = roles
            .iter()
            .map(|role| {
                let required = normalize_for_matching(&role.required_tokens());
                ScoredRole {
                    role_name: role.name.clone(),
                    score: overlap_score(&volunteer, &required),
                }
            })
            .collect();

        // sort_by is stable
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(self.top_n);

        MatchResult {
            matches,
            total_roles: roles.len(),
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_ROLES)
    }
}

/// Top three roles for a volunteer's skill tokens
pub fn match_volunteer_to_roles<S: AsRef<str>>(volunteer_skills: &[S], roles: &[Role]) -> Vec<ScoredRole> {
    Matcher::default().find_matches(volunteer_skills, roles).matches
}
