use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;

use crate::core::skills::{distinct_skills, split_skills_filtered};
use crate::models::{CooccurrenceMatrix, SkillPairCount, Volunteer};

/// Everything the analytics views need, computed in one pass over the store
#[derive(Debug, Clone)]
pub struct AnalyticsSummary {
    pub total_volunteers: usize,
    pub total_roles: usize,
    pub skill_counts: IndexMap<String, usize>,
    pub cooccurrence: CooccurrenceMatrix,
}

impl AnalyticsSummary {
    pub fn compute(volunteers: &[Volunteer], total_roles: usize) -> Self {
        let skills: Vec<&str> = volunteers.iter().map(|v| v.skills.as_str()).collect();

        Self {
            total_volunteers: volunteers.len(),
            total_roles,
            skill_counts: skill_frequency(skills.iter().copied()),
            cooccurrence: cooccurrence_matrix(skills.iter().copied()),
        }
    }

    /// Whether any volunteer has at least one skill
    pub fn has_skills(&self) -> bool {
        !self.skill_counts.is_empty()
    }
}

/// Occurrences of every skill token across all skill strings
///
/// Counts raw token occurrences, so a string listing a skill twice
/// contributes two. Keys keep first-appearance order and original case.
pub fn skill_frequency<'a, I>(skill_strings: I) -> IndexMap<String, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = IndexMap::new();
    for raw in skill_strings {
        for token in split_skills_filtered(raw) {
            *counts.entry(token).or_insert(0) += 1;
        }
    }
    counts
}

/// Co-occurrence counts over the sorted universe of skills
///
/// Each skill string is deduplicated first, so a repeated skill adds nothing.
pub fn cooccurrence_matrix<'a, I>(skill_strings: I) -> CooccurrenceMatrix
where
    I: IntoIterator<Item = &'a str>,
{
    let sets: Vec<BTreeSet<String>> = skill_strings.into_iter().map(distinct_skills).collect();

    let universe: BTreeSet<&String> = sets.iter().flatten().collect();
    let mut result = CooccurrenceMatrix::zeroed(universe.into_iter().cloned().collect());

    for set in &sets {
        let indices: Vec<usize> = set
            .iter()
            .filter_map(|skill| result.index_of(skill))
            .collect();

        for (pos, &i) in indices.iter().enumerate() {
            result.matrix[i][i] += 1;
            for &j in &indices[pos + 1..] {
                result.matrix[i][j] += 1;
                result.matrix[j][i] += 1;
            }
        }
    }

    result
}

/// Number of skill strings containing each pair of distinct skills
///
/// Only pairs that actually occur are produced. Output is sorted by
/// (skill_a, skill_b).
pub fn skill_pair_counts<'a, I>(skill_strings: I) -> Vec<SkillPairCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut pairs: BTreeMap<(String, String), u32> = BTreeMap::new();

    for raw in skill_strings {
        let skills: Vec<String> = distinct_skills(raw).into_iter().collect();
        for (pos, a) in skills.iter().enumerate() {
            for b in &skills[pos + 1..] {
                *pairs.entry((a.clone(), b.clone())).or_insert(0) += 1;
            }
        }
    }

    pairs
        .into_iter()
        .map(|((skill_a, skill_b), count)| SkillPairCount { skill_a, skill_b, count })
        .collect()
}
