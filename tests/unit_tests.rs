// Unit tests for Volunteer Match

use volunteer_match::core::{
    analytics::{cooccurrence_matrix, skill_frequency, skill_pair_counts},
    matcher::{match_volunteer_to_roles, Matcher},
    skills::{split_skills, split_skills_filtered},
};
use volunteer_match::models::{Role, SkillPairCount, SEED_ROLES};

fn role(id: i64, name: &str, required: &str) -> Role {
    Role {
        id,
        name: name.to_string(),
        required_skills: required.to_string(),
    }
}

fn seeded_roles() -> Vec<Role> {
    SEED_ROLES
        .iter()
        .enumerate()
        .map(|(i, (name, required))| role(i as i64 + 1, name, required))
        .collect()
}

#[test]
fn test_normalizer_trims() {
    assert_eq!(split_skills("a, b , c"), vec!["a", "b", "c"]);
}

#[test]
fn test_normalizer_empty_input() {
    assert_eq!(split_skills(""), vec![""]);
    assert!(split_skills_filtered("").is_empty());
}

#[test]
fn test_matcher_case_insensitive_substring() {
    let roles = vec![role(1, "Data", "excel, accuracy")];
    let matches = match_volunteer_to_roles(&["Excel"], &roles);
    assert_eq!(matches[0].score, 1);
}

#[test]
fn test_matcher_volunteer_token_inside_role_token() {
    let roles = vec![role(1, "Data", "data entry")];
    let matches = match_volunteer_to_roles(&["data"], &roles);
    assert_eq!(matches[0].score, 1);
}

#[test]
fn test_matcher_stable_top_three() {
    // Scores 3, 1, 3, 0 in role order A, B, C, D
    let roles = vec![
        role(1, "A", "p, q, r"),
        role(2, "B", "p"),
        role(3, "C", "r, q, p"),
        role(4, "D", "zzz"),
    ];
    let matches = match_volunteer_to_roles(&["p", "q", "r"], &roles);

    let names: Vec<&str> = matches.iter().map(|m| m.role_name.as_str()).collect();
    assert_eq!(names, vec!["A", "C", "B"]);
}

#[test]
fn test_matcher_against_seed_roles() {
    let roles = seeded_roles();
    let result = Matcher::default().find_matches(&split_skills("social media, networking"), &roles);

    assert_eq!(result.total_roles, 4);
    // Community Outreach: social media + networking; Social Media Manager: social media
    assert_eq!(result.matches[0].role_name, "Community Outreach");
    assert_eq!(result.matches[0].score, 2);
    assert_eq!(result.matches[1].role_name, "Social Media Manager");
    assert_eq!(result.matches[1].score, 1);
    assert_eq!(result.matches[2].score, 0);
    assert_eq!(result.matches[2].role_name, "Event Coordinator");
}

#[test]
fn test_matcher_empty_skills_string() {
    // "" splits to one empty token, which is contained in every role token
    let roles = seeded_roles();
    let matches = match_volunteer_to_roles(&split_skills(""), &roles);

    let scores: Vec<u32> = matches.iter().map(|m| m.score).collect();
    assert_eq!(scores, vec![3, 3, 2]);
    assert_eq!(matches[0].role_name, "Data Entry Volunteer");
    assert_eq!(matches[1].role_name, "Community Outreach");
    assert_eq!(matches[2].role_name, "Event Coordinator");
}

#[test]
fn test_frequency_counts_raw_tokens() {
    let counts = skill_frequency(["x, x", "x"]);
    assert_eq!(counts["x"], 3);
    assert_eq!(counts.len(), 1);
}

#[test]
fn test_cooccurrence_ignores_duplicates() {
    let matrix = cooccurrence_matrix(["a, b, a"]);

    assert_eq!(matrix.get("a", "a"), Some(1));
    assert_eq!(matrix.get("b", "b"), Some(1));
    assert_eq!(matrix.get("a", "b"), Some(1));
    assert_eq!(matrix.get("b", "a"), Some(1));
}

#[test]
fn test_cooccurrence_preserves_case() {
    let matrix = cooccurrence_matrix(["Excel, excel"]);
    assert_eq!(matrix.skills, vec!["Excel", "excel"]);
    assert_eq!(matrix.get("Excel", "excel"), Some(1));
}

#[test]
fn test_pair_export_skips_unshared_pairs() {
    let pairs = skill_pair_counts(["a, b", "a, c"]);

    assert_eq!(
        pairs,
        vec![
            SkillPairCount { skill_a: "a".to_string(), skill_b: "b".to_string(), count: 1 },
            SkillPairCount { skill_a: "a".to_string(), skill_b: "c".to_string(), count: 1 },
        ]
    );
}

#[test]
fn test_pair_counts_accumulate() {
    let pairs = skill_pair_counts(["excel, logistics", "logistics, excel, logistics", "marketing"]);

    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].skill_a, "excel");
    assert_eq!(pairs[0].skill_b, "logistics");
    assert_eq!(pairs[0].count, 2);
}
