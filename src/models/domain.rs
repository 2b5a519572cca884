use serde::{Deserialize, Serialize};

use crate::core::skills::split_skills;

/// Skill options offered on the volunteer forms
pub const SKILL_CATALOG: [&str; 8] = [
    "event planning",
    "logistics",
    "social media",
    "marketing",
    "data entry",
    "excel",
    "public speaking",
    "networking",
];

/// Sample roles inserted by the seeding endpoint, as (name, required skills)
pub const SEED_ROLES: [(&str, &str); 4] = [
    ("Event Coordinator", "event planning, logistics"),
    ("Social Media Manager", "social media, marketing"),
    ("Data Entry Volunteer", "data entry, excel, accuracy"),
    ("Community Outreach", "public speaking, networking, social media"),
];

/// A registered volunteer
///
/// `skills` is stored exactly as submitted: a comma-separated list that may be
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Volunteer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub skills: String,
}

impl Volunteer {
    /// Trimmed skill tokens, empty tokens included
    pub fn skill_tokens(&self) -> Vec<String> {
        split_skills(&self.skills)
    }
}

/// Fields needed to create or overwrite a volunteer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVolunteer {
    pub name: String,
    pub email: String,
    pub skills: String,
}

/// An organisational role volunteers can be matched to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Role {
    pub id: i64,
    pub name: String,
    #[serde(rename = "requiredSkills")]
    pub required_skills: String,
}

impl Role {
    /// Trimmed required-skill tokens, empty tokens included
    pub fn required_tokens(&self) -> Vec<String> {
        split_skills(&self.required_skills)
    }
}

/// Assignment of a volunteer to a role. Kept for schema compatibility; nothing
/// writes placements yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Placement {
    pub id: i64,
    #[serde(rename = "volunteerId")]
    pub volunteer_id: i64,
    #[serde(rename = "roleId")]
    pub role_id: i64,
}

/// A role together with its overlap score for one volunteer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredRole {
    #[serde(rename = "roleName")]
    pub role_name: String,
    pub score: u32,
}

/// Number of volunteers sharing a pair of skills. `skill_a` sorts before `skill_b`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillPairCount {
    #[serde(rename = "skillA")]
    pub skill_a: String,
    #[serde(rename = "skillB")]
    pub skill_b: String,
    pub count: u32,
}

/// Symmetric skill co-occurrence counts
///
/// Rows and columns follow `skills`, which is sorted ascending. The diagonal
/// holds the number of volunteers with that skill; entry (i, j) holds the
/// number of volunteers with both skills.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooccurrenceMatrix {
    pub skills: Vec<String>,
    pub matrix: Vec<Vec<u32>>,
}

impl CooccurrenceMatrix {
    /// Zero matrix over the given sorted skill universe
    pub fn zeroed(skills: Vec<String>) -> Self {
        let n = skills.len();
        Self {
            skills,
            matrix: vec![vec![0; n]; n],
        }
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn index_of(&self, skill: &str) -> Option<usize> {
        self.skills
            .binary_search_by(|s| s.as_str().cmp(skill))
            .ok()
    }

    /// Count for a pair of skills, `None` if either is outside the universe
    pub fn get(&self, a: &str, b: &str) -> Option<u32> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        Some(self.matrix[i][j])
    }

    /// Largest entry, 0 for an empty matrix
    pub fn max_count(&self) -> u32 {
        self.matrix
            .iter()
            .flat_map(|row| row.iter().copied())
            .max()
            .unwrap_or(0)
    }
}
