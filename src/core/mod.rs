// Core algorithm exports
pub mod analytics;
pub mod matcher;
pub mod scoring;
pub mod skills;

pub use analytics::{cooccurrence_matrix, skill_frequency, skill_pair_counts, AnalyticsSummary};
pub use matcher::{match_volunteer_to_roles, MatchResult, Matcher, DEFAULT_TOP_ROLES};
pub use scoring::{normalize_for_matching, overlap_score};
pub use skills::{distinct_skills, join_skills, split_skills, split_skills_filtered};
