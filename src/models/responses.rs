use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::domain::{CooccurrenceMatrix, ScoredRole, SkillPairCount};

/// Top roles for one volunteer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerMatchesResponse {
    #[serde(rename = "volunteerId")]
    pub volunteer_id: i64,
    pub matches: Vec<ScoredRole>,
    #[serde(rename = "totalRoles")]
    pub total_roles: usize,
}

/// Analytics snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    #[serde(rename = "totalVolunteers")]
    pub total_volunteers: usize,
    #[serde(rename = "totalRoles")]
    pub total_roles: usize,
    #[serde(rename = "skillCounts")]
    pub skill_counts: IndexMap<String, usize>,
    pub cooccurrence: CooccurrenceMatrix,
    pub pairs: Vec<SkillPairCount>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
