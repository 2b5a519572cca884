// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CooccurrenceMatrix, NewVolunteer, Placement, Role, ScoredRole, SkillPairCount, Volunteer, SEED_ROLES, SKILL_CATALOG};
pub use requests::{FormError, VolunteerForm};
pub use responses::{AnalyticsResponse, ErrorResponse, HealthResponse, VolunteerMatchesResponse};
