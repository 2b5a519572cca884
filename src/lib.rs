//! Volunteer Match - volunteer management with skill-based role suggestions
//!
//! This library provides the skill normaliser, the role matcher and the
//! analytics aggregation, plus the actix-web application serving them.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{match_volunteer_to_roles, AnalyticsSummary, MatchResult, Matcher};
pub use error::AppError;
pub use models::{CooccurrenceMatrix, Placement, Role, ScoredRole, SkillPairCount, Volunteer};
pub use routes::{configure_routes, AppState};
pub use services::SqliteStore;
