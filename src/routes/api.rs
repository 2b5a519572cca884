use actix_web::{web, HttpResponse, Responder};

use crate::core::skill_pair_counts;
use crate::error::AppError;
use crate::models::{AnalyticsResponse, HealthResponse, VolunteerMatchesResponse};
use crate::routes::analytics::load_summary;
use crate::routes::AppState;

/// Configure JSON routes, mounted under /api/v1
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/volunteers/{id}/matches", web::get().to(volunteer_matches))
        .route("/analytics", web::get().to(analytics_summary));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let healthy = state.store.health_check().await.unwrap_or(false);

    let status = if healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// GET /api/v1/volunteers/{id}/matches
///
/// Response body:
/// ```json
/// {
///   "volunteerId": 1,
///   "matches": [{"roleName": "Event Coordinator", "score": 2}],
///   "totalRoles": 4
/// }
/// ```
async fn volunteer_matches(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let volunteer = state.store.get_volunteer(path.into_inner()).await?;
    let roles = state.store.list_roles().await?;

    let result = state.matcher.find_matches(&volunteer.skill_tokens(), &roles);

    tracing::debug!(
        "Returning {} matches for volunteer {} (from {} roles)",
        result.matches.len(),
        volunteer.id,
        result.total_roles
    );

    Ok(HttpResponse::Ok().json(VolunteerMatchesResponse {
        volunteer_id: volunteer.id,
        matches: result.matches,
        total_roles: result.total_roles,
    }))
}

/// GET /api/v1/analytics
async fn analytics_summary(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let (volunteers, summary) = load_summary(&state).await?;
    let pairs = skill_pair_counts(volunteers.iter().map(|v| v.skills.as_str()));

    Ok(HttpResponse::Ok().json(AnalyticsResponse {
        total_volunteers: summary.total_volunteers,
        total_roles: summary.total_roles,
        skill_counts: summary.skill_counts,
        cooccurrence: summary.cooccurrence,
        pairs,
    }))
}
