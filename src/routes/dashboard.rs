use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::routes::views::{render, DashboardPage, DashboardRow};
use crate::routes::{redirect, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/hr-dashboard", web::get().to(hr_dashboard))
        .route("/seed-roles", web::get().to(seed_roles));
}

/// GET /hr-dashboard
///
/// Every volunteer with their best-fitting roles.
async fn hr_dashboard(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let volunteers = state.store.list_volunteers().await?;
    let roles = state.store.list_roles().await?;

    let rows: Vec<DashboardRow> = volunteers
        .into_iter()
        .map(|volunteer| {
            let result = state.matcher.find_matches(&volunteer.skill_tokens(), &roles);
            DashboardRow {
                volunteer,
                matches: result.matches,
            }
        })
        .collect();

    tracing::debug!("Matched {} volunteers against {} roles", rows.len(), roles.len());

    render(DashboardPage {
        rows,
        total_roles: roles.len(),
    })
}

/// GET /seed-roles
///
/// Appends the sample roles on every call.
async fn seed_roles(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    state.store.seed_roles().await?;
    Ok(redirect("/hr-dashboard"))
}
