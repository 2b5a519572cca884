use actix_web::{http::header, web, HttpResponse};

use crate::core::AnalyticsSummary;
use crate::error::AppError;
use crate::models::Volunteer;
use crate::routes::views::{render, AnalyticsPage, HeatmapRow, SkillCountRow};
use crate::routes::AppState;
use crate::services::{analytics_csv, png_data_uri, render_cooccurrence_heatmap, render_skill_bar_chart};

pub const CSV_FILENAME: &str = "volunteer_analytics.csv";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/analytics", web::get().to(analytics_page))
        .route("/analytics/", web::get().to(analytics_page))
        .route("/analytics/download_csv", web::get().to(download_csv));
}

/// Load volunteers and the role count, then aggregate
pub(crate) async fn load_summary(state: &AppState) -> Result<(Vec<Volunteer>, AnalyticsSummary), AppError> {
    let volunteers = state.store.list_volunteers().await?;
    let total_roles = state.store.count_roles().await?;
    let summary = AnalyticsSummary::compute(&volunteers, total_roles);
    Ok((volunteers, summary))
}

/// GET /analytics
async fn analytics_page(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let (_, summary) = load_summary(&state).await?;

    let (bar_chart, heatmap) = if summary.has_skills() {
        (
            png_data_uri(&render_skill_bar_chart(&summary.skill_counts)?),
            png_data_uri(&render_cooccurrence_heatmap(&summary.cooccurrence)?),
        )
    } else {
        (String::new(), String::new())
    };

    render(AnalyticsPage {
        total_volunteers: summary.total_volunteers,
        total_roles: summary.total_roles,
        has_skills: summary.has_skills(),
        skill_counts: summary
            .skill_counts
            .iter()
            .map(|(skill, &count)| SkillCountRow { skill: skill.clone(), count })
            .collect(),
        bar_chart,
        heatmap,
        heatmap_rows: HeatmapRow::from_matrix(&summary.cooccurrence),
        heatmap_labels: summary.cooccurrence.skills,
    })
}

/// GET /analytics/download_csv
async fn download_csv(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let volunteers = state.store.list_volunteers().await?;
    let body = analytics_csv(&volunteers)?;

    tracing::info!("Exporting analytics CSV for {} volunteers", volunteers.len());

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", CSV_FILENAME),
        ))
        .body(body))
}
