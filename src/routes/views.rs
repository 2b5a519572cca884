use actix_web::{http::header::ContentType, HttpResponse};
use askama::Template;

use crate::error::AppError;
use crate::models::{CooccurrenceMatrix, ScoredRole, Volunteer, SKILL_CATALOG};

/// Catalogue checkbox on the volunteer forms
#[derive(Debug, Clone)]
pub struct SkillOption {
    pub skill: &'static str,
    pub checked: bool,
}

/// Catalogue options, checked where `selected` contains the exact skill
pub fn catalog_options<S: AsRef<str>>(selected: &[S]) -> Vec<SkillOption> {
    SKILL_CATALOG
        .iter()
        .map(|&skill| SkillOption {
            skill,
            checked: selected.iter().any(|s| s.as_ref() == skill),
        })
        .collect()
}

#[derive(Template)]
#[template(path = "volunteers.html")]
pub struct VolunteersPage {
    pub volunteers: Vec<Volunteer>,
    pub catalog: Vec<SkillOption>,
}

#[derive(Template)]
#[template(path = "edit_volunteer.html")]
pub struct EditVolunteerPage {
    pub volunteer: Volunteer,
    pub catalog: Vec<SkillOption>,
}

#[derive(Debug, Clone)]
pub struct DashboardRow {
    pub volunteer: Volunteer,
    pub matches: Vec<ScoredRole>,
}

#[derive(Template)]
#[template(path = "hr_dashboard.html")]
pub struct DashboardPage {
    pub rows: Vec<DashboardRow>,
    pub total_roles: usize,
}

#[derive(Debug, Clone)]
pub struct SkillCountRow {
    pub skill: String,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct HeatmapRow {
    pub skill: String,
    pub counts: Vec<u32>,
}

impl HeatmapRow {
    pub fn from_matrix(matrix: &CooccurrenceMatrix) -> Vec<Self> {
        matrix
            .skills
            .iter()
            .zip(&matrix.matrix)
            .map(|(skill, counts)| Self {
                skill: skill.clone(),
                counts: counts.clone(),
            })
            .collect()
    }
}

#[derive(Template)]
#[template(path = "analytics.html")]
pub struct AnalyticsPage {
    pub total_volunteers: usize,
    pub total_roles: usize,
    pub has_skills: bool,
    pub skill_counts: Vec<SkillCountRow>,
    pub bar_chart: String,
    pub heatmap: String,
    pub heatmap_labels: Vec<String>,
    pub heatmap_rows: Vec<HeatmapRow>,
}

/// Render a page into a 200 HTML response
pub fn render<T: Template>(page: T) -> Result<HttpResponse, AppError> {
    let html = page.render()?;
    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(html))
}
