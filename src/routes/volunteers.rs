use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::models::VolunteerForm;
use crate::routes::views::{catalog_options, render, EditVolunteerPage, VolunteersPage};
use crate::routes::{redirect, AppState};

/// Configure volunteer CRUD routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/volunteer", web::get().to(list_volunteers))
        .route("/volunteer", web::post().to(create_volunteer))
        .route("/edit-volunteer/{id}", web::get().to(edit_volunteer_form))
        .route("/edit-volunteer/{id}", web::post().to(update_volunteer))
        .route("/delete-volunteer/{id}", web::get().to(delete_volunteer));
}

/// GET /volunteer
async fn list_volunteers(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let volunteers = state.store.list_volunteers().await?;

    render(VolunteersPage {
        volunteers,
        catalog: catalog_options::<&str>(&[]),
    })
}

/// POST /volunteer
///
/// Form fields: `name`, `email`, repeated `skills`
async fn create_volunteer(
    state: web::Data<AppState>,
    form: web::Form<Vec<(String, String)>>,
) -> Result<HttpResponse, AppError> {
    let form = VolunteerForm::from_pairs(form.into_inner())?;
    let volunteer = state.store.create_volunteer(&form.into_new_volunteer()).await?;

    tracing::info!("Registered volunteer {} with skills [{}]", volunteer.id, volunteer.skills);

    Ok(redirect("/volunteer"))
}

/// GET /edit-volunteer/{id}
async fn edit_volunteer_form(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let volunteer = state.store.get_volunteer(path.into_inner()).await?;
    let catalog = catalog_options(&volunteer.skill_tokens());

    render(EditVolunteerPage { volunteer, catalog })
}

/// POST /edit-volunteer/{id}
async fn update_volunteer(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    form: web::Form<Vec<(String, String)>>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let form = VolunteerForm::from_pairs(form.into_inner())?;
    state.store.update_volunteer(id, &form.into_new_volunteer()).await?;

    tracing::info!("Updated volunteer {}", id);

    Ok(redirect("/volunteer"))
}

/// GET /delete-volunteer/{id}
async fn delete_volunteer(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    state.store.delete_volunteer(id).await?;

    tracing::info!("Deleted volunteer {}", id);

    Ok(redirect("/volunteer"))
}
