// Route exports
pub mod analytics;
pub mod api;
pub mod dashboard;
pub mod views;
pub mod volunteers;

use actix_web::{http::header, web, HttpResponse};
use std::sync::Arc;

use crate::core::Matcher;
use crate::services::SqliteStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SqliteStore>,
    pub matcher: Matcher,
}

impl AppState {
    pub fn new(store: Arc<SqliteStore>, matcher: Matcher) -> Self {
        Self { store, matcher }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home))
        .configure(volunteers::configure)
        .configure(dashboard::configure)
        .configure(analytics::configure)
        .service(web::scope("/api/v1").configure(api::configure));
}

/// GET / sends visitors to the volunteer portal
async fn home() -> HttpResponse {
    redirect("/volunteer")
}

/// 302 to `location`
pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}
