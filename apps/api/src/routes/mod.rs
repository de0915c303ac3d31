pub mod health;

use axum::{response::Redirect, routing::get, Router};

use crate::catalog::handlers;
use crate::demo::handlers as demo;
use crate::errors::not_found_fallback;
use crate::files::handlers as files;
use crate::state::AppState;

/// The electricity consumption dashboard is mounted separately under `/dashboard/`.
async fn launch_dashboard() -> Redirect {
    Redirect::to("/dashboard/")
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog API
        .route("/api/v1/projects", get(handlers::handle_list_projects))
        .route("/api/v1/projects/:id", get(handlers::handle_get_project))
        .route("/api/v1/about", get(handlers::handle_about))
        // Static documents
        .route("/downloads/:filename", get(files::handle_preview))
        .route("/download/transcript", get(files::handle_download_transcript))
        .route("/download/resume", get(files::handle_download_resume))
        // Showcase demos
        .route("/launch-dashboard", get(launch_dashboard))
        .route("/api/v1/demo/advisor", get(demo::handle_advisor))
        .route("/api/v1/demo/support", get(demo::handle_support))
        .route("/api/v1/demo/market/:symbol", get(demo::handle_market))
        .fallback(not_found_fallback)
        .with_state(state)
}
