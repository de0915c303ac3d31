use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use tracing::warn;

use crate::catalog::facets::{categories, technologies};
use crate::catalog::filter::{filter_projects, ProjectFilter};
use crate::catalog::loader::load_catalog;
use crate::catalog::skills::compute_skills;
use crate::errors::AppError;
use crate::models::project::Project;
use crate::models::skill::Skill;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
    /// Facets are computed over the whole catalog, not the filtered view.
    pub technologies: Vec<String>,
    pub categories: Vec<String>,
    pub current_tech: String,
    pub current_category: String,
    pub current_search: String,
}

#[derive(Serialize)]
pub struct AboutResponse {
    pub skills: Vec<Skill>,
    pub total_projects: usize,
}

/// GET /api/v1/projects
pub async fn handle_list_projects(
    State(state): State<AppState>,
    Query(filter): Query<ProjectFilter>,
) -> Json<ProjectListResponse> {
    let catalog = load_catalog(state.catalog.as_ref()).await;
    let projects = filter_projects(&catalog, &filter)
        .into_iter()
        .cloned()
        .collect();

    Json(ProjectListResponse {
        projects,
        technologies: technologies(&catalog),
        categories: categories(&catalog),
        current_tech: filter.tech,
        current_category: filter.category,
        current_search: filter.search.to_lowercase(),
    })
}

/// GET /api/v1/projects/:id
pub async fn handle_get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Project>, AppError> {
    let catalog = load_catalog(state.catalog.as_ref()).await;
    match catalog.find(&id) {
        Some(project) => Ok(Json(project.clone())),
        None => {
            warn!(project_id = %id, "Project not found");
            Err(AppError::NotFound(format!("Project '{id}' not found")))
        }
    }
}

/// GET /api/v1/about
pub async fn handle_about(State(state): State<AppState>) -> Json<AboutResponse> {
    let catalog = load_catalog(state.catalog.as_ref()).await;
    Json(AboutResponse {
        skills: compute_skills(&catalog),
        total_projects: catalog.len(),
    })
}
