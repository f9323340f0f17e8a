//! Project routes: plain CRUD.

use super::ApiClient;
use crate::error::ApiError;
use crate::types::{NewProject, Project, ProjectChanges, ProjectEcho};

pub async fn list(api: &ApiClient) -> Result<Vec<Project>, ApiError> {
    api.get_json("projects").await
}

pub async fn create(api: &ApiClient, input: &NewProject) -> Result<Project, ApiError> {
    api.post_json("projects", input).await
}

/// PATCH; the echo may be partial, so it comes back as [`ProjectEcho`].
pub async fn update(
    api: &ApiClient,
    id: &str,
    changes: &ProjectChanges,
) -> Result<ProjectEcho, ApiError> {
    api.patch_json(&format!("projects/{id}"), changes).await
}

pub async fn delete(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&format!("projects/{id}")).await
}
