//! Lead routes: pipeline CRUD plus the one-way client conversion.

use super::ApiClient;
use crate::error::ApiError;
use crate::types::{Lead, LeadChanges, LeadEcho, NewLead};

pub async fn list(api: &ApiClient) -> Result<Vec<Lead>, ApiError> {
    api.get_json("leads").await
}

pub async fn create(api: &ApiClient, input: &NewLead) -> Result<Lead, ApiError> {
    api.post_json("leads", input).await
}

/// PATCH; the echo may be partial, so it comes back as [`LeadEcho`].
pub async fn update(
    api: &ApiClient,
    id: &str,
    changes: &LeadChanges,
) -> Result<LeadEcho, ApiError> {
    api.patch_json(&format!("leads/{id}"), changes).await
}

pub async fn delete(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&format!("leads/{id}")).await
}

/// Terminal conversion: the lead becomes a client.
pub async fn convert(api: &ApiClient, id: &str) -> Result<LeadEcho, ApiError> {
    api.patch_empty(&format!("leads/{id}/convert")).await
}
