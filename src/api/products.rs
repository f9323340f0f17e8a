//! Product routes: plain CRUD. The reference scrub after a delete is the
//! store's job, not the backend's.

use super::ApiClient;
use crate::error::ApiError;
use crate::types::{NewProduct, Product, ProductChanges, ProductEcho};

pub async fn list(api: &ApiClient) -> Result<Vec<Product>, ApiError> {
    api.get_json("products").await
}

pub async fn create(api: &ApiClient, input: &NewProduct) -> Result<Product, ApiError> {
    api.post_json("products", input).await
}

/// PATCH; the echo may be partial, so it comes back as [`ProductEcho`].
pub async fn update(
    api: &ApiClient,
    id: &str,
    changes: &ProductChanges,
) -> Result<ProductEcho, ApiError> {
    api.patch_json(&format!("products/{id}"), changes).await
}

pub async fn delete(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&format!("products/{id}")).await
}
