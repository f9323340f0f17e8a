//! Employee routes: directory CRUD plus the payroll approval actions.

use super::ApiClient;
use crate::error::ApiError;
use crate::types::{Employee, EmployeeChanges, EmployeeEcho, NewEmployee};

pub async fn list(api: &ApiClient) -> Result<Vec<Employee>, ApiError> {
    api.get_json("employees").await
}

pub async fn create(api: &ApiClient, input: &NewEmployee) -> Result<Employee, ApiError> {
    api.post_json("employees", input).await
}

/// PATCH; the echo may be partial, so it comes back as [`EmployeeEcho`].
pub async fn update(
    api: &ApiClient,
    id: &str,
    changes: &EmployeeChanges,
) -> Result<EmployeeEcho, ApiError> {
    api.patch_json(&format!("employees/{id}"), changes).await
}

pub async fn delete(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&format!("employees/{id}")).await
}

/// Mark one pending salary as paid for the current cycle.
pub async fn approve(api: &ApiClient, id: &str) -> Result<EmployeeEcho, ApiError> {
    api.patch_empty(&format!("employees/{id}/approve")).await
}

/// Approve the whole payroll batch; echoes the full directory back.
pub async fn approve_all(api: &ApiClient) -> Result<Vec<Employee>, ApiError> {
    api.post_empty("employees/approve-all").await
}
