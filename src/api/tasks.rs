//! Task routes: CRUD plus the submit/approve/reject review actions.

use serde::Serialize;

use super::ApiClient;
use crate::error::ApiError;
use crate::types::{NewTask, Task, TaskChanges, TaskEcho};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitBody<'a> {
    submission_link: &'a str,
}

pub async fn list(api: &ApiClient) -> Result<Vec<Task>, ApiError> {
    api.get_json("tasks").await
}

pub async fn create(api: &ApiClient, input: &NewTask) -> Result<Task, ApiError> {
    api.post_json("tasks", input).await
}

/// PATCH; the echo may be partial, so it comes back as [`TaskEcho`].
pub async fn update(
    api: &ApiClient,
    id: &str,
    changes: &TaskChanges,
) -> Result<TaskEcho, ApiError> {
    api.patch_json(&format!("tasks/{id}"), changes).await
}

pub async fn delete(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&format!("tasks/{id}")).await
}

/// Attach the evidence link and move the task to Submitted.
pub async fn submit(
    api: &ApiClient,
    id: &str,
    submission_link: &str,
) -> Result<TaskEcho, ApiError> {
    api.patch_json(&format!("tasks/{id}/submit"), &SubmitBody { submission_link })
        .await
}

pub async fn approve(api: &ApiClient, id: &str) -> Result<TaskEcho, ApiError> {
    api.patch_empty(&format!("tasks/{id}/approve")).await
}

pub async fn reject(api: &ApiClient, id: &str) -> Result<TaskEcho, ApiError> {
    api.patch_empty(&format!("tasks/{id}/reject")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_body_uses_camel_case() {
        let body = serde_json::to_value(SubmitBody {
            submission_link: "https://repo/pr/7",
        })
        .unwrap();
        assert_eq!(body["submissionLink"], "https://repo/pr/7");
    }
}
