use contracts::domain::branch::{Branch, CreateBranch};

use crate::shared::api_utils;

pub async fn fetch_branches(token: &str) -> Result<Vec<Branch>, String> {
    api_utils::get_json("/api/branches", token).await
}

pub async fn create_branch(token: &str, name: String) -> Result<Branch, String> {
    api_utils::post_json("/api/branches", token, &CreateBranch { name }).await
}

pub async fn delete_branch(token: &str, id: &str) -> Result<(), String> {
    api_utils::delete(&format!("/api/branches/{}", id), token).await
}
