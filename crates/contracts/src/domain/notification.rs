use serde::{Deserialize, Serialize};

/// A notification about order activity, delivered to a branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub order_id: Option<String>,
    pub message: String,
    pub account_id: Option<String>,
    pub delivery_branch_id: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub read: bool,
}
