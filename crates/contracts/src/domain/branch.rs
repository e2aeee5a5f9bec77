use serde::{Deserialize, Serialize};

/// An organizational unit that owns stock and can send and receive
/// inter-branch orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub name: String,
    #[serde(rename = "stockEnabled", default)]
    pub stock_enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBranch {
    pub name: String,
}
