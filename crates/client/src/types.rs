//! Wire types mirroring the server's JSON surface.

use serde::{Deserialize, Serialize};

/// A journey as returned by the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    pub id: i64,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// A flat tree node row as returned by node creation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNodeRecord {
    pub id: String,
    pub name: String,
    pub content: Option<String>,
    pub journey_id: i64,
    pub parent_id: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Request body for node creation. `parent_id` of `None` creates a
/// root node.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNode {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}
