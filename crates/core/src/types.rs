/// Journey primary keys are SQLite INTEGER (autoincrement) columns.
pub type DbId = i64;

/// Tree node primary keys are opaque strings (UUID v7, generated
/// app-side at insert).
pub type NodeId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
