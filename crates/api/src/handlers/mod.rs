pub mod journey;
pub mod tree_node;

use crate::error::{AppError, AppResult};

/// Validate a request-supplied name: present and non-empty after
/// trimming. Surfaced before any store access.
pub(crate) fn require_name(name: Option<String>) -> AppResult<String> {
    match name {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(AppError::validation("name is required")),
    }
}
