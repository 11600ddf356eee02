//! Task data structure.
//!
//! This module defines the `Task` struct that represents a single unit of
//! work for the lifetime of one session.

use serde::{Deserialize, Serialize};

use crate::fields::Status;

/// A single unit of work.
///
/// The `title` of a stored task is never empty or whitespace-only, and both
/// text fields are trimmed at creation. Ids are unique for the whole
/// session, including across deletions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub title: String,
    /// May be empty; always trimmed.
    #[serde(default)]
    pub description: String,
    pub status: Status,
}
