//! Enumerations and field types for the task model.
//!
//! This module defines the structured data types attached to tasks and to the
//! session view: the task completion status and the view filter.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Task completion status.
///
/// Tasks start `Pending` and move to `Completed` exactly once; there is no
/// reopen transition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[serde(alias = "Pending")]
    Pending,
    #[serde(alias = "Completed")]
    Completed,
}

/// View filter over the task collection.
///
/// Affects only the derived visible list, never the stored tasks. `All` is
/// the session default.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}
