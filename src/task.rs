//! Task, comment and extension-request entities.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fields::{ExtensionStatus, TaskPriority, TaskStatus};

/// A work item assigned by one user to another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub assignee: u64,
    pub assigner: u64,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub created_at_utc: i64,
    pub due: NaiveDate,
    pub estimated_hours: f32,
    /// Only ever grows, by non-negative increments.
    pub logged_hours: f32,
    pub labels: Vec<String>,
    /// Ids of tasks this one depends on. Informational only; no cycle
    /// or ordering checks are made.
    pub dependencies: Vec<u64>,
    /// Append-only, in creation order.
    pub comments: Vec<Comment>,
    pub extension: Option<ExtensionRequest>,
}

impl Task {
    /// True while an extension request awaits an admin decision.
    pub fn has_pending_extension(&self) -> bool {
        self.extension
            .as_ref()
            .is_some_and(|e| e.status == ExtensionStatus::Pending)
    }
}

/// A proposed due-date change awaiting (or past) an admin decision.
///
/// The record stays on the task after resolution as the audit trail;
/// filing a new request replaces a resolved one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionRequest {
    pub reason: String,
    pub proposed_due: NaiveDate,
    pub status: ExtensionStatus,
}

/// Append-only remark owned by exactly one task or ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub author: u64,
    pub content: String,
    pub created_at_utc: i64,
}

/// Input for creating a task. Id, creation time and the empty comment
/// list are generated by the board; everything here is taken verbatim.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub assignee: u64,
    pub assigner: u64,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due: NaiveDate,
    pub estimated_hours: f32,
    pub labels: Vec<String>,
    pub dependencies: Vec<u64>,
}
