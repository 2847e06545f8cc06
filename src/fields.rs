//! Closed enumerations for roles, statuses and priorities.
//!
//! Roles and workflow states arrive as strings at the CLI boundary and
//! are parsed into these enums by clap, so an unrecognised value is
//! rejected before any capability check can run against it.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Identity classes controlling both visibility and which mutating
/// commands a user may issue.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Ceo,
    Admin,
    TeamLead,
    Developer,
    NonTech,
}

impl Role {
    /// Admin capability: CEO and Admin see every task and ticket and
    /// may decide extension requests.
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Ceo | Role::Admin)
    }

    /// Executive capability: CEO only.
    pub fn is_executive(self) -> bool {
        matches!(self, Role::Ceo)
    }
}

/// Task workflow status. Any status may move to any other; there is no
/// transition table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    ToDo,
    InProgress,
    Blocked,
    UnderReview,
    Completed,
}

/// Task priority classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

/// Support-ticket severity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TicketSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// Support-ticket lifecycle status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

/// Decision state of an extension request. Transitions only
/// Pending -> Approved or Pending -> Rejected, once.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ExtensionStatus {
    Pending,
    Approved,
    Rejected,
}

/// What a notification is about.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    Task,
    Ticket,
    System,
}

/// Format a role for display.
pub fn format_role(r: Role) -> &'static str {
    match r {
        Role::Ceo => "CEO",
        Role::Admin => "Admin",
        Role::TeamLead => "Team Lead",
        Role::Developer => "Developer",
        Role::NonTech => "Non-Tech",
    }
}

/// Format a task status for display.
pub fn format_task_status(s: TaskStatus) -> &'static str {
    match s {
        TaskStatus::ToDo => "To Do",
        TaskStatus::InProgress => "In Progress",
        TaskStatus::Blocked => "Blocked",
        TaskStatus::UnderReview => "Under Review",
        TaskStatus::Completed => "Completed",
    }
}

/// Format a task priority for display.
pub fn format_priority(p: TaskPriority) -> &'static str {
    match p {
        TaskPriority::Low => "Low",
        TaskPriority::Medium => "Medium",
        TaskPriority::High => "High",
        TaskPriority::Urgent => "Urgent",
    }
}

/// Format a ticket severity for display.
pub fn format_severity(s: TicketSeverity) -> &'static str {
    match s {
        TicketSeverity::Low => "Low",
        TicketSeverity::Medium => "Medium",
        TicketSeverity::High => "High",
        TicketSeverity::Critical => "Critical",
    }
}

/// Format a ticket status for display.
pub fn format_ticket_status(s: TicketStatus) -> &'static str {
    match s {
        TicketStatus::Open => "Open",
        TicketStatus::InProgress => "In Progress",
        TicketStatus::Resolved => "Resolved",
        TicketStatus::Closed => "Closed",
    }
}

/// Format an extension status for display.
pub fn format_extension_status(s: ExtensionStatus) -> &'static str {
    match s {
        ExtensionStatus::Pending => "Pending",
        ExtensionStatus::Approved => "Approved",
        ExtensionStatus::Rejected => "Rejected",
    }
}

/// Format a notification kind for display.
pub fn format_kind(k: NotificationKind) -> &'static str {
    match k {
        NotificationKind::Task => "task",
        NotificationKind::Ticket => "ticket",
        NotificationKind::System => "system",
    }
}
