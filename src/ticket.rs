//! Support-ticket entity.

use serde::{Deserialize, Serialize};

use crate::fields::{TicketSeverity, TicketStatus};
use crate::task::Comment;

/// A support request raised by a user, optionally assigned to another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub created_by: u64,
    pub assigned_to: Option<u64>,
    pub severity: TicketSeverity,
    pub status: TicketStatus,
    pub created_at_utc: i64,
    /// Bumped by every mutation; equals `created_at_utc` at creation.
    pub updated_at_utc: i64,
    pub related_task: Option<u64>,
    /// Append-only, in creation order.
    pub comments: Vec<Comment>,
}

/// Input for opening a ticket. Id, creator and both timestamps are
/// generated by the queue.
#[derive(Debug, Clone)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub severity: TicketSeverity,
    pub assigned_to: Option<u64>,
    pub related_task: Option<u64>,
}
