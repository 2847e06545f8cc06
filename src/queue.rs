//! The ticket queue: owns the support-ticket collection.
//!
//! Same conventions as the task board: mutations return `Result`,
//! unknown ids surface as `NotFound`, and every mutation bumps the
//! ticket's `updated_at_utc`.

use chrono::Utc;

use crate::access::Visible;
use crate::error::{Error, Result};
use crate::fields::TicketStatus;
use crate::task::Comment;
use crate::ticket::{NewTicket, Ticket};
use crate::user::User;

/// In-memory ticket store, seeded once at startup.
#[derive(Debug, Default)]
pub struct TicketQueue {
    tickets: Vec<Ticket>,
}

impl TicketQueue {
    pub fn new(tickets: Vec<Ticket>) -> Self {
        TicketQueue { tickets }
    }

    fn next_id(&self) -> u64 {
        self.tickets.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    /// Comment ids are unique across the whole queue.
    fn next_comment_id(&self) -> u64 {
        self.tickets
            .iter()
            .flat_map(|t| &t.comments)
            .map(|c| c.id)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Get a ticket by id.
    pub fn get(&self, id: u64) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: u64) -> Result<&mut Ticket> {
        self.tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(Error::NotFound {
                entity: "ticket",
                id,
            })
    }

    pub fn all(&self) -> &[Ticket] {
        &self.tickets
    }

    /// The subset of tickets the given user is allowed to see.
    pub fn visible_for(&self, user: &User) -> Vec<&Ticket> {
        self.tickets.iter().filter(|t| t.visible_to(user)).collect()
    }

    /// Append a new ticket for the given creator. Both timestamps are
    /// set to now, so `created_at_utc == updated_at_utc` at creation.
    pub fn open(&mut self, new: NewTicket, created_by: u64) -> &Ticket {
        let now = Utc::now().timestamp();
        let ticket = Ticket {
            id: self.next_id(),
            title: new.title,
            description: new.description,
            created_by,
            assigned_to: new.assigned_to,
            severity: new.severity,
            status: TicketStatus::Open,
            created_at_utc: now,
            updated_at_utc: now,
            related_task: new.related_task,
            comments: Vec::new(),
        };
        self.tickets.push(ticket);
        &self.tickets[self.tickets.len() - 1]
    }

    /// Overwrite the status and bump the update stamp.
    pub fn set_status(&mut self, id: u64, status: TicketStatus) -> Result<()> {
        let ticket = self.get_mut(id)?;
        ticket.status = status;
        ticket.updated_at_utc = Utc::now().timestamp();
        Ok(())
    }

    /// Hand the ticket to a user and bump the update stamp.
    pub fn assign(&mut self, id: u64, user_id: u64) -> Result<()> {
        let ticket = self.get_mut(id)?;
        ticket.assigned_to = Some(user_id);
        ticket.updated_at_utc = Utc::now().timestamp();
        Ok(())
    }

    /// Append a comment and bump the update stamp. Whitespace-only
    /// content is refused.
    pub fn add_comment(&mut self, id: u64, author: u64, content: &str) -> Result<&Comment> {
        let content = content.trim();
        if content.is_empty() {
            return Err(Error::EmptyComment);
        }
        let comment_id = self.next_comment_id();
        let ticket = self.get_mut(id)?;
        ticket.comments.push(Comment {
            id: comment_id,
            author,
            content: content.to_string(),
            created_at_utc: Utc::now().timestamp(),
        });
        ticket.updated_at_utc = Utc::now().timestamp();
        Ok(&ticket.comments[ticket.comments.len() - 1])
    }
}
