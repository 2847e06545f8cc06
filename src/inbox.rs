//! The notification inbox: per-user notification list.

use chrono::Utc;

use crate::error::{Error, Result};
use crate::fields::NotificationKind;
use crate::notification::Notification;

/// In-memory notification store, seeded once at startup.
#[derive(Debug, Default)]
pub struct Inbox {
    notifications: Vec<Notification>,
}

impl Inbox {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Inbox { notifications }
    }

    fn next_id(&self) -> u64 {
        self.notifications.iter().map(|n| n.id).max().unwrap_or(0) + 1
    }

    /// Append an unread notification addressed to one user.
    pub fn push(
        &mut self,
        user: u64,
        title: &str,
        message: String,
        kind: NotificationKind,
        related: Option<u64>,
    ) -> &Notification {
        let n = Notification {
            id: self.next_id(),
            user,
            title: title.to_string(),
            message,
            kind,
            related,
            read: false,
            created_at_utc: Utc::now().timestamp(),
        };
        self.notifications.push(n);
        &self.notifications[self.notifications.len() - 1]
    }

    /// Mark one notification read.
    pub fn mark_read(&mut self, id: u64) -> Result<()> {
        let n = self
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(Error::NotFound {
                entity: "notification",
                id,
            })?;
        n.read = true;
        Ok(())
    }

    /// Mark everything addressed to one user read; other users'
    /// notifications are untouched.
    pub fn mark_all_read_for(&mut self, user: u64) {
        for n in self.notifications.iter_mut() {
            if n.user == user {
                n.read = true;
            }
        }
    }

    /// Unread count for one user.
    pub fn unread_count_for(&self, user: u64) -> usize {
        self.notifications
            .iter()
            .filter(|n| n.user == user && !n.read)
            .count()
    }

    /// Everything addressed to one user, in creation order. This is
    /// the only read path; nobody observes another user's inbox.
    pub fn for_user(&self, user: u64) -> Vec<&Notification> {
        self.notifications.iter().filter(|n| n.user == user).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inbox() -> Inbox {
        let mut i = Inbox::default();
        i.push(4, "New Task Assigned", "Task 1".into(), NotificationKind::Task, Some(1));
        i.push(4, "Task Update", "Task 1".into(), NotificationKind::Task, Some(1));
        i.push(3, "New Support Ticket", "Ticket 1".into(), NotificationKind::Ticket, Some(1));
        i
    }

    #[test]
    fn push_starts_unread_with_fresh_id() {
        let mut i = inbox();
        let n = i.push(5, "Deadline", "2 days".into(), NotificationKind::System, None);
        assert_eq!(n.id, 4);
        assert!(!n.read);
    }

    #[test]
    fn users_only_see_their_own() {
        let i = inbox();
        assert_eq!(i.for_user(4).len(), 2);
        assert_eq!(i.for_user(3).len(), 1);
        assert!(i.for_user(5).is_empty());
    }

    #[test]
    fn mark_read_flips_one_flag() {
        let mut i = inbox();
        i.mark_read(1).unwrap();
        assert_eq!(i.unread_count_for(4), 1);
        assert!(matches!(
            i.mark_read(99),
            Err(Error::NotFound { entity: "notification", id: 99 })
        ));
    }

    #[test]
    fn mark_all_read_leaves_other_users_alone() {
        let mut i = inbox();
        i.mark_all_read_for(4);
        assert_eq!(i.unread_count_for(4), 0);
        assert_eq!(i.unread_count_for(3), 1);
    }
}
