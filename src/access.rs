//! Read-side authorization: which entities a given user may see.

use crate::fields::Role;
use crate::task::Task;
use crate::ticket::Ticket;
use crate::user::User;

/// Visibility predicate, implemented once per entity kind so the task
/// and ticket rules can evolve independently without drifting copies
/// of the role checks.
pub trait Visible {
    fn visible_to(&self, user: &User) -> bool;
}

impl Visible for Task {
    /// Assignees see their own tasks, CEO and Admin see everything,
    /// and a Team Lead additionally sees every task they assigned.
    fn visible_to(&self, user: &User) -> bool {
        self.assignee == user.id
            || user.role.is_admin()
            || (user.role == Role::TeamLead && self.assigner == user.id)
    }
}

impl Visible for Ticket {
    /// Creators and assignees see their tickets; CEO and Admin see
    /// all of them.
    fn visible_to(&self, user: &User) -> bool {
        self.created_by == user.id
            || self.assigned_to == Some(user.id)
            || user.role.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{TaskPriority, TaskStatus, TicketSeverity, TicketStatus};
    use chrono::NaiveDate;

    fn user(id: u64, role: Role) -> User {
        User {
            id,
            name: format!("user {id}"),
            email: format!("u{id}@example.com"),
            role,
            department: None,
            position: None,
            avatar: None,
            active: true,
            created_at_utc: 0,
            last_login_utc: None,
        }
    }

    fn task(assignee: u64, assigner: u64) -> Task {
        Task {
            id: 1,
            title: "t".into(),
            description: String::new(),
            assignee,
            assigner,
            status: TaskStatus::ToDo,
            priority: TaskPriority::Medium,
            created_at_utc: 0,
            due: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            estimated_hours: 1.0,
            logged_hours: 0.0,
            labels: vec![],
            dependencies: vec![],
            comments: vec![],
            extension: None,
        }
    }

    fn ticket(created_by: u64, assigned_to: Option<u64>) -> Ticket {
        Ticket {
            id: 1,
            title: "t".into(),
            description: String::new(),
            created_by,
            assigned_to,
            severity: TicketSeverity::Low,
            status: TicketStatus::Open,
            created_at_utc: 0,
            updated_at_utc: 0,
            related_task: None,
            comments: vec![],
        }
    }

    #[test]
    fn admins_see_everything() {
        let t = task(7, 8);
        assert!(t.visible_to(&user(1, Role::Ceo)));
        assert!(t.visible_to(&user(2, Role::Admin)));
        let k = ticket(7, None);
        assert!(k.visible_to(&user(1, Role::Ceo)));
        assert!(k.visible_to(&user(2, Role::Admin)));
    }

    #[test]
    fn developer_sees_only_own_assignments() {
        let dev = user(7, Role::Developer);
        assert!(task(7, 8).visible_to(&dev));
        assert!(!task(6, 8).visible_to(&dev));
        // Being the assigner grants nothing to a developer.
        assert!(!task(6, 7).visible_to(&dev));
    }

    #[test]
    fn team_lead_sees_tasks_they_assigned() {
        let lead = user(3, Role::TeamLead);
        assert!(task(7, 3).visible_to(&lead));
        assert!(task(3, 8).visible_to(&lead));
        assert!(!task(7, 8).visible_to(&lead));
    }

    #[test]
    fn ticket_visible_to_creator_and_assignee() {
        let dev = user(7, Role::Developer);
        assert!(ticket(7, None).visible_to(&dev));
        assert!(ticket(6, Some(7)).visible_to(&dev));
        assert!(!ticket(6, Some(8)).visible_to(&dev));
    }
}
