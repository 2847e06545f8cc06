//! The task board: owns the task collection and applies workflow
//! commands to it.
//!
//! All mutation goes through these methods; nothing outside the board
//! touches the collection. Every mutating operation returns a
//! `Result` so callers can tell an applied change apart from a miss
//! on an unknown id.

use chrono::{NaiveDate, Utc};

use crate::access::Visible;
use crate::error::{Error, Result};
use crate::fields::{ExtensionStatus, TaskStatus};
use crate::task::{Comment, ExtensionRequest, NewTask, Task};
use crate::user::User;

/// In-memory task store, seeded once at startup.
#[derive(Debug, Default)]
pub struct TaskBoard {
    tasks: Vec<Task>,
}

impl TaskBoard {
    pub fn new(tasks: Vec<Task>) -> Self {
        TaskBoard { tasks }
    }

    /// Generate the next available task id.
    fn next_id(&self) -> u64 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    /// Comment ids are unique across the whole board.
    fn next_comment_id(&self) -> u64 {
        self.tasks
            .iter()
            .flat_map(|t| &t.comments)
            .map(|c| c.id)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Get a task by id.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: u64) -> Result<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(Error::NotFound { entity: "task", id })
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// The subset of tasks the given user is allowed to see.
    pub fn visible_for(&self, user: &User) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.visible_to(user)).collect()
    }

    /// Append a new task. Id, creation time and the empty comment list
    /// are generated here; everything else comes verbatim from the
    /// input. New tasks start with no hours logged and no extension
    /// record.
    pub fn add(&mut self, new: NewTask) -> &Task {
        let task = Task {
            id: self.next_id(),
            title: new.title,
            description: new.description,
            assignee: new.assignee,
            assigner: new.assigner,
            status: new.status,
            priority: new.priority,
            created_at_utc: Utc::now().timestamp(),
            due: new.due,
            estimated_hours: new.estimated_hours,
            logged_hours: 0.0,
            labels: new.labels,
            dependencies: new.dependencies,
            comments: Vec::new(),
            extension: None,
        };
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }

    /// Overwrite the status. Any status may move to any other.
    pub fn set_status(&mut self, id: u64, status: TaskStatus) -> Result<()> {
        self.get_mut(id)?.status = status;
        Ok(())
    }

    /// Add hours to the logged total and return the new total.
    /// Over-logging past the estimate is allowed; negative increments
    /// are not.
    pub fn log_hours(&mut self, id: u64, hours: f32) -> Result<f32> {
        if hours < 0.0 {
            return Err(Error::NegativeHours);
        }
        let task = self.get_mut(id)?;
        task.logged_hours += hours;
        Ok(task.logged_hours)
    }

    /// File an extension request. Refused while an earlier request is
    /// still pending; a resolved record is replaced by the new one.
    pub fn request_extension(
        &mut self,
        id: u64,
        reason: String,
        proposed_due: NaiveDate,
    ) -> Result<()> {
        let task = self.get_mut(id)?;
        if task.has_pending_extension() {
            return Err(Error::ExtensionPending(id));
        }
        task.extension = Some(ExtensionRequest {
            reason,
            proposed_due,
            status: ExtensionStatus::Pending,
        });
        Ok(())
    }

    /// Decide a pending request. Approval moves the due date to the
    /// proposed one; rejection leaves it alone. Either way the record
    /// stays on the task with its final status, and a later request
    /// may replace it.
    pub fn resolve_extension(&mut self, id: u64, approved: bool) -> Result<()> {
        let task = self.get_mut(id)?;
        match task.extension.as_mut() {
            Some(ext) if ext.status == ExtensionStatus::Pending => {
                if approved {
                    let proposed = ext.proposed_due;
                    ext.status = ExtensionStatus::Approved;
                    task.due = proposed;
                } else {
                    ext.status = ExtensionStatus::Rejected;
                }
                Ok(())
            }
            _ => Err(Error::NoPendingExtension(id)),
        }
    }

    /// Append a comment. Whitespace-only content is refused so the
    /// caller can report that nothing was added.
    pub fn add_comment(&mut self, id: u64, author: u64, content: &str) -> Result<&Comment> {
        let content = content.trim();
        if content.is_empty() {
            return Err(Error::EmptyComment);
        }
        let comment_id = self.next_comment_id();
        let task = self.get_mut(id)?;
        task.comments.push(Comment {
            id: comment_id,
            author,
            content: content.to_string(),
            created_at_utc: Utc::now().timestamp(),
        });
        Ok(&task.comments[task.comments.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::TaskPriority;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn board() -> TaskBoard {
        let mut board = TaskBoard::default();
        board.add(NewTask {
            title: "Ship release notes".into(),
            description: String::new(),
            assignee: 4,
            assigner: 3,
            status: TaskStatus::ToDo,
            priority: TaskPriority::Medium,
            due: date(2024, 6, 15),
            estimated_hours: 8.0,
            labels: vec![],
            dependencies: vec![],
        });
        board
    }

    #[test]
    fn add_generates_id_and_empty_comments() {
        let mut b = board();
        let t = b.add(NewTask {
            title: "Second".into(),
            description: String::new(),
            assignee: 4,
            assigner: 3,
            status: TaskStatus::ToDo,
            priority: TaskPriority::Low,
            due: date(2024, 7, 1),
            estimated_hours: 2.0,
            labels: vec![],
            dependencies: vec![],
        });
        assert_eq!(t.id, 2);
        assert!(t.comments.is_empty());
        assert_eq!(t.logged_hours, 0.0);
        assert!(t.extension.is_none());
    }

    #[test]
    fn set_status_overwrites_without_transition_table() {
        let mut b = board();
        b.set_status(1, TaskStatus::Completed).unwrap();
        b.set_status(1, TaskStatus::ToDo).unwrap();
        assert_eq!(b.get(1).unwrap().status, TaskStatus::ToDo);
    }

    #[test]
    fn set_status_reports_unknown_id() {
        let mut b = board();
        let err = b.set_status(99, TaskStatus::Completed).unwrap_err();
        assert!(matches!(err, Error::NotFound { entity: "task", id: 99 }));
    }

    #[test]
    fn log_hours_accumulates_and_permits_overrun() {
        let mut b = board();
        assert_eq!(b.log_hours(1, 5.0).unwrap(), 5.0);
        assert_eq!(b.log_hours(1, 0.0).unwrap(), 5.0);
        // No cap against the 8h estimate.
        assert_eq!(b.log_hours(1, 6.5).unwrap(), 11.5);
    }

    #[test]
    fn log_hours_rejects_negative_increments() {
        let mut b = board();
        b.log_hours(1, 3.0).unwrap();
        assert!(matches!(b.log_hours(1, -1.0), Err(Error::NegativeHours)));
        assert_eq!(b.get(1).unwrap().logged_hours, 3.0);
    }

    #[test]
    fn approval_moves_due_date() {
        let mut b = board();
        b.request_extension(1, "need more time".into(), date(2024, 7, 1))
            .unwrap();
        assert!(b.get(1).unwrap().has_pending_extension());
        b.resolve_extension(1, true).unwrap();
        let t = b.get(1).unwrap();
        assert_eq!(t.due, date(2024, 7, 1));
        assert_eq!(
            t.extension.as_ref().unwrap().status,
            ExtensionStatus::Approved
        );
        assert!(!t.has_pending_extension());
    }

    #[test]
    fn rejection_keeps_due_date() {
        let mut b = board();
        b.request_extension(1, "slipping".into(), date(2024, 7, 1))
            .unwrap();
        b.resolve_extension(1, false).unwrap();
        let t = b.get(1).unwrap();
        assert_eq!(t.due, date(2024, 6, 15));
        assert_eq!(
            t.extension.as_ref().unwrap().status,
            ExtensionStatus::Rejected
        );
    }

    #[test]
    fn second_request_waits_for_a_decision() {
        let mut b = board();
        b.request_extension(1, "first".into(), date(2024, 7, 1))
            .unwrap();
        let err = b
            .request_extension(1, "second".into(), date(2024, 8, 1))
            .unwrap_err();
        assert!(matches!(err, Error::ExtensionPending(1)));
        // The pending record is untouched.
        assert_eq!(b.get(1).unwrap().extension.as_ref().unwrap().reason, "first");
    }

    #[test]
    fn resolved_request_can_be_replaced() {
        let mut b = board();
        b.request_extension(1, "first".into(), date(2024, 7, 1))
            .unwrap();
        b.resolve_extension(1, false).unwrap();
        b.request_extension(1, "second try".into(), date(2024, 8, 1))
            .unwrap();
        assert!(b.get(1).unwrap().has_pending_extension());
    }

    #[test]
    fn resolve_without_pending_request_fails() {
        let mut b = board();
        assert!(matches!(
            b.resolve_extension(1, true),
            Err(Error::NoPendingExtension(1))
        ));
    }

    #[test]
    fn comments_append_in_order() {
        let mut b = board();
        b.add_comment(1, 3, "first").unwrap();
        b.add_comment(1, 4, "second").unwrap();
        let t = b.get(1).unwrap();
        assert_eq!(t.comments.len(), 2);
        assert_eq!(t.comments[0].content, "first");
        assert_eq!(t.comments[1].content, "second");
        assert_ne!(t.comments[0].id, t.comments[1].id);
    }

    #[test]
    fn whitespace_comment_is_refused() {
        let mut b = board();
        assert!(matches!(
            b.add_comment(1, 3, "   \t "),
            Err(Error::EmptyComment)
        ));
        assert!(b.get(1).unwrap().comments.is_empty());
    }
}
