//! Static seed fixtures.
//!
//! Every collection starts from these on each run; only the session
//! survives between processes. Ids are stable so the fixtures can
//! cross-reference each other.

use chrono::{DateTime, NaiveDate};

use crate::fields::{
    ExtensionStatus, NotificationKind, Role, TaskPriority, TaskStatus, TicketSeverity,
    TicketStatus,
};
use crate::notification::Notification;
use crate::task::{Comment, ExtensionRequest, Task};
use crate::ticket::Ticket;
use crate::user::User;

/// Epoch seconds for a fixture timestamp. Fixture dates are known
/// good; a parse failure maps to the epoch rather than a panic.
fn ts(rfc3339: &str) -> i64 {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|d| d.timestamp())
        .unwrap_or(0)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

/// The static roster. One user per role.
pub fn users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Naomi Hale".into(),
            email: "ceo@example.com".into(),
            role: Role::Ceo,
            department: Some("Executive".into()),
            position: Some("Chief Executive Officer".into()),
            avatar: None,
            active: true,
            created_at_utc: ts("2024-01-01T00:00:00Z"),
            last_login_utc: Some(ts("2024-01-15T10:30:00Z")),
        },
        User {
            id: 2,
            name: "Marcus Webb".into(),
            email: "admin@example.com".into(),
            role: Role::Admin,
            department: Some("Operations".into()),
            position: Some("Operations Manager".into()),
            avatar: None,
            active: true,
            created_at_utc: ts("2024-01-01T00:00:00Z"),
            last_login_utc: Some(ts("2024-01-15T09:15:00Z")),
        },
        User {
            id: 3,
            name: "Enoch Darko".into(),
            email: "lead@example.com".into(),
            role: Role::TeamLead,
            department: Some("Engineering".into()),
            position: Some("Senior Developer".into()),
            avatar: None,
            active: false,
            created_at_utc: ts("2024-01-01T00:00:00Z"),
            last_login_utc: Some(ts("2024-01-15T09:15:00Z")),
        },
        User {
            id: 4,
            name: "Alfred Boateng".into(),
            email: "dev@example.com".into(),
            role: Role::Developer,
            department: Some("Engineering".into()),
            position: Some("Frontend Developer".into()),
            avatar: None,
            active: true,
            created_at_utc: ts("2024-01-01T00:00:00Z"),
            last_login_utc: Some(ts("2024-01-15T09:15:00Z")),
        },
        User {
            id: 5,
            name: "Joyce Mensah".into(),
            email: "staff@example.com".into(),
            role: Role::NonTech,
            department: Some("Marketing".into()),
            position: Some("Marketing Specialist".into()),
            avatar: None,
            active: false,
            created_at_utc: ts("2024-01-01T00:00:00Z"),
            last_login_utc: Some(ts("2024-01-15T09:15:00Z")),
        },
    ]
}

/// The initial task board.
pub fn tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            title: "Implement user authentication".into(),
            description: "Create a secure authentication system with token-based \
                          role checks."
                .into(),
            assignee: 4,
            assigner: 3,
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            created_at_utc: ts("2023-05-15T10:00:00Z"),
            due: date(2023, 5, 22),
            estimated_hours: 16.0,
            logged_hours: 6.0,
            labels: vec!["backend".into(), "security".into()],
            dependencies: vec![],
            comments: vec![
                Comment {
                    id: 1,
                    author: 3,
                    content: "Make sure to follow the security guidelines from our \
                              documentation."
                        .into(),
                    created_at_utc: ts("2023-05-15T14:30:00Z"),
                },
                Comment {
                    id: 2,
                    author: 4,
                    content: "Basic flow done, working on role-based permissions now."
                        .into(),
                    created_at_utc: ts("2023-05-17T09:15:00Z"),
                },
            ],
            extension: None,
        },
        Task {
            id: 2,
            title: "Design landing page".into(),
            description: "Modern, responsive landing page following the brand \
                          guidelines."
                .into(),
            assignee: 5,
            assigner: 2,
            status: TaskStatus::ToDo,
            priority: TaskPriority::Medium,
            created_at_utc: ts("2023-05-16T08:30:00Z"),
            due: date(2023, 5, 23),
            estimated_hours: 12.0,
            logged_hours: 0.0,
            labels: vec!["design".into(), "frontend".into()],
            dependencies: vec![],
            comments: vec![],
            extension: None,
        },
        Task {
            id: 3,
            title: "Fix payment gateway integration".into(),
            description: "Debug and resolve checkout failures against the payment \
                          provider."
                .into(),
            assignee: 4,
            assigner: 1,
            status: TaskStatus::Blocked,
            priority: TaskPriority::Urgent,
            created_at_utc: ts("2023-05-14T16:45:00Z"),
            due: date(2023, 5, 17),
            estimated_hours: 8.0,
            logged_hours: 5.0,
            labels: vec!["backend".into(), "bug".into()],
            dependencies: vec![],
            comments: vec![Comment {
                id: 3,
                author: 4,
                content: "Blocked: the payment sandbox account is erroring, need \
                          dashboard access."
                    .into(),
                created_at_utc: ts("2023-05-15T11:20:00Z"),
            }],
            extension: Some(ExtensionRequest {
                reason: "Blocked on payment sandbox access".into(),
                proposed_due: date(2023, 5, 19),
                status: ExtensionStatus::Pending,
            }),
        },
        Task {
            id: 4,
            title: "Create Q2 marketing campaign".into(),
            description: "Comprehensive marketing strategy for the Q2 product launch."
                .into(),
            assignee: 5,
            assigner: 1,
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            created_at_utc: ts("2023-05-10T09:00:00Z"),
            due: date(2023, 5, 25),
            estimated_hours: 40.0,
            logged_hours: 15.0,
            labels: vec!["marketing".into(), "strategy".into()],
            dependencies: vec![],
            comments: vec![],
            extension: None,
        },
        Task {
            id: 5,
            title: "Optimise database queries".into(),
            description: "Improve the slow queries behind the user dashboard.".into(),
            assignee: 3,
            assigner: 2,
            status: TaskStatus::ToDo,
            priority: TaskPriority::Medium,
            created_at_utc: ts("2023-05-16T14:00:00Z"),
            due: date(2023, 5, 24),
            estimated_hours: 16.0,
            logged_hours: 0.0,
            labels: vec!["backend".into(), "performance".into()],
            dependencies: vec![1],
            comments: vec![],
            extension: None,
        },
    ]
}

/// The initial ticket queue.
pub fn tickets() -> Vec<Ticket> {
    vec![
        Ticket {
            id: 1,
            title: "Cannot access API endpoints".into(),
            description: "403 errors against the user management endpoints.".into(),
            created_by: 4,
            assigned_to: Some(3),
            severity: TicketSeverity::High,
            status: TicketStatus::InProgress,
            created_at_utc: ts("2023-05-15T13:25:00Z"),
            updated_at_utc: ts("2023-05-16T09:10:00Z"),
            related_task: Some(1),
            comments: vec![Comment {
                id: 1,
                author: 3,
                content: "Looking into this, might be the recent permission changes."
                    .into(),
                created_at_utc: ts("2023-05-16T09:10:00Z"),
            }],
        },
        Ticket {
            id: 2,
            title: "Need more memory on staging".into(),
            description: "Staging is insufficient for testing the new features.".into(),
            created_by: 3,
            assigned_to: Some(2),
            severity: TicketSeverity::Medium,
            status: TicketStatus::Open,
            created_at_utc: ts("2023-05-14T15:30:00Z"),
            updated_at_utc: ts("2023-05-14T15:30:00Z"),
            related_task: None,
            comments: vec![],
        },
        Ticket {
            id: 3,
            title: "Design software licence request".into(),
            description: "Licence needed for the new UI design work.".into(),
            created_by: 5,
            assigned_to: Some(1),
            severity: TicketSeverity::Low,
            status: TicketStatus::Resolved,
            created_at_utc: ts("2023-05-10T11:45:00Z"),
            updated_at_utc: ts("2023-05-12T16:20:00Z"),
            related_task: None,
            comments: vec![Comment {
                id: 2,
                author: 1,
                content: "Approved. Licence details sent to your email.".into(),
                created_at_utc: ts("2023-05-12T16:20:00Z"),
            }],
        },
    ]
}

/// The initial notification feed.
pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            user: 4,
            title: "New Task Assigned".into(),
            message: "You have been assigned a new task: Implement user authentication"
                .into(),
            kind: NotificationKind::Task,
            related: Some(1),
            read: false,
            created_at_utc: ts("2023-05-15T10:05:00Z"),
        },
        Notification {
            id: 2,
            user: 3,
            title: "Task Update".into(),
            message: "Alfred has commented on the user authentication task".into(),
            kind: NotificationKind::Task,
            related: Some(1),
            read: true,
            created_at_utc: ts("2023-05-17T09:20:00Z"),
        },
        Notification {
            id: 3,
            user: 3,
            title: "New Support Ticket".into(),
            message: "A new support ticket has been assigned to you: Cannot access \
                      API endpoints"
                .into(),
            kind: NotificationKind::Ticket,
            related: Some(1),
            read: false,
            created_at_utc: ts("2023-05-16T09:00:00Z"),
        },
        Notification {
            id: 4,
            user: 1,
            title: "Extension Request".into(),
            message: "Alfred has requested a deadline extension for the payment \
                      gateway task"
                .into(),
            kind: NotificationKind::Task,
            related: Some(3),
            read: false,
            created_at_utc: ts("2023-05-15T11:25:00Z"),
        },
        Notification {
            id: 5,
            user: 5,
            title: "Task Approaching Deadline".into(),
            message: "The \"Design landing page\" task is due in 2 days".into(),
            kind: NotificationKind::System,
            related: Some(2),
            read: false,
            created_at_utc: ts("2023-05-21T08:00:00Z"),
        },
    ]
}
