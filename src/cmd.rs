//! Command implementations for the CLI interface.
//!
//! The presentation layer of the system: every subcommand reads a
//! filtered snapshot from the managers or issues one discrete command
//! into them, then renders the result. Cross-manager wiring (the
//! notifications a workflow step produces) also lives here, so the
//! stores themselves stay independent.

use std::io;

use chrono::{Duration, Local, NaiveDate};
use clap::{CommandFactory, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};

use crate::access::Visible;
use crate::board::TaskBoard;
use crate::cli::Cli;
use crate::error::{Error, Result};
use crate::fields::{
    format_extension_status, format_kind, format_priority, format_role, format_severity,
    format_task_status, format_ticket_status, NotificationKind, TaskPriority, TaskStatus,
    TicketSeverity, TicketStatus,
};
use crate::inbox::Inbox;
use crate::queue::TicketQueue;
use crate::session::Session;
use crate::task::{NewTask, Task};
use crate::ticket::{NewTicket, Ticket};
use crate::user::{Roster, User};

/// Everything a command handler may touch: the three stores, the
/// roster and the session. Built fresh per run in `main`.
pub struct App {
    pub roster: Roster,
    pub board: TaskBoard,
    pub tickets: TicketQueue,
    pub inbox: Inbox,
    pub session: Session,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in by roster email.
    Login {
        email: String,
        /// Accepted for interface parity; never verified (see the
        /// session module docs).
        #[arg(long, default_value = "")]
        password: String,
    },

    /// Log out and remove the persisted session.
    Logout,

    /// Show the logged-in identity and its capability flags.
    Whoami,

    /// List the roster.
    Users,

    /// List the tasks visible to the logged-in user.
    Tasks {
        /// Filter by status.
        #[arg(long, value_enum)]
        status: Option<TaskStatus>,
        /// Filter by priority.
        #[arg(long, value_enum)]
        priority: Option<TaskPriority>,
    },

    /// Task workflow commands.
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// List the tickets visible to the logged-in user.
    Tickets {
        /// Filter by status.
        #[arg(long, value_enum)]
        status: Option<TicketStatus>,
    },

    /// Ticket workflow commands.
    Ticket {
        #[command(subcommand)]
        action: TicketAction,
    },

    /// Show the notification inbox.
    Inbox {
        /// Only unread notifications.
        #[arg(long)]
        unread: bool,
    },

    /// Mark one notification read.
    Read { id: u64 },

    /// Mark every notification read.
    ReadAll,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// View one task with comments and extension state.
    View { id: u64 },

    /// Create a task assigned to another user.
    Add {
        /// Short title for the task.
        title: String,
        /// Assignee user id.
        #[arg(long)]
        assignee: u64,
        /// Longer description.
        #[arg(long, default_value = "")]
        desc: String,
        /// Due date: YYYY-MM-DD, "today", "tomorrow", "in Nd" or "in Nw".
        #[arg(long, default_value = "in 7d")]
        due: String,
        #[arg(long, value_enum, default_value_t = TaskPriority::Medium)]
        priority: TaskPriority,
        /// Estimated hours.
        #[arg(long, default_value_t = 8.0)]
        estimate: f32,
        /// Label. May be repeated.
        #[arg(long = "label")]
        labels: Vec<String>,
        /// Id of a task this one depends on. May be repeated.
        #[arg(long = "depends-on")]
        dependencies: Vec<u64>,
    },

    /// Overwrite the status of a task.
    Status {
        id: u64,
        #[arg(value_enum)]
        status: TaskStatus,
    },

    /// Log hours against a task.
    Log { id: u64, hours: f32 },

    /// Comment on a task.
    Comment { id: u64, content: Vec<String> },

    /// Request a due-date extension.
    Extend {
        id: u64,
        #[arg(long)]
        reason: String,
        /// Proposed new due date.
        #[arg(long)]
        due: String,
    },

    /// Approve or reject a pending extension request (admin only).
    Resolve {
        id: u64,
        #[arg(value_enum)]
        decision: Decision,
    },
}

#[derive(Subcommand)]
pub enum TicketAction {
    /// View one ticket with its comments.
    View { id: u64 },

    /// Open a support ticket.
    Open {
        /// Short title for the ticket.
        title: String,
        #[arg(long, default_value = "")]
        desc: String,
        #[arg(long, value_enum, default_value_t = TicketSeverity::Medium)]
        severity: TicketSeverity,
        /// Assignee user id.
        #[arg(long)]
        assignee: Option<u64>,
        /// Related task id.
        #[arg(long)]
        task: Option<u64>,
    },

    /// Overwrite the status of a ticket.
    Status {
        id: u64,
        #[arg(value_enum)]
        status: TicketStatus,
    },

    /// Assign the ticket to a user.
    Assign { id: u64, user: u64 },

    /// Comment on a ticket.
    Comment { id: u64, content: Vec<String> },
}

/// Decision on a pending extension request.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

/// Parse due-date input: ISO dates plus a few relative forms.
pub fn parse_due(s: &str) -> Option<NaiveDate> {
    let s = s.trim().to_lowercase();
    let today = Local::now().date_naive();
    match s.as_str() {
        "today" => return Some(today),
        "tomorrow" => return Some(today + Duration::days(1)),
        _ => {}
    }
    if let Some(rest) = s.strip_prefix("in ") {
        if let Some(nd) = rest.strip_suffix('d') {
            if let Ok(days) = nd.trim().parse::<i64>() {
                return Some(today + Duration::days(days));
            }
        }
        if let Some(nw) = rest.strip_suffix('w') {
            if let Ok(weeks) = nw.trim().parse::<i64>() {
                return Some(today + Duration::weeks(weeks));
            }
        }
    }
    NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()
}

/// Format a due date relative to today ("today", "in 3d", "2d late").
pub fn format_due_relative(due: NaiveDate, today: NaiveDate) -> String {
    let days = (due - today).num_days();
    if days == 0 {
        "today".into()
    } else if days == 1 {
        "tomorrow".into()
    } else if days > 1 {
        format!("in {days}d")
    } else {
        format!("{}d late", -days)
    }
}

/// Format an epoch-second stamp for display.
fn format_ts(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".into())
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out = String::new();
        for (i, ch) in s.chars().enumerate() {
            if i + 1 >= width {
                out.push('…');
                break;
            }
            out.push(ch);
        }
        out
    }
}

/// Log in and persist the identity.
pub fn cmd_login(app: &mut App, email: &str, password: &str) -> Result<()> {
    let user = app.session.login(&app.roster, email, password)?;
    println!("Logged in as {} ({})", user.name, format_role(user.role));
    Ok(())
}

/// Log out and drop the persisted slot.
pub fn cmd_logout(app: &mut App) -> Result<()> {
    app.session.logout()?;
    println!("Logged out.");
    Ok(())
}

/// Show the active identity and its capability flags.
pub fn cmd_whoami(app: &App) -> Result<()> {
    let user = app.session.require()?;
    println!("{} <{}>", user.name, user.email);
    println!("Role:      {}", format_role(user.role));
    if let Some(dep) = &user.department {
        println!("Dept:      {dep}");
    }
    println!("Admin:     {}", app.session.is_admin());
    println!("Executive: {}", app.session.is_executive());
    Ok(())
}

/// List the roster.
pub fn cmd_users(app: &App) -> Result<()> {
    app.session.require()?;
    println!("{:<4} {:<10} {:<20} {:<26} {}", "ID", "Role", "Name", "Email", "Active");
    for u in app.roster.all() {
        println!(
            "{:<4} {:<10} {:<20} {:<26} {}",
            u.id,
            format_role(u.role),
            truncate(&u.name, 20),
            truncate(&u.email, 26),
            if u.active { "yes" } else { "no" }
        );
    }
    Ok(())
}

/// Print tasks in a formatted table.
fn print_task_table(tasks: &[&Task], roster: &Roster) {
    println!(
        "{:<4} {:<13} {:<7} {:<9} {:<16} {:<4} {}",
        "ID", "Status", "Pri", "Due", "Assignee", "Ext", "Title [labels]"
    );
    let today = Local::now().date_naive();
    for t in tasks {
        let labels = if t.labels.is_empty() {
            String::new()
        } else {
            format!(" [{}]", t.labels.join(","))
        };
        let ext = if t.has_pending_extension() { "[!]" } else { "" };
        println!(
            "{:<4} {:<13} {:<7} {:<9} {:<16} {:<4} {}{}",
            t.id,
            format_task_status(t.status),
            format_priority(t.priority),
            format_due_relative(t.due, today),
            truncate(&roster.name_of(t.assignee), 16),
            ext,
            t.title,
            labels
        );
    }
}

/// List visible tasks, optionally filtered.
pub fn cmd_tasks(
    app: &App,
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
) -> Result<()> {
    let user = app.session.require()?;
    let mut rows = app.board.visible_for(user);
    if let Some(s) = status {
        rows.retain(|t| t.status == s);
    }
    if let Some(p) = priority {
        rows.retain(|t| t.priority == p);
    }
    if rows.is_empty() {
        println!("No tasks.");
    } else {
        print_task_table(&rows, &app.roster);
    }
    Ok(())
}

/// Resolve a task id the current user is allowed to see. Invisible
/// tasks report the same `NotFound` as missing ones.
fn visible_task<'a>(app: &'a App, user: &User, id: u64) -> Result<&'a Task> {
    app.board
        .get(id)
        .filter(|t| t.visible_to(user))
        .ok_or(Error::NotFound { entity: "task", id })
}

fn visible_ticket<'a>(app: &'a App, user: &User, id: u64) -> Result<&'a Ticket> {
    app.tickets
        .get(id)
        .filter(|t| t.visible_to(user))
        .ok_or(Error::NotFound {
            entity: "ticket",
            id,
        })
}

/// View one task in full.
pub fn cmd_task_view(app: &App, id: u64) -> Result<()> {
    let user = app.session.require()?;
    let t = visible_task(app, user, id)?;
    println!("#{} {}", t.id, t.title);
    println!("Status:    {}", format_task_status(t.status));
    println!("Priority:  {}", format_priority(t.priority));
    println!("Assignee:  {}", app.roster.name_of(t.assignee));
    println!("Assigner:  {}", app.roster.name_of(t.assigner));
    println!("Due:       {}", t.due);
    println!("Hours:     {} logged / {} estimated", t.logged_hours, t.estimated_hours);
    if !t.labels.is_empty() {
        println!("Labels:    {}", t.labels.join(", "));
    }
    if !t.dependencies.is_empty() {
        let deps: Vec<String> = t.dependencies.iter().map(|d| format!("#{d}")).collect();
        println!("Depends:   {}", deps.join(", "));
    }
    if !t.description.is_empty() {
        println!("\n{}", t.description);
    }
    if let Some(ext) = &t.extension {
        println!(
            "\nExtension: {} -> {} ({})",
            format_extension_status(ext.status),
            ext.proposed_due,
            ext.reason
        );
    }
    for c in &t.comments {
        println!(
            "\n[{}] {}:\n  {}",
            format_ts(c.created_at_utc),
            app.roster.name_of(c.author),
            c.content
        );
    }
    Ok(())
}

/// Create a task; the logged-in user becomes the assigner.
pub fn cmd_task_add(
    app: &mut App,
    title: String,
    assignee: u64,
    desc: String,
    due: String,
    priority: TaskPriority,
    estimate: f32,
    labels: Vec<String>,
    dependencies: Vec<u64>,
) -> Result<()> {
    let actor = app.session.require()?.clone();
    app.roster.get(assignee).ok_or(Error::NotFound {
        entity: "user",
        id: assignee,
    })?;
    let due = parse_due(&due).ok_or(Error::BadDate(due))?;
    let task = app.board.add(NewTask {
        title,
        description: desc,
        assignee,
        assigner: actor.id,
        status: TaskStatus::ToDo,
        priority,
        due,
        estimated_hours: estimate,
        labels,
        dependencies,
    });
    let (id, title) = (task.id, task.title.clone());
    println!("Created task #{id}: {title}");
    if assignee != actor.id {
        app.inbox.push(
            assignee,
            "New Task Assigned",
            format!("You have been assigned a new task: {title}"),
            NotificationKind::Task,
            Some(id),
        );
    }
    Ok(())
}

/// Overwrite a task's status.
pub fn cmd_task_status(app: &mut App, id: u64, status: TaskStatus) -> Result<()> {
    app.session.require()?;
    app.board.set_status(id, status)?;
    println!("Task #{id} is now {}", format_task_status(status));
    Ok(())
}

/// Log hours against a task.
pub fn cmd_task_log(app: &mut App, id: u64, hours: f32) -> Result<()> {
    app.session.require()?;
    let total = app.board.log_hours(id, hours)?;
    let estimate = app.board.get(id).map(|t| t.estimated_hours).unwrap_or(0.0);
    println!("Task #{id}: {total} logged / {estimate} estimated");
    Ok(())
}

/// Comment on a task and notify the counterpart.
pub fn cmd_task_comment(app: &mut App, id: u64, content: Vec<String>) -> Result<()> {
    let actor = app.session.require()?.clone();
    let content = content.join(" ");
    app.board.add_comment(id, actor.id, &content)?;
    let task = app.board.get(id).ok_or(Error::NotFound { entity: "task", id })?;
    let (title, assignee, assigner) = (task.title.clone(), task.assignee, task.assigner);
    println!("Comment added to task #{id}");
    // The assignee hears about the assigner's comments and vice versa.
    let counterpart = if actor.id == assignee { assigner } else { assignee };
    if counterpart != actor.id {
        app.inbox.push(
            counterpart,
            "Task Update",
            format!("{} has commented on: {title}", actor.name),
            NotificationKind::Task,
            Some(id),
        );
    }
    Ok(())
}

/// Request a due-date extension and notify the admins.
pub fn cmd_task_extend(app: &mut App, id: u64, reason: String, due: String) -> Result<()> {
    let actor = app.session.require()?.clone();
    let proposed = parse_due(&due).ok_or(Error::BadDate(due))?;
    app.board.request_extension(id, reason, proposed)?;
    let title = app
        .board
        .get(id)
        .map(|t| t.title.clone())
        .unwrap_or_default();
    println!("Extension to {proposed} requested for task #{id}");
    let admins: Vec<u64> = app
        .roster
        .admins()
        .map(|u| u.id)
        .filter(|&a| a != actor.id)
        .collect();
    for admin in admins {
        app.inbox.push(
            admin,
            "Extension Request",
            format!("{} has requested a deadline extension for: {title}", actor.name),
            NotificationKind::Task,
            Some(id),
        );
    }
    Ok(())
}

/// Decide a pending extension request and notify the assignee.
pub fn cmd_task_resolve(app: &mut App, id: u64, decision: Decision) -> Result<()> {
    let actor = app.session.require()?.clone();
    if !app.session.is_admin() {
        return Err(Error::Forbidden("resolving an extension request"));
    }
    let approved = decision == Decision::Approve;
    app.board.resolve_extension(id, approved)?;
    let task = app.board.get(id).ok_or(Error::NotFound { entity: "task", id })?;
    let (title, assignee, due) = (task.title.clone(), task.assignee, task.due);
    if approved {
        println!("Extension approved; task #{id} is now due {due}");
    } else {
        println!("Extension rejected; task #{id} remains due {due}");
    }
    if assignee != actor.id {
        let verdict = if approved { "approved" } else { "rejected" };
        app.inbox.push(
            assignee,
            "Extension Request Decided",
            format!("Your extension request for \"{title}\" was {verdict}"),
            NotificationKind::Task,
            Some(id),
        );
    }
    Ok(())
}

/// Print tickets in a formatted table.
fn print_ticket_table(tickets: &[&Ticket], roster: &Roster) {
    println!(
        "{:<4} {:<12} {:<9} {:<16} {:<16} {}",
        "ID", "Status", "Sev", "Creator", "Assignee", "Title"
    );
    for t in tickets {
        let assignee = t
            .assigned_to
            .map(|u| roster.name_of(u))
            .unwrap_or_else(|| "-".into());
        println!(
            "{:<4} {:<12} {:<9} {:<16} {:<16} {}",
            t.id,
            format_ticket_status(t.status),
            format_severity(t.severity),
            truncate(&roster.name_of(t.created_by), 16),
            truncate(&assignee, 16),
            t.title
        );
    }
}

/// List visible tickets, optionally filtered.
pub fn cmd_tickets(app: &App, status: Option<TicketStatus>) -> Result<()> {
    let user = app.session.require()?;
    let mut rows = app.tickets.visible_for(user);
    if let Some(s) = status {
        rows.retain(|t| t.status == s);
    }
    if rows.is_empty() {
        println!("No tickets.");
    } else {
        print_ticket_table(&rows, &app.roster);
    }
    Ok(())
}

/// View one ticket in full.
pub fn cmd_ticket_view(app: &App, id: u64) -> Result<()> {
    let user = app.session.require()?;
    let t = visible_ticket(app, user, id)?;
    println!("#{} {}", t.id, t.title);
    println!("Status:    {}", format_ticket_status(t.status));
    println!("Severity:  {}", format_severity(t.severity));
    println!("Creator:   {}", app.roster.name_of(t.created_by));
    if let Some(a) = t.assigned_to {
        println!("Assignee:  {}", app.roster.name_of(a));
    }
    if let Some(rt) = t.related_task {
        println!("Task:      #{rt}");
    }
    println!("Opened:    {}", format_ts(t.created_at_utc));
    println!("Updated:   {}", format_ts(t.updated_at_utc));
    if !t.description.is_empty() {
        println!("\n{}", t.description);
    }
    for c in &t.comments {
        println!(
            "\n[{}] {}:\n  {}",
            format_ts(c.created_at_utc),
            app.roster.name_of(c.author),
            c.content
        );
    }
    Ok(())
}

/// Open a ticket created by the logged-in user.
pub fn cmd_ticket_open(
    app: &mut App,
    title: String,
    desc: String,
    severity: TicketSeverity,
    assignee: Option<u64>,
    related_task: Option<u64>,
) -> Result<()> {
    let actor = app.session.require()?.clone();
    if let Some(a) = assignee {
        app.roster.get(a).ok_or(Error::NotFound { entity: "user", id: a })?;
    }
    let ticket = app.tickets.open(
        NewTicket {
            title,
            description: desc,
            severity,
            assigned_to: assignee,
            related_task,
        },
        actor.id,
    );
    let (id, title) = (ticket.id, ticket.title.clone());
    println!("Opened ticket #{id}: {title}");
    if let Some(a) = assignee {
        if a != actor.id {
            app.inbox.push(
                a,
                "New Support Ticket",
                format!("A new support ticket has been assigned to you: {title}"),
                NotificationKind::Ticket,
                Some(id),
            );
        }
    }
    Ok(())
}

/// Overwrite a ticket's status.
pub fn cmd_ticket_status(app: &mut App, id: u64, status: TicketStatus) -> Result<()> {
    app.session.require()?;
    app.tickets.set_status(id, status)?;
    println!("Ticket #{id} is now {}", format_ticket_status(status));
    Ok(())
}

/// Assign a ticket and notify the assignee.
pub fn cmd_ticket_assign(app: &mut App, id: u64, user_id: u64) -> Result<()> {
    let actor = app.session.require()?.clone();
    app.roster.get(user_id).ok_or(Error::NotFound {
        entity: "user",
        id: user_id,
    })?;
    app.tickets.assign(id, user_id)?;
    let title = app
        .tickets
        .get(id)
        .map(|t| t.title.clone())
        .unwrap_or_default();
    println!("Ticket #{id} assigned to {}", app.roster.name_of(user_id));
    if user_id != actor.id {
        app.inbox.push(
            user_id,
            "New Support Ticket",
            format!("A support ticket has been assigned to you: {title}"),
            NotificationKind::Ticket,
            Some(id),
        );
    }
    Ok(())
}

/// Comment on a ticket and notify the counterpart.
pub fn cmd_ticket_comment(app: &mut App, id: u64, content: Vec<String>) -> Result<()> {
    let actor = app.session.require()?.clone();
    let content = content.join(" ");
    app.tickets.add_comment(id, actor.id, &content)?;
    let ticket = app.tickets.get(id).ok_or(Error::NotFound {
        entity: "ticket",
        id,
    })?;
    let (title, created_by, assigned_to) =
        (ticket.title.clone(), ticket.created_by, ticket.assigned_to);
    println!("Comment added to ticket #{id}");
    let counterpart = if actor.id == created_by {
        assigned_to
    } else {
        Some(created_by)
    };
    if let Some(other) = counterpart {
        if other != actor.id {
            app.inbox.push(
                other,
                "Ticket Update",
                format!("{} has commented on: {title}", actor.name),
                NotificationKind::Ticket,
                Some(id),
            );
        }
    }
    Ok(())
}

/// Show the logged-in user's notifications.
pub fn cmd_inbox(app: &App, unread_only: bool) -> Result<()> {
    let user = app.session.require()?;
    let rows: Vec<_> = app
        .inbox
        .for_user(user.id)
        .into_iter()
        .filter(|n| !unread_only || !n.read)
        .collect();
    if rows.is_empty() {
        println!("Inbox empty.");
        return Ok(());
    }
    println!("{} unread", app.inbox.unread_count_for(user.id));
    for n in rows {
        let marker = if n.read { " " } else { "*" };
        println!(
            "{marker} {:<4} [{:<6}] {:<26} {}",
            n.id,
            format_kind(n.kind),
            truncate(&n.title, 26),
            n.message
        );
    }
    Ok(())
}

/// Mark one of the logged-in user's notifications read.
pub fn cmd_read(app: &mut App, id: u64) -> Result<()> {
    let user_id = app.session.require()?.id;
    // A user only ever observes their own feed; foreign ids look
    // exactly like missing ones.
    if !app.inbox.for_user(user_id).iter().any(|n| n.id == id) {
        return Err(Error::NotFound {
            entity: "notification",
            id,
        });
    }
    app.inbox.mark_read(id)?;
    println!("Notification {id} marked read.");
    Ok(())
}

/// Mark the whole feed read.
pub fn cmd_read_all(app: &mut App) -> Result<()> {
    let user_id = app.session.require()?.id;
    app.inbox.mark_all_read_for(user_id);
    println!("All notifications marked read.");
    Ok(())
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "wd", &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn app() -> (tempfile::TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        let roster = Roster::new(seed::users());
        let session = Session::load(dir.path(), &roster);
        let app = App {
            roster,
            board: TaskBoard::new(seed::tasks()),
            tickets: TicketQueue::new(seed::tickets()),
            inbox: Inbox::new(seed::notifications()),
            session,
        };
        (dir, app)
    }

    fn login(app: &mut App, email: &str) {
        app.session.login(&app.roster, email, "pw").unwrap();
    }

    #[test]
    fn commands_require_a_login() {
        let (_dir, mut app) = app();
        assert!(matches!(
            cmd_tasks(&app, None, None),
            Err(Error::NotLoggedIn)
        ));
        assert!(matches!(
            cmd_task_status(&mut app, 1, TaskStatus::Completed),
            Err(Error::NotLoggedIn)
        ));
        // Nothing was mutated on the way to the error.
        assert_eq!(app.board.get(1).unwrap().status, TaskStatus::InProgress);
    }

    #[test]
    fn resolving_requires_the_admin_flag() {
        let (_dir, mut app) = app();
        // Seed task 3 ships with a pending extension request.
        login(&mut app, "dev@example.com");
        assert!(matches!(
            cmd_task_resolve(&mut app, 3, Decision::Reject),
            Err(Error::Forbidden(_))
        ));
        assert!(app.board.get(3).unwrap().has_pending_extension());
    }

    #[test]
    fn extension_request_fans_out_to_admins_only() {
        let (_dir, mut app) = app();
        login(&mut app, "dev@example.com");
        let before: Vec<usize> = [1, 2, 3, 4]
            .iter()
            .map(|&u| app.inbox.for_user(u).len())
            .collect();
        cmd_task_extend(&mut app, 1, "waiting on access".into(), "2024-07-01".into())
            .unwrap();
        // CEO and Admin each hear about it; the lead and the
        // requester do not.
        assert_eq!(app.inbox.for_user(1).len(), before[0] + 1);
        assert_eq!(app.inbox.for_user(2).len(), before[1] + 1);
        assert_eq!(app.inbox.for_user(3).len(), before[2]);
        assert_eq!(app.inbox.for_user(4).len(), before[3]);
    }

    #[test]
    fn resolution_notifies_the_assignee() {
        let (_dir, mut app) = app();
        login(&mut app, "admin@example.com");
        let before = app.inbox.for_user(4).len();
        cmd_task_resolve(&mut app, 3, Decision::Approve).unwrap();
        assert_eq!(app.inbox.for_user(4).len(), before + 1);
        // The decision itself went through the board.
        assert_eq!(
            app.board.get(3).unwrap().due,
            NaiveDate::from_ymd_opt(2023, 5, 19).unwrap()
        );
    }

    #[test]
    fn comments_notify_the_counterpart_not_the_author() {
        let (_dir, mut app) = app();
        // Task 1: assignee 4, assigner 3. The assignee comments, so
        // the assigner is the counterpart.
        login(&mut app, "dev@example.com");
        let assigner_before = app.inbox.for_user(3).len();
        let author_before = app.inbox.for_user(4).len();
        cmd_task_comment(&mut app, 1, vec!["pushed".into(), "a".into(), "fix".into()])
            .unwrap();
        assert_eq!(app.inbox.for_user(3).len(), assigner_before + 1);
        assert_eq!(app.inbox.for_user(4).len(), author_before);
    }

    #[test]
    fn self_assignment_is_not_notified() {
        let (_dir, mut app) = app();
        login(&mut app, "lead@example.com");
        let before = app.inbox.for_user(3).len();
        cmd_task_add(
            &mut app,
            "Tidy the backlog".into(),
            3,
            String::new(),
            "tomorrow".into(),
            TaskPriority::Low,
            2.0,
            vec![],
            vec![],
        )
        .unwrap();
        assert_eq!(app.inbox.for_user(3).len(), before);
    }

    #[test]
    fn mutations_are_not_visibility_gated() {
        // Reads hide invisible entities as NotFound; mutations accept
        // any id, matching the source system. Pinned so a change here
        // is deliberate.
        let (_dir, mut app) = app();
        login(&mut app, "staff@example.com");
        assert!(matches!(
            cmd_task_view(&app, 1),
            Err(Error::NotFound { entity: "task", id: 1 })
        ));
        cmd_task_status(&mut app, 1, TaskStatus::Blocked).unwrap();
        assert_eq!(app.board.get(1).unwrap().status, TaskStatus::Blocked);
    }

    #[test]
    fn parse_due_accepts_iso_and_relative_forms() {
        let today = Local::now().date_naive();
        assert_eq!(parse_due("2024-07-01"), NaiveDate::from_ymd_opt(2024, 7, 1));
        assert_eq!(parse_due("today"), Some(today));
        assert_eq!(parse_due("tomorrow"), Some(today + Duration::days(1)));
        assert_eq!(parse_due("in 3d"), Some(today + Duration::days(3)));
        assert_eq!(parse_due("in 2w"), Some(today + Duration::weeks(2)));
        assert_eq!(parse_due("next fortnight"), None);
    }

    #[test]
    fn relative_due_formatting() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let day = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap();
        assert_eq!(format_due_relative(day(10), today), "today");
        assert_eq!(format_due_relative(day(11), today), "tomorrow");
        assert_eq!(format_due_relative(day(14), today), "in 4d");
        assert_eq!(format_due_relative(day(8), today), "2d late");
    }

    #[test]
    fn truncate_is_char_aware() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer title", 7), "a long…");
    }
}
