//! `wd` binary: builds the per-run application state and dispatches
//! the parsed command into the handlers.

use std::path::PathBuf;

use clap::Parser;

use workdesk::board::TaskBoard;
use workdesk::cli::Cli;
use workdesk::cmd::{self, App, Commands, TaskAction, TicketAction};
use workdesk::inbox::Inbox;
use workdesk::queue::TicketQueue;
use workdesk::seed;
use workdesk::session::Session;
use workdesk::user::Roster;

fn main() {
    let cli = Cli::parse();

    // Completions need no state at all.
    if let Commands::Completions { shell } = cli.command {
        cmd::cmd_completions(shell);
        return;
    }

    // Determine the data directory holding the session slot.
    let data_dir = cli.data_dir.unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".workdesk")
    });
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        eprintln!("Failed to create data directory {}: {e}", data_dir.display());
        std::process::exit(1);
    }

    let roster = Roster::new(seed::users());
    let session = Session::load(&data_dir, &roster);
    let mut app = App {
        roster,
        board: TaskBoard::new(seed::tasks()),
        tickets: TicketQueue::new(seed::tickets()),
        inbox: Inbox::new(seed::notifications()),
        session,
    };

    let result = match cli.command {
        Commands::Completions { .. } => unreachable!("handled above"),
        Commands::Login { email, password } => cmd::cmd_login(&mut app, &email, &password),
        Commands::Logout => cmd::cmd_logout(&mut app),
        Commands::Whoami => cmd::cmd_whoami(&app),
        Commands::Users => cmd::cmd_users(&app),
        Commands::Tasks { status, priority } => cmd::cmd_tasks(&app, status, priority),
        Commands::Task { action } => match action {
            TaskAction::View { id } => cmd::cmd_task_view(&app, id),
            TaskAction::Add {
                title,
                assignee,
                desc,
                due,
                priority,
                estimate,
                labels,
                dependencies,
            } => cmd::cmd_task_add(
                &mut app,
                title,
                assignee,
                desc,
                due,
                priority,
                estimate,
                labels,
                dependencies,
            ),
            TaskAction::Status { id, status } => cmd::cmd_task_status(&mut app, id, status),
            TaskAction::Log { id, hours } => cmd::cmd_task_log(&mut app, id, hours),
            TaskAction::Comment { id, content } => cmd::cmd_task_comment(&mut app, id, content),
            TaskAction::Extend { id, reason, due } => {
                cmd::cmd_task_extend(&mut app, id, reason, due)
            }
            TaskAction::Resolve { id, decision } => cmd::cmd_task_resolve(&mut app, id, decision),
        },
        Commands::Tickets { status } => cmd::cmd_tickets(&app, status),
        Commands::Ticket { action } => match action {
            TicketAction::View { id } => cmd::cmd_ticket_view(&app, id),
            TicketAction::Open {
                title,
                desc,
                severity,
                assignee,
                task,
            } => cmd::cmd_ticket_open(&mut app, title, desc, severity, assignee, task),
            TicketAction::Status { id, status } => cmd::cmd_ticket_status(&mut app, id, status),
            TicketAction::Assign { id, user } => cmd::cmd_ticket_assign(&mut app, id, user),
            TicketAction::Comment { id, content } => cmd::cmd_ticket_comment(&mut app, id, content),
        },
        Commands::Inbox { unread } => cmd::cmd_inbox(&app, unread),
        Commands::Read { id } => cmd::cmd_read(&mut app, id),
        Commands::ReadAll => cmd::cmd_read_all(&mut app),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
