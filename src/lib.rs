//! # Workdesk
//!
//! Internal task, support-ticket and notification tracker with
//! role-based views (CEO / Admin / Team Lead / Developer / Non-Tech).
//!
//! ## How it fits together
//!
//! - Three in-memory stores own the collections: [`board::TaskBoard`],
//!   [`queue::TicketQueue`] and [`inbox::Inbox`]. Nothing outside a
//!   store mutates its collection.
//! - [`session::Session`] resolves an identity from the static roster
//!   and persists it as a JSON slot in the data directory. That slot
//!   is the only durable state; every collection reseeds from
//!   [`seed`] on process start.
//! - The [`access::Visible`] trait is the read-side authorization
//!   filter: one visibility predicate per entity kind.
//! - [`cmd`] is the presentation layer: each subcommand reads a
//!   filtered snapshot or issues one discrete command into a store,
//!   and wires up the notifications a workflow step produces.
//!
//! ## Quick start
//!
//! ```bash
//! wd login dev@example.com
//! wd tasks
//! wd task status 1 in-progress
//! wd task extend 1 --reason "waiting on access" --due 2024-07-01
//! wd inbox
//! ```
//!
//! Mutating operations return an explicit [`error::Error`] instead of
//! silently skipping unknown ids, so callers can tell "applied" apart
//! from "nothing matched".

pub mod access;
pub mod board;
pub mod cli;
pub mod cmd;
pub mod error;
pub mod fields;
pub mod inbox;
pub mod notification;
pub mod queue;
pub mod seed;
pub mod session;
pub mod task;
pub mod ticket;
pub mod user;
