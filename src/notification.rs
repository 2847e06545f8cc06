//! Notification entity.

use serde::{Deserialize, Serialize};

use crate::fields::NotificationKind;

/// A message addressed to exactly one user. A user only ever observes
/// notifications whose `user` matches their own id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    /// Target user.
    pub user: u64,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    /// Id of the task or ticket this is about, per `kind`.
    pub related: Option<u64>,
    pub read: bool,
    pub created_at_utc: i64,
}
