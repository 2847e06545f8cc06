//! Session identity: login, logout and the persisted slot.
//!
//! The session file is the only durable state in the system; every
//! collection reseeds on process start. The file holds one serialized
//! identity and lives in the data directory under a well-known name.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::{Error, Result};
use crate::user::{Roster, User};

/// File name of the persisted identity inside the data directory.
const SESSION_FILE: &str = "session.json";

/// The active identity and its backing file.
#[derive(Debug)]
pub struct Session {
    path: PathBuf,
    current: Option<User>,
}

impl Session {
    /// Restore the session from the data directory. A missing or
    /// unreadable file means a logged-out session, not an error, and
    /// an identity that is no longer in the roster is dropped.
    pub fn load(dir: &Path, roster: &Roster) -> Self {
        let path = dir.join(SESSION_FILE);
        let mut current = None;
        if path.exists() {
            let mut buf = String::new();
            if File::open(&path).and_then(|mut f| f.read_to_string(&mut buf)).is_ok() {
                if let Ok(user) = serde_json::from_str::<User>(&buf) {
                    if roster.get(user.id).is_some() {
                        current = Some(user);
                    }
                }
            }
        }
        Session { path, current }
    }

    /// Look the email up in the roster and persist the identity.
    ///
    /// The password is accepted but never checked: there is no
    /// credential store in this system, so possession of a roster
    /// email is the whole login. A lookup miss reports
    /// `InvalidCredentials` without saying which part was wrong.
    pub fn login(&mut self, roster: &Roster, email: &str, _password: &str) -> Result<User> {
        let mut user = roster
            .find_by_email(email)
            .ok_or(Error::InvalidCredentials)?
            .clone();
        user.last_login_utc = Some(Utc::now().timestamp());
        self.save(&user)?;
        self.current = Some(user.clone());
        Ok(user)
    }

    /// Atomic write via temp file + rename.
    fn save(&self, user: &User) -> Result<()> {
        let tmp = self.path.with_extension("json.tmp");
        let data = serde_json::to_string_pretty(user)?;
        let mut f = File::create(&tmp)?;
        f.write_all(data.as_bytes())?;
        f.flush()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// The active identity, if any.
    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// The active identity, or the error every command except login
    /// maps to the same "log in first" message.
    pub fn require(&self) -> Result<&User> {
        self.current.as_ref().ok_or(Error::NotLoggedIn)
    }

    /// Clear the identity and remove the persisted slot.
    pub fn logout(&mut self) -> Result<()> {
        self.current = None;
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// Capability flag: true for Admin and CEO.
    pub fn is_admin(&self) -> bool {
        self.current.as_ref().is_some_and(|u| u.role.is_admin())
    }

    /// Capability flag: true for the CEO only.
    pub fn is_executive(&self) -> bool {
        self.current.as_ref().is_some_and(|u| u.role.is_executive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn login_round_trips_through_the_slot() {
        let dir = tempfile::tempdir().unwrap();
        let roster = Roster::new(seed::users());

        let mut session = Session::load(dir.path(), &roster);
        assert!(session.current().is_none());
        let user = session.login(&roster, "dev@example.com", "whatever").unwrap();
        assert_eq!(user.email, "dev@example.com");
        assert!(user.last_login_utc.is_some());

        // A fresh process restores the same identity.
        let restored = Session::load(dir.path(), &roster);
        assert_eq!(restored.current().map(|u| u.id), Some(user.id));
    }

    #[test]
    fn any_password_is_accepted_for_a_known_email() {
        // Known weakness, pinned on purpose: there is no credential
        // store, so the password plays no part in the lookup.
        let dir = tempfile::tempdir().unwrap();
        let roster = Roster::new(seed::users());
        let mut session = Session::load(dir.path(), &roster);
        assert!(session.login(&roster, "ceo@example.com", "").is_ok());
        assert!(session.login(&roster, "ceo@example.com", "wrong").is_ok());
    }

    #[test]
    fn unknown_email_is_invalid_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let roster = Roster::new(seed::users());
        let mut session = Session::load(dir.path(), &roster);
        let err = session.login(&roster, "ghost@example.com", "pw").unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials));
        assert!(session.current().is_none());
    }

    #[test]
    fn logout_removes_the_slot() {
        let dir = tempfile::tempdir().unwrap();
        let roster = Roster::new(seed::users());
        let mut session = Session::load(dir.path(), &roster);
        session.login(&roster, "admin@example.com", "pw").unwrap();
        session.logout().unwrap();
        assert!(session.current().is_none());
        assert!(!dir.path().join(SESSION_FILE).exists());

        let restored = Session::load(dir.path(), &roster);
        assert!(restored.current().is_none());
    }

    #[test]
    fn corrupt_slot_means_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SESSION_FILE), "{ not json").unwrap();
        let roster = Roster::new(seed::users());
        let session = Session::load(dir.path(), &roster);
        assert!(session.current().is_none());
    }

    #[test]
    fn capability_flags_follow_the_role() {
        let dir = tempfile::tempdir().unwrap();
        let roster = Roster::new(seed::users());
        let mut session = Session::load(dir.path(), &roster);
        assert!(!session.is_admin());

        session.login(&roster, "admin@example.com", "pw").unwrap();
        assert!(session.is_admin());
        assert!(!session.is_executive());

        session.login(&roster, "ceo@example.com", "pw").unwrap();
        assert!(session.is_admin());
        assert!(session.is_executive());

        session.login(&roster, "dev@example.com", "pw").unwrap();
        assert!(!session.is_admin());
        assert!(!session.is_executive());
    }
}
