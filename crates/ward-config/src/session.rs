//! Login against the config's credential table.
//!
//! The credential table is injected from the loaded config; there is no
//! process-wide login state. An empty table means a single-operator
//! install where every user gets a staff session.

use thiserror::Error;

use crate::config::{Role, WardConfig};

/// Errors that can occur during login.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The user is not in the credential table.
    #[error("unknown user {user:?}")]
    UnknownUser {
        /// The rejected user name.
        user: String,
    },

    /// The password did not match.
    #[error("wrong password for user {user:?}")]
    WrongPassword {
        /// The user whose password was wrong.
        user: String,
    },
}

/// A resolved identity and role for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: String,
    role: Role,
}

impl Session {
    /// Resolves a session against the config's credential table.
    ///
    /// With an empty table every user logs in as staff and the password
    /// is ignored. With a non-empty table the user must exist and the
    /// password must match.
    pub fn login(
        config: &WardConfig,
        user: impl Into<String>,
        password: Option<&str>,
    ) -> Result<Self, SessionError> {
        let user = user.into();
        if config.users.is_empty() {
            return Ok(Self {
                user,
                role: Role::Staff,
            });
        }
        let entry = config
            .users
            .get(&user)
            .ok_or_else(|| SessionError::UnknownUser { user: user.clone() })?;
        if password != Some(entry.password.as_str()) {
            return Err(SessionError::WrongPassword { user });
        }
        Ok(Self {
            user,
            role: entry.role,
        })
    }

    /// Returns the logged-in user name.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the resolved role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns `true` if this session may run mutating commands.
    pub fn can_mutate(&self) -> bool {
        self.role.can_mutate()
    }
}
