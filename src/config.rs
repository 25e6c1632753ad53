//! # Satplot process configuration
//!
//! This module defines [`Credentials`], the **explicit configuration object**
//! holding the Space-Track account identity. It is read **once at process
//! start** from the environment and then passed by reference to the fetcher,
//! so no module-level mutable state exists.
//!
//! ## Notes
//!
//! - Absent environment variables are carried as empty strings, not rejected:
//!   an empty identity simply produces a failed login downstream, which the
//!   request handler renders as a per-timestamp "no data" placeholder.

use std::env;

/// Environment variable holding the Space-Track account identity.
pub const USERNAME_VAR: &str = "USERNAME";

/// Environment variable holding the Space-Track account password.
pub const PASSWORD_VAR: &str = "PASSWORD";

/// Space-Track account credentials, immutable after startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub identity: String,
    pub password: String,
}

impl Credentials {
    /// Read the credentials from the process environment.
    ///
    /// Return
    /// ------
    /// * A [`Credentials`] value; variables that are unset or not valid
    ///   unicode become empty strings.
    pub fn from_env() -> Self {
        Credentials {
            identity: env::var(USERNAME_VAR).unwrap_or_default(),
            password: env::var(PASSWORD_VAR).unwrap_or_default(),
        }
    }
}
