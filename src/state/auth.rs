use std::rc::Rc;

use sha2::{Digest, Sha256};

use super::storage::KeyValueStore;

pub const PASSWORD_KEY: &str = "password";

fn digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Password gate in front of the game surface.
///
/// The credential store holds a SHA-256 digest of the password; comparing
/// digests is equivalent to comparing the passwords themselves.
pub struct AuthGate {
    credentials: Rc<dyn KeyValueStore>,
    stored: Option<String>,
    authenticated: bool,
    /// Set when the stored password could not be read; the gate stays shut.
    read_failed: bool,
}

impl AuthGate {
    /// Reads the stored password. No password means the gate starts open.
    pub fn initialize(credentials: Rc<dyn KeyValueStore>) -> Self {
        match credentials.get(PASSWORD_KEY) {
            Ok(stored) => {
                let authenticated = stored.is_none();
                tracing::debug!(authenticated, "auth gate initialized");
                Self {
                    credentials,
                    stored,
                    authenticated,
                    read_failed: false,
                }
            }
            Err(err) => {
                tracing::error!(%err, "could not read stored password; gate stays closed");
                Self {
                    credentials,
                    stored: None,
                    authenticated: false,
                    read_failed: true,
                }
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn has_password(&self) -> bool {
        self.stored.is_some() || self.read_failed
    }

    /// No lockout or rate limiting: any number of attempts is allowed.
    pub fn check_password(&mut self, candidate: &str) -> bool {
        let matches = self
            .stored
            .as_deref()
            .is_some_and(|stored| stored == digest(candidate));
        if matches {
            self.authenticated = true;
        }
        matches
    }

    /// Persists a new password. Leaves `is_authenticated` untouched.
    ///
    /// # Panics
    ///
    /// Panics when the credential store rejects the write. A password the
    /// player believes is set but is not would leave the game unprotected.
    pub fn set_password(&mut self, password: &str) {
        let hashed = digest(password);
        if let Err(err) = self.credentials.set(PASSWORD_KEY, &hashed) {
            tracing::error!(%err, "failed to persist password");
            panic!("failed to persist password: {err}");
        }
        self.stored = Some(hashed);
        self.read_failed = false;
        tracing::info!("password updated");
    }
}
