//! # Session Gate
//!
//! A single fixed operator identity guards the whole console. The gate allows
//! a bounded number of login attempts; once they are used up it stays locked
//! for the rest of the process, even if correct credentials arrive later.

use tracing::{info, warn};

pub const DEFAULT_OPERATOR: &str = "jadu";
pub const DEFAULT_PASSWORD: &str = "12345";
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub operator: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            operator: DEFAULT_OPERATOR.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

impl Credentials {
    pub fn new(operator: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
            password: password.into(),
        }
    }

    fn matches(&self, operator: &str, password: &str) -> bool {
        self.operator == operator && self.password == password
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Granted,
    Denied { remaining: u32 },
    LockedOut,
}

#[derive(Debug, Clone)]
pub struct SessionGate {
    credentials: Credentials,
    max_attempts: u32,
    failures: u32,
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new(Credentials::default(), DEFAULT_MAX_ATTEMPTS)
    }
}

impl SessionGate {
    pub fn new(credentials: Credentials, max_attempts: u32) -> Self {
        Self {
            credentials,
            max_attempts,
            failures: 0,
        }
    }

    pub fn attempt(&mut self, operator: &str, password: &str) -> LoginOutcome {
        if self.is_locked() {
            return LoginOutcome::LockedOut;
        }

        if self.credentials.matches(operator, password) {
            info!(operator, "operator logged in");
            return LoginOutcome::Granted;
        }

        self.failures += 1;
        let remaining = self.max_attempts.saturating_sub(self.failures);
        warn!(operator, remaining, "login rejected");
        if remaining == 0 {
            LoginOutcome::LockedOut
        } else {
            LoginOutcome::Denied { remaining }
        }
    }

    pub fn is_locked(&self) -> bool {
        self.failures >= self.max_attempts
    }

    pub fn remaining(&self) -> u32 {
        self.max_attempts.saturating_sub(self.failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grants_default_operator() {
        let mut gate = SessionGate::default();
        assert_eq!(gate.attempt("jadu", "12345"), LoginOutcome::Granted);
    }

    #[test]
    fn counts_down_then_locks() {
        let mut gate = SessionGate::default();
        assert_eq!(
            gate.attempt("jadu", "nope"),
            LoginOutcome::Denied { remaining: 2 }
        );
        assert_eq!(
            gate.attempt("admin", "12345"),
            LoginOutcome::Denied { remaining: 1 }
        );
        assert_eq!(gate.attempt("jadu", "x"), LoginOutcome::LockedOut);
        assert!(gate.is_locked());
    }

    #[test]
    fn stays_locked_after_lockout() {
        let mut gate = SessionGate::default();
        for _ in 0..3 {
            gate.attempt("x", "y");
        }
        assert_eq!(gate.attempt("jadu", "12345"), LoginOutcome::LockedOut);
    }

    #[test]
    fn success_on_last_attempt() {
        let mut gate = SessionGate::default();
        gate.attempt("x", "y");
        gate.attempt("x", "y");
        assert_eq!(gate.remaining(), 1);
        assert_eq!(gate.attempt("jadu", "12345"), LoginOutcome::Granted);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let mut gate = SessionGate::default();
        assert_eq!(
            gate.attempt("JADU", "12345"),
            LoginOutcome::Denied { remaining: 2 }
        );
    }

    #[test]
    fn custom_credentials() {
        let mut gate = SessionGate::new(Credentials::new("ops", "pw"), 1);
        assert_eq!(gate.attempt("jadu", "12345"), LoginOutcome::LockedOut);
    }
}
