//! Per-shell session token.

use std::rc::Rc;

use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Opaque token identifying one shell instance to the file store.
///
/// The token lives as long as the page; it is never persisted, so a reload starts a new session.
pub struct SessionContext {
    token: Rc<str>,
}

impl SessionContext {
    /// Generates a fresh random token.
    pub fn generate() -> Self {
        Self::from_token(Uuid::new_v4().to_string())
    }

    /// Wraps an existing token.
    pub fn from_token(token: impl Into<String>) -> Self {
        Self {
            token: Rc::from(token.into()),
        }
    }

    /// Returns the token text sent as `session_id`.
    pub fn token(&self) -> &str {
        &self.token
    }
}

thread_local! {
    static SHELL_SESSION: SessionContext = SessionContext::generate();
}

/// Returns the session for the current shell, created on first use.
pub fn shell_session() -> SessionContext {
    SHELL_SESSION.with(|session| session.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_session_is_stable_for_the_thread() {
        assert_eq!(shell_session(), shell_session());
        assert!(!shell_session().token().is_empty());
    }

    #[test]
    fn generated_tokens_are_unique() {
        assert_ne!(SessionContext::generate(), SessionContext::generate());
        assert_eq!(SessionContext::from_token("abc").token(), "abc");
    }
}
