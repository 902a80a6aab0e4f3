//! Annealing service credentials.
//!
//! The token is injected through the environment, never compiled in.

use crate::error::{ItineraryError, Result};
use std::env;
use std::fmt;

/// Environment variable holding the service token
pub const TOKEN_ENV_VAR: &str = "DWAVE_API_TOKEN";

#[derive(Clone)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Loads the token from `DWAVE_API_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is unset or holds an invalid token.
    pub fn from_env() -> Result<Self> {
        Self::from_var(TOKEN_ENV_VAR)
    }

    /// Loads the token from the named environment variable
    pub fn from_var(name: &'static str) -> Result<Self> {
        let token = env::var(name).map_err(|_| ItineraryError::TokenNotFound(name))?;
        let creds = Self::new(token);
        creds.validate()?;
        Ok(creds)
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn validate(&self) -> Result<()> {
        if self.token.trim().is_empty() {
            return Err(ItineraryError::InvalidToken("Token is empty".into()));
        }
        if self.token.chars().any(char::is_whitespace) {
            return Err(ItineraryError::InvalidToken(
                "Token contains whitespace".into(),
            ));
        }
        Ok(())
    }
}

// keep the token out of logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(Credentials::new("DEV-0123456789abcdef").validate().is_ok());
        assert!(Credentials::new("").validate().is_err());
        assert!(Credentials::new("   ").validate().is_err());
        assert!(Credentials::new("abc def").validate().is_err());
    }

    #[test]
    fn test_missing_variable() {
        let err = Credentials::from_var("ITINERARY_QUBO_TEST_UNSET_TOKEN").unwrap_err();
        assert!(matches!(
            err,
            ItineraryError::TokenNotFound("ITINERARY_QUBO_TEST_UNSET_TOKEN")
        ));
    }

    #[test]
    fn test_debug_redacts_token() {
        let creds = Credentials::new("secret-token-value");
        let printed = format!("{creds:?}");
        assert!(!printed.contains("secret-token-value"));
        assert!(printed.contains("redacted"));
    }
}
