//! Credential selection for login attempts.
//!
//! A [`CredentialProvider`] either always returns one fixed pair, or draws
//! uniformly at random from a pool on every attempt. Rotation on every retry
//! is intentional: a single bad or rate-limited account must not be retried
//! into the ground. The pool is read-only after construction.

use crate::auth::Credentials;
use crate::error::GateError;
use rand::seq::SliceRandom;

/// Chooses the credential pair for each login attempt.
#[derive(Debug, Clone)]
pub enum CredentialProvider {
    /// Always use this pair.
    Fixed(Credentials),
    /// Draw uniformly at random from this non-empty pool per attempt.
    Pool(Vec<Credentials>),
}

impl CredentialProvider {
    /// Creates a pool provider, rejecting an empty pool.
    pub fn pool(accounts: Vec<Credentials>) -> Result<Self, GateError> {
        if accounts.is_empty() {
            return Err(GateError::Configuration(
                "credential pool must not be empty".to_string(),
            ));
        }
        Ok(CredentialProvider::Pool(accounts))
    }

    /// Selects the credentials for the next attempt.
    pub fn select(&self) -> Credentials {
        match self {
            CredentialProvider::Fixed(credentials) => credentials.clone(),
            CredentialProvider::Pool(accounts) => {
                let mut rng = rand::thread_rng();
                // Pool is validated non-empty at construction.
                accounts
                    .choose(&mut rng)
                    .expect("credential pool is non-empty")
                    .clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn fixed_pair_is_always_returned() {
        let provider = CredentialProvider::Fixed(Credentials::new("a", "p1"));
        for _ in 0..10 {
            assert_eq!(provider.select(), Credentials::new("a", "p1"));
        }
    }

    #[test]
    fn empty_pool_is_rejected() {
        assert!(matches!(
            CredentialProvider::pool(Vec::new()),
            Err(GateError::Configuration(_))
        ));
    }

    #[test]
    fn pool_rotation_is_roughly_uniform() {
        let provider = CredentialProvider::pool(vec![
            Credentials::new("a", "p1"),
            Credentials::new("b", "p2"),
            Credentials::new("c", "p3"),
        ])
        .unwrap();

        let mut counts: HashMap<String, usize> = HashMap::new();
        for _ in 0..3000 {
            *counts.entry(provider.select().username).or_default() += 1;
        }

        assert_eq!(counts.len(), 3);
        for (_, count) in counts {
            // Each of 3 accounts should land near 1000 of 3000 draws.
            assert!(count > 700 && count < 1300);
        }
    }
}
