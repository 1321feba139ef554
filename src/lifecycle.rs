//! Screen lifetimes — discarding responses that outlive their screen.
//!
//! Navigating away does not cancel an in-flight request; the response still
//! arrives. Containers capture a [`LifetimeToken`] before awaiting and check
//! it before applying the result, so a response for a torn-down screen is
//! dropped instead of mutating dead state.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// The active lifetime of one screen instance.
///
/// Cloning shares the underlying generation counter, so the owner of a
/// screen can keep a handle and invalidate it on unmount while a request
/// started by the screen is still running.
#[derive(Debug, Clone, Default)]
pub struct ScreenLifetime {
    generation: Arc<AtomicU64>,
}

impl ScreenLifetime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token tied to the current generation.
    pub fn token(&self) -> LifetimeToken {
        LifetimeToken {
            generation: Arc::clone(&self.generation),
            issued_at: self.generation.load(Ordering::Acquire),
        }
    }

    /// Invalidate every token issued so far.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }
}

/// A token marking one request's place in a screen's lifetime.
#[derive(Debug, Clone)]
pub struct LifetimeToken {
    generation: Arc<AtomicU64>,
    issued_at: u64,
}

impl LifetimeToken {
    /// Whether the screen this token was issued for is still live.
    pub fn is_live(&self) -> bool {
        self.generation.load(Ordering::Acquire) == self.issued_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_token_is_live() {
        let lifetime = ScreenLifetime::new();
        assert!(lifetime.token().is_live());
    }

    #[test]
    fn invalidate_kills_outstanding_tokens() {
        let lifetime = ScreenLifetime::new();
        let token = lifetime.token();
        lifetime.invalidate();
        assert!(!token.is_live());
    }

    #[test]
    fn tokens_issued_after_invalidate_are_live() {
        let lifetime = ScreenLifetime::new();
        let stale = lifetime.token();
        lifetime.invalidate();
        let fresh = lifetime.token();
        assert!(!stale.is_live());
        assert!(fresh.is_live());
    }

    #[test]
    fn clone_shares_the_generation() {
        let lifetime = ScreenLifetime::new();
        let handle = lifetime.clone();
        let token = lifetime.token();
        handle.invalidate();
        assert!(!token.is_live());
    }
}
