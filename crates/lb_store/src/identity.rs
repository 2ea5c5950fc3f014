//! Identity boundary.
//!
//! The vault core never authenticates a credential itself: a transport
//! layer runs an [`IdentityInterceptor`] before invoking any
//! [`crate::service::VaultService`] operation and passes along the verified
//! `user_id`. The interceptor either yields an identity or a terminal
//! rejection; it is an explicit step in front of the core, not a wrapper
//! around it.

use async_trait::async_trait;
use thiserror::Error;

/// A verified caller, as established by the identity collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i64,
}

/// Terminal authentication failure; the core operation is never reached.
#[derive(Debug, Error)]
pub enum AuthRejected {
    #[error("Missing or invalid token")]
    InvalidToken,

    #[error("Token expired")]
    Expired,
}

/// Runs before a vault operation and resolves the caller's identity.
#[async_trait]
pub trait IdentityInterceptor: Send + Sync {
    async fn authenticate(&self, bearer_token: &str) -> Result<Identity, AuthRejected>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test double standing in for the real token verifier.
    struct StaticInterceptor {
        accept: Option<i64>,
    }

    #[async_trait]
    impl IdentityInterceptor for StaticInterceptor {
        async fn authenticate(&self, _bearer_token: &str) -> Result<Identity, AuthRejected> {
            match self.accept {
                Some(user_id) => Ok(Identity { user_id }),
                None => Err(AuthRejected::InvalidToken),
            }
        }
    }

    #[tokio::test]
    async fn interceptor_yields_identity_or_rejection() {
        let allow = StaticInterceptor { accept: Some(1) };
        assert_eq!(
            allow.authenticate("any-token").await.expect("identity"),
            Identity { user_id: 1 }
        );

        let deny = StaticInterceptor { accept: None };
        assert!(matches!(
            deny.authenticate("any-token").await,
            Err(AuthRejected::InvalidToken)
        ));
    }
}
