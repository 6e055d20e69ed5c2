//! Authorization gate
//!
//! Loads an agreement on behalf of a caller. Absent and foreign agreements
//! produce the same error so callers cannot probe for ids they do not own.

use crate::ports::agreement_repository::{AgreementRepository, RepositoryError};
use covenant_domain::{Agreement, AgreementId, OwnerId};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors from [`AuthorizationGate::load`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationError {
    /// Missing or owned by someone else
    #[error("Agreement not found or not authorized")]
    NotFound,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Ownership check in front of the agreement store
#[derive(Clone)]
pub struct AuthorizationGate {
    repository: Arc<dyn AgreementRepository>,
}

impl AuthorizationGate {
    pub fn new(repository: Arc<dyn AgreementRepository>) -> Self {
        Self { repository }
    }

    /// Return the agreement if it exists and `identity` owns it.
    pub async fn load(
        &self,
        agreement_id: &AgreementId,
        identity: &OwnerId,
    ) -> Result<Agreement, AuthorizationError> {
        match self.repository.find_by_id(agreement_id).await? {
            Some(agreement) if agreement.is_owned_by(identity) => Ok(agreement),
            Some(_) => {
                debug!(agreement = %agreement_id, "Agreement owned by another user");
                Err(AuthorizationError::NotFound)
            }
            None => {
                debug!(agreement = %agreement_id, "Agreement not found");
                Err(AuthorizationError::NotFound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::testing::{FailingRepository, FakeRepository, agreement};

    fn gate(repository: FakeRepository) -> AuthorizationGate {
        AuthorizationGate::new(Arc::new(repository))
    }

    fn id(value: &str) -> AgreementId {
        AgreementId::new(value).unwrap()
    }

    fn owner(value: &str) -> OwnerId {
        OwnerId::new(value).unwrap()
    }

    #[tokio::test]
    async fn test_owner_gets_agreement() {
        let gate = gate(FakeRepository::with(vec![agreement("a1", "alice", "Text")]));

        let loaded = gate.load(&id("a1"), &owner("alice")).await.unwrap();
        assert_eq!(loaded.original_text(), "Text");
    }

    #[tokio::test]
    async fn test_foreign_and_missing_are_indistinguishable() {
        let gate = gate(FakeRepository::with(vec![agreement("a1", "alice", "Text")]));

        let foreign = gate.load(&id("a1"), &owner("bob")).await.unwrap_err();
        let missing = gate.load(&id("nope"), &owner("bob")).await.unwrap_err();

        assert_eq!(foreign, AuthorizationError::NotFound);
        assert_eq!(foreign, missing);
        assert_eq!(foreign.to_string(), missing.to_string());
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let gate = AuthorizationGate::new(Arc::new(FailingRepository));

        let error = gate.load(&id("a1"), &owner("alice")).await.unwrap_err();
        assert!(matches!(error, AuthorizationError::Repository(_)));
    }
}
