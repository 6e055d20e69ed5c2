//! Agreement repository port
//!
//! Read-only access to the agreement store. Creating and storing agreements
//! happens elsewhere.

use async_trait::async_trait;
use covenant_domain::{Agreement, AgreementId};
use thiserror::Error;

/// Errors raised by an agreement store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Lookup of agreements by id
#[async_trait]
pub trait AgreementRepository: Send + Sync {
    /// Find an agreement; `Ok(None)` when no record exists.
    async fn find_by_id(&self, id: &AgreementId) -> Result<Option<Agreement>, RepositoryError>;
}
