//! In-memory agreement store

use async_trait::async_trait;
use covenant_application::{AgreementRepository, RepositoryError};
use covenant_domain::{Agreement, AgreementId};
use std::collections::HashMap;

/// Agreement store backed by a `HashMap`
#[derive(Debug, Clone, Default)]
pub struct InMemoryAgreementStore {
    agreements: HashMap<AgreementId, Agreement>,
}

impl InMemoryAgreementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an agreement
    pub fn insert(&mut self, agreement: Agreement) {
        self.agreements.insert(agreement.id().clone(), agreement);
    }

    pub fn with(mut self, agreement: Agreement) -> Self {
        self.insert(agreement);
        self
    }

    pub fn len(&self) -> usize {
        self.agreements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agreements.is_empty()
    }
}

impl FromIterator<Agreement> for InMemoryAgreementStore {
    fn from_iter<I: IntoIterator<Item = Agreement>>(iter: I) -> Self {
        let mut store = Self::new();
        for agreement in iter {
            store.insert(agreement);
        }
        store
    }
}

#[async_trait]
impl AgreementRepository for InMemoryAgreementStore {
    async fn find_by_id(&self, id: &AgreementId) -> Result<Option<Agreement>, RepositoryError> {
        Ok(self.agreements.get(id).cloned())
    }
}
