//! JSON file agreement store
//!
//! Reads a JSON array of agreements once at startup:
//!
//! ```json
//! [
//!   {
//!     "id": "665f1c...",
//!     "ownerId": "6650aa...",
//!     "originalText": "Rent is due on the 1st of each month.",
//!     "uploadDate": "2024-05-01T09:00:00Z"
//!   }
//! ]
//! ```

use super::memory::InMemoryAgreementStore;
use async_trait::async_trait;
use covenant_application::{AgreementRepository, RepositoryError};
use covenant_domain::{Agreement, AgreementId};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Duplicate agreement id in {path}: {id}")]
    DuplicateId { path: PathBuf, id: String },
}

/// Agreement store loaded from a JSON file
#[derive(Debug, Clone)]
pub struct JsonAgreementStore {
    path: PathBuf,
    inner: InMemoryAgreementStore,
}

impl JsonAgreementStore {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let raw = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        let agreements: Vec<Agreement> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?;

        let mut seen = HashSet::new();
        for agreement in &agreements {
            if !seen.insert(agreement.id().clone()) {
                return Err(StoreError::DuplicateId {
                    path,
                    id: agreement.id().to_string(),
                });
            }
        }

        let inner: InMemoryAgreementStore = agreements.into_iter().collect();
        info!(path = %path.display(), agreements = inner.len(), "Loaded agreement store");
        Ok(Self { path, inner })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[async_trait]
impl AgreementRepository for JsonAgreementStore {
    async fn find_by_id(&self, id: &AgreementId) -> Result<Option<Agreement>, RepositoryError> {
        self.inner.find_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_and_find() {
        let file = write(
            r#"[
                {
                    "id": "agr-1",
                    "ownerId": "alice",
                    "originalText": "Notice period is 30 days.",
                    "uploadDate": "2024-05-01T09:00:00Z"
                }
            ]"#,
        );

        let store = JsonAgreementStore::load(file.path()).unwrap();
        assert_eq!(store.len(), 1);

        let agreement = store
            .find_by_id(&AgreementId::new("agr-1").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(agreement.original_text(), "Notice period is 30 days.");
        assert_eq!(agreement.owner_id().as_str(), "alice");
    }

    #[test]
    fn test_missing_file() {
        let result = JsonAgreementStore::load("/nonexistent/agreements.json");
        assert!(matches!(result, Err(StoreError::Io { .. })));
    }

    #[test]
    fn test_blank_owner_rejected() {
        let file = write(
            r#"[{ "id": "a", "ownerId": " ", "originalText": "", "uploadDate": "2024-05-01T09:00:00Z" }]"#,
        );
        assert!(matches!(
            JsonAgreementStore::load(file.path()),
            Err(StoreError::Parse { .. })
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let file = write(
            r#"[
                { "id": "a", "ownerId": "x", "originalText": "1", "uploadDate": "2024-05-01T09:00:00Z" },
                { "id": "a", "ownerId": "y", "originalText": "2", "uploadDate": "2024-05-01T09:00:00Z" }
            ]"#,
        );
        assert!(matches!(
            JsonAgreementStore::load(file.path()),
            Err(StoreError::DuplicateId { id, .. }) if id == "a"
        ));
    }

    #[test]
    fn test_empty_array() {
        let file = write("[]");
        assert!(JsonAgreementStore::load(file.path()).unwrap().is_empty());
    }
}
