//! Agreement entity

use super::value_objects::{AgreementId, OwnerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored legal agreement (Entity)
///
/// `original_text` never changes after creation, so readers may share
/// the record freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agreement {
    id: AgreementId,
    owner_id: OwnerId,
    original_text: String,
    upload_date: DateTime<Utc>,
}

impl Agreement {
    pub fn new(
        id: AgreementId,
        owner_id: OwnerId,
        original_text: impl Into<String>,
        upload_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner_id,
            original_text: original_text.into(),
            upload_date,
        }
    }

    pub fn id(&self) -> &AgreementId {
        &self.id
    }

    pub fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn upload_date(&self) -> DateTime<Utc> {
        self.upload_date
    }

    /// Whether `identity` owns this agreement
    pub fn is_owned_by(&self, identity: &OwnerId) -> bool {
        &self.owner_id == identity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Agreement {
        Agreement::new(
            AgreementId::new("agr-1").unwrap(),
            OwnerId::new("alice").unwrap(),
            "Rent is due on the 1st of each month.",
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_ownership() {
        let agreement = sample();
        assert!(agreement.is_owned_by(&OwnerId::new("alice").unwrap()));
        assert!(!agreement.is_owned_by(&OwnerId::new("mallory").unwrap()));
    }

    #[test]
    fn test_serde_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], "agr-1");
        assert_eq!(json["ownerId"], "alice");
        assert_eq!(json["originalText"], "Rent is due on the 1st of each month.");
        assert_eq!(json["uploadDate"], "2024-03-01T12:00:00Z");
    }

    #[test]
    fn test_deserialize() {
        let json = r#"{
            "id": "agr-2",
            "ownerId": "bob",
            "originalText": "Notice period is 30 days.",
            "uploadDate": "2024-05-10T08:30:00Z"
        }"#;
        let agreement: Agreement = serde_json::from_str(json).unwrap();
        assert_eq!(agreement.id().as_str(), "agr-2");
        assert_eq!(agreement.original_text(), "Notice period is 30 days.");
    }
}
