//! Registered members for the current session

use super::storage::{SessionStorage, StorageError};
use crate::state::FormValues;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key holding the JSON array of submissions
pub const SUBMISSIONS_KEY: &str = "loyaltySubmissions";

/// Prefix of every membership id
const ID_PREFIX: &str = "LY-";

/// Errors returned when the submission list cannot be written
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to encode submissions: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("no membership id left after {0}")]
    IdsExhausted(i64),
}

/// A registered membership
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    #[serde(flatten)]
    pub values: FormValues,
}

impl Submission {
    /// Numeric part of an `LY-<token>` id
    fn token(&self) -> Option<i64> {
        self.id.strip_prefix(ID_PREFIX)?.parse().ok()
    }
}

/// Ordered list of submissions kept in session storage
pub struct SubmissionStore {
    storage: Box<dyn SessionStorage>,
    last_token: i64,
}

impl SubmissionStore {
    pub fn new(storage: Box<dyn SessionStorage>) -> Self {
        Self {
            storage,
            last_token: 0,
        }
    }

    /// Record a validated form under a fresh id
    pub fn append(&mut self, values: FormValues) -> Result<Submission, StoreError> {
        self.append_at(values, Utc::now())
    }

    fn append_at(&mut self, values: FormValues, now: DateTime<Utc>) -> Result<Submission, StoreError> {
        // A read failure must not overwrite earlier members with a fresh list
        let mut submissions = self.load()?;

        // Ids stay strictly increasing even if the clock stalls or steps back
        let highest_stored = submissions.iter().filter_map(Submission::token).max();
        let floor = highest_stored.unwrap_or(0).max(self.last_token);
        let next = floor.checked_add(1).ok_or(StoreError::IdsExhausted(floor))?;
        let token = now.timestamp_millis().max(next);
        self.last_token = token;

        let submission = Submission {
            id: format!("{ID_PREFIX}{token}"),
            values,
        };
        submissions.push(submission.clone());
        self.save(&submissions)?;

        tracing::info!("Registered loyalty member {}", submission.id);
        Ok(submission)
    }

    /// Snapshot of every submission in insertion order
    ///
    /// Missing, unreadable or corrupted storage reads as an empty list.
    pub fn list_all(&self) -> Vec<Submission> {
        self.load().unwrap_or_else(|e| {
            tracing::warn!("Submission storage unreadable, treating as empty: {e}");
            Vec::new()
        })
    }

    /// Stored submissions; corrupted data reads as empty, read failures propagate
    fn load(&self) -> Result<Vec<Submission>, StorageError> {
        let Some(raw) = self.storage.read(SUBMISSIONS_KEY)? else {
            return Ok(Vec::new());
        };

        Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!("Submission storage corrupted, treating as empty: {e}");
            Vec::new()
        }))
    }

    /// Remove every submission
    pub fn clear_all(&mut self) -> Result<(), StoreError> {
        self.save(&[])?;
        tracing::info!("Cleared all loyalty members");
        Ok(())
    }

    fn save(&mut self, submissions: &[Submission]) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(submissions)?;
        self.storage.write(SUBMISSIONS_KEY, &encoded)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStorage, MockSessionStorage};
    use chrono::TimeZone;

    fn memory_store() -> SubmissionStore {
        SubmissionStore::new(Box::new(MemoryStorage::new()))
    }

    fn values(first_name: &str) -> FormValues {
        FormValues {
            first_name: first_name.to_string(),
            last_name: "Doe".to_string(),
            membership_type: "Gold".to_string(),
            ..Default::default()
        }
    }

    fn at_millis(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    fn store_with_raw(raw: &str) -> SubmissionStore {
        let mut storage = MemoryStorage::new();
        storage.write(SUBMISSIONS_KEY, raw).unwrap();
        SubmissionStore::new(Box::new(storage))
    }

    mod append {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_append_assigns_prefixed_id() {
            let mut store = memory_store();
            let submission = store.append_at(values("Jane"), at_millis(1_700_000_000_000)).unwrap();
            assert_eq!(submission.id, "LY-1700000000000");
            assert_eq!(submission.values, values("Jane"));
        }

        #[test]
        fn test_append_preserves_order() {
            let mut store = memory_store();
            store.append(values("Ann")).unwrap();
            store.append(values("Bob")).unwrap();
            store.append(values("Cid")).unwrap();
            let names: Vec<_> = store
                .list_all()
                .into_iter()
                .map(|s| s.values.first_name)
                .collect();
            assert_eq!(names, vec!["Ann", "Bob", "Cid"]);
        }

        #[test]
        fn test_ids_unique_when_clock_stalls() {
            let mut store = memory_store();
            let now = at_millis(1_000);
            let first = store.append_at(values("Ann"), now).unwrap();
            let second = store.append_at(values("Bob"), now).unwrap();
            let third = store.append_at(values("Cid"), at_millis(500)).unwrap();
            assert_eq!(first.id, "LY-1000");
            assert_eq!(second.id, "LY-1001");
            assert_eq!(third.id, "LY-1002");
        }

        #[test]
        fn test_ids_continue_after_stored_entries() {
            let mut store = store_with_raw(r#"[{"id":"LY-5000","firstName":"Old"}]"#);
            let submission = store.append_at(values("New"), at_millis(10)).unwrap();
            assert_eq!(submission.id, "LY-5001");
            assert_eq!(store.list_all().len(), 2);
        }

        #[test]
        fn test_append_surfaces_write_failure() {
            let mut storage = MockSessionStorage::new();
            storage.expect_read().returning(|_| Ok(None));
            storage
                .expect_write()
                .returning(|_, _| Err(StorageError::Unavailable("disk gone".to_string())));
            let mut store = SubmissionStore::new(Box::new(storage));
            let result = store.append(values("Jane"));
            assert!(matches!(result, Err(StoreError::Storage(_))));
        }

        #[test]
        fn test_append_keeps_members_when_read_fails() {
            let mut storage = MockSessionStorage::new();
            storage
                .expect_read()
                .returning(|_| Err(StorageError::Unavailable("locked".to_string())));
            storage.expect_write().times(0);
            let mut store = SubmissionStore::new(Box::new(storage));
            let result = store.append(values("Jane"));
            assert!(matches!(result, Err(StoreError::Storage(_))));
        }

        #[test]
        fn test_append_rejects_exhausted_ids() {
            let mut store = store_with_raw(r#"[{"id":"LY-9223372036854775807","firstName":"Old"}]"#);
            let result = store.append_at(values("New"), at_millis(10));
            assert!(matches!(result, Err(StoreError::IdsExhausted(i64::MAX))));
            assert_eq!(store.list_all().len(), 1);
        }

        #[test]
        fn test_append_writes_under_submissions_key() {
            let mut storage = MockSessionStorage::new();
            storage.expect_read().returning(|_| Ok(None));
            storage
                .expect_write()
                .withf(|key, value| {
                    key.to_string() == SUBMISSIONS_KEY && value.contains("\"firstName\":\"Jane\"")
                })
                .times(1)
                .returning(|_, _| Ok(()));
            let mut store = SubmissionStore::new(Box::new(storage));
            store.append(values("Jane")).unwrap();
        }
    }

    mod list {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_store_lists_nothing() {
            assert!(memory_store().list_all().is_empty());
        }

        #[test]
        fn test_corrupted_storage_lists_nothing() {
            assert!(store_with_raw("{not json").list_all().is_empty());
            assert!(store_with_raw(r#"{"id":"LY-1"}"#).list_all().is_empty());
        }

        #[test]
        fn test_unreadable_storage_lists_nothing() {
            let mut storage = MockSessionStorage::new();
            storage.expect_read().returning(|_| {
                Err(StorageError::Unavailable("locked".to_string()))
            });
            let store = SubmissionStore::new(Box::new(storage));
            assert!(store.list_all().is_empty());
        }

        #[test]
        fn test_reads_flattened_records() {
            let store = store_with_raw(
                r#"[{"id":"LY-1","firstName":"Jane","lastName":"Doe","phoneCode":"+1","phone":"5551234567","genderType":"Female","country":"United States","region":"California","address":"1 Main St","city":"New York","postalCode":"10001","membershipType":"Gold"}]"#,
            );
            let all = store.list_all();
            assert_eq!(all.len(), 1);
            assert_eq!(all[0].id, "LY-1");
            assert_eq!(all[0].values.region, "California");
            assert_eq!(all[0].values.full_name(), "Jane Doe");
        }
    }

    mod clear {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_clear_then_list_is_empty() {
            let mut store = memory_store();
            store.append(values("Jane")).unwrap();
            store.clear_all().unwrap();
            assert!(store.list_all().is_empty());
        }

        #[test]
        fn test_clear_is_idempotent() {
            let mut store = memory_store();
            store.clear_all().unwrap();
            store.clear_all().unwrap();
            assert!(store.list_all().is_empty());
        }

        #[test]
        fn test_clear_recovers_corrupted_storage() {
            let mut store = store_with_raw("garbage");
            store.clear_all().unwrap();
            assert!(store.list_all().is_empty());
            store.append(values("Jane")).unwrap();
            assert_eq!(store.list_all().len(), 1);
        }

        #[test]
        fn test_ids_not_reused_after_clear() {
            let mut store = memory_store();
            let first = store.append_at(values("Ann"), at_millis(2_000)).unwrap();
            store.clear_all().unwrap();
            let second = store.append_at(values("Bob"), at_millis(2_000)).unwrap();
            assert_ne!(first.id, second.id);
        }
    }
}
