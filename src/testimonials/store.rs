use thiserror::Error;
use web_sys::Storage;

use crate::config;
use crate::testimonials::record::TestimonialRecord;

/// Why a write to the archive failed. Reads never fail: an unreadable or
/// corrupt archive is treated as empty.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("could not encode testimonials: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("could not write testimonials: {0}")]
    Write(String),
}

/// Persistence port for the testimonial archive. `append` is the only
/// mutation submission needs; it replaces the stored array in one step.
pub trait TestimonialStore {
    fn load(&self) -> Vec<TestimonialRecord>;
    fn save(&self, records: &[TestimonialRecord]) -> Result<(), StoreError>;

    fn append(&self, record: TestimonialRecord) -> Result<(), StoreError> {
        let mut records = self.load();
        records.push(record);
        self.save(&records)
    }
}

fn parse_archive(raw: &str) -> Vec<TestimonialRecord> {
    serde_json::from_str(raw).unwrap_or_default()
}

/// Browser-backed store: one JSON array under a fixed localStorage key.
pub struct LocalTestimonialStore;

impl LocalTestimonialStore {
    fn storage() -> Option<Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

impl TestimonialStore for LocalTestimonialStore {
    fn load(&self) -> Vec<TestimonialRecord> {
        match Self::storage().and_then(|s| s.get_item(config::TESTIMONIAL_STORAGE_KEY).ok()).flatten() {
            Some(raw) => parse_archive(&raw),
            None => Vec::new(),
        }
    }

    fn save(&self, records: &[TestimonialRecord]) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        let raw = serde_json::to_string(records)?;
        storage
            .set_item(config::TESTIMONIAL_STORAGE_KEY, &raw)
            .map_err(|err| StoreError::Write(format!("{:?}", err)))
    }
}

/// In-memory store used by the unit tests.
#[cfg(test)]
pub struct MemoryStore {
    pub records: std::cell::RefCell<Vec<TestimonialRecord>>,
    pub fail_saves: std::cell::Cell<bool>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            records: std::cell::RefCell::new(Vec::new()),
            fail_saves: std::cell::Cell::new(false),
        }
    }
}

#[cfg(test)]
impl TestimonialStore for MemoryStore {
    fn load(&self) -> Vec<TestimonialRecord> {
        self.records.borrow().clone()
    }

    fn save(&self, records: &[TestimonialRecord]) -> Result<(), StoreError> {
        if self.fail_saves.get() {
            return Err(StoreError::Write("simulated storage failure".to_string()));
        }
        *self.records.borrow_mut() = records.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, name: &str) -> TestimonialRecord {
        TestimonialRecord {
            id,
            full_name: name.to_string(),
            designation: "CFO".to_string(),
            company: "Acme Industries".to_string(),
            email: "jane@acme.com".to_string(),
            rating: "5".to_string(),
            testimonial: "A steady hand through two full market cycles.".to_string(),
            picture: None,
            submitted_at: "2024-10-05T10:30:00.000Z".to_string(),
        }
    }

    #[test]
    fn append_keeps_existing_records_in_order() {
        let store = MemoryStore::new();
        store.append(record(1, "Jane Doe")).unwrap();
        store.append(record(2, "Rahul Gupta")).unwrap();
        store.append(record(3, "Meera Shah")).unwrap();

        let ids: Vec<i64> = store.load().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn failed_save_leaves_the_archive_untouched() {
        let store = MemoryStore::new();
        store.append(record(1, "Jane Doe")).unwrap();
        store.fail_saves.set(true);

        let err = store.append(record(2, "Rahul Gupta")).unwrap_err();
        assert!(matches!(err, StoreError::Write(_)));
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn corrupt_archive_parses_as_empty() {
        assert!(parse_archive("{definitely not json").is_empty());
        assert!(parse_archive("42").is_empty());
        assert!(parse_archive("").is_empty());
    }

    #[test]
    fn well_formed_archive_round_trips() {
        let records = vec![record(7, "Jane Doe")];
        let raw = serde_json::to_string(&records).unwrap();
        assert_eq!(parse_archive(&raw), records);
    }

    #[test]
    fn empty_array_parses_as_empty() {
        assert!(parse_archive("[]").is_empty());
    }
}
