use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::testimonials::store::{StoreError, TestimonialStore};
use crate::testimonials::validate::TestimonialDraft;

/// A stored testimonial, shaped exactly like the archive's JSON entries.
/// `rating` stays a digit string and `submitted_at` an ISO-8601 string so
/// the serialized form matches what the site has always written.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialRecord {
    pub id: i64,
    pub full_name: String,
    pub designation: String,
    pub company: String,
    pub email: String,
    pub rating: String,
    pub testimonial: String,
    pub picture: Option<String>,
    pub submitted_at: String,
}

impl TestimonialRecord {
    /// Snapshot of a draft at submission time: trimmed fields, the rating
    /// as its digit string, id and timestamp taken from the same instant.
    pub fn from_draft(draft: &TestimonialDraft, picture: Option<String>, now: DateTime<Utc>) -> Self {
        TestimonialRecord {
            id: now.timestamp_millis(),
            full_name: draft.full_name.trim().to_string(),
            designation: draft.designation.trim().to_string(),
            company: draft.company.trim().to_string(),
            email: draft.email.trim().to_string(),
            rating: draft.rating.to_string(),
            testimonial: draft.testimonial.trim().to_string(),
            picture,
            submitted_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Persists an already-validated draft. Appends to whatever the store
/// currently holds and hands back the record that was written.
pub fn submit_testimonial(
    store: &dyn TestimonialStore,
    draft: &TestimonialDraft,
    picture: Option<String>,
    now: DateTime<Utc>,
) -> Result<TestimonialRecord, StoreError> {
    let record = TestimonialRecord::from_draft(draft, picture, now);
    store.append(record.clone())?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::testimonials::store::MemoryStore;
    use crate::testimonials::validate::{validate, Field};

    fn draft() -> TestimonialDraft {
        TestimonialDraft {
            full_name: "  Jane Doe  ".to_string(),
            designation: "CFO".to_string(),
            company: "Acme Industries".to_string(),
            email: " jane@acme.com ".to_string(),
            rating: 4,
            testimonial: "  A steady hand through two full market cycles.  ".to_string(),
            agreed: true,
        }
    }

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 5, 10, 30, 0).unwrap()
    }

    #[test]
    fn from_draft_trims_and_stringifies() {
        let record = TestimonialRecord::from_draft(&draft(), None, instant());
        assert_eq!(record.full_name, "Jane Doe");
        assert_eq!(record.email, "jane@acme.com");
        assert_eq!(record.testimonial, "A steady hand through two full market cycles.");
        assert_eq!(record.rating, "4");
        assert_eq!(record.picture, None);
    }

    #[test]
    fn id_and_timestamp_come_from_the_same_instant() {
        let now = instant();
        let record = TestimonialRecord::from_draft(&draft(), None, now);
        assert_eq!(record.id, now.timestamp_millis());
        assert_eq!(record.submitted_at, "2024-10-05T10:30:00.000Z");
    }

    #[test]
    fn picture_is_carried_through_untouched() {
        let uri = "data:image/png;base64,iVBORw0KGgo=".to_string();
        let record = TestimonialRecord::from_draft(&draft(), Some(uri.clone()), instant());
        assert_eq!(record.picture, Some(uri));
    }

    #[test]
    fn archive_entries_use_camel_case_keys() {
        let record = TestimonialRecord::from_draft(&draft(), None, instant());
        let value = serde_json::to_value(&record).unwrap();
        let entry = value.as_object().unwrap();
        assert!(entry.contains_key("fullName"));
        assert!(entry.contains_key("submittedAt"));
        assert!(entry.contains_key("picture"));
        assert!(entry["picture"].is_null());
        assert!(!entry.contains_key("full_name"));
    }

    #[test]
    fn submit_appends_after_existing_records() {
        let store = MemoryStore::new();
        let earlier = TestimonialRecord::from_draft(&draft(), None, instant());
        store.records.borrow_mut().push(earlier.clone());

        let later = Utc.with_ymd_and_hms(2024, 11, 1, 9, 0, 0).unwrap();
        let written = submit_testimonial(&store, &draft(), None, later).unwrap();

        let archive = store.load();
        assert_eq!(archive.len(), 2);
        assert_eq!(archive[0], earlier);
        assert_eq!(archive[1], written);
    }

    #[test]
    fn valid_submission_flows_from_validation_to_the_archive() {
        let store = MemoryStore::new();
        let draft = TestimonialDraft {
            full_name: "Jane Doe".to_string(),
            designation: "CFO".to_string(),
            company: String::new(),
            email: "jane@example.com".to_string(),
            rating: 4,
            testimonial: "x".repeat(50),
            agreed: true,
        };
        assert!(validate(&draft).is_valid());

        let now = instant();
        let record = submit_testimonial(&store, &draft, None, now).unwrap();
        assert_eq!(record.rating, "4");
        assert_eq!(record.id, now.timestamp_millis());
        assert_eq!(store.load().last(), Some(&record));
    }

    #[test]
    fn a_short_testimonial_never_reaches_the_store() {
        let store = MemoryStore::new();
        let mut short = draft();
        short.testimonial = "x".repeat(49);

        let validation = validate(&short);
        assert_eq!(
            validation.message(Field::Testimonial),
            Some("Testimonial must be at least 50 characters")
        );
        // submission is gated on a passing validation
        assert!(store.load().is_empty());
    }

    #[test]
    fn submit_surfaces_store_failures() {
        let store = MemoryStore::new();
        store.fail_saves.set(true);
        let result = submit_testimonial(&store, &draft(), None, instant());
        assert!(matches!(result, Err(StoreError::Write(_))));
        assert!(store.load().is_empty());
    }
}
