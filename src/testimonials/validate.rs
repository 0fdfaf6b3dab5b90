use std::collections::BTreeMap;

use regex::Regex;

pub const MIN_TESTIMONIAL_CHARS: usize = 50;

/// One submission's worth of input, captured as typed values instead of
/// being read back out of the DOM at submit time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TestimonialDraft {
    pub full_name: String,
    pub designation: String,
    pub company: String,
    pub email: String,
    pub rating: u8,
    pub testimonial: String,
    pub agreed: bool,
}

/// Fields that can carry a validation message. Company is not here: it is
/// optional and never checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    FullName,
    Designation,
    Email,
    Rating,
    Testimonial,
    Agreement,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Validation {
    errors: BTreeMap<Field, &'static str>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn into_errors(self) -> BTreeMap<Field, &'static str> {
        self.errors
    }
}

/// Shared with the contact and newsletter forms: something@something.something,
/// no whitespace, no second @.
pub fn is_valid_email(email: &str) -> bool {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap().is_match(email)
}

/// Runs every rule on every call; rules never short-circuit, so a single
/// pass reports everything that is wrong at once.
pub fn validate(draft: &TestimonialDraft) -> Validation {
    let mut errors = BTreeMap::new();

    if draft.full_name.trim().is_empty() {
        errors.insert(Field::FullName, "Full name is required");
    }
    if draft.designation.trim().is_empty() {
        errors.insert(Field::Designation, "Designation is required");
    }
    let email = draft.email.trim();
    if email.is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !is_valid_email(email) {
        errors.insert(Field::Email, "Please enter a valid email");
    }
    if draft.rating == 0 {
        errors.insert(Field::Rating, "Please select a rating");
    }
    let testimonial = draft.testimonial.trim();
    if testimonial.is_empty() {
        errors.insert(Field::Testimonial, "Please write your testimonial");
    } else if testimonial.chars().count() < MIN_TESTIMONIAL_CHARS {
        errors.insert(Field::Testimonial, "Testimonial must be at least 50 characters");
    }
    if !draft.agreed {
        errors.insert(Field::Agreement, "You must agree to share this testimonial");
    }

    Validation { errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> TestimonialDraft {
        TestimonialDraft {
            full_name: "Jane Doe".to_string(),
            designation: "CFO".to_string(),
            company: "Acme Industries".to_string(),
            email: "jane@acme.com".to_string(),
            rating: 5,
            testimonial: "MRG Capital has managed our family portfolio with real discipline and care.".to_string(),
            agreed: true,
        }
    }

    #[test]
    fn valid_draft_passes() {
        let result = validate(&valid_draft());
        assert!(result.is_valid());
        assert!(result.into_errors().is_empty());
    }

    #[test]
    fn empty_draft_reports_every_failure_at_once() {
        let result = validate(&TestimonialDraft::default());
        let errors = result.into_errors();
        assert_eq!(errors.len(), 6);
        assert_eq!(errors[&Field::FullName], "Full name is required");
        assert_eq!(errors[&Field::Designation], "Designation is required");
        assert_eq!(errors[&Field::Email], "Email is required");
        assert_eq!(errors[&Field::Rating], "Please select a rating");
        assert_eq!(errors[&Field::Testimonial], "Please write your testimonial");
        assert_eq!(errors[&Field::Agreement], "You must agree to share this testimonial");
    }

    #[test]
    fn one_missing_field_yields_exactly_one_error() {
        let mut draft = valid_draft();
        draft.designation = String::new();
        let errors = validate(&draft).into_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&Field::Designation], "Designation is required");
    }

    #[test]
    fn whitespace_only_text_counts_as_missing() {
        let mut draft = valid_draft();
        draft.full_name = "   ".to_string();
        draft.designation = "\t".to_string();
        let result = validate(&draft);
        assert_eq!(result.message(Field::FullName), Some("Full name is required"));
        assert_eq!(result.message(Field::Designation), Some("Designation is required"));
    }

    #[test]
    fn company_is_never_required() {
        let mut draft = valid_draft();
        draft.company = String::new();
        assert!(validate(&draft).is_valid());
    }

    #[test]
    fn malformed_email_gets_the_format_message() {
        let mut draft = valid_draft();
        for bad in ["plainaddress", "missing@dot", "two@@signs.com", "spaces in@mail.com"] {
            draft.email = bad.to_string();
            assert_eq!(
                validate(&draft).message(Field::Email),
                Some("Please enter a valid email"),
                "expected {:?} to be rejected",
                bad
            );
        }
    }

    #[test]
    fn email_presence_beats_email_format() {
        let mut draft = valid_draft();
        draft.email = "  ".to_string();
        assert_eq!(validate(&draft).message(Field::Email), Some("Email is required"));
    }

    #[test]
    fn dotted_subdomains_are_accepted() {
        let mut draft = valid_draft();
        draft.email = "jane.doe@mail.acme.co.in".to_string();
        assert!(validate(&draft).is_valid());
    }

    #[test]
    fn zero_rating_is_rejected() {
        let mut draft = valid_draft();
        draft.rating = 0;
        assert_eq!(validate(&draft).message(Field::Rating), Some("Please select a rating"));
    }

    #[test]
    fn short_testimonial_gets_the_length_message() {
        let mut draft = valid_draft();
        draft.testimonial = "x".repeat(MIN_TESTIMONIAL_CHARS - 1);
        assert_eq!(
            validate(&draft).message(Field::Testimonial),
            Some("Testimonial must be at least 50 characters")
        );

        draft.testimonial = "x".repeat(MIN_TESTIMONIAL_CHARS);
        assert!(validate(&draft).is_valid());
    }

    #[test]
    fn padding_does_not_count_toward_the_minimum() {
        let mut draft = valid_draft();
        draft.testimonial = format!("   {}   ", "x".repeat(MIN_TESTIMONIAL_CHARS - 1));
        assert_eq!(
            validate(&draft).message(Field::Testimonial),
            Some("Testimonial must be at least 50 characters")
        );
    }

    #[test]
    fn emptiness_beats_the_length_rule() {
        let mut draft = valid_draft();
        draft.testimonial = "   ".to_string();
        assert_eq!(
            validate(&draft).message(Field::Testimonial),
            Some("Please write your testimonial")
        );
    }

    #[test]
    fn missing_agreement_is_reported_alongside_other_errors() {
        let mut draft = valid_draft();
        draft.agreed = false;
        draft.rating = 0;
        let result = validate(&draft);
        assert_eq!(result.message(Field::Agreement), Some("You must agree to share this testimonial"));
        assert_eq!(result.message(Field::Rating), Some("Please select a rating"));
    }

    #[test]
    fn email_checker_is_shared_and_strict_about_whitespace() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mrgcapital.in"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a b@c.d"));
    }
}
