//! Contact forms that end up as review submissions.

use serde_json::Value;
use thiserror::Error;

use super::entities::{BatchLookupResponse, CertRange, SubmissionRequest};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Run a lookup before submitting it for review.")]
    NothingToSubmit,
}

/// Cheap shape check: something before and after a single `@`, and a dot
/// in the domain.
pub fn looks_like_email(candidate: &str) -> bool {
    let trimmed = candidate.trim();
    let Some((local, domain)) = trimmed.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !trimmed.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

fn optional(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// "Sell your collection" enquiry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuoteForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub description: String,
    pub collection_link: String,
}

impl QuoteForm {
    pub fn to_submission(&self) -> Result<SubmissionRequest, ContactError> {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string();
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        if !looks_like_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }

        let mut notes = Vec::new();
        if let Some(description) = optional(&self.description) {
            notes.push(description);
        }
        if let Some(phone) = optional(&self.phone) {
            notes.push(format!("Phone: {phone}"));
        }
        if let Some(link) = optional(&self.collection_link) {
            notes.push(format!("Collection link: {link}"));
        }

        Ok(SubmissionRequest {
            name,
            email: self.email.trim().to_string(),
            notes: (!notes.is_empty()).then(|| notes.join("\n")),
            cert_range: CertRange::default(),
            results: Value::Object(Default::default()),
        })
    }
}

/// "Submit for review" dialog shown after a batch lookup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReviewForm {
    pub name: String,
    pub email: String,
    pub notes: String,
}

impl ReviewForm {
    pub fn to_submission(
        &self,
        batch: &BatchLookupResponse,
    ) -> Result<SubmissionRequest, ContactError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        if !looks_like_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        if batch.results.is_empty() && batch.errors.is_empty() {
            return Err(ContactError::NothingToSubmit);
        }

        Ok(SubmissionRequest {
            name: name.to_string(),
            email: self.email.trim().to_string(),
            notes: optional(&self.notes),
            cert_range: batch.cert_range(),
            results: serde_json::to_value(batch).unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::BatchResult;

    fn filled_quote() -> QuoteForm {
        QuoteForm {
            first_name: " Sam ".into(),
            last_name: "Collector".into(),
            email: "sam@example.com".into(),
            ..QuoteForm::default()
        }
    }

    #[test]
    fn email_shape() {
        assert!(looks_like_email("sam@example.com"));
        assert!(looks_like_email(" a@b.co "));
        assert!(!looks_like_email("sam@example"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("sam@@example.com"));
        assert!(!looks_like_email("sam smith@example.com"));
        assert!(!looks_like_email(""));
    }

    #[test]
    fn quote_requires_name_and_email() {
        let mut form = filled_quote();
        form.last_name.clear();
        assert_eq!(form.to_submission(), Err(ContactError::MissingName));

        let mut form = filled_quote();
        form.email = "nope".into();
        assert_eq!(form.to_submission(), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn quote_folds_extras_into_notes() {
        let mut form = filled_quote();
        form.description = "Mostly 90s basketball".into();
        form.phone = "555-0100".into();
        form.collection_link = "https://example.com/my-cards".into();

        let request = form.to_submission().unwrap();
        assert_eq!(request.name, "Sam Collector");
        assert_eq!(
            request.notes.as_deref(),
            Some("Mostly 90s basketball\nPhone: 555-0100\nCollection link: https://example.com/my-cards")
        );
        assert_eq!(request.cert_range, CertRange::default());
        assert!(request.results.as_object().is_some_and(|map| map.is_empty()));
    }

    #[test]
    fn bare_quote_has_no_notes() {
        assert_eq!(filled_quote().to_submission().unwrap().notes, None);
    }

    #[test]
    fn review_carries_batch_results() {
        let batch = BatchLookupResponse {
            success: true,
            total_processed: 1,
            successful: 1,
            results: vec![BatchResult {
                cert_number: "12345678".into(),
                success: true,
                ..BatchResult::default()
            }],
            ..BatchLookupResponse::default()
        };
        let form = ReviewForm {
            name: "Sam".into(),
            email: "sam@example.com".into(),
            notes: "  ".into(),
        };

        let request = form.to_submission(&batch).unwrap();
        assert_eq!(request.notes, None);
        assert_eq!(request.cert_range.start, "12345678");
        assert_eq!(request.cert_range.end, "12345678");
        assert_eq!(request.results["results"][0]["cert_number"], "12345678");
        assert_eq!(request.results["total_processed"], 1);
    }

    #[test]
    fn review_needs_a_batch() {
        let form = ReviewForm {
            name: "Sam".into(),
            email: "sam@example.com".into(),
            notes: String::new(),
        };
        assert_eq!(
            form.to_submission(&BatchLookupResponse::default()),
            Err(ContactError::NothingToSubmit)
        );
    }
}
