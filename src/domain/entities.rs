//! Records exchanged with the certificate lookup service.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Default instructions sent along with an image so the service only
/// extracts certification numbers.
pub const CERT_IMAGE_PROMPT: &str = "You are a helpful assistant specialized in identifying PSA certification numbers from images.
Your task is to analyze the image and extract all PSA certification numbers.

Rules:
- PSA cert numbers can be 8 or 9 digits long
- They are typically printed on PSA card slabs
- They may appear as plain numbers or with a 'PSA' prefix
- Ignore any other numbers that aren't PSA cert numbers

Return ONLY the numbers themselves in a JSON array format like this:
{
  \"cert_numbers\": [\"12345678\", \"102304290\"]
}";

/// Graded card details as reported by the lookup service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardData {
    #[serde(deserialize_with = "lenient_string")]
    pub cert_number: String,
    #[serde(deserialize_with = "lenient_string")]
    pub year: String,
    #[serde(deserialize_with = "lenient_string")]
    pub brand: String,
    #[serde(deserialize_with = "lenient_string")]
    pub card_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub grade: String,
    #[serde(deserialize_with = "lenient_string")]
    pub player: String,
    #[serde(deserialize_with = "lenient_string")]
    pub sport: String,
    #[serde(deserialize_with = "lenient_string")]
    pub set: String,
    #[serde(deserialize_with = "lenient_string")]
    pub card_number: String,
    #[serde(deserialize_with = "lenient_string")]
    pub variety: String,
    #[serde(deserialize_with = "lenient_string")]
    pub qualifier: String,
    #[serde(deserialize_with = "lenient_string")]
    pub grade_suffix: String,
    #[serde(deserialize_with = "lenient_string")]
    pub insert_type: String,
    #[serde(deserialize_with = "lenient_string")]
    pub parallel_type: String,
    #[serde(deserialize_with = "lenient_string")]
    pub language: String,
    #[serde(deserialize_with = "lenient_list")]
    pub variants: Vec<String>,
}

impl CardData {
    /// Label/value pairs for the populated fields, in display order.
    pub fn display_rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("Cert #", self.cert_number.clone()),
            ("Grade", self.grade_display()),
            ("Card", self.card_name.clone()),
            ("Year", self.year.clone()),
            ("Brand", self.brand.clone()),
            ("Set", self.set.clone()),
            ("Card #", self.card_number.clone()),
            ("Sport", self.sport.clone()),
            ("Language", self.language.clone()),
        ];
        if !self.variants.is_empty() {
            rows.push(("Variants", self.variants.join(", ")));
        }
        rows.retain(|(_, value)| !value.trim().is_empty());
        rows
    }

    /// `"10"`, `"9 (OC)"`, ... or empty when the grade is unknown.
    pub fn grade_display(&self) -> String {
        if self.grade.trim().is_empty() {
            return String::new();
        }
        let mut grade = self.grade.trim().to_string();
        if !self.qualifier.trim().is_empty() {
            grade.push_str(&format!(" ({})", self.qualifier.trim()));
        }
        if !self.grade_suffix.trim().is_empty() {
            grade.push(' ');
            grade.push_str(self.grade_suffix.trim());
        }
        grade
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Listing {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct LookupRequest<'a> {
    pub cert_number: &'a str,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LookupResponse {
    pub success: bool,
    pub card_data: Option<CardData>,
    pub listing: Option<Listing>,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct BatchLookupRequest<'a> {
    pub cert_input: &'a str,
    pub delay: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct ImageLookupRequest<'a> {
    /// Base64 image bytes, without a data-URI prefix.
    pub image: String,
    pub prompt: &'a str,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchLookupResponse {
    pub success: bool,
    pub total_processed: usize,
    pub successful: usize,
    pub failed: usize,
    pub results: Vec<BatchResult>,
    pub errors: Vec<BatchError>,
}

impl BatchLookupResponse {
    /// Plain-text report of the batch, one block per certificate.
    pub fn summary_text(&self) -> String {
        let mut lines = vec![format!(
            "Total processed: {} | Successful: {} | Failed: {}",
            self.total_processed, self.successful, self.failed
        )];
        for result in &self.results {
            lines.push(String::new());
            lines.push(format!("Certificate #{}", result.cert_number));
            if let Some(listing) = &result.listing {
                lines.push(format!("Title: {}", listing.title));
                lines.push(listing.description.clone());
            }
        }
        if !self.errors.is_empty() {
            lines.push(String::new());
            lines.push("Failed lookups:".to_string());
            for error in &self.errors {
                lines.push(format!("- #{}: {}", error.cert_number, error.error));
            }
        }
        lines.join("\n")
    }

    /// Lowest and highest certificate number touched by the batch.
    pub fn cert_range(&self) -> CertRange {
        let numbers = self
            .results
            .iter()
            .map(|result| result.cert_number.trim())
            .chain(self.errors.iter().map(|error| error.cert_number.trim()))
            .filter(|number| !number.is_empty());
        // digit strings order numerically by (length, text)
        let start = numbers.clone().min_by_key(|number| (number.len(), *number));
        let end = numbers.max_by_key(|number| (number.len(), *number));
        CertRange {
            start: start.unwrap_or_default().to_string(),
            end: end.unwrap_or_default().to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchResult {
    #[serde(deserialize_with = "lenient_string")]
    pub cert_number: String,
    pub success: bool,
    pub card_data: Option<CardData>,
    pub listing: Option<Listing>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchError {
    #[serde(deserialize_with = "lenient_string")]
    pub cert_number: String,
    #[serde(deserialize_with = "lenient_string")]
    pub error: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CertRange {
    pub start: String,
    pub end: String,
}

/// Contact details plus whatever results the reviewer should look at.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubmissionRequest {
    pub name: String,
    pub email: String,
    pub notes: Option<String>,
    pub cert_range: CertRange,
    pub results: Value,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SubmissionResponse {
    pub success: bool,
    #[serde(deserialize_with = "lenient_string")]
    pub tracking_number: String,
    #[serde(deserialize_with = "lenient_string")]
    pub message: String,
}

/// FastAPI-style error body: `{"detail": "..."}`.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

/// Accepts strings, numbers or null wherever the service sends text.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    })
}

/// `null` reads as an empty list; non-text entries are skipped.
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(text) => Some(text),
                Value::Number(number) => Some(number.to_string()),
                _ => None,
            })
            .collect(),
        Value::String(text) if !text.trim().is_empty() => vec![text],
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lookup_response_decodes_service_payload() {
        let body = json!({
            "success": true,
            "card_data": {
                "cert_number": "12345678",
                "year": "1999",
                "brand": "POKEMON GAME",
                "card_name": "CHARIZARD-HOLO",
                "grade": "GEM MT 10",
                "set": "BASE SET",
                "card_number": 4,
                "variants": ["1ST EDITION"],
                "unexpected": "ignored"
            },
            "listing": { "title": "PSA GEM MT 10 CHARIZARD", "description": "# PSA" }
        });

        let response: LookupResponse = serde_json::from_value(body).unwrap();
        assert!(response.success);
        let card = response.card_data.unwrap();
        assert_eq!(card.card_number, "4");
        assert_eq!(card.language, "");
        assert_eq!(card.variants, ["1ST EDITION"]);
        assert_eq!(response.listing.unwrap().title, "PSA GEM MT 10 CHARIZARD");
    }

    #[test]
    fn null_card_fields_read_as_empty() {
        let body = json!({
            "success": true,
            "card_data": {
                "cert_number": "12345678",
                "brand": null,
                "card_name": "PIKACHU",
                "player": null,
                "variety": null,
                "qualifier": null,
                "grade_suffix": null,
                "language": null,
                "variants": null
            },
            "listing": { "title": null, "description": "Mint" }
        });

        let response: LookupResponse = serde_json::from_value(body).unwrap();
        let card = response.card_data.unwrap();
        assert_eq!(card.card_name, "PIKACHU");
        assert_eq!(card.variety, "");
        assert_eq!(card.brand, "");
        assert!(card.variants.is_empty());
        assert_eq!(response.listing.unwrap().title, "");
    }

    #[test]
    fn failed_lookup_carries_error_text() {
        let response: LookupResponse =
            serde_json::from_value(json!({ "success": false, "error": "No data found for cert #1" }))
                .unwrap();
        assert!(!response.success);
        assert!(response.card_data.is_none());
        assert_eq!(response.error.as_deref(), Some("No data found for cert #1"));
    }

    #[test]
    fn batch_response_tolerates_numeric_cert_numbers() {
        let body = json!({
            "success": true,
            "total_processed": 2,
            "successful": 1,
            "failed": 1,
            "results": [{
                "cert_number": 12345678,
                "success": true,
                "card_data": { "cert_number": "12345678", "grade": 9 },
                "listing": { "title": "PSA 9", "description": "desc" }
            }],
            "errors": [{ "cert_number": "12345679", "error": "No data found" }]
        });
        let response: BatchLookupResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.results[0].cert_number, "12345678");
        assert_eq!(response.results[0].card_data.as_ref().unwrap().grade, "9");
        assert_eq!(response.errors[0].error, "No data found");
    }

    #[test]
    fn summary_text_lists_results_and_failures() {
        let response = BatchLookupResponse {
            success: true,
            total_processed: 2,
            successful: 1,
            failed: 1,
            results: vec![BatchResult {
                cert_number: "11111111".into(),
                success: true,
                card_data: None,
                listing: Some(Listing {
                    title: "PSA 10 Pikachu".into(),
                    description: "Mint".into(),
                }),
            }],
            errors: vec![BatchError {
                cert_number: "22222222".into(),
                error: "No data found".into(),
            }],
        };

        let text = response.summary_text();
        assert!(text.starts_with("Total processed: 2 | Successful: 1 | Failed: 1"));
        assert!(text.contains("Certificate #11111111\nTitle: PSA 10 Pikachu\nMint"));
        assert!(text.ends_with("- #22222222: No data found"));
    }

    #[test]
    fn cert_range_spans_results_and_errors() {
        let response = BatchLookupResponse {
            results: vec![
                BatchResult {
                    cert_number: "99999999".into(),
                    ..BatchResult::default()
                },
                BatchResult {
                    cert_number: "100000001".into(),
                    ..BatchResult::default()
                },
            ],
            errors: vec![BatchError {
                cert_number: "12345678".into(),
                error: "No data found".into(),
            }],
            ..BatchLookupResponse::default()
        };
        assert_eq!(
            response.cert_range(),
            CertRange {
                start: "12345678".into(),
                end: "100000001".into()
            }
        );
        assert_eq!(BatchLookupResponse::default().cert_range(), CertRange::default());
    }

    #[test]
    fn grade_display_appends_qualifier_and_suffix() {
        let card = CardData {
            grade: "9".into(),
            qualifier: "OC".into(),
            grade_suffix: "MINT".into(),
            ..CardData::default()
        };
        assert_eq!(card.grade_display(), "9 (OC) MINT");
        assert_eq!(CardData::default().grade_display(), "");
    }

    #[test]
    fn display_rows_skip_empty_fields() {
        let card = CardData {
            cert_number: "12345678".into(),
            card_name: "PIKACHU".into(),
            ..CardData::default()
        };
        let labels: Vec<_> = card.display_rows().into_iter().map(|(label, _)| label).collect();
        assert_eq!(labels, ["Cert #", "Card"]);
    }

    #[test]
    fn error_body_prefers_string_detail() {
        let body: ErrorBody = serde_json::from_value(json!({ "detail": "Maximum of 100 certificates allowed" })).unwrap();
        assert_eq!(body.message().as_deref(), Some("Maximum of 100 certificates allowed"));

        let structured: ErrorBody =
            serde_json::from_value(json!({ "detail": [{ "msg": "field required" }] })).unwrap();
        assert!(structured.message().unwrap().contains("field required"));

        let empty: ErrorBody = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.message(), None);
    }

    #[test]
    fn submission_request_serializes_expected_shape() {
        let request = SubmissionRequest {
            name: "Sam Collector".into(),
            email: "sam@example.com".into(),
            notes: None,
            cert_range: CertRange {
                start: "1".into(),
                end: "2".into(),
            },
            results: json!({}),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["cert_range"]["start"], "1");
        assert_eq!(value["notes"], Value::Null);
    }
}
