//! Validation of certificate-number batches before they hit the lookup service.

use std::collections::HashSet;

use thiserror::Error;

/// The lookup service refuses batches (and single ranges) larger than this.
pub const MAX_BATCH_CERTS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CertQueryError {
    #[error("enter at least one certificate number")]
    Empty,
    #[error("invalid certificate number: {0}")]
    InvalidNumber(String),
    #[error("end number must be greater than start number ({0})")]
    ReversedRange(String),
    #[error("maximum range of {MAX_BATCH_CERTS} certificates allowed ({0})")]
    RangeTooLarge(String),
    #[error("maximum of {MAX_BATCH_CERTS} certificates allowed, got {0}")]
    TooMany(usize),
}

/// A parsed, de-duplicated list of certificate numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertQuery {
    numbers: Vec<String>,
}

impl CertQuery {
    /// Accepts comma-separated numbers and `start-end` ranges, e.g.
    /// `12345678, 87654321` or `12345678-12345680`.
    pub fn parse(input: &str) -> Result<Self, CertQueryError> {
        if input.trim().is_empty() {
            return Err(CertQueryError::Empty);
        }

        let mut numbers = Vec::new();
        for part in input.split(',').map(str::trim) {
            if let Some((start, end)) = part.split_once('-') {
                numbers.extend(expand_range(part, start, end)?);
            } else {
                parse_number(part)?;
                numbers.push(part.to_string());
            }
        }

        let mut seen = HashSet::new();
        numbers.retain(|number| seen.insert(number.clone()));

        if numbers.len() > MAX_BATCH_CERTS {
            return Err(CertQueryError::TooMany(numbers.len()));
        }

        Ok(Self { numbers })
    }

    pub fn numbers(&self) -> &[String] {
        &self.numbers
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Comma-joined form sent to the batch endpoint.
    pub fn canonical(&self) -> String {
        self.numbers.join(",")
    }

    pub fn first(&self) -> Option<&str> {
        self.numbers.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.numbers.last().map(String::as_str)
    }
}

fn parse_number(raw: &str) -> Result<u64, CertQueryError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| CertQueryError::InvalidNumber(raw.to_string()))
}

fn expand_range(part: &str, start: &str, end: &str) -> Result<Vec<String>, CertQueryError> {
    let start = parse_number(start).map_err(|_| CertQueryError::InvalidNumber(part.to_string()))?;
    let end = parse_number(end).map_err(|_| CertQueryError::InvalidNumber(part.to_string()))?;
    if end < start {
        return Err(CertQueryError::ReversedRange(part.to_string()));
    }
    if end - start > MAX_BATCH_CERTS as u64 {
        return Err(CertQueryError::RangeTooLarge(part.to_string()));
    }
    Ok((start..=end).map(|number| number.to_string()).collect())
}

/// PSA cert numbers printed on slabs are 8 or 9 digits.
pub fn is_plausible_cert(candidate: &str) -> bool {
    let trimmed = candidate.trim();
    (8..=9).contains(&trimmed.len()) && trimmed.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_list() {
        let query = CertQuery::parse("12345678, 87654321 ,102304290").unwrap();
        assert_eq!(query.numbers(), ["12345678", "87654321", "102304290"]);
        assert_eq!(query.canonical(), "12345678,87654321,102304290");
    }

    #[test]
    fn expands_inclusive_ranges() {
        let query = CertQuery::parse("12345678-12345680").unwrap();
        assert_eq!(query.numbers(), ["12345678", "12345679", "12345680"]);
        assert_eq!(query.first(), Some("12345678"));
        assert_eq!(query.last(), Some("12345680"));
    }

    #[test]
    fn mixes_ranges_and_numbers_and_drops_duplicates() {
        let query = CertQuery::parse("10-12, 11, 99, 10").unwrap();
        assert_eq!(query.numbers(), ["10", "11", "12", "99"]);
    }

    #[test]
    fn rejects_blank_input() {
        assert_eq!(CertQuery::parse("  "), Err(CertQueryError::Empty));
    }

    #[test]
    fn rejects_reversed_range() {
        assert_eq!(
            CertQuery::parse("20-10"),
            Err(CertQueryError::ReversedRange("20-10".to_string()))
        );
    }

    #[test]
    fn range_span_is_capped() {
        assert_eq!(CertQuery::parse("1000-1099").unwrap().len(), 100);
        assert_eq!(
            CertQuery::parse("1000-1101"),
            Err(CertQueryError::RangeTooLarge("1000-1101".to_string()))
        );
    }

    #[test]
    fn total_count_is_capped() {
        // a span of exactly 100 passes the range check but yields 101 certs
        assert_eq!(CertQuery::parse("1000-1100"), Err(CertQueryError::TooMany(101)));

        let list = (1..=60).map(|n| n.to_string()).collect::<Vec<_>>().join(",");
        let input = format!("{list},500-545");
        assert_eq!(CertQuery::parse(&input), Err(CertQueryError::TooMany(106)));
    }

    #[test]
    fn rejects_non_numeric_tokens() {
        assert_eq!(
            CertQuery::parse("12345678, abc"),
            Err(CertQueryError::InvalidNumber("abc".to_string()))
        );
        assert_eq!(
            CertQuery::parse("12-ab"),
            Err(CertQueryError::InvalidNumber("12-ab".to_string()))
        );
        assert_eq!(
            CertQuery::parse("12345678,"),
            Err(CertQueryError::InvalidNumber(String::new()))
        );
    }

    #[test]
    fn plausible_cert_shape() {
        assert!(is_plausible_cert("12345678"));
        assert!(is_plausible_cert("102304290"));
        assert!(!is_plausible_cert("1234567"));
        assert!(!is_plausible_cert("1234567890"));
        assert!(!is_plausible_cert("1234S678"));
    }
}
