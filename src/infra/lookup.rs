//! Asynchronous client for the PSA certificate lookup service.
//!
//! - Single, batch and image lookups plus review submissions.
//! - Transport failures are classified so the UI can tell a slow service
//!   from a dead network.

use std::{error::Error as StdError, io, path::Path, time::Duration};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{Client, Url};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::domain::cert_query::{CertQuery, CertQueryError};
use crate::domain::entities::{
    BatchLookupRequest, BatchLookupResponse, CardData, ErrorBody, ImageLookupRequest, Listing,
    LookupRequest, LookupResponse, SubmissionRequest, SubmissionResponse, CERT_IMAGE_PROMPT,
};

const USER_AGENT: &str = concat!("slab-scout/", env!("CARGO_PKG_VERSION"));

const LOOKUP_PATH: &str = "api/psa/lookup";
const BATCH_PATH: &str = "api/psa/lookup/batch";
const IMAGE_PATH: &str = "api/psa/lookup/image";
const SUBMIT_PATH: &str = "api/psa/submit";

const TIMEOUT_MESSAGE: &str =
    "Request timed out. The PSA API might be slow or unavailable. Please try again.";
const OFFLINE_MESSAGE: &str = "You appear to be offline. Please check your internet connection.";
const CONNECT_MESSAGE: &str =
    "Failed to connect to the lookup service. Please make sure it is running and reachable.";

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("request timed out")]
    Timeout,
    #[error("network is unreachable")]
    Offline,
    #[error("server responded with status {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("http request error: {0}")]
    Transport(reqwest::Error),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("lookup rejected: {0}")]
    Rejected(String),
    #[error("could not read image: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    InvalidQuery(#[from] CertQueryError),
}

impl LookupError {
    /// Text shown to the user in toasts and inline alerts.
    pub fn user_message(&self) -> String {
        match self {
            LookupError::Timeout => TIMEOUT_MESSAGE.to_string(),
            LookupError::Offline => OFFLINE_MESSAGE.to_string(),
            LookupError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            LookupError::Status {
                status,
                detail: None,
            } => format!("The lookup service answered with HTTP {status}. Please try again."),
            LookupError::Rejected(message) => message.clone(),
            LookupError::InvalidQuery(error) => capitalize(&error.to_string()),
            LookupError::Io(error) => format!("Could not read the image file: {error}"),
            LookupError::Decode(_) => {
                "The lookup service returned a response this app does not understand.".to_string()
            }
            LookupError::InvalidUrl(_) | LookupError::Transport(_) => CONNECT_MESSAGE.to_string(),
        }
    }

    fn from_transport(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            LookupError::Timeout
        } else if error.is_decode() {
            LookupError::Decode(error.to_string())
        } else if error.is_connect() && has_unreachable_cause(&error) {
            LookupError::Offline
        } else {
            LookupError::Transport(error)
        }
    }
}

/// Card details and the generated listing for one certificate.
#[derive(Clone, Debug, PartialEq)]
pub struct CertLookup {
    pub card_data: CardData,
    pub listing: Listing,
}

#[derive(Clone)]
pub struct LookupClient {
    http: Client,
    base_url: Url,
    lookup_timeout: Duration,
    batch_delay_secs: f64,
}

impl LookupClient {
    pub fn new(config: &AppConfig) -> Result<Self, LookupError> {
        let mut client = Self::with_base_url(&config.api_url)?;
        client.lookup_timeout = config.lookup_timeout;
        client.batch_delay_secs = config.batch_delay_secs;
        Ok(client)
    }

    pub fn with_base_url(base: &str) -> Result<Self, LookupError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(LookupError::Transport)?;
        Self::with_http(base, http)
    }

    fn with_http(base: &str, http: Client) -> Result<Self, LookupError> {
        let base_url = Url::parse(base)?;
        let defaults = AppConfig::default();
        Ok(Self {
            http,
            base_url,
            lookup_timeout: defaults.lookup_timeout,
            batch_delay_secs: defaults.batch_delay_secs,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn lookup_cert(&self, cert_number: &str) -> Result<CertLookup, LookupError> {
        let cert_number = cert_number.trim();
        if cert_number.is_empty() {
            return Err(CertQueryError::Empty.into());
        }

        info!(cert_number, "looking up certificate");
        let response: LookupResponse = self
            .post_json(
                LOOKUP_PATH,
                &LookupRequest { cert_number },
                Some(self.lookup_timeout),
            )
            .await?;

        if !response.success {
            let message = response
                .error
                .unwrap_or_else(|| format!("No data found for certificate #{cert_number}"));
            warn!(cert_number, %message, "certificate lookup rejected");
            return Err(LookupError::Rejected(message));
        }

        let card_data = response
            .card_data
            .ok_or_else(|| LookupError::Decode("response is missing card_data".into()))?;
        Ok(CertLookup {
            card_data,
            listing: response.listing.unwrap_or_default(),
        })
    }

    pub async fn lookup_batch(&self, query: &CertQuery) -> Result<BatchLookupResponse, LookupError> {
        let cert_input = query.canonical();
        info!(count = query.len(), "starting batch lookup");
        let response: BatchLookupResponse = self
            .post_json(
                BATCH_PATH,
                &BatchLookupRequest {
                    cert_input: &cert_input,
                    delay: self.batch_delay_secs,
                },
                None,
            )
            .await?;
        finish_batch(response)
    }

    /// Uploads an image of one or more slabs and looks up every certificate
    /// number the service can read from it.
    pub async fn lookup_image(&self, path: &Path) -> Result<BatchLookupResponse, LookupError> {
        let bytes = tokio::fs::read(path).await?;
        if bytes.is_empty() {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "file is empty").into());
        }

        info!(path = %path.display(), size = bytes.len(), "uploading image for cert detection");
        let response: BatchLookupResponse = self
            .post_json(
                IMAGE_PATH,
                &ImageLookupRequest {
                    image: STANDARD.encode(&bytes),
                    prompt: CERT_IMAGE_PROMPT,
                },
                None,
            )
            .await?;
        finish_batch(response)
    }

    pub async fn submit(&self, request: &SubmissionRequest) -> Result<SubmissionResponse, LookupError> {
        info!(email = %request.email, "submitting for review");
        let response: SubmissionResponse = self.post_json(SUBMIT_PATH, request, None).await?;
        if !response.success {
            let message = if response.message.trim().is_empty() {
                "Submission was not accepted.".to_string()
            } else {
                response.message
            };
            return Err(LookupError::Rejected(message));
        }
        info!(tracking_number = %response.tracking_number, "submission accepted");
        Ok(response)
    }

    async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        timeout: Option<Duration>,
    ) -> Result<T, LookupError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        debug!(%url, "POST");

        let mut request = self.http.post(url).json(body);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(LookupError::from_transport)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = detail_from_body(&body);
            warn!(status = status.as_u16(), detail = ?detail, "lookup service returned an error");
            return Err(LookupError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        response.json::<T>().await.map_err(LookupError::from_transport)
    }

    fn url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}

fn finish_batch(response: BatchLookupResponse) -> Result<BatchLookupResponse, LookupError> {
    if !response.success {
        return Err(LookupError::Rejected(
            "The batch lookup did not complete.".to_string(),
        ));
    }
    info!(
        processed = response.total_processed,
        successful = response.successful,
        failed = response.failed,
        "batch lookup finished"
    );
    Ok(response)
}

/// Extracts the `detail` message from an error body, if there is one.
pub fn detail_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message())
}

fn has_unreachable_cause(error: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(error);
    while let Some(err) = current {
        if let Some(io_error) = err.downcast_ref::<io::Error>() {
            if matches!(
                io_error.kind(),
                io::ErrorKind::NetworkUnreachable | io::ErrorKind::HostUnreachable
            ) {
                return true;
            }
        }
        current = err.source();
    }
    false
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::{TcpListener, TcpStream},
    };

    use super::*;

    #[derive(Debug, Error)]
    #[error("connect failed")]
    struct ConnectFailed(#[source] io::Error);

    #[test]
    fn endpoints_join_under_base_path() {
        let client = LookupClient::with_base_url("http://localhost:8000/scout/").unwrap();
        assert_eq!(
            client.url(BATCH_PATH).unwrap().as_str(),
            "http://localhost:8000/scout/api/psa/lookup/batch"
        );
        assert_eq!(
            client.url(SUBMIT_PATH).unwrap().as_str(),
            "http://localhost:8000/scout/api/psa/submit"
        );
    }

    #[test]
    fn client_takes_settings_from_config() {
        let config = AppConfig {
            lookup_timeout: Duration::from_secs(5),
            batch_delay_secs: 0.25,
            ..AppConfig::default()
        };
        let client = LookupClient::new(&config).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8000/");
        assert_eq!(client.lookup_timeout, Duration::from_secs(5));
        assert_eq!(client.batch_delay_secs, 0.25);
    }

    #[test]
    fn rejects_unparsable_base_url() {
        assert!(matches!(
            LookupClient::with_base_url("not a url"),
            Err(LookupError::InvalidUrl(_))
        ));
    }

    #[test]
    fn detail_is_read_from_error_bodies() {
        assert_eq!(
            detail_from_body(r#"{"detail":"Invalid range format: 5-1. End number must be greater than start number."}"#)
                .as_deref(),
            Some("Invalid range format: 5-1. End number must be greater than start number.")
        );
        assert_eq!(detail_from_body("<html>Bad Gateway</html>"), None);
        assert_eq!(detail_from_body(""), None);
    }

    #[test]
    fn unreachable_causes_are_found_in_the_chain() {
        let direct = io::Error::from(io::ErrorKind::NetworkUnreachable);
        assert!(has_unreachable_cause(&direct));

        let wrapped = ConnectFailed(io::Error::from(io::ErrorKind::HostUnreachable));
        assert!(has_unreachable_cause(&wrapped));

        let refused = ConnectFailed(io::Error::from(io::ErrorKind::ConnectionRefused));
        assert!(!has_unreachable_cause(&refused));
    }

    #[test]
    fn user_messages_distinguish_failure_kinds() {
        let timeout = LookupError::Timeout.user_message();
        let offline = LookupError::Offline.user_message();
        let detail = LookupError::Status {
            status: 400,
            detail: Some("Maximum of 100 certificates allowed".into()),
        }
        .user_message();
        let bare_status = LookupError::Status {
            status: 502,
            detail: None,
        }
        .user_message();
        let generic = LookupError::InvalidUrl(url::ParseError::EmptyHost).user_message();

        assert!(timeout.starts_with("Request timed out"));
        assert!(offline.contains("offline"));
        assert_eq!(detail, "Maximum of 100 certificates allowed");
        assert!(bare_status.contains("502"));
        assert!(generic.starts_with("Failed to connect"));

        let all = [&timeout, &offline, &detail, &bare_status, &generic];
        for (index, message) in all.iter().enumerate() {
            for other in &all[index + 1..] {
                assert_ne!(message, other);
            }
        }
    }

    #[test]
    fn query_errors_read_as_sentences() {
        let error: LookupError = CertQueryError::Empty.into();
        assert_eq!(error.user_message(), "Enter at least one certificate number");
    }

    #[tokio::test]
    async fn blank_cert_number_fails_before_any_request() {
        let client = LookupClient::with_base_url("http://127.0.0.1:9/").unwrap();
        assert!(matches!(
            client.lookup_cert("   ").await,
            Err(LookupError::InvalidQuery(CertQueryError::Empty))
        ));
    }

    #[tokio::test]
    async fn missing_image_is_an_io_error() {
        let client = LookupClient::with_base_url("http://127.0.0.1:9/").unwrap();
        let result = client
            .lookup_image(Path::new("/definitely/not/here/slabs.png"))
            .await;
        assert!(matches!(result, Err(LookupError::Io(_))));
    }

    fn local_client(base: &str) -> LookupClient {
        let http = Client::builder().no_proxy().build().unwrap();
        LookupClient::with_http(base, http).unwrap()
    }

    /// Reads one request, headers and body, so replies never race the upload.
    async fn read_request(socket: &mut TcpStream) {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let read = socket.read(&mut chunk).await.unwrap();
            if read == 0 {
                return;
            }
            buf.extend_from_slice(&chunk[..read]);
            let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
                continue;
            };
            let headers = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
            let length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                return;
            }
        }
    }

    /// Answers a single request with `status` and a JSON `body`.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            read_request(&mut socket).await;
            let reply = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(reply.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{addr}/")
    }

    #[tokio::test]
    async fn error_status_carries_server_detail() {
        let base = serve_once(
            "400 Bad Request",
            r#"{"detail":"Maximum of 100 certificates allowed"}"#,
        )
        .await;
        let client = local_client(&base);
        let query = CertQuery::parse("12345678").unwrap();

        match client.lookup_batch(&query).await {
            Err(LookupError::Status { status, detail }) => {
                assert_eq!(status, 400);
                assert_eq!(detail.as_deref(), Some("Maximum of 100 certificates allowed"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            read_request(&mut socket).await;
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(socket);
        });

        let mut client = local_client(&format!("http://{addr}/"));
        client.lookup_timeout = Duration::from_millis(200);

        let result = client.lookup_cert("12345678").await;
        assert!(matches!(result, Err(LookupError::Timeout)), "got {result:?}");
    }

    #[tokio::test]
    async fn unsuccessful_body_is_rejected() {
        let base = serve_once(
            "200 OK",
            r#"{"success":false,"error":"No data found for certificate #12345678"}"#,
        )
        .await;
        let client = local_client(&base);

        match client.lookup_cert("12345678").await {
            Err(LookupError::Rejected(message)) => {
                assert_eq!(message, "No data found for certificate #12345678");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn successful_lookup_returns_card_and_listing() {
        let base = serve_once(
            "200 OK",
            r#"{"success":true,"card_data":{"cert_number":"12345678","grade":"10","variety":null},"listing":{"title":"PSA 10","description":"Gem"}}"#,
        )
        .await;
        let client = local_client(&base);

        let found = client.lookup_cert("12345678").await.unwrap();
        assert_eq!(found.card_data.grade, "10");
        assert_eq!(found.listing.title, "PSA 10");
    }
}
