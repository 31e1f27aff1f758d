//! Collection endpoint over HTTP.
//!
//! Requests `GET {endpoint}?page={n}&per_page={size}` and decodes the
//! `{ page, per_page, total, total_pages, data: [...] }` envelope.

use crate::model::{FetchError, RawRecord};
use crate::source::{FetchedPage, PageFetcher};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use std::num::NonZeroUsize;
use std::time::Duration;
use tracing::debug;

/// Header carrying the static API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Settings for [`HttpFetcher::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpFetcherOptions {
    /// Collection URL; `page` and `per_page` are appended as query params.
    pub endpoint: String,
    /// Sent as both `x-api-key` and a bearer token.
    pub api_key: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

/// [`PageFetcher`] over a paged JSON collection endpoint.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: reqwest::Client,
    endpoint: String,
}

/// Wire envelope of one collection page.
#[derive(Debug, Deserialize)]
struct CollectionPage {
    data: Vec<RawRecord>,
    #[serde(default)]
    total_pages: Option<u32>,
}

impl HttpFetcher {
    /// Build a fetcher with the credential headers baked into the client.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Transport` if the API key is not a valid header value or the
    /// client cannot be constructed.
    pub fn new(options: HttpFetcherOptions) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(options.timeout)
            .default_headers(credential_headers(&options.api_key)?)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: options.endpoint,
        })
    }

    /// Collection URL this fetcher requests.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn credential_headers(api_key: &str) -> Result<HeaderMap, FetchError> {
    let invalid = |_| FetchError::Transport("api key is not a valid header value".to_string());

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(API_KEY_HEADER, HeaderValue::from_str(api_key).map_err(invalid)?);
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(invalid)?,
    );
    Ok(headers)
}

/// Decode a collection page body into records.
///
/// A missing or zero `total_pages` counts as a single page. One record without an id
/// rejects the whole page.
pub fn decode_page(body: &str) -> Result<FetchedPage, FetchError> {
    let page: CollectionPage =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    let records = page
        .data
        .into_iter()
        .enumerate()
        .map(|(position, raw)| raw.into_record(position))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FetchedPage::new(records, page.total_pages.unwrap_or(1)))
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, page: u32, per_page: NonZeroUsize) -> Result<FetchedPage, FetchError> {
        let resp = self
            .http
            .get(&self.endpoint)
            .query(&[("page", page.to_string()), ("per_page", per_page.to_string())])
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        debug!(
            page,
            per_page = per_page.get(),
            status = status.as_u16(),
            body_len = body.len(),
            "Collection page response"
        );

        if !status.is_success() {
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("request failed").to_string()
            } else {
                body
            };
            return Err(FetchError::Status {
                code: status.as_u16(),
                message,
            });
        }

        decode_page(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InvalidRecord, RecordId};

    #[test]
    fn decode_reads_records_and_total() {
        let body = r#"{"page":2,"per_page":6,"total":12,"total_pages":2,"data":[
            {"id":7,"email":"michael.lawson@reqres.in","first_name":"Michael","last_name":"Lawson","avatar":"a"},
            {"id":8,"email":"lindsay.ferguson@reqres.in","first_name":"Lindsay","last_name":"Ferguson","avatar":"b"}
        ]}"#;

        let page = decode_page(body).unwrap();
        assert_eq!(page.total_pages, 2);
        let ids: Vec<RecordId> = page.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![RecordId::new(7), RecordId::new(8)]);
    }

    #[test]
    fn decode_defaults_missing_total_to_one() {
        let page = decode_page(r#"{"data":[]}"#).unwrap();
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn decode_treats_zero_total_as_one() {
        let page = decode_page(r#"{"data":[],"total_pages":0}"#).unwrap();
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn decode_rejects_missing_data() {
        assert!(matches!(
            decode_page(r#"{"total_pages":3}"#),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn decode_rejects_non_json() {
        assert!(matches!(
            decode_page("<html>oops</html>"),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn decode_rejects_record_without_id() {
        let body = r#"{"total_pages":1,"data":[{"id":1},{"email":"x@y.com"}]}"#;
        assert_eq!(
            decode_page(body),
            Err(FetchError::InvalidRecord(InvalidRecord::MissingId { position: 1 }))
        );
    }

    #[test]
    fn credential_headers_carry_key_twice() {
        let headers = credential_headers("secret-key").unwrap();
        assert_eq!(headers[API_KEY_HEADER], "secret-key");
        assert_eq!(headers[AUTHORIZATION], "Bearer secret-key");
        assert_eq!(headers[ACCEPT], "application/json");
    }

    #[test]
    fn credential_headers_reject_control_characters() {
        assert!(matches!(
            credential_headers("bad\nkey"),
            Err(FetchError::Transport(_))
        ));
    }
}
