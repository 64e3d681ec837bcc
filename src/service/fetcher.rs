//! Page fetcher with manual redirect resolution and hard resource bounds.
//!
//! One GET per audit, no retries. Redirects are followed by hand with a
//! per-invocation hop budget, the body is streamed against a size cap, and
//! every transport error is normalized into a `FetchFailure` before it leaves
//! this module.

use crate::domain::models::FetchResult;
use crate::error::FetchFailure;
use crate::service::http::create_client;
use anyhow::Result;
use reqwest::Client;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use url::Url;

/// Per-request limits. `Default` carries the production values; tests build
/// their own. Limits live here, not on shared engine state, so concurrent
/// audits stay independent.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Overall timeout covering connect and full-body read.
    pub timeout: Duration,
    /// Redirect hops allowed before giving up with `RedirectLoop`.
    pub max_redirects: u8,
    /// Body size cap; exceeding it aborts the in-flight connection.
    pub max_body_bytes: usize,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_redirects: 5,
            max_body_bytes: 5 * 1024 * 1024,
            user_agent: "Mozilla/5.0 (compatible; SiteAuditBot/1.0)".to_string(),
        }
    }
}

/// Clone shares the underlying connection pool; limits stay per-invocation.
#[derive(Clone)]
pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = create_client(config.timeout)?;
        Ok(Self { client, config })
    }

    /// Fetch a single page, following up to `max_redirects` hops.
    ///
    /// The hop budget is a local of this call, so concurrent fetches never
    /// observe each other's redirect state.
    pub async fn fetch(&self, url: &str) -> Result<FetchResult, FetchFailure> {
        let mut current = parse_http_url(url)?;
        let mut hops_left = self.config.max_redirects;

        loop {
            log::debug!("[FETCH] GET {} ({} redirect hops left)", current, hops_left);
            let start = Instant::now();

            let response = self
                .client
                .get(current.clone())
                .header("User-Agent", &self.config.user_agent)
                .header(
                    "Accept",
                    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
                )
                .header("Accept-Language", "en-US,en;q=0.5")
                .header("Accept-Encoding", "identity")
                .header("Cache-Control", "no-cache")
                .send()
                .await
                .map_err(classify_transport_error)?;

            let status = response.status().as_u16();

            if (300..400).contains(&status) {
                if let Some(location) = response
                    .headers()
                    .get("location")
                    .and_then(|v| v.to_str().ok())
                {
                    if hops_left == 0 {
                        log::warn!("[FETCH] Redirect budget exhausted at {}", current);
                        return Err(FetchFailure::RedirectLoop);
                    }
                    current = current
                        .join(location)
                        .map_err(|_| FetchFailure::InvalidUrl)?;
                    hops_left -= 1;
                    continue;
                }
                // 3xx with no Location falls through to the status policy.
            }

            let elapsed_ms = start.elapsed().as_millis() as u64;

            match status {
                403 => return Err(FetchFailure::Blocked),
                404 => return Err(FetchFailure::NotFound),
                s if s >= 500 => return Err(FetchFailure::ServerError),
                s if !(200..400).contains(&s) => return Err(FetchFailure::UnexpectedStatus(s)),
                _ => {}
            }

            let headers = lowercase_headers(response.headers());
            let body = self.read_body_bounded(response).await?;

            log::info!(
                "[FETCH] {} -> {} ({} bytes in {}ms)",
                current,
                status,
                body.len(),
                elapsed_ms
            );

            return Ok(FetchResult {
                body,
                headers,
                status,
                elapsed_ms,
                final_url: current,
            });
        }
    }

    /// Stream the body, enforcing the size cap. On overflow the response is
    /// dropped, which tears down the connection instead of buffering the rest.
    async fn read_body_bounded(&self, mut response: reqwest::Response) -> Result<String, FetchFailure> {
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let mut bytes: Vec<u8> = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(classify_transport_error)? {
            if bytes.len() + chunk.len() > self.config.max_body_bytes {
                log::warn!(
                    "[FETCH] Body exceeded {} byte cap, aborting",
                    self.config.max_body_bytes
                );
                return Err(FetchFailure::TooLarge);
            }
            bytes.extend_from_slice(&chunk);
        }

        Ok(decode_body(&bytes, content_type.as_deref()))
    }
}

fn parse_http_url(url: &str) -> Result<Url, FetchFailure> {
    let parsed = Url::parse(url).map_err(|_| FetchFailure::InvalidUrl)?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        _ => Err(FetchFailure::InvalidUrl),
    }
}

fn lowercase_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, String> {
    let mut map: HashMap<String, String> = HashMap::new();
    for (name, value) in headers {
        if let Ok(value) = value.to_str() {
            map.entry(name.as_str().to_lowercase())
                .and_modify(|existing| {
                    existing.push_str(", ");
                    existing.push_str(value);
                })
                .or_insert_with(|| value.to_string());
        }
    }
    map
}

/// Decode body bytes honoring the Content-Type charset, falling back to
/// lossy UTF-8.
fn decode_body(bytes: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(|ct| {
            ct.split(';')
                .map(str::trim)
                .find_map(|p| p.strip_prefix("charset="))
        })
        .and_then(|label| encoding_rs::Encoding::for_label(label.trim_matches('"').as_bytes()));

    match encoding {
        Some(enc) => enc.decode(bytes).0.into_owned(),
        None => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Map a transport error onto the fixed failure taxonomy. Walks the source
/// chain looking for the io-level cause; DNS failures only show up as error
/// text, so those are matched on the message.
fn classify_transport_error(err: reqwest::Error) -> FetchFailure {
    if err.is_timeout() {
        return FetchFailure::TimedOut;
    }

    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(&err);
    while let Some(cause) = source {
        if let Some(io) = cause.downcast_ref::<std::io::Error>() {
            match io.kind() {
                std::io::ErrorKind::ConnectionRefused => return FetchFailure::Down,
                std::io::ErrorKind::ConnectionReset => return FetchFailure::BlockedOrReset,
                std::io::ErrorKind::TimedOut => return FetchFailure::TimedOut,
                _ => {}
            }
        }
        let text = cause.to_string().to_lowercase();
        if text.contains("dns") || text.contains("failed to lookup") {
            return FetchFailure::NotFound;
        }
        if text.contains("connection refused") {
            return FetchFailure::Down;
        }
        if text.contains("connection reset") {
            return FetchFailure::BlockedOrReset;
        }
        source = cause.source();
    }

    log::debug!("[FETCH] Unclassified transport error: {err:#}");
    FetchFailure::Down
}
