//! Pre-flight eligibility pass: decides whether a URL is even worth a full
//! audit. Rejections are normal negative results; only the downstream audit
//! is authoritative, so unexpected internal failures fail open.

use crate::domain::models::EligibilityResult;
use crate::error::FetchFailure;
use crate::service::fetcher::Fetcher;
use anyhow::Result;
use url::Url;

/// Hostnames (and scheme strings smuggled into hostnames) that must never be
/// probed. Substring-matched against the lowercased host.
const RESTRICTED_HOSTS: [&str; 10] = [
    "localhost",
    "127.0.0.1",
    "0.0.0.0",
    "[::1]",
    "file:",
    "ftp:",
    "data:",
    "javascript:",
    "about:",
    "chrome:",
];

/// MIME types that mark a URL as a file download, not a page.
const EXCLUDED_CONTENT_TYPES: [&str; 8] = [
    "application/pdf",
    "application/zip",
    "application/octet-stream",
    "image/",
    "video/",
    "audio/",
    "application/json",
    "application/xml",
];

/// Structural markers that identify HTML-shaped content.
const HTML_MARKERS: [&str; 13] = [
    "<html",
    "<head",
    "<body",
    "<title",
    "<div",
    "<p>",
    "<h1",
    "<h2",
    "<nav",
    "<main",
    "<section",
    "<article",
    "<!doctype",
];

/// Minimum trimmed body length worth analyzing.
const MIN_CONTENT_CHARS: usize = 200;

pub struct EligibilityChecker {
    fetcher: Fetcher,
    denylist: Vec<String>,
}

impl EligibilityChecker {
    pub fn new(fetcher: Fetcher) -> Self {
        Self::with_denylist(
            fetcher,
            RESTRICTED_HOSTS.iter().map(|s| s.to_string()).collect(),
        )
    }

    /// Override the restricted-host policy. Exists so deployments (and tests)
    /// can audit hosts the default list would refuse.
    pub fn with_denylist(fetcher: Fetcher, denylist: Vec<String>) -> Self {
        Self { fetcher, denylist }
    }

    /// Run the pre-flight pass. Never errors: classified rejections come back
    /// as `eligible: false`, anything unexpected fails open with a caveat.
    pub async fn check(&self, url: &str) -> EligibilityResult {
        log::info!("[ELIGIBILITY] Checking: {url}");
        match self.check_inner(url).await {
            Ok(result) => {
                log::info!(
                    "[ELIGIBILITY] {url} -> eligible={}: {}",
                    result.eligible,
                    result.reason
                );
                result
            }
            Err(err) => {
                log::error!("[ELIGIBILITY] Unexpected failure for {url}: {err:#}");
                eligible("Unable to pre-verify website, but will attempt audit")
            }
        }
    }

    async fn check_inner(&self, url: &str) -> Result<EligibilityResult> {
        // Syntax and scheme checks come before any network traffic.
        let parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(_) => {
                return Ok(ineligible(
                    "Please enter a valid website URL (e.g., https://yoursite.com)",
                ))
            }
        };
        if !matches!(parsed.scheme(), "http" | "https") {
            return Ok(ineligible("Only HTTP and HTTPS websites can be audited"));
        }

        let host = parsed.host_str().unwrap_or("").to_lowercase();
        if self.denylist.iter().any(|denied| host.contains(denied)) {
            return Ok(ineligible("Local or system URLs cannot be audited"));
        }

        let fetched = match self.fetcher.fetch(url).await {
            Ok(fetched) => fetched,
            Err(failure) => return Ok(ineligible(&fetch_rejection_reason(&failure))),
        };

        let content_type = fetched
            .headers
            .get("content-type")
            .map(|v| v.to_lowercase())
            .unwrap_or_default();
        if EXCLUDED_CONTENT_TYPES
            .iter()
            .any(|excluded| content_type.contains(excluded))
        {
            return Ok(ineligible(
                "This URL appears to be a file download rather than a website page",
            ));
        }

        if fetched.body.trim().chars().count() < MIN_CONTENT_CHARS {
            return Ok(ineligible(
                "This page appears to be empty or have very little content to analyze",
            ));
        }

        let lowered = fetched.body.to_lowercase();
        let html_shaped = HTML_MARKERS.iter().any(|marker| lowered.contains(marker))
            || (fetched.body.len() > 1000 && content_type.contains("text"));
        if !html_shaped {
            return Ok(ineligible(
                "This doesn't appear to be a standard website page. Please check the URL.",
            ));
        }

        Ok(eligible("Website is ready for analysis"))
    }
}

/// Translate a classified fetch failure into the sentence shown to end users.
fn fetch_rejection_reason(failure: &FetchFailure) -> String {
    match failure {
        FetchFailure::NotFound => {
            "We couldn't find this website. Please check the URL is correct.".to_string()
        }
        FetchFailure::Blocked => {
            "This website is blocking automated requests, so we can't audit it.".to_string()
        }
        FetchFailure::TimedOut => {
            "This website is taking too long to respond. Please try again later.".to_string()
        }
        FetchFailure::TooLarge => {
            "This website's content is too large for our audit system to process.".to_string()
        }
        other => other.to_string(),
    }
}

fn eligible(reason: &str) -> EligibilityResult {
    EligibilityResult {
        eligible: true,
        reason: reason.to_string(),
    }
}

fn ineligible(reason: &str) -> EligibilityResult {
    EligibilityResult {
        eligible: false,
        reason: reason.to_string(),
    }
}
