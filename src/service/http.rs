//! HTTP client factory for the audit fetcher.

use anyhow::{Context, Result};
use reqwest::{redirect, Client};
use std::time::Duration;

/// Build the client used for audit fetches.
///
/// Automatic redirect following is disabled: the fetcher resolves 3xx hops
/// itself so it can bound them. Transport compression stays off (the crate is
/// built without gzip/brotli features) and requests ask for identity encoding,
/// so the byte count seen on the wire is the page's true payload weight.
pub fn create_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .redirect(redirect::Policy::none())
        .build()
        .context("Failed to build audit HTTP client")
}
