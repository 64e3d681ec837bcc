//! The audit engine: the two entry points the surrounding service calls.
//!
//! `run_audit` is all-or-nothing: a failed fetch aborts the audit before any
//! analyzer runs, and a successful fetch always produces all six category
//! results. Analyzers run as concurrent tasks over one immutable context and
//! are re-sequenced by category identity, never by completion order.

use crate::domain::models::{
    AuditOptions, AuditReport, Category, CategoryResult, EligibilityResult, FetchResult,
};
use crate::error::{AuditError, Result};
use crate::extractor::DocumentSnapshot;
use crate::service::analyzers::{AuditContext, ANALYZERS};
use crate::service::eligibility::EligibilityChecker;
use crate::service::fetcher::{FetchConfig, Fetcher};
use crate::service::report;
use anyhow::{anyhow, Context};
use std::sync::Arc;
use std::time::Instant;

pub struct AuditEngine {
    fetcher: Fetcher,
    checker: EligibilityChecker,
}

impl AuditEngine {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_config(FetchConfig::default())
    }

    pub fn with_config(config: FetchConfig) -> anyhow::Result<Self> {
        let fetcher = Fetcher::new(config)?;
        let checker = EligibilityChecker::new(fetcher.clone());
        Ok(Self { fetcher, checker })
    }

    /// Advisory pre-flight pass. Never errors; see `EligibilityChecker`.
    pub async fn check_eligibility(&self, url: &str) -> EligibilityResult {
        self.checker.check(url).await
    }

    /// Fetch the page, run all six analyzers, and aggregate the report.
    pub async fn run_audit(&self, url: &str, options: &AuditOptions) -> Result<AuditReport> {
        log::info!("[ENGINE] Starting audit for: {url}");
        let started = Instant::now();

        let fetched = self.fetcher.fetch(url).await?;
        let load_time_ms = fetched.elapsed_ms;
        let final_url = fetched.final_url.clone();

        let ctx = Arc::new(build_context(fetched).await?);
        let results = run_analyzers(&ctx).await?;

        let audit_duration_ms = started.elapsed().as_millis() as u64;
        let report = report::aggregate(
            url,
            &final_url,
            load_time_ms,
            audit_duration_ms,
            results,
            options,
        );

        log::info!(
            "[ENGINE] Audit completed in {}ms. Overall score: {}",
            report.audit_duration_ms,
            report.overall_score
        );
        Ok(report)
    }
}

/// Parse the document and build the shared analyzer input. Parsing runs on a
/// blocking thread; a parser panic surfaces as a join error instead of
/// tearing down the caller.
async fn build_context(fetched: FetchResult) -> Result<AuditContext> {
    let FetchResult {
        body,
        headers,
        elapsed_ms,
        final_url,
        ..
    } = fetched;
    let body_bytes = body.len();

    let final_url_str = final_url.to_string();
    let snapshot = tokio::task::spawn_blocking(move || DocumentSnapshot::extract(&body, &final_url_str))
        .await
        .context("document parsing failed")
        .map_err(AuditError::Internal)?;

    Ok(AuditContext {
        snapshot,
        headers,
        final_url,
        load_time_ms: elapsed_ms,
        body_bytes,
    })
}

/// Run the six analyzers concurrently and re-sequence the results into the
/// canonical category order.
async fn run_analyzers(ctx: &Arc<AuditContext>) -> Result<[CategoryResult; 6]> {
    let mut handles = Vec::with_capacity(ANALYZERS.len());
    for analyzer in ANALYZERS {
        let ctx = Arc::clone(ctx);
        handles.push(tokio::spawn(async move {
            (analyzer.category, analyzer.run(&ctx))
        }));
    }

    let mut finished: Vec<(Category, CategoryResult)> = Vec::with_capacity(handles.len());
    for joined in futures::future::join_all(handles).await {
        let (category, result) = joined
            .context("analyzer task failed")
            .map_err(AuditError::Internal)?;
        finished.push((category, result));
    }

    finished.sort_by_key(|(category, _)| category.index());
    let results: Vec<CategoryResult> = finished.into_iter().map(|(_, result)| result).collect();
    results
        .try_into()
        .map_err(|_| AuditError::Internal(anyhow!("analyzer results incomplete")))
}
