//! Domain entities for audit reports - behavior lives WITH data

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use url::Url;

// ====== Enums ======

/// The six audit dimensions, in the fixed order reports present them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Performance,
    Seo,
    Security,
    Mobile,
    Accessibility,
    BestPractices,
}

impl Category {
    /// Canonical report order. Flattened issue/recommendation lists follow it
    /// regardless of which analyzer task finishes first.
    pub const ORDER: [Category; 6] = [
        Category::Performance,
        Category::Seo,
        Category::Security,
        Category::Mobile,
        Category::Accessibility,
        Category::BestPractices,
    ];

    pub fn index(&self) -> usize {
        Self::ORDER
            .iter()
            .position(|c| c == self)
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Performance => "performance",
            Category::Seo => "seo",
            Category::Security => "security",
            Category::Mobile => "mobile",
            Category::Accessibility => "accessibility",
            Category::BestPractices => "bestPractices",
        }
    }
}

/// Issue/recommendation severity. `Ord` matches ranking order: High > Medium > Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

// ====== Findings ======

/// A detected deficiency. The `id` is a stable heuristic name
/// (e.g. "missing-title") and must not change meaning once introduced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub id: &'static str,
    pub category: Category,
    pub priority: Priority,
    pub description: String,
}

/// An actionable remediation template. All fields are fixed copy; the
/// constants live next to the checks that emit them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub title: &'static str,
    pub description: &'static str,
    pub priority: Priority,
    pub impact: u8,
    pub difficulty: Difficulty,
    pub estimated_time: &'static str,
    pub steps: &'static [&'static str],
}

/// Output of one category analyzer. `score` is clamped to [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryResult {
    pub score: u8,
    pub issues: Vec<Issue>,
    pub recommendations: Vec<Recommendation>,
}

// ====== Fetch outcome ======

/// A successfully fetched page. Failure is carried by
/// `FetchFailure` on the error side of `Fetcher::fetch`, so a result can
/// never hold both a body and a failure reason.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub body: String,
    /// Response headers with lowercased names.
    pub headers: HashMap<String, String>,
    pub status: u16,
    pub elapsed_ms: u64,
    pub final_url: Url,
}

// ====== Report ======

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub performance: u8,
    pub seo: u8,
    pub security: u8,
    pub mobile: u8,
    pub accessibility: u8,
    pub best_practices: u8,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> u8 {
        match category {
            Category::Performance => self.performance,
            Category::Seo => self.seo,
            Category::Security => self.security,
            Category::Mobile => self.mobile,
            Category::Accessibility => self.accessibility,
            Category::BestPractices => self.best_practices,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitiveAnalysis {
    pub avg_industry_score: u8,
    pub percentile: u8,
    pub ranking: &'static str,
}

/// Final output of one audit invocation. Constructed once, entirely derived,
/// immutable after construction; persistence and email delivery are owned by
/// the surrounding service.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub website_url: String,
    pub final_url: String,
    pub timestamp: DateTime<Utc>,
    pub load_time_ms: u64,
    pub audit_duration_ms: u64,
    pub scores: CategoryScores,
    pub overall_score: u8,
    pub issues: Vec<Issue>,
    pub recommendations: Vec<Recommendation>,
    pub quick_wins: Vec<&'static str>,
    pub medium_term_goals: Vec<&'static str>,
    pub long_term_goals: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competitive: Option<CompetitiveAnalysis>,
}

/// Outcome of the pre-flight eligibility pass. Rejections are normal negative
/// results, never errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityResult {
    pub eligible: bool,
    pub reason: String,
}

/// Caller-supplied audit options.
#[derive(Debug, Clone, Default)]
pub struct AuditOptions {
    /// Business category for competitive context; omitted → no
    /// competitive section in the report.
    pub business_type: Option<String>,
}
