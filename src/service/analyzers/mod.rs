//! Category analyzers and the shared check-table machinery.
//!
//! Each category is an ordered table of pure checks evaluated against the
//! same immutable `AuditContext`. Every firing check contributes exactly one
//! deduction and one `Issue`, plus a `Recommendation` for the non-minor ones.
//! The deduction amounts and issue ids are a compatibility contract; changing
//! them is a behavioral break.

pub mod accessibility;
pub mod best_practices;
pub mod mobile;
pub mod performance;
pub mod security;
pub mod seo;

use crate::domain::models::{Category, CategoryResult, Issue, Recommendation};
use crate::extractor::DocumentSnapshot;
use std::collections::HashMap;
use url::Url;

/// Immutable, `Send` input shared by all six analyzers. Built once per audit
/// after the fetch; analyzers never perform I/O.
#[derive(Debug, Clone)]
pub struct AuditContext {
    pub snapshot: DocumentSnapshot,
    /// Response headers with lowercased names.
    pub headers: HashMap<String, String>,
    pub final_url: Url,
    pub load_time_ms: u64,
    /// Raw (identity-encoded) body size.
    pub body_bytes: usize,
}

/// One firing rule: a deduction paired with its issue and optional
/// recommendation.
pub struct Finding {
    pub penalty: u8,
    pub issue: Issue,
    pub recommendation: Option<Recommendation>,
}

/// A single heuristic rule. Returns `None` when the page passes it.
pub type Check = fn(&AuditContext) -> Option<Finding>;

/// One category's ordered rule table.
#[derive(Clone, Copy)]
pub struct CategoryAnalyzer {
    pub category: Category,
    checks: &'static [Check],
}

impl CategoryAnalyzer {
    /// Walk the rule table in order, deducting from 100 and clamping the
    /// final score to [0, 100]. Deductions are additive, never compounding.
    pub fn run(&self, ctx: &AuditContext) -> CategoryResult {
        let mut score: i32 = 100;
        let mut issues = Vec::new();
        let mut recommendations = Vec::new();

        for check in self.checks {
            if let Some(finding) = check(ctx) {
                score -= i32::from(finding.penalty);
                issues.push(finding.issue);
                if let Some(rec) = finding.recommendation {
                    recommendations.push(rec);
                }
            }
        }

        CategoryResult {
            score: score.clamp(0, 100) as u8,
            issues,
            recommendations,
        }
    }
}

/// All six analyzers in the canonical report order.
pub const ANALYZERS: [CategoryAnalyzer; 6] = [
    CategoryAnalyzer {
        category: Category::Performance,
        checks: performance::CHECKS,
    },
    CategoryAnalyzer {
        category: Category::Seo,
        checks: seo::CHECKS,
    },
    CategoryAnalyzer {
        category: Category::Security,
        checks: security::CHECKS,
    },
    CategoryAnalyzer {
        category: Category::Mobile,
        checks: mobile::CHECKS,
    },
    CategoryAnalyzer {
        category: Category::Accessibility,
        checks: accessibility::CHECKS,
    },
    CategoryAnalyzer {
        category: Category::BestPractices,
        checks: best_practices::CHECKS,
    },
];
