//! Security heuristics: transport encryption and protective response headers.

use super::{AuditContext, Check, Finding};
use crate::domain::models::{Category, Difficulty, Issue, Priority, Recommendation};

pub const CHECKS: &[Check] = &[check_https, check_security_headers];

/// Checked in order; each missing header costs 10 points.
const SECURITY_HEADERS: [&str; 4] = [
    "x-frame-options",
    "x-content-type-options",
    "strict-transport-security",
    "x-xss-protection",
];

const SWITCH_TO_HTTPS: Recommendation = Recommendation {
    title: "Switch to HTTPS",
    description: "HTTPS encrypts data between your website and visitors, protecting sensitive information and boosting SEO rankings.",
    priority: Priority::High,
    impact: 10,
    difficulty: Difficulty::Medium,
    estimated_time: "1-2 hours",
    steps: &[
        "Get an SSL certificate from your hosting provider (often free)",
        "Configure your server to use HTTPS",
        "Set up automatic redirects from HTTP to HTTPS",
        "Update all internal links to use HTTPS",
    ],
};

const ADD_SECURITY_HEADERS: Recommendation = Recommendation {
    title: "Add Security Headers",
    description: "Security headers provide an extra layer of protection against common web vulnerabilities and attacks.",
    priority: Priority::Medium,
    impact: 7,
    difficulty: Difficulty::Medium,
    estimated_time: "1 hour",
    steps: &[
        "Configure X-Frame-Options to prevent your site being embedded maliciously",
        "Add X-Content-Type-Options to prevent MIME type confusion attacks",
        "Set up Content Security Policy (CSP) to prevent code injection",
        "Enable X-XSS-Protection for older browsers",
    ],
};

fn check_https(ctx: &AuditContext) -> Option<Finding> {
    if ctx.final_url.scheme() == "https" {
        return None;
    }
    Some(Finding {
        penalty: 40,
        issue: Issue {
            id: "no-https",
            category: Category::Security,
            priority: Priority::High,
            description: "Your website isn't using HTTPS, which means data isn't encrypted"
                .to_string(),
        },
        recommendation: Some(SWITCH_TO_HTTPS),
    })
}

fn check_security_headers(ctx: &AuditContext) -> Option<Finding> {
    let missing = SECURITY_HEADERS
        .iter()
        .filter(|h| !ctx.headers.contains_key(**h))
        .count();
    if missing == 0 {
        return None;
    }
    Some(Finding {
        penalty: (missing * 10) as u8,
        issue: Issue {
            id: "missing-security-headers",
            category: Category::Security,
            priority: Priority::Medium,
            description: format!(
                "Your website is missing {missing} security headers that protect against common attacks"
            ),
        },
        recommendation: Some(ADD_SECURITY_HEADERS),
    })
}
