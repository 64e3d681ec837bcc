//! Performance heuristics: load time, payload weight, caching, compression.

use super::{AuditContext, Check, Finding};
use crate::domain::models::{Category, Difficulty, Issue, Priority, Recommendation};

pub const CHECKS: &[Check] = &[check_load_time, check_page_size, check_caching, check_compression];

const SPEED_UP_WEBSITE: Recommendation = Recommendation {
    title: "Speed Up Your Website",
    description: "Slow loading times hurt both user experience and search rankings. Most visitors expect pages to load in under 3 seconds.",
    priority: Priority::High,
    impact: 9,
    difficulty: Difficulty::Medium,
    estimated_time: "2-4 hours",
    steps: &[
        "Compress and optimize your images",
        "Minify your CSS and JavaScript files",
        "Enable browser caching on your server",
        "Consider using a Content Delivery Network (CDN)",
    ],
};

const REDUCE_PAGE_WEIGHT: Recommendation = Recommendation {
    title: "Reduce Page Weight",
    description: "Large pages take longer to download, especially on mobile devices with slower connections.",
    priority: Priority::Medium,
    impact: 7,
    difficulty: Difficulty::Easy,
    estimated_time: "1-2 hours",
    steps: &[
        "Compress images using tools like TinyPNG or ImageOptim",
        "Remove any unused CSS and JavaScript code",
        "Enable GZIP compression on your web server",
        "Consider lazy loading for images below the fold",
    ],
};

const ENABLE_BROWSER_CACHING: Recommendation = Recommendation {
    title: "Enable Browser Caching",
    description: "Browser caching helps returning visitors load your site faster by storing certain files locally.",
    priority: Priority::Low,
    impact: 6,
    difficulty: Difficulty::Easy,
    estimated_time: "30 minutes",
    steps: &[
        "Configure your server to send Cache-Control headers",
        "Set appropriate cache times for different file types",
        "Add ETags for better cache validation",
        "Test caching with browser developer tools",
    ],
};

fn check_load_time(ctx: &AuditContext) -> Option<Finding> {
    let seconds = ctx.load_time_ms as f64 / 1000.0;
    if ctx.load_time_ms > 3000 {
        Some(Finding {
            penalty: 30,
            issue: Issue {
                id: "slow-load-time",
                category: Category::Performance,
                priority: Priority::High,
                description: format!(
                    "Your website loads in {seconds:.2} seconds, which may frustrate visitors"
                ),
            },
            recommendation: Some(SPEED_UP_WEBSITE),
        })
    } else if ctx.load_time_ms > 1500 {
        Some(Finding {
            penalty: 15,
            issue: Issue {
                id: "moderate-load-time",
                category: Category::Performance,
                priority: Priority::Medium,
                description: format!(
                    "Your website loads in {seconds:.2} seconds - there's room for improvement"
                ),
            },
            recommendation: None,
        })
    } else {
        None
    }
}

fn check_page_size(ctx: &AuditContext) -> Option<Finding> {
    if ctx.body_bytes <= 1024 * 1024 {
        return None;
    }
    let megabytes = ctx.body_bytes as f64 / 1024.0 / 1024.0;
    Some(Finding {
        penalty: 20,
        issue: Issue {
            id: "large-page-size",
            category: Category::Performance,
            priority: Priority::Medium,
            description: format!(
                "Your page is {megabytes:.2}MB, which may slow down loading on mobile connections"
            ),
        },
        recommendation: Some(REDUCE_PAGE_WEIGHT),
    })
}

fn check_caching(ctx: &AuditContext) -> Option<Finding> {
    let has_max_age = ctx
        .headers
        .get("cache-control")
        .is_some_and(|v| v.contains("max-age"));
    if has_max_age {
        return None;
    }
    Some(Finding {
        penalty: 10,
        issue: Issue {
            id: "no-cache-headers",
            category: Category::Performance,
            priority: Priority::Low,
            description:
                "Your website isn't telling browsers to cache content, missing a speed optimization"
                    .to_string(),
        },
        recommendation: Some(ENABLE_BROWSER_CACHING),
    })
}

fn check_compression(ctx: &AuditContext) -> Option<Finding> {
    if ctx.headers.contains_key("content-encoding") {
        return None;
    }
    Some(Finding {
        penalty: 15,
        issue: Issue {
            id: "no-compression",
            category: Category::Performance,
            priority: Priority::Medium,
            description: "Your website content isn't compressed, making it larger than necessary"
                .to_string(),
        },
        recommendation: None,
    })
}

#[cfg(test)]
mod tests {
    use super::super::test_support::context_with;
    use super::*;

    const GOOD_HEADERS: &[(&str, &str)] = &[
        ("cache-control", "public, max-age=3600"),
        ("content-encoding", "gzip"),
    ];

    fn analyzer() -> super::super::CategoryAnalyzer {
        super::super::ANALYZERS[Category::Performance.index()]
    }

    #[test]
    fn fast_cached_compressed_page_scores_100() {
        let ctx = context_with("<html></html>", "https://example.com/", 800, GOOD_HEADERS);
        let result = analyzer().run(&ctx);
        assert_eq!(result.score, 100);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn slow_load_deducts_30_with_recommendation() {
        let ctx = context_with("<html></html>", "https://example.com/", 4200, GOOD_HEADERS);
        let result = analyzer().run(&ctx);
        assert_eq!(result.score, 70);
        assert_eq!(result.issues[0].id, "slow-load-time");
        assert!(result.issues[0].description.contains("4.20 seconds"));
        assert_eq!(result.recommendations[0].title, "Speed Up Your Website");
    }

    #[test]
    fn moderate_load_deducts_15_without_recommendation() {
        let ctx = context_with("<html></html>", "https://example.com/", 2000, GOOD_HEADERS);
        let result = analyzer().run(&ctx);
        assert_eq!(result.score, 85);
        assert_eq!(result.issues[0].id, "moderate-load-time");
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn oversized_body_deducts_20() {
        let mut ctx = context_with("<html></html>", "https://example.com/", 800, GOOD_HEADERS);
        ctx.body_bytes = 2 * 1024 * 1024;
        let result = analyzer().run(&ctx);
        assert_eq!(result.score, 80);
        assert_eq!(result.issues[0].id, "large-page-size");
        assert!(result.issues[0].description.contains("2.00MB"));
    }

    #[test]
    fn missing_cache_and_compression_headers_deduct_25() {
        let ctx = context_with("<html></html>", "https://example.com/", 800, &[]);
        let result = analyzer().run(&ctx);
        assert_eq!(result.score, 75);
        let ids: Vec<_> = result.issues.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["no-cache-headers", "no-compression"]);
    }

    #[test]
    fn cache_control_without_max_age_still_flags() {
        let ctx = context_with(
            "<html></html>",
            "https://example.com/",
            800,
            &[("cache-control", "no-store"), ("content-encoding", "br")],
        );
        let result = analyzer().run(&ctx);
        assert_eq!(result.issues[0].id, "no-cache-headers");
    }

    #[test]
    fn worst_case_accumulates_all_deductions() {
        let mut ctx = context_with("<html></html>", "https://example.com/", 10_000, &[]);
        ctx.body_bytes = 6 * 1024 * 1024;
        let result = analyzer().run(&ctx);
        // 30 + 20 + 10 + 15 = 75 in deductions
        assert_eq!(result.score, 25);
    }
}
