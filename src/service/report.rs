//! Report aggregation: weighted overall score, action-item buckets, and the
//! optional competitive context.

use crate::domain::models::{
    AuditOptions, AuditReport, Category, CategoryResult, CategoryScores, CompetitiveAnalysis,
    Difficulty, Recommendation,
};
use chrono::Utc;
use url::Url;

/// Fixed category weights. They sum to exactly 1.0; changing any of them is a
/// behavioral break requiring sign-off.
pub const WEIGHTS: [(Category, f64); 6] = [
    (Category::Performance, 0.25),
    (Category::Seo, 0.25),
    (Category::Security, 0.20),
    (Category::Mobile, 0.15),
    (Category::Accessibility, 0.10),
    (Category::BestPractices, 0.05),
];

/// Generic fallbacks so callers never see an empty action-item bucket.
const QUICK_WIN_FALLBACK: [&str; 3] = [
    "Optimize images for faster loading",
    "Add missing alt text to images",
    "Enable browser caching",
];
const MEDIUM_TERM_FALLBACK: [&str; 3] = [
    "Improve mobile responsiveness",
    "Enhance security headers",
    "Optimize content structure",
];
const LONG_TERM_FALLBACK: [&str; 3] = [
    "Implement comprehensive SEO strategy",
    "Redesign for better user experience",
    "Develop content marketing plan",
];

/// Per-category industry averages for the competitive context.
const INDUSTRY_AVERAGES: [(&str, u8); 10] = [
    ("ecommerce", 72),
    ("service", 68),
    ("restaurant", 65),
    ("healthcare", 74),
    ("technology", 78),
    ("education", 70),
    ("nonprofit", 66),
    ("real-estate", 69),
    ("automotive", 71),
    ("other", 70),
];
const FALLBACK_INDUSTRY_AVERAGE: u8 = 70;

/// Combine the six category results into the final report. `results` is in
/// canonical category order (the engine re-sequences by identity before
/// calling this, so completion order never leaks into the output).
pub fn aggregate(
    website_url: &str,
    final_url: &Url,
    load_time_ms: u64,
    audit_duration_ms: u64,
    results: [CategoryResult; 6],
    options: &AuditOptions,
) -> AuditReport {
    let scores = CategoryScores {
        performance: results[Category::Performance.index()].score,
        seo: results[Category::Seo.index()].score,
        security: results[Category::Security.index()].score,
        mobile: results[Category::Mobile.index()].score,
        accessibility: results[Category::Accessibility.index()].score,
        best_practices: results[Category::BestPractices.index()].score,
    };
    let overall_score = overall_score(&scores);

    let mut issues = Vec::new();
    let mut recommendations = Vec::new();
    for result in results {
        issues.extend(result.issues);
        recommendations.extend(result.recommendations);
    }

    let (quick_wins, medium_term_goals, long_term_goals) = action_buckets(&recommendations);

    let competitive = options
        .business_type
        .as_deref()
        .map(|business| competitive_context(overall_score, business));

    AuditReport {
        website_url: website_url.to_string(),
        final_url: final_url.to_string(),
        timestamp: Utc::now(),
        load_time_ms,
        audit_duration_ms,
        scores,
        overall_score,
        issues,
        recommendations,
        quick_wins,
        medium_term_goals,
        long_term_goals,
        competitive,
    }
}

fn overall_score(scores: &CategoryScores) -> u8 {
    let weighted: f64 = WEIGHTS
        .iter()
        .map(|(category, weight)| f64::from(scores.get(*category)) * weight)
        .sum();
    weighted.round() as u8
}

/// Rank recommendations (priority desc, then impact desc) and fill the three
/// action buckets, capping each at 3 titles.
fn action_buckets(
    recommendations: &[Recommendation],
) -> (Vec<&'static str>, Vec<&'static str>, Vec<&'static str>) {
    let mut ranked: Vec<&Recommendation> = recommendations.iter().collect();
    ranked.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| b.impact.cmp(&a.impact))
    });

    let quick_wins: Vec<&'static str> = ranked
        .iter()
        .filter(|r| r.difficulty == Difficulty::Easy && r.impact >= 7)
        .take(3)
        .map(|r| r.title)
        .collect();

    let medium_term: Vec<&'static str> = ranked
        .iter()
        .filter(|r| r.difficulty == Difficulty::Medium || (r.impact >= 5 && r.impact < 7))
        .take(3)
        .map(|r| r.title)
        .collect();

    let long_term: Vec<&'static str> = ranked
        .iter()
        .filter(|r| r.difficulty == Difficulty::Hard || r.estimated_time.contains("hours"))
        .take(3)
        .map(|r| r.title)
        .collect();

    (
        fallback_if_empty(quick_wins, &QUICK_WIN_FALLBACK),
        fallback_if_empty(medium_term, &MEDIUM_TERM_FALLBACK),
        fallback_if_empty(long_term, &LONG_TERM_FALLBACK),
    )
}

fn fallback_if_empty(bucket: Vec<&'static str>, fallback: &[&'static str; 3]) -> Vec<&'static str> {
    if bucket.is_empty() {
        fallback.to_vec()
    } else {
        bucket
    }
}

/// Map the overall score against the industry-average table. Advisory only.
pub fn competitive_context(overall_score: u8, business_type: &str) -> CompetitiveAnalysis {
    let avg_industry_score = INDUSTRY_AVERAGES
        .iter()
        .find(|(name, _)| *name == business_type)
        .map(|(_, avg)| *avg)
        .unwrap_or(FALLBACK_INDUSTRY_AVERAGE);

    let percentile = (f64::from(overall_score) / f64::from(avg_industry_score) * 50.0 + 25.0)
        .round()
        .clamp(5.0, 95.0) as u8;

    CompetitiveAnalysis {
        avg_industry_score,
        percentile,
        ranking: if overall_score > avg_industry_score {
            "above average"
        } else {
            "below average"
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Priority;

    fn uniform_results(score: u8) -> [CategoryResult; 6] {
        std::array::from_fn(|_| CategoryResult {
            score,
            issues: Vec::new(),
            recommendations: Vec::new(),
        })
    }

    fn report_for(results: [CategoryResult; 6]) -> AuditReport {
        aggregate(
            "https://example.com",
            &Url::parse("https://example.com/").unwrap(),
            500,
            900,
            results,
            &AuditOptions::default(),
        )
    }

    #[test]
    fn weights_sum_to_one() {
        let sum: f64 = WEIGHTS.iter().map(|(_, w)| w).sum();
        assert!((sum - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn perfect_scores_aggregate_to_100_and_zero_to_0() {
        assert_eq!(report_for(uniform_results(100)).overall_score, 100);
        assert_eq!(report_for(uniform_results(0)).overall_score, 0);
    }

    #[test]
    fn overall_score_is_the_rounded_weighted_sum() {
        let mut results = uniform_results(100);
        results[Category::Security.index()].score = 20;
        // 100*0.8 + 20*0.2 = 84
        assert_eq!(report_for(results).overall_score, 84);
    }

    #[test]
    fn empty_buckets_fall_back_to_generic_lists() {
        let report = report_for(uniform_results(100));
        assert_eq!(report.quick_wins, QUICK_WIN_FALLBACK.to_vec());
        assert_eq!(report.medium_term_goals, MEDIUM_TERM_FALLBACK.to_vec());
        assert_eq!(report.long_term_goals, LONG_TERM_FALLBACK.to_vec());
    }

    #[test]
    fn buckets_rank_by_priority_then_impact() {
        let easy_high = Recommendation {
            title: "Easy High",
            description: "",
            priority: Priority::High,
            impact: 9,
            difficulty: Difficulty::Easy,
            estimated_time: "15 minutes",
            steps: &[],
        };
        let easy_low_priority = Recommendation {
            title: "Easy Low Priority",
            impact: 8,
            priority: Priority::Low,
            ..easy_high
        };
        let medium = Recommendation {
            title: "Medium Effort",
            difficulty: Difficulty::Medium,
            impact: 6,
            priority: Priority::Medium,
            ..easy_high
        };
        let hard = Recommendation {
            title: "Hard Slog",
            difficulty: Difficulty::Hard,
            estimated_time: "4-8 hours",
            impact: 9,
            priority: Priority::High,
            ..easy_high
        };

        let (quick, medium_term, long_term) =
            action_buckets(&[medium, easy_low_priority, hard, easy_high]);
        assert_eq!(quick, vec!["Easy High", "Easy Low Priority"]);
        assert_eq!(medium_term, vec!["Medium Effort"]);
        assert_eq!(long_term, vec!["Hard Slog"]);
    }

    #[test]
    fn hour_scale_easy_work_lands_in_long_term() {
        let easy_but_long = Recommendation {
            title: "Easy But Long",
            description: "",
            priority: Priority::Medium,
            impact: 7,
            difficulty: Difficulty::Easy,
            estimated_time: "1-2 hours",
            steps: &[],
        };
        let (_, _, long_term) = action_buckets(&[easy_but_long]);
        assert_eq!(long_term, vec!["Easy But Long"]);
    }

    #[test]
    fn competitive_context_uses_table_with_fallback() {
        let tech = competitive_context(78, "technology");
        assert_eq!(tech.avg_industry_score, 78);
        assert_eq!(tech.ranking, "below average"); // equal is not above
        assert_eq!(tech.percentile, 75);

        let unknown = competitive_context(80, "zeppelin-rides");
        assert_eq!(unknown.avg_industry_score, 70);
        assert_eq!(unknown.ranking, "above average");
    }

    #[test]
    fn percentile_is_clamped_to_5_95() {
        assert_eq!(competitive_context(0, "other").percentile, 25);
        assert_eq!(competitive_context(100, "restaurant").percentile, 95);
    }

    #[test]
    fn issues_flatten_in_category_order() {
        use crate::domain::models::Issue;
        let mut results = uniform_results(100);
        results[Category::Mobile.index()].issues.push(Issue {
            id: "missing-viewport",
            category: Category::Mobile,
            priority: Priority::High,
            description: String::new(),
        });
        results[Category::Performance.index()].issues.push(Issue {
            id: "slow-load-time",
            category: Category::Performance,
            priority: Priority::High,
            description: String::new(),
        });
        let report = report_for(results);
        let ids: Vec<_> = report.issues.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["slow-load-time", "missing-viewport"]);
    }
}
