//! Accessibility heuristics: alt text, form labeling, contrast review.

use super::{AuditContext, Check, Finding};
use crate::domain::models::{Category, Difficulty, Issue, Priority, Recommendation};

pub const CHECKS: &[Check] = &[check_image_alt, check_form_labels, check_contrast_review];

const ADD_FORM_LABELS: Recommendation = Recommendation {
    title: "Add Labels to Form Fields",
    description: "Form labels help all users understand what information to enter, and are essential for screen reader users.",
    priority: Priority::Medium,
    impact: 7,
    difficulty: Difficulty::Easy,
    estimated_time: "30 minutes",
    steps: &[
        "Add <label> elements for all form inputs",
        "Use the \"for\" attribute to connect labels with their inputs",
        "Consider using aria-label for inputs that don't need visible labels",
        "Test your forms with keyboard navigation",
    ],
};

fn check_image_alt(ctx: &AuditContext) -> Option<Finding> {
    let missing = ctx.snapshot.images_missing_alt;
    if missing == 0 {
        return None;
    }
    // 5 points per image, capped at 25.
    let penalty = (missing * 5).min(25) as u8;
    Some(Finding {
        penalty,
        issue: Issue {
            id: "accessibility-missing-alt",
            category: Category::Accessibility,
            priority: Priority::Medium,
            description: format!(
                "{missing} images don't have alt text, making them inaccessible to screen readers"
            ),
        },
        recommendation: None,
    })
}

fn check_form_labels(ctx: &AuditContext) -> Option<Finding> {
    let unlabeled = ctx.snapshot.form_controls_unlabeled;
    if unlabeled == 0 {
        return None;
    }
    // 8 points per control, capped at 20.
    let penalty = (unlabeled * 8).min(20) as u8;
    Some(Finding {
        penalty,
        issue: Issue {
            id: "missing-form-labels",
            category: Category::Accessibility,
            priority: Priority::Medium,
            description: format!(
                "{unlabeled} form fields are missing labels, making them hard to use with screen readers"
            ),
        },
        recommendation: Some(ADD_FORM_LABELS),
    })
}

/// Informational only: any custom styling means contrast can't be verified
/// automatically.
fn check_contrast_review(ctx: &AuditContext) -> Option<Finding> {
    if !ctx.snapshot.has_custom_styling {
        return None;
    }
    Some(Finding {
        penalty: 5,
        issue: Issue {
            id: "color-contrast-warning",
            category: Category::Accessibility,
            priority: Priority::Low,
            description: "Manual review recommended to ensure text has sufficient color contrast"
                .to_string(),
        },
        recommendation: None,
    })
}

#[cfg(test)]
mod tests {
    use super::super::test_support::context_for;
    use super::*;

    fn analyzer() -> super::super::CategoryAnalyzer {
        super::super::ANALYZERS[Category::Accessibility.index()]
    }

    #[test]
    fn unstyled_accessible_page_scores_100() {
        let html = r#"<html><body>
            <img src="a.png" alt="alt">
            <label for="q">Query</label><input id="q">
        </body></html>"#;
        let result = analyzer().run(&context_for(html));
        assert_eq!(result.score, 100);
    }

    #[test]
    fn missing_alt_deducts_5_each_capped_at_25() {
        let two = context_for(r#"<body><img src="a"><img src="b"></body>"#);
        let result = analyzer().run(&two);
        assert_eq!(result.score, 90);
        assert_eq!(result.issues[0].id, "accessibility-missing-alt");

        let many = context_for(&format!("<body>{}</body>", "<img src='x'>".repeat(8)));
        let result = analyzer().run(&many);
        assert_eq!(result.score, 75);
    }

    #[test]
    fn unlabeled_controls_deduct_8_each_capped_at_20() {
        let one = context_for("<body><input></body>");
        let result = analyzer().run(&one);
        assert_eq!(result.score, 92);
        assert_eq!(result.recommendations[0].title, "Add Labels to Form Fields");

        let four = context_for("<body><input><input><select></select><textarea></textarea></body>");
        let result = analyzer().run(&four);
        assert_eq!(result.score, 80);
    }

    #[test]
    fn custom_styling_triggers_contrast_review() {
        let html = r#"<html><head><style>p { color: grey }</style></head><body></body></html>"#;
        let result = analyzer().run(&context_for(html));
        assert_eq!(result.score, 95);
        assert_eq!(result.issues[0].id, "color-contrast-warning");
        assert_eq!(result.issues[0].priority, Priority::Low);
        assert!(result.recommendations.is_empty());
    }
}
