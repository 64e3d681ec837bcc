//! Mobile-friendliness heuristics: viewport, responsive styles, touch targets.

use super::{AuditContext, Check, Finding};
use crate::domain::models::{Category, Difficulty, Issue, Priority, Recommendation};

pub const CHECKS: &[Check] = &[check_viewport, check_media_queries, check_touch_targets];

const ADD_VIEWPORT: Recommendation = Recommendation {
    title: "Add Mobile Viewport Settings",
    description: "The viewport meta tag is essential for making your website display properly on mobile devices.",
    priority: Priority::High,
    impact: 9,
    difficulty: Difficulty::Easy,
    estimated_time: "5 minutes",
    steps: &[
        "Add <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"> to your HTML head",
        "Test your site on different mobile devices",
        "Ensure content scales properly on small screens",
    ],
};

const MAKE_RESPONSIVE: Recommendation = Recommendation {
    title: "Make Your Site Mobile-Friendly",
    description: "Responsive design ensures your website looks and works great on phones, tablets, and desktops.",
    priority: Priority::High,
    impact: 9,
    difficulty: Difficulty::Hard,
    estimated_time: "4-8 hours",
    steps: &[
        "Use CSS media queries to adapt your layout for different screen sizes",
        "Implement a flexible grid system",
        "Use relative units (%, em, rem) instead of fixed pixel sizes",
        "Test your site on various devices and screen sizes",
    ],
};

fn check_viewport(ctx: &AuditContext) -> Option<Finding> {
    if ctx.snapshot.has_viewport {
        return None;
    }
    Some(Finding {
        penalty: 30,
        issue: Issue {
            id: "missing-viewport",
            category: Category::Mobile,
            priority: Priority::High,
            description: "Your website is missing mobile optimization settings".to_string(),
        },
        recommendation: Some(ADD_VIEWPORT),
    })
}

fn check_media_queries(ctx: &AuditContext) -> Option<Finding> {
    if ctx.snapshot.has_media_queries {
        return None;
    }
    Some(Finding {
        penalty: 25,
        issue: Issue {
            id: "no-responsive-design",
            category: Category::Mobile,
            priority: Priority::High,
            description:
                "Your website doesn't appear to have responsive design for different screen sizes"
                    .to_string(),
        },
        recommendation: Some(MAKE_RESPONSIVE),
    })
}

/// Flags when more than 30% of styled interactive elements declare an inline
/// font size below 14px.
fn check_touch_targets(ctx: &AuditContext) -> Option<Finding> {
    let total = ctx.snapshot.interactive_total;
    if total == 0 {
        return None;
    }
    let small = ctx.snapshot.interactive_small_font;
    if small as f64 <= total as f64 * 0.3 {
        return None;
    }
    Some(Finding {
        penalty: 15,
        issue: Issue {
            id: "small-touch-targets",
            category: Category::Mobile,
            priority: Priority::Medium,
            description:
                "Some of your buttons and links may be too small for mobile users to tap easily"
                    .to_string(),
        },
        recommendation: None,
    })
}
