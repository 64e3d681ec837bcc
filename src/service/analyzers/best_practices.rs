//! Markup hygiene: doctype, charset, language, inline styling.

use super::{AuditContext, Check, Finding};
use crate::domain::models::{Category, Issue, Priority};

pub const CHECKS: &[Check] = &[check_doctype, check_charset, check_lang, check_inline_styles];

fn check_doctype(ctx: &AuditContext) -> Option<Finding> {
    if ctx.snapshot.has_doctype {
        return None;
    }
    Some(Finding {
        penalty: 15,
        issue: Issue {
            id: "missing-doctype",
            category: Category::BestPractices,
            priority: Priority::Low,
            description: "Your HTML is missing the modern DOCTYPE declaration".to_string(),
        },
        recommendation: None,
    })
}

fn check_charset(ctx: &AuditContext) -> Option<Finding> {
    if ctx.snapshot.has_charset {
        return None;
    }
    Some(Finding {
        penalty: 10,
        issue: Issue {
            id: "missing-charset",
            category: Category::BestPractices,
            priority: Priority::Low,
            description:
                "Your website doesn't specify character encoding, which could cause display issues"
                    .to_string(),
        },
        recommendation: None,
    })
}

fn check_lang(ctx: &AuditContext) -> Option<Finding> {
    if ctx.snapshot.has_html_lang {
        return None;
    }
    Some(Finding {
        penalty: 10,
        issue: Issue {
            id: "missing-lang",
            category: Category::BestPractices,
            priority: Priority::Low,
            description: "Your HTML doesn't specify the page language, which helps search engines and screen readers".to_string(),
        },
        recommendation: None,
    })
}

fn check_inline_styles(ctx: &AuditContext) -> Option<Finding> {
    let count = ctx.snapshot.inline_style_count;
    if count <= 5 {
        return None;
    }
    Some(Finding {
        penalty: 15,
        issue: Issue {
            id: "excessive-inline-styles",
            category: Category::BestPractices,
            priority: Priority::Low,
            description: format!(
                "You have {count} elements with inline styles - external CSS is more maintainable"
            ),
        },
        recommendation: None,
    })
}

#[cfg(test)]
mod tests {
    use super::super::test_support::context_for;
    use super::*;

    fn analyzer() -> super::super::CategoryAnalyzer {
        super::super::ANALYZERS[Category::BestPractices.index()]
    }

    #[test]
    fn clean_markup_scores_100() {
        let html = r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"></head><body></body></html>"#;
        let result = analyzer().run(&context_for(html));
        assert_eq!(result.score, 100);
    }

    #[test]
    fn bare_fragment_loses_doctype_charset_and_lang() {
        let result = analyzer().run(&context_for("<html><body></body></html>"));
        assert_eq!(result.score, 65);
        let ids: Vec<_> = result.issues.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["missing-doctype", "missing-charset", "missing-lang"]);
    }

    #[test]
    fn six_inline_styles_trigger_the_deduction() {
        let spans = r#"<span style="color: red">x</span>"#.repeat(6);
        let html = format!(
            r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"></head><body>{spans}</body></html>"#
        );
        let result = analyzer().run(&context_for(&html));
        assert_eq!(result.score, 85);
        assert!(result.issues[0].description.contains("6 elements"));

        let five = r#"<span style="color: red">x</span>"#.repeat(5);
        let html = format!(
            r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"></head><body>{five}</body></html>"#
        );
        let result = analyzer().run(&context_for(&html));
        assert_eq!(result.score, 100);
    }
}
