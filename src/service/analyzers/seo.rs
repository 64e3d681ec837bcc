//! SEO heuristics: title, meta description, heading structure, alt text,
//! internal linking.

use super::{AuditContext, Check, Finding};
use crate::domain::models::{Category, Difficulty, Issue, Priority, Recommendation};

pub const CHECKS: &[Check] = &[
    check_title,
    check_meta_description,
    check_h1,
    check_image_alt,
    check_internal_links,
];

const ADD_PAGE_TITLE: Recommendation = Recommendation {
    title: "Add a Page Title",
    description: "The title tag is one of the most important SEO elements. It appears in search results and browser tabs.",
    priority: Priority::High,
    impact: 10,
    difficulty: Difficulty::Easy,
    estimated_time: "15 minutes",
    steps: &[
        "Add a descriptive <title> tag in your HTML head section",
        "Keep your title between 50-60 characters for best display",
        "Include your main keyword naturally in the title",
        "Make each page title unique and descriptive",
    ],
};

const WRITE_META_DESCRIPTION: Recommendation = Recommendation {
    title: "Write a Meta Description",
    description: "Meta descriptions appear below your title in search results and influence whether people click through to your site.",
    priority: Priority::High,
    impact: 8,
    difficulty: Difficulty::Easy,
    estimated_time: "20 minutes",
    steps: &[
        "Add a meta description tag to your HTML head section",
        "Write a compelling 150-160 character description of your page",
        "Include your main keyword naturally",
        "Make it sound appealing to encourage clicks",
    ],
};

const ADD_ALT_TEXT: Recommendation = Recommendation {
    title: "Add Alt Text to Images",
    description: "Alt text helps search engines understand your images and improves accessibility for visually impaired users.",
    priority: Priority::Medium,
    impact: 6,
    difficulty: Difficulty::Easy,
    estimated_time: "30 minutes",
    steps: &[
        "Add descriptive alt attributes to all meaningful images",
        "Describe what the image shows, not just what it is",
        "Keep descriptions concise but informative",
        "Use empty alt=\"\" for purely decorative images",
    ],
};

fn check_title(ctx: &AuditContext) -> Option<Finding> {
    match &ctx.snapshot.title {
        None => Some(Finding {
            penalty: 25,
            issue: Issue {
                id: "missing-title",
                category: Category::Seo,
                priority: Priority::High,
                description:
                    "Your page is missing a title tag, which is crucial for search engine rankings"
                        .to_string(),
            },
            recommendation: Some(ADD_PAGE_TITLE),
        }),
        Some(title) => {
            let len = title.chars().count();
            (len > 60).then(|| Finding {
                penalty: 10,
                issue: Issue {
                    id: "long-title",
                    category: Category::Seo,
                    priority: Priority::Medium,
                    description: format!(
                        "Your title is {len} characters long - search engines may cut it off"
                    ),
                },
                recommendation: None,
            })
        }
    }
}

fn check_meta_description(ctx: &AuditContext) -> Option<Finding> {
    if ctx.snapshot.meta_description.is_some() {
        return None;
    }
    Some(Finding {
        penalty: 20,
        issue: Issue {
            id: "missing-meta-description",
            category: Category::Seo,
            priority: Priority::High,
            description: "Your page is missing a meta description, which appears in search results"
                .to_string(),
        },
        recommendation: Some(WRITE_META_DESCRIPTION),
    })
}

fn check_h1(ctx: &AuditContext) -> Option<Finding> {
    match ctx.snapshot.h1_count {
        0 => Some(Finding {
            penalty: 15,
            issue: Issue {
                id: "missing-h1",
                category: Category::Seo,
                priority: Priority::Medium,
                description: "Your page doesn't have an H1 heading, which helps search engines understand your content".to_string(),
            },
            recommendation: None,
        }),
        1 => None,
        n => Some(Finding {
            penalty: 10,
            issue: Issue {
                id: "multiple-h1",
                category: Category::Seo,
                priority: Priority::Medium,
                description: format!(
                    "You have {n} H1 headings - it's best practice to use only one per page"
                ),
            },
            recommendation: None,
        }),
    }
}

fn check_image_alt(ctx: &AuditContext) -> Option<Finding> {
    let missing = ctx.snapshot.images_missing_alt;
    if missing == 0 {
        return None;
    }
    // 3 points per image, capped at 20.
    let penalty = (missing * 3).min(20) as u8;
    Some(Finding {
        penalty,
        issue: Issue {
            id: "missing-alt-text",
            category: Category::Seo,
            priority: Priority::Medium,
            description: format!(
                "{missing} of your images are missing alt text, which helps search engines understand them"
            ),
        },
        recommendation: Some(ADD_ALT_TEXT),
    })
}

fn check_internal_links(ctx: &AuditContext) -> Option<Finding> {
    if ctx.snapshot.internal_link_count >= 3 {
        return None;
    }
    Some(Finding {
        penalty: 10,
        issue: Issue {
            id: "few-internal-links",
            category: Category::Seo,
            priority: Priority::Low,
            description: "Your page has limited internal links, which could help visitors explore more of your site".to_string(),
        },
        recommendation: None,
    })
}

#[cfg(test)]
mod tests {
    use super::super::test_support::context_for;
    use super::*;

    fn analyzer() -> super::super::CategoryAnalyzer {
        super::super::ANALYZERS[Category::Seo.index()]
    }

    const WELL_FORMED: &str = r#"<html><head>
        <title>A Reasonable Page Title</title>
        <meta name="description" content="What this page is about">
        </head><body>
        <h1>Heading</h1>
        <a href="/a">a</a><a href="/b">b</a><a href="/c">c</a>
        </body></html>"#;

    #[test]
    fn well_formed_page_scores_100() {
        let result = analyzer().run(&context_for(WELL_FORMED));
        assert_eq!(result.score, 100);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn missing_title_and_description_deduct_45() {
        let html = r#"<html><head></head><body>
            <h1>Heading</h1>
            <a href="/a">a</a><a href="/b">b</a><a href="/c">c</a>
            </body></html>"#;
        let result = analyzer().run(&context_for(html));
        assert_eq!(result.score, 55);
        let ids: Vec<_> = result.issues.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["missing-title", "missing-meta-description"]);
        let titles: Vec<_> = result.recommendations.iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["Add a Page Title", "Write a Meta Description"]);
    }

    #[test]
    fn long_title_deducts_10() {
        let html = format!(
            "<html><head><title>{}</title><meta name=\"description\" content=\"d\"></head>\
             <body><h1>H</h1><a href=\"/a\">a</a><a href=\"/b\">b</a><a href=\"/c\">c</a></body></html>",
            "x".repeat(61)
        );
        let result = analyzer().run(&context_for(&html));
        assert_eq!(result.score, 90);
        assert_eq!(result.issues[0].id, "long-title");
    }

    #[test]
    fn h1_count_rules() {
        let none = WELL_FORMED.replace("<h1>Heading</h1>", "");
        let result = analyzer().run(&context_for(&none));
        assert_eq!(result.score, 85);
        assert_eq!(result.issues[0].id, "missing-h1");

        let two = WELL_FORMED.replace("<h1>Heading</h1>", "<h1>A</h1><h1>B</h1>");
        let result = analyzer().run(&context_for(&two));
        assert_eq!(result.score, 90);
        assert_eq!(result.issues[0].id, "multiple-h1");
        assert!(result.issues[0].description.contains("2 H1 headings"));
    }

    #[test]
    fn alt_text_penalty_is_capped_at_20() {
        let imgs = "<img src='x.png'>".repeat(10);
        let html = WELL_FORMED.replace("<h1>Heading</h1>", &format!("<h1>H</h1>{imgs}"));
        let result = analyzer().run(&context_for(&html));
        assert_eq!(result.score, 80);
        assert_eq!(result.issues[0].id, "missing-alt-text");
    }

    #[test]
    fn two_images_without_alt_deduct_6() {
        let html = WELL_FORMED.replace(
            "<h1>Heading</h1>",
            "<h1>H</h1><img src='a.png'><img src='b.png'>",
        );
        let result = analyzer().run(&context_for(&html));
        assert_eq!(result.score, 94);
    }

    #[test]
    fn sparse_internal_linking_deducts_10() {
        let html = r#"<html><head><title>T</title><meta name="description" content="d"></head>
            <body><h1>H</h1><a href="/only">one</a></body></html>"#;
        let result = analyzer().run(&context_for(html));
        assert_eq!(result.score, 90);
        assert_eq!(result.issues[0].id, "few-internal-links");
    }
}
