//! One-pass document snapshot used by the category analyzers.
//!
//! `scraper::Html` is not `Send`, so the engine extracts everything the
//! analyzers query into this plain struct up front. Analyzers see only these
//! facts, never the DOM itself, which keeps them pure and lets six of them
//! run concurrently over one shared snapshot.

use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Facts about one fetched document. Counts and flags only; absence of an
/// element is a scoring signal, never a fault.
#[derive(Debug, Clone, Default)]
pub struct DocumentSnapshot {
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub h1_count: usize,
    pub images_total: usize,
    pub images_missing_alt: usize,
    pub internal_link_count: usize,
    pub form_controls_total: usize,
    pub form_controls_unlabeled: usize,
    pub has_viewport: bool,
    pub has_custom_styling: bool,
    pub interactive_total: usize,
    pub interactive_small_font: usize,
    pub has_media_queries: bool,
    pub has_doctype: bool,
    pub has_charset: bool,
    pub has_html_lang: bool,
    pub inline_style_count: usize,
}

fn selector(cache: &'static OnceLock<Selector>, css: &'static str) -> &'static Selector {
    cache.get_or_init(|| Selector::parse(css).expect("static selector"))
}

macro_rules! cached_selector {
    ($css:literal) => {{
        static SELECTOR: OnceLock<Selector> = OnceLock::new();
        selector(&SELECTOR, $css)
    }};
}

impl DocumentSnapshot {
    /// Build a snapshot from raw HTML. `final_url` is the post-redirect URL,
    /// used to classify internal links.
    pub fn extract(raw: &str, final_url: &str) -> Self {
        let document = Html::parse_document(raw);
        let trimmed = raw.trim_start();

        Self {
            title: extract_title(&document),
            meta_description: extract_meta_description(&document),
            h1_count: document.select(cached_selector!("h1")).count(),
            images_total: document.select(cached_selector!("img")).count(),
            images_missing_alt: count_images_missing_alt(&document),
            internal_link_count: count_internal_links(&document, final_url),
            form_controls_total: document
                .select(cached_selector!("input, textarea, select"))
                .count(),
            form_controls_unlabeled: count_unlabeled_controls(&document),
            has_viewport: document
                .select(cached_selector!("meta[name='viewport']"))
                .next()
                .is_some(),
            has_custom_styling: has_custom_styling(&document),
            interactive_total: document
                .select(cached_selector!("button, a, input[type='submit']"))
                .count(),
            interactive_small_font: count_small_font_interactive(&document),
            has_media_queries: raw.contains("@media"),
            has_doctype: trimmed.to_lowercase().starts_with("<!doctype html>"),
            has_charset: has_charset(&document),
            has_html_lang: has_html_lang(&document),
            inline_style_count: document.select(cached_selector!("[style]")).count(),
        }
    }
}

fn extract_title(document: &Html) -> Option<String> {
    document
        .select(cached_selector!("title"))
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

fn extract_meta_description(document: &Html) -> Option<String> {
    document
        .select(cached_selector!("meta[name='description']"))
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn count_images_missing_alt(document: &Html) -> usize {
    document
        .select(cached_selector!("img"))
        .filter(|img| img.value().attr("alt").is_none())
        .count()
}

/// A link is internal when its href is root-relative or repeats the page URL.
fn count_internal_links(document: &Html, final_url: &str) -> usize {
    document
        .select(cached_selector!("a[href]"))
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| href.starts_with('/') || (!final_url.is_empty() && href.contains(final_url)))
        .count()
}

fn count_unlabeled_controls(document: &Html) -> usize {
    let label_targets: HashSet<&str> = document
        .select(cached_selector!("label[for]"))
        .filter_map(|l| l.value().attr("for"))
        .collect();

    document
        .select(cached_selector!("input, textarea, select"))
        .filter(|control| {
            let el = control.value();
            let labeled_by_for = el.attr("id").is_some_and(|id| label_targets.contains(id));
            !labeled_by_for && el.attr("aria-label").is_none() && el.attr("aria-labelledby").is_none()
        })
        .count()
}

fn has_custom_styling(document: &Html) -> bool {
    document
        .select(cached_selector!("[style*='color']"))
        .next()
        .is_some()
        || document.select(cached_selector!("style")).next().is_some()
        || document
            .select(cached_selector!("link[rel='stylesheet']"))
            .next()
            .is_some()
}

/// Interactive elements styled inline with a font size below 14px.
fn count_small_font_interactive(document: &Html) -> usize {
    static FONT_SIZE: OnceLock<Regex> = OnceLock::new();
    let font_size = FONT_SIZE.get_or_init(|| Regex::new(r"font-size:\s*(\d+)px").expect("static regex"));

    document
        .select(cached_selector!("button, a, input[type='submit']"))
        .filter_map(|el| el.value().attr("style"))
        .filter(|style| {
            font_size
                .captures(style)
                .and_then(|c| c[1].parse::<u32>().ok())
                .is_some_and(|px| px < 14)
        })
        .count()
}

fn has_charset(document: &Html) -> bool {
    document
        .select(cached_selector!("meta[charset]"))
        .next()
        .is_some()
        || document
            .select(cached_selector!("meta[http-equiv]"))
            .filter_map(|el| el.value().attr("http-equiv"))
            .any(|v| v.eq_ignore_ascii_case("content-type"))
}

fn has_html_lang(document: &Html) -> bool {
    document
        .select(cached_selector!("html"))
        .next()
        .and_then(|el| el.value().attr("lang"))
        .is_some_and(|lang| !lang.is_empty())
}
