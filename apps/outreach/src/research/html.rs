//! Regex-based HTML helpers. Good enough for result pages and contact/impressum pages;
//! not a general HTML parser.

use std::sync::LazyLock;

use regex::Regex;

use crate::research::SearchHit;

static SCRIPT_STYLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style|noscript|svg)\b.*?</(script|style|noscript|svg)\s*>")
        .expect("script pattern is valid")
});
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern is valid"));
static BLOCK_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?(p|div|br|li|tr|h[1-6]|section|article|footer|header)\b[^>]*>")
        .expect("block tag pattern is valid")
});
static MAILTO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)href\s*=\s*["']mailto:([^"'?]+)"#).expect("mailto pattern is valid")
});
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));
static SPACES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\u{a0}]+").expect("space pattern is valid"));
static BLANK_LINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n+").expect("blank line pattern is valid"));

static RESULT_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<a[^>]*class="result__a"[^>]*href="([^"]+)"[^>]*>(.*?)</a>"#)
        .expect("result link pattern is valid")
});
static RESULT_SNIPPET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<a[^>]*class="result__snippet"[^>]*>(.*?)</a>"#)
        .expect("result snippet pattern is valid")
});

/// Converts an HTML page to readable text.
///
/// `mailto:` targets are appended so addresses hidden behind links are not lost.
pub fn html_to_text(html: &str) -> String {
    let mailtos: Vec<String> = MAILTO_RE
        .captures_iter(html)
        .map(|c| decode_entities(&c[1]))
        .collect();

    let text = SCRIPT_STYLE_RE.replace_all(html, " ");
    let text = COMMENT_RE.replace_all(&text, " ");
    let text = BLOCK_TAG_RE.replace_all(&text, "\n");
    let text = TAG_RE.replace_all(&text, " ");
    let text = decode_entities(&text);
    let text = SPACES_RE.replace_all(&text, " ");
    let text = BLANK_LINES_RE.replace_all(&text, "\n");

    let mut out = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    for mailto in mailtos {
        if !out.contains(&mailto) {
            out.push_str("\nmailto: ");
            out.push_str(&mailto);
        }
    }
    out
}

/// Decodes the handful of entities that matter for names, URLs and emails.
pub fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&#64;", "@")
        .replace("&#x40;", "@")
        .replace("&amp;", "&")
}

/// Parses a DuckDuckGo HTML result page.
pub fn parse_search_results(html: &str) -> Vec<SearchHit> {
    let snippets: Vec<String> = RESULT_SNIPPET_RE
        .captures_iter(html)
        .map(|c| inline_text(&c[1]))
        .collect();

    RESULT_LINK_RE
        .captures_iter(html)
        .enumerate()
        .filter_map(|(i, c)| {
            let url = resolve_result_url(&decode_entities(&c[1]))?;
            Some(SearchHit {
                title: inline_text(&c[2]),
                url,
                snippet: snippets.get(i).cloned().unwrap_or_default(),
            })
        })
        .collect()
}

/// Result links are wrapped as `//duckduckgo.com/l/?uddg=<encoded>&rut=...`.
/// Ad links (`y.js`) are dropped.
pub fn resolve_result_url(href: &str) -> Option<String> {
    if href.contains("duckduckgo.com/y.js") {
        return None;
    }
    if let Some(start) = href.find("uddg=") {
        let encoded = &href[start + "uddg=".len()..];
        let encoded = encoded.split('&').next().unwrap_or(encoded);
        return urlencoding::decode(encoded).ok().map(|u| u.into_owned());
    }
    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_string());
    }
    if let Some(rest) = href.strip_prefix("//") {
        return Some(format!("https://{rest}"));
    }
    None
}

fn inline_text(fragment: &str) -> String {
    let text = TAG_RE.replace_all(fragment, "");
    decode_entities(&text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
