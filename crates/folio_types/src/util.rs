use regex::Regex;
use std::sync::LazyLock;

const WORDS_PER_MINUTE: usize = 200;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\-]+").unwrap());
static DASH_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").unwrap());
static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</?[^>]+(>|$)").unwrap());

/// Turns a title into a url slug: lowercase ascii words joined by single dashes.
pub fn slugify(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let dashed = WHITESPACE.replace_all(&lowered, "-");
    let anded = dashed.replace('&', "-and-");
    let stripped = NON_WORD.replace_all(&anded, "");
    let collapsed = DASH_RUN.replace_all(&stripped, "-");

    collapsed.trim_matches('-').to_string()
}

/// Estimated reading time of a (possibly html) body, never less than a minute.
pub fn reading_time_minutes(content: &str) -> i32 {
    let text = HTML_TAG.replace_all(content, " ");
    let words = text.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);

    i32::try_from(minutes).unwrap_or(i32::MAX)
}
