use regex::Regex;
use std::sync::LazyLock;

// Only spaces and tabs are touched: no-break spaces inserted by the other
// rules must survive a second pass.
static SPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());
static SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" ([,.;:?!)])").unwrap());
static SPACE_AFTER_PAREN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\( ").unwrap());
static MISSING_SPACE_AFTER_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([,;?!])(\p{L})").unwrap());
// Whitespace-delimited tokens with a scheme; punctuation inside is left alone
static URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+://\S*").unwrap());
static SPACES_AROUND_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*(\r?\n)[ \t]*").unwrap());

/// Collapse stray whitespace and fix spacing around punctuation.
pub fn cleanspaces(text: &str) -> String {
    let text = SPACE_RUNS.replace_all(text, " ");
    let text = SPACE_BEFORE_PUNCT.replace_all(&text, "$1");
    let text = SPACE_AFTER_PAREN.replace_all(&text, "(");
    let text = space_after_punct(&text);
    let text = SPACES_AROUND_NEWLINE.replace_all(&text, "$1");
    text.trim_matches(|c| c == ' ' || c == '\t').to_string()
}

fn space_after_punct(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut last = 0;
    for url in URL.find_iter(text) {
        let before = &text[last..url.start()];
        result.push_str(&MISSING_SPACE_AFTER_PUNCT.replace_all(before, "$1 $2"));
        result.push_str(url.as_str());
        last = url.end();
    }
    result.push_str(&MISSING_SPACE_AFTER_PUNCT.replace_all(&text[last..], "$1 $2"));
    result
}
