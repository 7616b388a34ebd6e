use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::types::chars::{EM_DASH, EN_DASH};

// Whole chains are matched at once so "1-2-3" is converted completely
static NUMERIC_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+(?:[ \t\u{2009}\u{202f}]*-[ \t\u{2009}\u{202f}]*\d+)+").unwrap()
});
static RANGE_HYPHEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\u{2009}\u{202f}]*-[ \t\u{2009}\u{202f}]*").unwrap());
static STANDALONE_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)(^|\s)--?(\s|$)").unwrap());

/// Turn hyphens into proper dashes.
///
/// - between numbers: en dash, no spaces (`9-15` → `9–15`)
/// - standing alone (dialogue, copula): em dash; `--` collapses to one
/// - inside words: untouched (`по-пластунски`)
pub fn dashes(text: &str) -> String {
    let text = NUMERIC_RANGE.replace_all(text, |caps: &Captures| {
        RANGE_HYPHEN
            .replace_all(&caps[0], EN_DASH.to_string())
            .into_owned()
    });
    // Neighbouring dashes share the whitespace between them, so one pass
    // converts every other one; the second pass converts the rest.
    let em_dash = format!("${{1}}{EM_DASH}${{2}}");
    let text = STANDALONE_DASH.replace_all(&text, em_dash.as_str());
    STANDALONE_DASH
        .replace_all(&text, em_dash.as_str())
        .into_owned()
}
