use regex::Regex;
use std::sync::LazyLock;

use crate::types::chars::{COPYRIGHT, DEGREE, NNBSP, PLUS_MINUS, REGISTERED, TRADEMARK};

// Bracket forms are lower-case only; `(C)` stays as typed. The copyright
// sign accepts a Cyrillic "с" as well, it is easy to type by accident.
static COPYRIGHT_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([cс]\)[ \t\u{a0}]*(\d)").unwrap());
static COPYRIGHT_SIGN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([cс]\)").unwrap());
static REGISTERED_SIGN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\S)\(r\)").unwrap());
static TRADEMARK_SIGN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\S)\(tm\)").unwrap());
static PLUS_MINUS_SIGN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\+-").unwrap());
static TEMPERATURE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d)(F)\b").unwrap());

/// Replace ASCII approximations with typographic marks.
pub fn marks(text: &str) -> String {
    let text = COPYRIGHT_YEAR.replace_all(text, format!("{COPYRIGHT}{NNBSP}${{1}}"));
    let text = COPYRIGHT_SIGN.replace_all(&text, COPYRIGHT.to_string());
    let text = REGISTERED_SIGN.replace_all(&text, format!("${{1}}{REGISTERED}"));
    let text = TRADEMARK_SIGN.replace_all(&text, format!("${{1}}{TRADEMARK}"));
    let text = PLUS_MINUS_SIGN.replace_all(&text, PLUS_MINUS.to_string());
    TEMPERATURE
        .replace_all(&text, format!("${{1}}{NNBSP}{DEGREE}${{2}}"))
        .into_owned()
}
