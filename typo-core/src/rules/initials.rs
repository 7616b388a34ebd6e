use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::types::chars::THIN_SPACE;

// `\b` in front of the first initial keeps abbreviations like "США." from
// being read as a single initial. Cyrillic capitals only, so Latin
// abbreviations such as "D.C." and "U.S." stay as they are.
static INITIALS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:([А-ЯЁ])\.[ \t\u{a0}]*)?([А-ЯЁ])\.[ \t\u{a0}]*([А-ЯЁ][а-яё]+)").unwrap()
});

/// Bind one or two initials to the surname that follows them.
pub fn initials(text: &str) -> String {
    INITIALS
        .replace_all(text, |caps: &Captures| match caps.get(1) {
            Some(first) => format!(
                "{}.{}.{THIN_SPACE}{}",
                first.as_str(),
                &caps[2],
                &caps[3]
            ),
            None => format!("{}.{THIN_SPACE}{}", &caps[2], &caps[3]),
        })
        .into_owned()
}
