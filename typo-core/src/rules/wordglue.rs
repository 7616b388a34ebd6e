use regex::Regex;
use std::sync::LazyLock;

use crate::types::chars::NNBSP;

// `[\s&&[^\r\n]]` is horizontal whitespace: it includes the glue character
// itself, so already glued text is rewritten to the same thing, and it never
// swallows a line break.
static PARTICLES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)[\s&&[^\r\n]]+(же|ли|ль|бы|б|ж|ка)([.,!?:;]?(?:[\s&&[^\r\n]]+|$))").unwrap()
});
static SHORT_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\p{L}{1,3})[\s&&[^\r\n]]+").unwrap());
static STANDALONE_DASH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\s&&[^\r\n]]+([\u{2014}\u{2013}-]{1,2})([\s&&[^\r\n]]+)").unwrap()
});
// A thin space joins initials to a surname, so it counts as part of a word here
static LAST_TWO_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)([\S\u{2009}]+)[\s&&[^\r\n\u{2009}]]+([\S\u{2009}]+)([ \t]*\r?)$").unwrap()
});

/// Glue short words to their neighbours with a narrow no-break space.
///
/// Particles stick to the word before them, short words (up to three
/// letters) to the word after them, a standalone dash to the word before
/// it, and the last two words of a line to each other.
pub fn wordglue(text: &str) -> String {
    let text = PARTICLES.replace_all(text, format!("{NNBSP}${{1}}${{2}}"));
    let text = SHORT_WORDS.replace_all(&text, format!("${{1}}{NNBSP}"));
    let text = STANDALONE_DASH.replace_all(&text, format!("{NNBSP}${{1}}${{2}}"));
    LAST_TWO_WORDS
        .replace_all(&text, format!("${{1}}{NNBSP}${{2}}${{3}}"))
        .into_owned()
}
