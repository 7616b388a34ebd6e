use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::types::chars::ELLIPSIS;

static DOT_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.+").unwrap());
// An ellipsis opening a line or a quotation belongs to the next word.
// `"` and `“` open a quotation only at line start or after whitespace.
static LEADING_ELLIPSIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)(^|«|(?:^|\s)["“])[ \t]*…[ \t]*(\p{L})"#).unwrap()
});

/// Replace exactly three dots with an ellipsis character.
///
/// Longer runs of dots are treated as deliberate and left alone, so
/// `Мдя.....` never turns into `Мдя…..`.
pub fn ellipsis(text: &str) -> String {
    let text = DOT_RUNS.replace_all(text, |caps: &Captures| {
        let run = &caps[0];
        if run.len() == 3 {
            ELLIPSIS.to_string()
        } else {
            run.to_string()
        }
    });
    LEADING_ELLIPSIS
        .replace_all(&text, format!("${{1}}{ELLIPSIS}${{2}}"))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_dots() {
        assert_eq!(
            ellipsis("Быть или не быть, вот в чем вопрос...\n\nШекспир"),
            "Быть или не быть, вот в чем вопрос…\n\nШекспир"
        );
        assert_eq!(ellipsis("...Дааааа"), "…Дааааа");
        assert_eq!(ellipsis("Да...Нет...Ну"), "Да…Нет…Ну");
        assert_eq!(ellipsis("...а..."), "…а…");
    }

    #[test]
    fn longer_runs_untouched() {
        assert_eq!(ellipsis("Мдя....."), "Мдя.....");
        assert_eq!(ellipsis("Мдя..... могло быть лучше"), "Мдя..... могло быть лучше");
        assert_eq!(ellipsis("...."), "....");
        assert_eq!(ellipsis("Конец.. и всё"), "Конец.. и всё");
    }

    #[test]
    fn leading_ellipsis_attaches_to_word() {
        assert_eq!(ellipsis("... и тогда"), "…и тогда");
        assert_eq!(ellipsis("Он сказал: «... потом»"), "Он сказал: «…потом»");
        assert_eq!(ellipsis("слово ... слово"), "слово … слово");
        assert_eq!(ellipsis("Он ответил: \"... потом\""), "Он ответил: \"…потом\"");
    }

    #[test]
    fn closing_quote_keeps_spacing() {
        assert_eq!(
            ellipsis("Он сказал \"нет\" ... и ушел"),
            "Он сказал \"нет\" … и ушел"
        );
        assert_eq!(ellipsis("Он сказал \"нет\"... и ушел"), "Он сказал \"нет\"… и ушел");
    }
}
