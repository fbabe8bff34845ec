//! Text Normalizer: Unicode and punctuation folding prior to tokenization.
//!
//! Folds typographic variants into their plain-ASCII equivalents so the
//! tokenizer and downstream lexicon lookups never have to special-case
//! curly quotes or em dashes. Idempotent: `normalize(normalize(x)) == normalize(x)`.

/// Normalizes `text`, folding curly quotes, non-breaking spaces, dashes, and
/// ellipses, and stripping zero-width and soft-hyphen characters.
///
/// | Source                          | Folds to |
/// |----------------------------------|----------|
/// | `\u{2018}` `\u{2019}` `\u{201B}`  | `'`      |
/// | `\u{201C}` `\u{201D}` `\u{201F}`  | `"`      |
/// | `\u{00A0}` (NBSP)                 | ` `      |
/// | `\u{2013}` `\u{2014}` `\u{2015}`  | `-`      |
/// | `\u{2026}`                        | `...`    |
/// | `\u{200B}` `\u{200C}` `\u{200D}` `\u{00AD}` (ZWSP/ZWNJ/ZWJ/soft hyphen) | removed |
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{2018}' | '\u{2019}' | '\u{201B}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201F}' => out.push('"'),
            '\u{00A0}' => out.push(' '),
            '\u{2013}' | '\u{2014}' | '\u{2015}' => out.push('-'),
            '\u{2026}' => out.push_str("..."),
            '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{00AD}' => {}
            other => out.push(other),
        }
    }
    out
}
