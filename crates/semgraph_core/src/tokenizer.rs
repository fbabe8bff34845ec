//! Tokenizer: splits normalized text into word and punctuation tokens
//! aligned to Universal Dependencies conventions.
//!
//! Produces [`RawToken`]s only — surface form and span. Lemma and
//! part-of-speech assignment are the tagger's job (`crate::tagger`), kept
//! separate so the tokenizer stays a pure, model-free segmentation pass.

use semgraph_base::{Interner, Span, Symbol};

/// A token before POS tagging: surface form plus source span.
#[derive(Debug, Clone, Copy)]
pub struct RawToken {
    pub text: Symbol,
    pub span: Span,
}

const CONTRACTION_SUFFIXES: &[&str] = &["n't", "'re", "'ve", "'ll", "'d", "'m", "'s"];

/// Splits `text` into [`RawToken`]s.
///
/// Whitespace separates tokens; standalone punctuation (`.,;:!?()[]{}"`)
/// becomes its own token, with a run of three periods kept together as a
/// single ellipsis token. Apostrophes are kept word-internal so contraction
/// and possessive splitting can run afterward: `"don't"` tokenizes as
/// `"do"` + `"n't"`, `"John's"` as `"John"` + `"'s"`.
pub fn tokenize(text: &str, interner: &mut Interner) -> Vec<RawToken> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some(&(start, ch)) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }

        if ch == '.' && text[start..].starts_with("...") {
            push_raw(&mut tokens, interner, text, start, start + 3);
            chars.next();
            chars.next();
            chars.next();
            continue;
        }

        if is_standalone_punct(ch) {
            let end = start + ch.len_utf8();
            push_raw(&mut tokens, interner, text, start, end);
            chars.next();
            continue;
        }

        let mut end = start + ch.len_utf8();
        chars.next();
        while let Some(&(i, c)) = chars.peek() {
            if c.is_whitespace() || is_standalone_punct(c) {
                break;
            }
            end = i + c.len_utf8();
            chars.next();
        }
        split_contraction(&text[start..end], start, &mut tokens, interner);
    }

    tokens
}

fn is_standalone_punct(c: char) -> bool {
    matches!(
        c,
        '.' | ',' | ';' | ':' | '!' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '"'
    )
}

fn split_contraction(word: &str, abs_start: usize, tokens: &mut Vec<RawToken>, interner: &mut Interner) {
    let lower = word.to_lowercase();
    for suffix in CONTRACTION_SUFFIXES {
        if lower.ends_with(suffix) && lower.len() > suffix.len() {
            let split_at = word.len() - suffix.len();
            push_raw(tokens, interner, word, 0, split_at);
            retarget_last(tokens, abs_start);
            push_raw(tokens, interner, word, split_at, word.len());
            retarget_last(tokens, abs_start);
            return;
        }
    }
    push_raw(tokens, interner, word, 0, word.len());
    retarget_last(tokens, abs_start);
}

fn push_raw(tokens: &mut Vec<RawToken>, interner: &mut Interner, text: &str, start: usize, end: usize) {
    let symbol = interner.intern(&text[start..end]);
    tokens.push(RawToken {
        text: symbol,
        span: Span::new(start, end),
    });
}

/// `split_contraction` computes spans relative to the word slice; this
/// shifts the most recently pushed token's span into absolute source
/// coordinates.
fn retarget_last(tokens: &mut [RawToken], abs_start: usize) {
    if let Some(last) = tokens.last_mut() {
        last.span = Span::new(last.span.start + abs_start, last.span.end + abs_start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize_texts(text: &str) -> Vec<String> {
        let mut interner = Interner::new();
        tokenize(text, &mut interner)
            .into_iter()
            .map(|t| interner.resolve(t.text).to_string())
            .collect()
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(tokenize_texts("the doctor treated"), vec!["the", "doctor", "treated"]);
    }

    #[test]
    fn separates_trailing_period() {
        assert_eq!(tokenize_texts("She left."), vec!["She", "left", "."]);
    }

    #[test]
    fn keeps_ellipsis_together() {
        assert_eq!(tokenize_texts("Well..."), vec!["Well", "..."]);
    }

    #[test]
    fn splits_negative_contraction() {
        assert_eq!(tokenize_texts("didn't"), vec!["did", "n't"]);
    }

    #[test]
    fn splits_possessive() {
        assert_eq!(tokenize_texts("John's book"), vec!["John", "'s", "book"]);
    }

    #[test]
    fn separates_parentheses_and_commas() {
        assert_eq!(
            tokenize_texts("(the report, revised)"),
            vec!["(", "the", "report", ",", "revised", ")"]
        );
    }

    #[test]
    fn spans_map_back_to_source_text() {
        let text = "The doctor treated the patient.";
        let mut interner = Interner::new();
        let tokens = tokenize(text, &mut interner);
        for tok in &tokens {
            let slice = &text[tok.span.start..tok.span.end];
            assert_eq!(interner.resolve(tok.text), slice);
        }
    }

    #[test]
    fn hyphenated_word_stays_one_token() {
        assert_eq!(tokenize_texts("well-known doctor"), vec!["well-known", "doctor"]);
    }
}
