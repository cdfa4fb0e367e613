//! Text tokenizers
//!
//! Provides the `Tokenizer` trait and an English word tokenizer following Penn
//! Treebank conventions: punctuation becomes its own token, clitics are split
//! off (`don't` -> `do` `n't`) and double quotes become `` and ''.

use regex::Regex;
use std::sync::LazyLock;

/// Trait for tokenizers that split text into word tokens
pub trait Tokenizer: Send + Sync {
    /// Split text into an ordered list of tokens
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Get the name of this tokenizer
    fn name(&self) -> &str;
}

// ============================================================================
// Treebank rules
// ============================================================================

/// An ordered rewrite rule: every match of `pattern` is replaced by `replacement`
struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

fn rules(table: &[(&str, &'static str)]) -> Vec<Rule> {
    table
        .iter()
        .map(|(pattern, replacement)| Rule {
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        })
        .collect()
}

fn apply(rules: &[Rule], text: String) -> String {
    rules.iter().fold(text, |acc, rule| {
        rule.pattern
            .replace_all(&acc, rule.replacement)
            .into_owned()
    })
}

static STARTING_QUOTES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    rules(&[
        (r"([«“‘„]|`+)", " $1 "),
        (r#"^""#, "``"),
        (r"(``)", " $1 "),
        (r#"([ (\[{<])("|'{2})"#, "$1 `` "),
    ])
});

static PUNCTUATION: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    rules(&[
        (r#"([^.])(\.)([\])}>"']*)\s*$"#, "${1} ${2} ${3} "),
        (r"([:,])([^\d])", " ${1} ${2}"),
        (r"([:,])$", " ${1} "),
        (r"\.{2,}", " $0 "),
        (r"[;@#$%&]", " $0 "),
        (r"[?!]", " $0 "),
        (r"([^'])' ", "${1} ' "),
        (r"[*]", " $0 "),
        (r"[\]\[(){}<>]", " $0 "),
        (r"--", " -- "),
    ])
});

static ENDING_QUOTES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    rules(&[
        (r"([»”’])", " $1 "),
        (r"''", " '' "),
        (r#"""#, " '' "),
        (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
        (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
    ])
});

static CONTRACTIONS: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    rules(&[
        (r"(?i)\b(can)(not)\b", " ${1} ${2} "),
        (r"(?i)\b(d)('ye)\b", " ${1} ${2} "),
        (r"(?i)\b(gim)(me)\b", " ${1} ${2} "),
        (r"(?i)\b(gon)(na)\b", " ${1} ${2} "),
        (r"(?i)\b(got)(ta)\b", " ${1} ${2} "),
        (r"(?i)\b(lem)(me)\b", " ${1} ${2} "),
        (r"(?i)\b(more)('n)\b", " ${1} ${2} "),
        (r"(?i)\b(wan)(na)(\s)", " ${1} ${2}${3}"),
        (r"(?i) ('t)(is)\b", " ${1} ${2} "),
        (r"(?i) ('t)(was)\b", " ${1} ${2} "),
    ])
});

/// Words that end in a period without ending a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc", "ltd", "co",
    "corp", "dept", "est", "approx", "no", "vol", "fig", "gen", "gov", "sen", "rep", "rev",
    "capt", "col", "lt", "sgt", "mt", "jan", "feb", "mar", "apr", "jun", "jul", "aug",
    "sep", "sept", "oct", "nov", "dec",
];

// ============================================================================
// Built-in Tokenizers
// ============================================================================

/// English word tokenizer: splits sentences first, then applies Treebank word
/// rules to each sentence so that every sentence-final period is its own token.
#[derive(Debug, Clone, Default)]
pub struct TreebankWordTokenizer;

impl TreebankWordTokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokenize a single sentence
    fn tokenize_sentence(&self, sentence: &str) -> Vec<String> {
        let text = apply(&STARTING_QUOTES, sentence.to_string());
        let text = apply(&PUNCTUATION, text);
        let text = apply(&ENDING_QUOTES, format!(" {} ", text));
        let text = apply(&CONTRACTIONS, text);

        text.split_whitespace().map(str::to_string).collect()
    }
}

impl Tokenizer for TreebankWordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        split_sentences(text)
            .into_iter()
            .flat_map(|sentence| self.tokenize_sentence(sentence))
            .collect()
    }

    fn name(&self) -> &str {
        "treebank"
    }
}

/// Split text into sentences on `.`, `!` and `?` followed by whitespace.
///
/// A single period after a known abbreviation, an initial, or a dotted
/// abbreviation (`e.g.`) does not end a sentence. Blank sentences are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, ch) = chars[i];
        if !matches!(ch, '.' | '!' | '?') {
            i += 1;
            continue;
        }

        let mut j = i;
        while j < chars.len() && matches!(chars[j].1, '.' | '!' | '?') {
            j += 1;
        }
        let single_period = ch == '.' && j == i + 1;
        while j < chars.len() && matches!(chars[j].1, '"' | '\'' | ')' | ']' | '}') {
            j += 1;
        }

        let followed_by_space = j < chars.len() && chars[j].1.is_whitespace();
        if followed_by_space && !(single_period && is_abbreviation(&text[start..pos])) {
            let end = chars[j].0;
            sentences.push(&text[start..end]);
            start = end;
        }
        i = j;
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences.retain(|s| !s.trim().is_empty());
    sentences
}

/// Whether the last word of `prefix` (the text right before a period) is an
/// abbreviation
fn is_abbreviation(prefix: &str) -> bool {
    let word = prefix
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric());

    if word.is_empty() {
        return false;
    }

    let mut letters = word.chars();
    let is_initial =
        matches!((letters.next(), letters.next()), (Some(c), None) if c.is_alphabetic());

    is_initial || word.contains('.') || ABBREVIATIONS.contains(&word.to_lowercase().as_str())
}

/// Splits on whitespace only
#[derive(Debug, Clone, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn name(&self) -> &str {
        "whitespace"
    }
}
