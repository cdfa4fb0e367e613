//! Part-of-speech tagging
//!
//! Tags come from the closed Penn Treebank tag set. The built-in
//! [`LexiconTagger`] assigns an initial tag to every token from a closed-class
//! lexicon, number and punctuation recognition, capitalization and suffix
//! guesses, then corrects tags left to right from their neighbours.

use regex::Regex;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::Error;

static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?(\d+([.,:/]\d+)*|\.\d+)$").unwrap()
});

// ============================================================================
// Tag set
// ============================================================================

/// A Penn Treebank part-of-speech tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    CC,
    CD,
    DT,
    EX,
    FW,
    IN,
    JJ,
    JJR,
    JJS,
    LS,
    MD,
    NN,
    NNS,
    NNP,
    NNPS,
    PDT,
    POS,
    PRP,
    /// `PRP$`
    PRPS,
    RB,
    RBR,
    RBS,
    RP,
    SYM,
    TO,
    UH,
    VB,
    VBD,
    VBG,
    VBN,
    VBP,
    VBZ,
    WDT,
    WP,
    /// `WP$`
    WPS,
    WRB,
    /// `#`
    Pound,
    /// `$`
    Dollar,
    /// `''`
    CloseQuote,
    /// `` ` ` ``
    OpenQuote,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,`
    Comma,
    /// `.`
    Period,
    /// `:`
    Colon,
}

impl PosTag {
    /// Every tag in the set
    pub const ALL: [PosTag; 45] = [
        PosTag::CC,
        PosTag::CD,
        PosTag::DT,
        PosTag::EX,
        PosTag::FW,
        PosTag::IN,
        PosTag::JJ,
        PosTag::JJR,
        PosTag::JJS,
        PosTag::LS,
        PosTag::MD,
        PosTag::NN,
        PosTag::NNS,
        PosTag::NNP,
        PosTag::NNPS,
        PosTag::PDT,
        PosTag::POS,
        PosTag::PRP,
        PosTag::PRPS,
        PosTag::RB,
        PosTag::RBR,
        PosTag::RBS,
        PosTag::RP,
        PosTag::SYM,
        PosTag::TO,
        PosTag::UH,
        PosTag::VB,
        PosTag::VBD,
        PosTag::VBG,
        PosTag::VBN,
        PosTag::VBP,
        PosTag::VBZ,
        PosTag::WDT,
        PosTag::WP,
        PosTag::WPS,
        PosTag::WRB,
        PosTag::Pound,
        PosTag::Dollar,
        PosTag::CloseQuote,
        PosTag::OpenQuote,
        PosTag::LeftParen,
        PosTag::RightParen,
        PosTag::Comma,
        PosTag::Period,
        PosTag::Colon,
    ];

    /// The Treebank spelling of the tag
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::CC => "CC",
            PosTag::CD => "CD",
            PosTag::DT => "DT",
            PosTag::EX => "EX",
            PosTag::FW => "FW",
            PosTag::IN => "IN",
            PosTag::JJ => "JJ",
            PosTag::JJR => "JJR",
            PosTag::JJS => "JJS",
            PosTag::LS => "LS",
            PosTag::MD => "MD",
            PosTag::NN => "NN",
            PosTag::NNS => "NNS",
            PosTag::NNP => "NNP",
            PosTag::NNPS => "NNPS",
            PosTag::PDT => "PDT",
            PosTag::POS => "POS",
            PosTag::PRP => "PRP",
            PosTag::PRPS => "PRP$",
            PosTag::RB => "RB",
            PosTag::RBR => "RBR",
            PosTag::RBS => "RBS",
            PosTag::RP => "RP",
            PosTag::SYM => "SYM",
            PosTag::TO => "TO",
            PosTag::UH => "UH",
            PosTag::VB => "VB",
            PosTag::VBD => "VBD",
            PosTag::VBG => "VBG",
            PosTag::VBN => "VBN",
            PosTag::VBP => "VBP",
            PosTag::VBZ => "VBZ",
            PosTag::WDT => "WDT",
            PosTag::WP => "WP",
            PosTag::WPS => "WP$",
            PosTag::WRB => "WRB",
            PosTag::Pound => "#",
            PosTag::Dollar => "$",
            PosTag::CloseQuote => "''",
            PosTag::OpenQuote => "``",
            PosTag::LeftParen => "(",
            PosTag::RightParen => ")",
            PosTag::Comma => ",",
            PosTag::Period => ".",
            PosTag::Colon => ":",
        }
    }

    /// Human-readable label
    pub fn description(&self) -> &'static str {
        match self {
            PosTag::CC => "Conjunction",
            PosTag::CD => "Number",
            PosTag::DT => "Determiner",
            PosTag::EX => "Existential there",
            PosTag::FW => "Foreign word",
            PosTag::IN => "Preposition",
            PosTag::JJ => "Adjective",
            PosTag::JJR => "Adjective Comparative",
            PosTag::JJS => "Adjective Superlative",
            PosTag::LS => "List item marker",
            PosTag::MD => "Modal",
            PosTag::NN => "Noun",
            PosTag::NNS => "Noun Plural",
            PosTag::NNP => "Proper Noun",
            PosTag::NNPS => "Proper Noun Plural",
            PosTag::PDT => "Predeterminer",
            PosTag::POS => "Possessive ending",
            PosTag::PRP => "Pronoun",
            PosTag::PRPS => "Possessive Pronoun",
            PosTag::RB => "Adverb",
            PosTag::RBR => "Adverb Comparative",
            PosTag::RBS => "Adverb Superlative",
            PosTag::RP => "Particle",
            PosTag::SYM => "Symbol",
            PosTag::TO => "to",
            PosTag::UH => "Interjection",
            PosTag::VB => "Verb",
            PosTag::VBD => "Verb Past",
            PosTag::VBG => "Verb Gerund",
            PosTag::VBN => "Verb Past Participle",
            PosTag::VBP => "Verb Present",
            PosTag::VBZ => "Verb 3rd Person",
            PosTag::WDT => "Wh-determiner",
            PosTag::WP => "Wh-pronoun",
            PosTag::WPS => "Possessive Wh-pronoun",
            PosTag::WRB => "Wh-adverb",
            PosTag::Pound => "Pound sign",
            PosTag::Dollar => "Dollar sign",
            PosTag::CloseQuote => "Closing quotation mark",
            PosTag::OpenQuote => "Opening quotation mark",
            PosTag::LeftParen => "Opening bracket",
            PosTag::RightParen => "Closing bracket",
            PosTag::Comma => "Comma",
            PosTag::Period => "Sentence terminator",
            PosTag::Colon => "Colon or dash",
        }
    }

    pub fn is_verb(&self) -> bool {
        matches!(
            self,
            PosTag::VB | PosTag::VBD | PosTag::VBG | PosTag::VBN | PosTag::VBP | PosTag::VBZ
        )
    }

    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::NN | PosTag::NNS | PosTag::NNP | PosTag::NNPS)
    }

    pub fn is_punctuation(&self) -> bool {
        matches!(
            self,
            PosTag::CloseQuote
                | PosTag::OpenQuote
                | PosTag::LeftParen
                | PosTag::RightParen
                | PosTag::Comma
                | PosTag::Period
                | PosTag::Colon
        )
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PosTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PosTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| Error::UnknownTag(s.to_string()))
    }
}

impl Serialize for PosTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PosTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tagger
// ============================================================================

/// Trait for part-of-speech taggers
pub trait Tagger: Send + Sync {
    /// Assign one tag to every token. The output has the same length as the input.
    fn tag(&self, tokens: &[String]) -> Vec<PosTag>;

    /// Get the name of this tagger
    fn name(&self) -> &str;

    /// Pair every token with its tag
    fn tag_tokens(&self, tokens: &[String]) -> Vec<(String, PosTag)> {
        tokens.iter().cloned().zip(self.tag(tokens)).collect()
    }
}

const LEXICON: &[(&str, PosTag)] = &[
    // determiners
    ("the", PosTag::DT), ("a", PosTag::DT), ("an", PosTag::DT), ("this", PosTag::DT),
    ("that", PosTag::DT), ("these", PosTag::DT), ("those", PosTag::DT), ("each", PosTag::DT),
    ("every", PosTag::DT), ("some", PosTag::DT), ("any", PosTag::DT), ("no", PosTag::DT),
    ("another", PosTag::DT), ("either", PosTag::DT), ("neither", PosTag::DT),
    ("all", PosTag::DT), ("both", PosTag::PDT), ("such", PosTag::JJ),
    // prepositions and subordinators
    ("of", PosTag::IN), ("in", PosTag::IN), ("on", PosTag::IN), ("at", PosTag::IN),
    ("by", PosTag::IN), ("for", PosTag::IN), ("with", PosTag::IN), ("about", PosTag::IN),
    ("against", PosTag::IN), ("between", PosTag::IN), ("into", PosTag::IN),
    ("through", PosTag::IN), ("during", PosTag::IN), ("before", PosTag::IN),
    ("after", PosTag::IN), ("above", PosTag::IN), ("below", PosTag::IN), ("from", PosTag::IN),
    ("up", PosTag::IN), ("down", PosTag::IN), ("over", PosTag::IN), ("under", PosTag::IN),
    ("since", PosTag::IN), ("without", PosTag::IN), ("within", PosTag::IN),
    ("along", PosTag::IN), ("among", PosTag::IN), ("across", PosTag::IN),
    ("behind", PosTag::IN), ("beyond", PosTag::IN), ("near", PosTag::IN), ("upon", PosTag::IN),
    ("toward", PosTag::IN), ("towards", PosTag::IN), ("per", PosTag::IN), ("than", PosTag::IN),
    ("because", PosTag::IN), ("although", PosTag::IN), ("though", PosTag::IN),
    ("while", PosTag::IN), ("whether", PosTag::IN), ("if", PosTag::IN), ("unless", PosTag::IN),
    ("until", PosTag::IN), ("as", PosTag::IN), ("like", PosTag::IN), ("via", PosTag::IN),
    ("despite", PosTag::IN), ("around", PosTag::IN), ("onto", PosTag::IN), ("off", PosTag::IN),
    ("out", PosTag::IN),
    // conjunctions
    ("and", PosTag::CC), ("or", PosTag::CC), ("but", PosTag::CC), ("nor", PosTag::CC),
    ("yet", PosTag::CC), ("&", PosTag::CC),
    // pronouns
    ("i", PosTag::PRP), ("me", PosTag::PRP), ("you", PosTag::PRP), ("he", PosTag::PRP),
    ("him", PosTag::PRP), ("she", PosTag::PRP), ("it", PosTag::PRP), ("we", PosTag::PRP),
    ("us", PosTag::PRP), ("they", PosTag::PRP), ("them", PosTag::PRP),
    ("myself", PosTag::PRP), ("yourself", PosTag::PRP), ("himself", PosTag::PRP),
    ("herself", PosTag::PRP), ("itself", PosTag::PRP), ("ourselves", PosTag::PRP),
    ("yourselves", PosTag::PRP), ("themselves", PosTag::PRP),
    ("my", PosTag::PRPS), ("your", PosTag::PRPS), ("his", PosTag::PRPS), ("her", PosTag::PRPS),
    ("its", PosTag::PRPS), ("our", PosTag::PRPS), ("their", PosTag::PRPS),
    // wh-words
    ("which", PosTag::WDT), ("who", PosTag::WP), ("whom", PosTag::WP), ("what", PosTag::WP),
    ("whose", PosTag::WPS), ("when", PosTag::WRB), ("where", PosTag::WRB),
    ("why", PosTag::WRB), ("how", PosTag::WRB),
    // modals and infinitive marker
    ("can", PosTag::MD), ("could", PosTag::MD), ("may", PosTag::MD), ("might", PosTag::MD),
    ("must", PosTag::MD), ("shall", PosTag::MD), ("should", PosTag::MD), ("will", PosTag::MD),
    ("would", PosTag::MD), ("ca", PosTag::MD), ("wo", PosTag::MD), ("'ll", PosTag::MD),
    ("'d", PosTag::MD), ("to", PosTag::TO), ("na", PosTag::TO), ("ta", PosTag::TO),
    ("there", PosTag::EX),
    // auxiliaries and frequent verbs
    ("be", PosTag::VB), ("am", PosTag::VBP), ("is", PosTag::VBZ), ("are", PosTag::VBP),
    ("was", PosTag::VBD), ("were", PosTag::VBD), ("been", PosTag::VBN), ("being", PosTag::VBG),
    ("have", PosTag::VBP), ("has", PosTag::VBZ), ("had", PosTag::VBD), ("having", PosTag::VBG),
    ("do", PosTag::VBP), ("does", PosTag::VBZ), ("did", PosTag::VBD), ("done", PosTag::VBN),
    ("doing", PosTag::VBG), ("'s", PosTag::POS), ("'re", PosTag::VBP), ("'m", PosTag::VBP),
    ("'ve", PosTag::VBP), ("said", PosTag::VBD), ("went", PosTag::VBD), ("made", PosTag::VBD),
    ("got", PosTag::VBD), ("gone", PosTag::VBN), ("came", PosTag::VBD), ("took", PosTag::VBD),
    ("gave", PosTag::VBD), ("saw", PosTag::VBD), ("knew", PosTag::VBD), ("thought", PosTag::VBD),
    ("gon", PosTag::VBG), ("wan", PosTag::VBP), ("let", PosTag::VB), ("get", PosTag::VB),
    // adverbs
    ("not", PosTag::RB), ("n't", PosTag::RB), ("never", PosTag::RB), ("also", PosTag::RB),
    ("very", PosTag::RB), ("too", PosTag::RB), ("just", PosTag::RB), ("only", PosTag::RB),
    ("even", PosTag::RB), ("still", PosTag::RB), ("already", PosTag::RB),
    ("always", PosTag::RB), ("often", PosTag::RB), ("sometimes", PosTag::RB),
    ("soon", PosTag::RB), ("now", PosTag::RB), ("then", PosTag::RB), ("here", PosTag::RB),
    ("quite", PosTag::RB), ("rather", PosTag::RB), ("almost", PosTag::RB),
    ("again", PosTag::RB), ("ever", PosTag::RB), ("so", PosTag::RB), ("well", PosTag::RB),
    ("more", PosTag::RBR), ("less", PosTag::RBR), ("most", PosTag::RBS),
    ("least", PosTag::RBS),
    // adjectives
    ("good", PosTag::JJ), ("new", PosTag::JJ), ("first", PosTag::JJ), ("last", PosTag::JJ),
    ("long", PosTag::JJ), ("great", PosTag::JJ), ("little", PosTag::JJ), ("own", PosTag::JJ),
    ("other", PosTag::JJ), ("old", PosTag::JJ), ("big", PosTag::JJ), ("high", PosTag::JJ),
    ("small", PosTag::JJ), ("large", PosTag::JJ), ("next", PosTag::JJ), ("early", PosTag::JJ),
    ("young", PosTag::JJ), ("few", PosTag::JJ), ("bad", PosTag::JJ), ("same", PosTag::JJ),
    ("able", PosTag::JJ), ("quick", PosTag::JJ), ("brown", PosTag::JJ), ("lazy", PosTag::JJ),
    ("happy", PosTag::JJ), ("better", PosTag::JJR), ("best", PosTag::JJS),
    ("worse", PosTag::JJR), ("worst", PosTag::JJS),
    // numbers
    ("one", PosTag::CD), ("two", PosTag::CD), ("three", PosTag::CD), ("four", PosTag::CD),
    ("five", PosTag::CD), ("six", PosTag::CD), ("seven", PosTag::CD), ("eight", PosTag::CD),
    ("nine", PosTag::CD), ("ten", PosTag::CD), ("hundred", PosTag::CD),
    ("thousand", PosTag::CD), ("million", PosTag::CD), ("billion", PosTag::CD),
    // interjections
    ("oh", PosTag::UH), ("hello", PosTag::UH), ("hi", PosTag::UH), ("hey", PosTag::UH),
    ("wow", PosTag::UH), ("yes", PosTag::UH), ("ok", PosTag::UH), ("okay", PosTag::UH),
    ("please", PosTag::UH),
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "able", "ible", "ive", "less", "ical", "ish"];

/// Words that turn a following past-tense form into a participle
const PERFECT_OR_PASSIVE: &[&str] = &[
    "has", "have", "had", "having", "'ve", "is", "are", "was", "were", "be", "been",
    "being", "am", "'s", "'re", "'m", "get", "got", "gets",
];

/// Lexicon-and-rules English tagger
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    lexicon: FxHashMap<&'static str, PosTag>,
}

impl LexiconTagger {
    /// Create a tagger with the built-in English lexicon
    pub fn english() -> Self {
        Self {
            lexicon: LEXICON.iter().copied().collect(),
        }
    }

    fn lookup(&self, word: &str) -> Option<PosTag> {
        self.lexicon.get(word).copied()
    }

    fn initial_tag(&self, tokens: &[String], i: usize) -> PosTag {
        let token = tokens[i].as_str();
        if let Some(tag) = punctuation_tag(token) {
            return tag;
        }

        let lower = token.to_lowercase();
        if let Some(tag) = self.lookup(&lower) {
            return tag;
        }
        if NUMBER.is_match(token) {
            return PosTag::CD;
        }
        if !token.chars().any(char::is_alphanumeric) {
            return PosTag::SYM;
        }

        let guess = guess_from_suffix(&lower);
        let capitalized = token.chars().next().is_some_and(char::is_uppercase);
        if !capitalized {
            return guess;
        }

        let sentence_start = i == 0
            || matches!(
                punctuation_tag(&tokens[i - 1]),
                Some(PosTag::Period | PosTag::OpenQuote | PosTag::Colon)
            );
        match guess {
            PosTag::NNS if !sentence_start => PosTag::NNPS,
            PosTag::NN => PosTag::NNP,
            _ if !sentence_start => PosTag::NNP,
            other => other,
        }
    }

    fn apply_context(&self, tokens: &[String], tags: &mut [PosTag]) {
        let mut verb_in_clause = false;

        for i in 0..tags.len() {
            let word = tokens[i].to_lowercase();
            let known = self.lookup(&word).is_some();
            let prev = i.checked_sub(1).map(|j| tags[j]);
            let prev_word = i.checked_sub(1).map(|j| tokens[j].to_lowercase());
            let prev_word = prev_word.as_deref().unwrap_or("");
            let next = tags.get(i + 1).copied();
            let next_word = tokens.get(i + 1).map(|t| t.to_lowercase());

            let current = tags[i];
            let tag = match (prev, current) {
                (Some(PosTag::TO | PosTag::MD), PosTag::NN | PosTag::VBP) => PosTag::VB,
                (Some(PosTag::DT | PosTag::PRPS), PosTag::VB | PosTag::VBP) if !known => {
                    PosTag::NN
                }
                (Some(PosTag::DT | PosTag::PRPS), PosTag::VBD)
                    if matches!(next, Some(PosTag::NN | PosTag::NNS)) =>
                {
                    PosTag::JJ
                }
                (Some(PosTag::NN | PosTag::NNP), PosTag::NNS) if !verb_in_clause => PosTag::VBZ,
                (Some(PosTag::PRP), PosTag::NNS)
                    if !verb_in_clause && matches!(prev_word, "he" | "she" | "it") =>
                {
                    PosTag::VBZ
                }
                (Some(PosTag::NNS | PosTag::NNPS), PosTag::NN) if !verb_in_clause && !known => {
                    PosTag::VBP
                }
                (Some(PosTag::PRP), PosTag::NN)
                    if !verb_in_clause
                        && !known
                        && matches!(prev_word, "i" | "you" | "we" | "they") =>
                {
                    PosTag::VBP
                }
                (_, PosTag::VBD) if follows_auxiliary(tokens, tags, i) => PosTag::VBN,
                (Some(PosTag::PRP | PosTag::EX | PosTag::WP | PosTag::WDT), PosTag::POS) => {
                    PosTag::VBZ
                }
                (Some(PosTag::DT), PosTag::POS) if prev_word == "that" => PosTag::VBZ,
                (_, PosTag::EX)
                    if !next_word.as_deref().is_some_and(|w| {
                        PERFECT_OR_PASSIVE.contains(&w) || self.lookup(w) == Some(PosTag::MD)
                    }) =>
                {
                    PosTag::RB
                }
                (_, PosTag::PRPS)
                    if word == "her"
                        && !matches!(
                            next,
                            Some(PosTag::NN | PosTag::NNS | PosTag::NNP | PosTag::JJ)
                        ) =>
                {
                    PosTag::PRP
                }
                (_, tag) => tag,
            };

            tags[i] = tag;
            if tag.is_verb() || tag == PosTag::MD {
                verb_in_clause = true;
            }
            if tag.is_punctuation() || tag == PosTag::CC {
                verb_in_clause = false;
            }
        }
    }
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::english()
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, tokens: &[String]) -> Vec<PosTag> {
        let mut tags: Vec<PosTag> = (0..tokens.len())
            .map(|i| self.initial_tag(tokens, i))
            .collect();
        self.apply_context(tokens, &mut tags);
        tags
    }

    fn name(&self) -> &str {
        "lexicon_english"
    }
}

fn punctuation_tag(token: &str) -> Option<PosTag> {
    let tag = match token {
        "." | "!" | "?" => PosTag::Period,
        "," => PosTag::Comma,
        ":" | ";" | "--" | "-" | "..." => PosTag::Colon,
        "(" | "[" | "{" => PosTag::LeftParen,
        ")" | "]" | "}" => PosTag::RightParen,
        "``" | "“" | "‘" | "«" => PosTag::OpenQuote,
        "''" | "”" | "’" | "'" | "»" => PosTag::CloseQuote,
        "$" | "€" | "£" | "¥" => PosTag::Dollar,
        "#" => PosTag::Pound,
        "%" => PosTag::NN,
        _ => return None,
    };
    Some(tag)
}

fn guess_from_suffix(word: &str) -> PosTag {
    let len = word.chars().count();

    if word.contains('-') && len > 3 {
        PosTag::JJ
    } else if len > 4 && word.ends_with("ing") {
        PosTag::VBG
    } else if len > 3 && word.ends_with("ed") {
        PosTag::VBD
    } else if len > 3 && word.ends_with("ly") {
        PosTag::RB
    } else if ADJECTIVE_SUFFIXES
        .iter()
        .any(|suffix| word.ends_with(suffix) && len > suffix.len() + 2)
    {
        PosTag::JJ
    } else if len > 3
        && word.ends_with('s')
        && !["ss", "us", "is"].iter().any(|s| word.ends_with(s))
    {
        PosTag::NNS
    } else {
        PosTag::NN
    }
}

/// Whether the nearest preceding non-adverb token is a form of have/be/get
fn follows_auxiliary(tokens: &[String], tags: &[PosTag], i: usize) -> bool {
    (0..i)
        .rev()
        .take(3)
        .find(|&j| tags[j] != PosTag::RB)
        .is_some_and(|j| PERFECT_OR_PASSIVE.contains(&tokens[j].to_lowercase().as_str()))
}
