//! Dictionary-form lemmatization
//!
//! Irregular forms are looked up in tables; regular inflections are undone
//! with morphological suffix rules for the requested word class. Only
//! lowercase alphabetic words are rewritten, anything else is returned as-is.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// Part-of-speech hint for the lemmatizer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordClass {
    #[default]
    Noun,
    Verb,
    Adjective,
    Adverb,
}

/// Trait for lemmatizers that map a word to its dictionary base form
pub trait Lemmatizer: Send + Sync {
    /// Lemmatize a word read as the given word class
    fn lemmatize_as(&self, word: &str, class: WordClass) -> String;

    /// Get the name of this lemmatizer
    fn name(&self) -> &str;

    /// Lemmatize a word read as a noun
    fn lemmatize(&self, word: &str) -> String {
        self.lemmatize_as(word, WordClass::Noun)
    }

    /// Lemmatize every token as a noun, preserving order
    fn lemmatize_all(&self, tokens: &[String]) -> Vec<String> {
        tokens.iter().map(|token| self.lemmatize(token)).collect()
    }
}

const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("children", "child"), ("men", "man"), ("women", "woman"), ("feet", "foot"),
    ("teeth", "tooth"), ("geese", "goose"), ("mice", "mouse"), ("lice", "louse"),
    ("oxen", "ox"), ("dice", "die"), ("data", "datum"), ("criteria", "criterion"),
    ("phenomena", "phenomenon"), ("analyses", "analysis"), ("crises", "crisis"),
    ("theses", "thesis"), ("hypotheses", "hypothesis"), ("diagnoses", "diagnosis"),
    ("bases", "basis"), ("axes", "axis"), ("indices", "index"), ("matrices", "matrix"),
    ("vertices", "vertex"), ("appendices", "appendix"), ("cacti", "cactus"),
    ("fungi", "fungus"), ("nuclei", "nucleus"), ("radii", "radius"), ("stimuli", "stimulus"),
    ("alumni", "alumnus"), ("bacteria", "bacterium"), ("curricula", "curriculum"),
    ("media", "medium"), ("memoranda", "memorandum"), ("leaves", "leaf"),
    ("wolves", "wolf"), ("knives", "knife"), ("wives", "wife"), ("lives", "life"),
    ("halves", "half"), ("selves", "self"), ("shelves", "shelf"), ("calves", "calf"),
    ("loaves", "loaf"), ("thieves", "thief"), ("scarves", "scarf"), ("elves", "elf"),
    ("quizzes", "quiz"), ("buses", "bus"), ("gases", "gas"), ("heroes", "hero"),
];

/// Nouns ending in `s` that are already singular
const INVARIANT_NOUNS: &[&str] = &[
    "news", "series", "species", "means", "lens", "gas", "chaos", "bias", "canvas", "atlas",
    "always", "perhaps", "thus", "yes", "whereas", "sometimes", "besides", "towards",
    "afterwards", "has", "was", "does", "goes", "its", "his", "hers", "ours", "yours",
    "theirs", "whose",
];

const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"),
    ("been", "be"), ("being", "be"), ("has", "have"), ("had", "have"), ("having", "have"),
    ("does", "do"), ("did", "do"), ("done", "do"), ("goes", "go"), ("went", "go"),
    ("gone", "go"), ("ran", "run"), ("made", "make"), ("said", "say"), ("saw", "see"),
    ("seen", "see"), ("took", "take"), ("taken", "take"), ("came", "come"), ("got", "get"),
    ("gotten", "get"), ("gave", "give"), ("given", "give"), ("knew", "know"),
    ("known", "know"), ("thought", "think"), ("told", "tell"), ("found", "find"),
    ("left", "leave"), ("felt", "feel"), ("kept", "keep"), ("began", "begin"),
    ("begun", "begin"), ("brought", "bring"), ("bought", "buy"), ("wrote", "write"),
    ("written", "write"), ("stood", "stand"), ("heard", "hear"), ("held", "hold"),
    ("met", "meet"), ("paid", "pay"), ("sat", "sit"), ("spoke", "speak"),
    ("spoken", "speak"), ("led", "lead"), ("grew", "grow"), ("grown", "grow"),
    ("lost", "lose"), ("fell", "fall"), ("fallen", "fall"), ("sent", "send"),
    ("built", "build"), ("understood", "understand"), ("drew", "draw"), ("drawn", "draw"),
    ("broke", "break"), ("broken", "break"), ("spent", "spend"), ("rose", "rise"),
    ("risen", "rise"), ("drove", "drive"), ("driven", "drive"), ("ate", "eat"),
    ("eaten", "eat"), ("flew", "fly"), ("flown", "fly"), ("chose", "choose"),
    ("chosen", "choose"), ("sold", "sell"), ("caught", "catch"), ("taught", "teach"),
    ("fought", "fight"), ("slept", "sleep"), ("won", "win"), ("wore", "wear"),
    ("worn", "wear"), ("threw", "throw"), ("thrown", "throw"), ("sang", "sing"),
    ("sung", "sing"), ("swam", "swim"), ("swum", "swim"), ("forgot", "forget"),
    ("forgotten", "forget"), ("hid", "hide"), ("hidden", "hide"), ("woke", "wake"),
    ("woken", "wake"), ("dying", "die"), ("lying", "lie"), ("tying", "tie"),
];

const IRREGULAR_ADJECTIVES: &[(&str, &str)] = &[
    ("better", "good"), ("best", "good"), ("worse", "bad"), ("worst", "bad"),
    ("further", "far"), ("farther", "far"), ("furthest", "far"), ("farthest", "far"),
    ("less", "little"), ("least", "little"), ("elder", "old"), ("eldest", "old"),
];

const IRREGULAR_ADVERBS: &[(&str, &str)] = &[("better", "well"), ("best", "well")];

/// Lemmatizer backed by irregular-form tables and suffix rules
#[derive(Debug, Clone)]
pub struct RuleLemmatizer {
    irregular: FxHashMap<WordClass, FxHashMap<&'static str, &'static str>>,
    invariant_nouns: FxHashSet<&'static str>,
}

impl RuleLemmatizer {
    /// Create a lemmatizer with the built-in English tables
    pub fn english() -> Self {
        let irregular: FxHashMap<WordClass, FxHashMap<&'static str, &'static str>> = [
            (WordClass::Noun, IRREGULAR_NOUNS),
            (WordClass::Verb, IRREGULAR_VERBS),
            (WordClass::Adjective, IRREGULAR_ADJECTIVES),
            (WordClass::Adverb, IRREGULAR_ADVERBS),
        ]
        .into_iter()
        .map(|(class, table)| (class, table.iter().copied().collect()))
        .collect();

        Self {
            irregular,
            invariant_nouns: INVARIANT_NOUNS.iter().copied().collect(),
        }
    }

    fn noun(&self, word: &str) -> String {
        if word.len() <= 3
            || self.invariant_nouns.contains(word)
            || ["ss", "us", "is", "ics"].iter().any(|s| word.ends_with(s))
            || !word.ends_with('s')
        {
            return word.to_string();
        }

        if let Some(stem) = word.strip_suffix("ies") {
            if stem.len() >= 2 {
                return format!("{stem}y");
            }
        }
        if ["sses", "xes", "zes", "ches", "shes"].iter().any(|s| word.ends_with(s)) {
            return word[..word.len() - 2].to_string();
        }
        if let Some(stem) = word.strip_suffix("oes") {
            if stem.len() >= 4 {
                return format!("{stem}o");
            }
        }
        word[..word.len() - 1].to_string()
    }

    fn verb(&self, word: &str) -> String {
        if let Some(stem) = word.strip_suffix("ies") {
            if stem.len() >= 2 {
                return format!("{stem}y");
            }
        }
        if let Some(stem) = word.strip_suffix("ied") {
            if stem.len() >= 2 {
                return format!("{stem}y");
            }
        }
        if word.ends_with('s') && !word.ends_with("ss") && word.len() > 3 {
            if ["sses", "xes", "zes", "ches", "shes", "oes"].iter().any(|s| word.ends_with(s)) {
                return word[..word.len() - 2].to_string();
            }
            return word[..word.len() - 1].to_string();
        }
        if let Some(stem) = word.strip_suffix("eed") {
            if has_vowel(stem) {
                return format!("{stem}ee");
            }
        }
        for suffix in ["ed", "ing"] {
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem.len() >= 2 && has_vowel(stem) {
                    return restore_stem(stem);
                }
            }
        }
        word.to_string()
    }

    fn adjective(&self, word: &str) -> String {
        for suffix in ["est", "er"] {
            let Some(stem) = word.strip_suffix(suffix) else {
                continue;
            };
            if stem.len() < 2 || !has_vowel(stem) {
                continue;
            }
            if let Some(base) = stem.strip_suffix('i') {
                return format!("{base}y");
            }
            if let Some(single) = undouble(stem) {
                return single;
            }
            let needs_e = (ends_cvc(stem) && vowel_groups(stem) == 1)
                || (matches!(stem.chars().last(), Some('c' | 'g' | 'v' | 's' | 'z'))
                    && !stem.ends_with("ng"));
            return if needs_e {
                format!("{stem}e")
            } else {
                stem.to_string()
            };
        }
        word.to_string()
    }
}

impl Default for RuleLemmatizer {
    fn default() -> Self {
        Self::english()
    }
}

impl Lemmatizer for RuleLemmatizer {
    fn lemmatize_as(&self, word: &str, class: WordClass) -> String {
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
            return word.to_string();
        }
        if let Some(lemma) = self.irregular.get(&class).and_then(|table| table.get(word)) {
            return lemma.to_string();
        }

        match class {
            WordClass::Noun => self.noun(word),
            WordClass::Verb => self.verb(word),
            WordClass::Adjective => self.adjective(word),
            WordClass::Adverb => word.to_string(),
        }
    }

    fn name(&self) -> &str {
        "rule_english"
    }
}

// ============================================================================
// Suffix helpers
// ============================================================================

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn has_vowel(s: &str) -> bool {
    s.chars().any(|c| is_vowel(c) || c == 'y')
}

fn vowel_groups(s: &str) -> usize {
    let mut groups = 0;
    let mut previous = false;
    for c in s.chars() {
        let vowel = is_vowel(c);
        if vowel && !previous {
            groups += 1;
        }
        previous = vowel;
    }
    groups
}

/// consonant-vowel-consonant ending, final consonant not w/x/y
fn ends_cvc(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    match chars.as_slice() {
        [.., a, b, c] => {
            !is_vowel(*a) && is_vowel(*b) && !is_vowel(*c) && !matches!(c, 'w' | 'x' | 'y')
        }
        [b, c] => is_vowel(*b) && !is_vowel(*c) && !matches!(c, 'w' | 'x' | 'y'),
        _ => false,
    }
}

/// `stopp` -> `stop`; doubled l, s and z are kept (`fall`, `pass`, `buzz`)
fn undouble(s: &str) -> Option<String> {
    let chars: Vec<char> = s.chars().collect();
    match chars.as_slice() {
        [.., a, b] if a == b && !is_vowel(*a) && !matches!(a, 'l' | 's' | 'z') => {
            Some(s[..s.len() - 1].to_string())
        }
        _ => None,
    }
}

/// Rebuild a verb base from the stem left after removing `ed`/`ing`
fn restore_stem(stem: &str) -> String {
    if let Some(single) = undouble(stem) {
        return single;
    }
    if ends_cvc(stem) && vowel_groups(stem) == 1 {
        return format!("{stem}e");
    }
    if (matches!(stem.chars().last(), Some('c' | 'g' | 'v' | 'z')) && !stem.ends_with("ng"))
        || (stem.ends_with("at") && stem.len() > 3)
    {
        return format!("{stem}e");
    }
    stem.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemma(word: &str) -> String {
        RuleLemmatizer::english().lemmatize(word)
    }

    fn lemma_as(word: &str, class: WordClass) -> String {
        RuleLemmatizer::english().lemmatize_as(word, class)
    }

    #[test]
    fn test_regular_plurals() {
        assert_eq!(lemma("dogs"), "dog");
        assert_eq!(lemma("flies"), "fly");
        assert_eq!(lemma("boxes"), "box");
        assert_eq!(lemma("churches"), "church");
        assert_eq!(lemma("classes"), "class");
        assert_eq!(lemma("potatoes"), "potato");
        assert_eq!(lemma("houses"), "house");
    }

    #[test]
    fn test_irregular_nouns() {
        assert_eq!(lemma("children"), "child");
        assert_eq!(lemma("geese"), "goose");
        assert_eq!(lemma("wolves"), "wolf");
        assert_eq!(lemma("criteria"), "criterion");
    }

    #[test]
    fn test_singular_nouns_untouched() {
        assert_eq!(lemma("dog"), "dog");
        assert_eq!(lemma("glass"), "glass");
        assert_eq!(lemma("status"), "status");
        assert_eq!(lemma("analysis"), "analysis");
        assert_eq!(lemma("news"), "news");
        assert_eq!(lemma("is"), "is");
        assert_eq!(lemma("running"), "running");
    }

    #[test]
    fn test_non_lowercase_untouched() {
        assert_eq!(lemma("Dogs"), "Dogs");
        assert_eq!(lemma("mp3s"), "mp3s");
        assert_eq!(lemma("n't"), "n't");
        assert_eq!(lemma("."), ".");
    }

    #[test]
    fn test_verbs() {
        assert_eq!(lemma_as("running", WordClass::Verb), "run");
        assert_eq!(lemma_as("making", WordClass::Verb), "make");
        assert_eq!(lemma_as("stopped", WordClass::Verb), "stop");
        assert_eq!(lemma_as("hoped", WordClass::Verb), "hope");
        assert_eq!(lemma_as("walked", WordClass::Verb), "walk");
        assert_eq!(lemma_as("carried", WordClass::Verb), "carry");
        assert_eq!(lemma_as("watches", WordClass::Verb), "watch");
        assert_eq!(lemma_as("agreed", WordClass::Verb), "agree");
        assert_eq!(lemma_as("was", WordClass::Verb), "be");
        assert_eq!(lemma_as("went", WordClass::Verb), "go");
    }

    #[test]
    fn test_adjectives() {
        assert_eq!(lemma_as("bigger", WordClass::Adjective), "big");
        assert_eq!(lemma_as("happiest", WordClass::Adjective), "happy");
        assert_eq!(lemma_as("nicer", WordClass::Adjective), "nice");
        assert_eq!(lemma_as("larger", WordClass::Adjective), "large");
        assert_eq!(lemma_as("stronger", WordClass::Adjective), "strong");
        assert_eq!(lemma_as("better", WordClass::Adjective), "good");
    }

    #[test]
    fn test_adverb_irregular() {
        assert_eq!(lemma_as("better", WordClass::Adverb), "well");
        assert_eq!(lemma_as("quickly", WordClass::Adverb), "quickly");
    }

    #[test]
    fn test_lemmatize_all_keeps_order() {
        let tokens = vec!["cats".to_string(), "and".to_string(), "mice".to_string()];
        assert_eq!(
            RuleLemmatizer::english().lemmatize_all(&tokens),
            vec!["cat", "and", "mouse"]
        );
    }
}
