// Reference:
// https://snowballstem.org/algorithms/english/stemmer.html
//
// Article:
// Martin F. Porter (2001) Snowball: A language for stemming algorithms.
use tracing::trace;

use crate::stemmers::en::exceptions::{is_step1a_invariant, lookup_exception};
use crate::stemmers::en::regions::{
    has_doubled_final_consonant, is_short_syllable, is_vowel, mark_regions, Region, Y_MARKER,
};
use crate::stemmers::en::rules::{apply_rules, Rules, SuffixRule};

use Region::{R1, R2};

type Step = fn(&str) -> Option<String>;

static POSSESSIVES: [[&str; 2]; 3] = [["'s", "’s"], ["s'", "s’"], ["'", "’"]];

static STEP1B_EED: [&str; 2] = ["eedly", "eed"];
static STEP1B_ED: [&str; 4] = ["ingly", "edly", "ing", "ed"];
static STEP1B_E: [&str; 3] = ["at", "bl", "iz"];

static STEP2: Rules<24> = [
    SuffixRule::new(R1, "ization", "ize"),
    SuffixRule::new(R1, "ational", "ate"),
    SuffixRule::new(R1, "fulness", "ful"),
    SuffixRule::new(R1, "ousness", "ous"),
    SuffixRule::new(R1, "iveness", "ive"),
    SuffixRule::new(R1, "tional", "tion"),
    SuffixRule::new(R1, "biliti", "ble"),
    SuffixRule::new(R1, "lessli", "less"),
    SuffixRule::new(R1, "iviti", "ive"),
    SuffixRule::new(R1, "ousli", "ous"),
    SuffixRule::new(R1, "ation", "ate"),
    SuffixRule::new(R1, "entli", "ent"),
    SuffixRule::new(R1, "alism", "al"),
    SuffixRule::new(R1, "aliti", "al"),
    SuffixRule::new(R1, "fulli", "ful"),
    SuffixRule::new(R1, "alli", "al"),
    SuffixRule::new(R1, "ator", "ate"),
    SuffixRule::new(R1, "izer", "ize"),
    SuffixRule::new(R1, "enci", "ence"),
    SuffixRule::new(R1, "anci", "ance"),
    SuffixRule::new(R1, "abli", "able"),
    SuffixRule::new(R1, "bli", "ble"),
    SuffixRule::new(R1, "ogi", "og").preceded_by("l"),
    SuffixRule::new(R1, "li", "").preceded_by("cdeghkmnrt"),
];

static STEP3: Rules<9> = [
    SuffixRule::new(R1, "ational", "ate"),
    SuffixRule::new(R1, "tional", "tion"),
    SuffixRule::new(R1, "alize", "al"),
    SuffixRule::new(R1, "icate", "ic"),
    SuffixRule::new(R1, "iciti", "ic"),
    SuffixRule::new(R2, "ative", ""),
    SuffixRule::new(R1, "ical", "ic"),
    SuffixRule::new(R1, "ness", ""),
    SuffixRule::new(R1, "ful", ""),
];

static STEP4: Rules<18> = [
    SuffixRule::new(R2, "ement", ""),
    SuffixRule::new(R2, "ance", ""),
    SuffixRule::new(R2, "ence", ""),
    SuffixRule::new(R2, "able", ""),
    SuffixRule::new(R2, "ible", ""),
    SuffixRule::new(R2, "ment", ""),
    SuffixRule::new(R2, "ant", ""),
    SuffixRule::new(R2, "ent", ""),
    SuffixRule::new(R2, "ism", ""),
    SuffixRule::new(R2, "ate", ""),
    SuffixRule::new(R2, "iti", ""),
    SuffixRule::new(R2, "ous", ""),
    SuffixRule::new(R2, "ive", ""),
    SuffixRule::new(R2, "ize", ""),
    SuffixRule::new(R2, "ion", "").preceded_by("st"),
    SuffixRule::new(R2, "al", ""),
    SuffixRule::new(R2, "er", ""),
    SuffixRule::new(R2, "ic", ""),
];

static STEPS: [(&str, Step); 6] = [
    ("1b", step1b),
    ("1c", step1c),
    ("2", step2),
    ("3", step3),
    ("4", step4),
    ("5", step5),
];

fn strip_possessive(mut word: &str) -> &str {
    for apostrophes in POSSESSIVES.iter() {
        if let Some(stem) = apostrophes.iter().find_map(|suffix| word.strip_suffix(suffix)) {
            word = stem;
        }
    }

    word
}

fn normalize(word: &str) -> String {
    let word = strip_possessive(word);

    let mut normalized = String::with_capacity(word.len());
    let mut previous: Option<char> = None;

    for c in word.chars() {
        if c == 'y' && previous.map_or(true, |p| matches!(p, 'a' | 'e' | 'i' | 'o' | 'u')) {
            normalized.push(Y_MARKER);
        } else {
            normalized.push(c);
        }

        previous = Some(c);
    }

    normalized
}

fn denormalize(word: String) -> String {
    if word.contains(Y_MARKER) {
        word.replace(Y_MARKER, "y")
    } else {
        word
    }
}

fn step1a(word: &str) -> Option<String> {
    if let Some(stem) = word.strip_suffix("sses") {
        return Some(format!("{}ss", stem));
    }

    if let Some(stem) = word
        .strip_suffix("ied")
        .or_else(|| word.strip_suffix("ies"))
    {
        match stem.chars().count() {
            0 => (),
            1 | 2 => return Some(format!("{}ie", stem)),
            _ => return Some(format!("{}i", stem)),
        }
    }

    if word.ends_with("us") || word.ends_with("ss") {
        return None;
    }

    let stem = word.strip_suffix('s')?;

    // The vowel cannot be the one right before the `s`: "gas", "this"
    let mut chars = stem.chars();
    chars.next_back();

    if chars.any(is_vowel) {
        Some(stem.to_string())
    } else {
        None
    }
}

fn step1b(word: &str) -> Option<String> {
    if let Some(suffix) = STEP1B_EED.iter().find(|suffix| word.ends_with(*suffix)) {
        let start = word.len() - suffix.len();

        if !mark_regions(word).contains(R1, start) {
            return None;
        }

        return Some(format!("{}ee", &word[..start]));
    }

    let suffix = STEP1B_ED.iter().find(|suffix| word.ends_with(*suffix))?;
    let stem = &word[..word.len() - suffix.len()];

    if !stem.chars().any(is_vowel) {
        return None;
    }

    let mut stem = stem.to_string();

    if STEP1B_E.iter().any(|ending| stem.ends_with(ending)) {
        stem.push('e');
    } else if has_doubled_final_consonant(&stem) {
        stem.pop();
    } else if is_short_syllable(&stem) && mark_regions(&stem).is_empty(R1) {
        stem.push('e');
    }

    Some(stem)
}

fn step1c(word: &str) -> Option<String> {
    let stem = word
        .strip_suffix('y')
        .or_else(|| word.strip_suffix(Y_MARKER))?;

    let mut chars = stem.chars();

    match chars.next_back() {
        Some(c) if !is_vowel(c) && !chars.as_str().is_empty() => Some(format!("{}i", stem)),
        _ => None,
    }
}

fn step2(word: &str) -> Option<String> {
    apply_rules(&STEP2, word)
}

fn step3(word: &str) -> Option<String> {
    apply_rules(&STEP3, word)
}

fn step4(word: &str) -> Option<String> {
    apply_rules(&STEP4, word)
}

fn step5(word: &str) -> Option<String> {
    let regions = mark_regions(word);

    if let Some(stem) = word.strip_suffix('e') {
        let start = stem.len();

        if regions.contains(R2, start)
            || (regions.contains(R1, start) && !is_short_syllable(stem))
        {
            return Some(stem.to_string());
        }

        return None;
    }

    if word.ends_with("ll") && regions.contains(R2, word.len() - 1) {
        return Some(word[..word.len() - 1].to_string());
    }

    None
}

/// Stems an English word using the Porter2 algorithm.
///
/// Words shorter than 3 characters are only lower-cased.
pub fn porter2_stemmer(word: &str) -> String {
    let lowered = word.to_lowercase();

    if lowered.chars().count() < 3 {
        return lowered;
    }

    let mut word = normalize(&lowered);

    if let Some(stem) = lookup_exception(&word) {
        trace!(word = %lowered, stem, "exception");
        return stem.to_string();
    }

    if let Some(stemmed) = step1a(&word) {
        trace!(stage = "1a", from = %word, to = %stemmed);
        word = stemmed;
    }

    if is_step1a_invariant(&word) {
        trace!(word = %word, "invariant after step 1a");
        return denormalize(word);
    }

    for &(stage, step) in STEPS.iter() {
        if let Some(stemmed) = step(&word) {
            trace!(stage, from = %word, to = %stemmed);
            word = stemmed;
        }
    }

    denormalize(word)
}
