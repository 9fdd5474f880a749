use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

static IRREGULARS: [(&str, &str); 11] = [
    ("skis", "ski"),
    ("skies", "sky"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
    ("idly", "idl"),
    ("gently", "gentl"),
    ("ugly", "ugli"),
    ("early", "earli"),
    ("only", "onli"),
    ("singly", "singl"),
];

static INVARIANTS: [&str; 6] = ["sky", "news", "atlas", "cosmos", "bias", "andes"];

// Forms that look inflected after step 1a but are lexical bases.
static STEP1A_INVARIANTS: [&str; 8] = [
    "inning", "outing", "canning", "herring", "proceed", "exceed", "succeed", "earring",
];

lazy_static! {
    static ref EXCEPTIONS: HashMap<&'static str, &'static str> = IRREGULARS
        .iter()
        .copied()
        .chain(INVARIANTS.iter().map(|word| (*word, *word)))
        .collect();
    static ref STEP1A_INVARIANTS_SET: HashSet<&'static str> =
        STEP1A_INVARIANTS.iter().copied().collect();
}

pub fn lookup_exception(word: &str) -> Option<&'static str> {
    EXCEPTIONS.get(word).copied()
}

pub fn is_step1a_invariant(word: &str) -> bool {
    STEP1A_INVARIANTS_SET.contains(word)
}
