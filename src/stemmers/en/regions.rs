use lazy_static::lazy_static;
use regex_automata::meta::Regex;

static VOWELS: &str = "aeiouy";

// Stands for a consonantal `y` (word-initial or following a vowel). Upper case
// is never produced once the word has been lower-cased.
pub const Y_MARKER: char = 'Y';

static DOUBLES: [&str; 9] = ["bb", "dd", "ff", "gg", "mm", "nn", "pp", "rr", "tt"];

// Closed set of words where the regular computation would place R1 too early.
static R1_PREFIXES: [&str; 3] = ["gener", "commun", "arsen"];

lazy_static! {
    static ref VOWEL_THEN_CONSONANT: Regex =
        Regex::new(&format!("[{}][^{}]", VOWELS, VOWELS)).unwrap();
    static ref SHORT_SYLLABLE: Regex = Regex::new(&format!(
        "(?:[^{}][{}][^{}wx{}]|^[{}][^{}]?)$",
        VOWELS, VOWELS, VOWELS, Y_MARKER, VOWELS, VOWELS
    ))
    .unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    R1,
    R2,
}

/// Byte offsets where R1 and R2 start. An empty region starts at `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub r1: usize,
    pub r2: usize,
    pub end: usize,
}

impl Regions {
    /// Whether something starting at `offset` lies within `region`.
    pub fn contains(&self, region: Region, offset: usize) -> bool {
        match region {
            Region::R1 => offset >= self.r1,
            Region::R2 => offset >= self.r2,
        }
    }

    pub fn is_empty(&self, region: Region) -> bool {
        match region {
            Region::R1 => self.r1 >= self.end,
            Region::R2 => self.r2 >= self.end,
        }
    }
}

#[inline]
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

fn region_start(word: &str) -> usize {
    VOWEL_THEN_CONSONANT
        .find(word)
        .map_or(word.len(), |matched_part| matched_part.end())
}

// Offsets are always recomputed from the current word: removing a suffix can
// move the vowel/consonant frontier.
pub fn mark_regions(word: &str) -> Regions {
    let r1 = match R1_PREFIXES.iter().find(|prefix| word.starts_with(*prefix)) {
        Some(prefix) => prefix.len(),
        None => region_start(word),
    };

    let r2 = r1 + region_start(&word[r1..]);

    Regions {
        r1,
        r2,
        end: word.len(),
    }
}

/// Either a non-vowel, vowel, non-vowel (other than `w`, `x` or a marked `y`)
/// ending, or a vowel at the start of the word followed by at most one
/// non-vowel.
pub fn is_short_syllable(word: &str) -> bool {
    SHORT_SYLLABLE.is_match(word)
}

pub fn has_doubled_final_consonant(word: &str) -> bool {
    DOUBLES.iter().any(|double| word.ends_with(double))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn regions(word: &str) -> (&str, &str) {
        let regions = mark_regions(word);
        (&word[regions.r1..], &word[regions.r2..])
    }

    #[test]
    fn test_mark_regions() {
        let tests = [
            ("beautiful", "iful", "ul"),
            ("beauty", "y", ""),
            ("beau", "", ""),
            ("animadversion", "imadversion", "adversion"),
            ("sprinkled", "kled", ""),
            ("eucharist", "harist", "ist"),
            ("relate", "ate", "e"),
            ("national", "ional", "al"),
            ("", "", ""),
            ("aaa", "", ""),
        ];

        for (word, r1, r2) in tests {
            assert_eq!(regions(word), (r1, r2), "{}", word);
        }
    }

    #[test]
    fn test_mark_regions_prefixes() {
        assert_eq!(regions("generous"), ("ous", ""));
        assert_eq!(regions("generate"), ("ate", "e"));
        assert_eq!(regions("communism"), ("ism", "m"));
        assert_eq!(regions("communication"), ("ication", "ation"));
        assert_eq!(regions("arsenal"), ("al", ""));
    }

    #[test]
    fn test_mark_regions_marker_is_a_consonant() {
        assert_eq!(regions("plaYing"), ("ing", "g"));
        assert_eq!(regions("Yelling"), ("ling", "g"));
    }

    #[test]
    fn test_regions_contains() {
        let regions = mark_regions("relational");

        assert_eq!(regions, Regions { r1: 3, r2: 5, end: 10 });
        assert!(regions.contains(Region::R1, 3));
        assert!(!regions.contains(Region::R1, 2));
        assert!(!regions.contains(Region::R2, 4));
        assert!(!regions.is_empty(Region::R2));
        assert!(mark_regions("hop").is_empty(Region::R1));
    }

    #[test]
    fn test_is_short_syllable() {
        for word in ["rap", "trap", "entrap", "ow", "on", "at", "a", "hop"] {
            assert!(is_short_syllable(word), "{}", word);
        }

        for word in ["uproot", "bestow", "disturb", "plaY", "fall", "agre", ""] {
            assert!(!is_short_syllable(word), "{}", word);
        }
    }

    #[test]
    fn test_has_doubled_final_consonant() {
        assert!(has_doubled_final_consonant("hopp"));
        assert!(has_doubled_final_consonant("runn"));
        assert!(!has_doubled_final_consonant("fall"));
        assert!(!has_doubled_final_consonant("fizz"));
        assert!(!has_doubled_final_consonant("t"));
    }
}
