use crate::stemmers::en::regions::{mark_regions, Region};

#[derive(Debug, Clone, Copy)]
pub struct SuffixRule {
    pub suffix: &'static str,
    pub region: Region,
    pub preceded_by: Option<&'static str>,
    pub replacement: &'static str,
}

impl SuffixRule {
    pub const fn new(region: Region, suffix: &'static str, replacement: &'static str) -> Self {
        Self {
            suffix,
            region,
            preceded_by: None,
            replacement,
        }
    }

    /// Restricts the rule to suffixes directly preceded by one of `chars`.
    pub const fn preceded_by(self, chars: &'static str) -> Self {
        Self {
            preceded_by: Some(chars),
            ..self
        }
    }

    fn accepts(&self, stem: &str) -> bool {
        match self.preceded_by {
            None => true,
            Some(chars) => stem.chars().next_back().map_or(false, |c| chars.contains(c)),
        }
    }
}

pub type Rules<const N: usize> = [SuffixRule; N];

/// Rules must be sorted by decreasing suffix length. The first rule whose
/// suffix ends `word` is the only one considered: when its conditions fail,
/// the word is left as is.
pub fn apply_rules(rules: &[SuffixRule], word: &str) -> Option<String> {
    let rule = rules.iter().find(|rule| word.ends_with(rule.suffix))?;
    let stem = &word[..word.len() - rule.suffix.len()];

    if !rule.accepts(stem) || !mark_regions(word).contains(rule.region, stem.len()) {
        return None;
    }

    let mut new_stem = String::with_capacity(stem.len() + rule.replacement.len());
    new_stem.push_str(stem);
    new_stem.push_str(rule.replacement);

    Some(new_stem)
}
