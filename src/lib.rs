mod stemmers;

pub use stemmers::porter2_stemmer;
pub use stemmers::porter2_stemmer as stem;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn stem_is_deterministic(s in ".{0,40}") {
            prop_assert_eq!(stem(&s), stem(&s));
        }

        #[test]
        fn short_words_are_only_lowercased(s in "[ -~]{0,2}") {
            prop_assert_eq!(stem(&s), s.to_lowercase());
        }

        #[test]
        fn stem_is_case_insensitive(s in "[a-zA-Z']{0,20}") {
            prop_assert_eq!(stem(&s), stem(&s.to_lowercase()));
        }

        #[test]
        fn stem_is_lowercase_and_never_longer(s in "[a-z]{3,20}") {
            let stemmed = stem(&s);

            prop_assert_eq!(stemmed.to_lowercase(), stemmed.clone());
            prop_assert!(stemmed.len() <= s.len() + 1);
        }
    }
}
