use rand::{seq::SliceRandom, Rng};

/// Scramble a word into a random permutation of its characters.
///
/// The result never equals `word` unless no distinct arrangement exists
/// (empty, single-character, or all-identical words), in which case the
/// input is returned unchanged.
pub fn scramble(word: &str, rng: &mut impl Rng) -> String {
    let mut letters: Vec<char> = word.chars().collect();

    if !has_distinct_arrangement(&letters) {
        return word.to_string();
    }

    // Terminates: at least one arrangement differs from the original
    loop {
        letters.shuffle(rng);
        let candidate: String = letters.iter().collect();
        if candidate != word {
            return candidate;
        }
    }
}

/// A word can be rearranged iff it holds at least two different characters
fn has_distinct_arrangement(letters: &[char]) -> bool {
    match letters.split_first() {
        Some((first, rest)) => rest.iter().any(|c| c != first),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn sorted(word: &str) -> Vec<char> {
        let mut chars: Vec<char> = word.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn test_scramble_differs_and_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        for word in ["cat", "ab", "animal", "banana", "abba", "Aa"] {
            for _ in 0..200 {
                let scrambled = scramble(word, &mut rng);
                assert_ne!(scrambled, word, "scramble of '{}' must differ", word);
                assert_eq!(
                    sorted(&scrambled),
                    sorted(word),
                    "'{}' is not a permutation of '{}'",
                    scrambled,
                    word
                );
            }
        }
    }

    #[test]
    fn test_two_letter_word_is_swapped() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(scramble("ab", &mut rng), "ba");
    }

    #[test]
    fn test_single_character_returned_unchanged() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(scramble("a", &mut rng), "a");
    }

    #[test]
    fn test_identical_characters_returned_unchanged() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(scramble("zzzz", &mut rng), "zzzz");
        assert_eq!(scramble("", &mut rng), "");
    }

    #[test]
    fn test_non_ascii_characters_kept_intact() {
        let mut rng = StdRng::seed_from_u64(11);
        let scrambled = scramble("niño", &mut rng);
        assert_ne!(scrambled, "niño");
        assert_eq!(sorted(&scrambled), sorted("niño"));
    }

    #[test]
    fn test_scramble_reaches_every_arrangement() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(scramble("abc", &mut rng));
        }
        // 3! arrangements minus the original
        assert_eq!(seen.len(), 5);
        assert!(!seen.contains("abc"));
    }
}
