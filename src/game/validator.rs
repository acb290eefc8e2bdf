pub struct GuessValidator;

impl GuessValidator {
    /// Check a guess against the answer, ignoring case.
    ///
    /// The guess is compared verbatim otherwise: surrounding whitespace is
    /// not stripped, so an empty or blank guess never matches.
    pub fn is_correct(guess: &str, answer: &str) -> bool {
        guess.to_lowercase() == answer.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(GuessValidator::is_correct("animal", "animal"));
    }

    #[test]
    fn test_case_insensitive_match() {
        assert!(GuessValidator::is_correct("ANIMAL", "animal"));
        assert!(GuessValidator::is_correct("AnImAl", "animal"));
        assert!(GuessValidator::is_correct("ÑANDÚ", "ñandú"));
    }

    #[test]
    fn test_wrong_guess() {
        assert!(!GuessValidator::is_correct("animals", "animal"));
        assert!(!GuessValidator::is_correct("lamina", "animal"));
    }

    #[test]
    fn test_blank_guess_is_wrong() {
        assert!(!GuessValidator::is_correct("", "animal"));
        assert!(!GuessValidator::is_correct("   ", "animal"));
        assert!(!GuessValidator::is_correct(" animal ", "animal"));
    }
}
