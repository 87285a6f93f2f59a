//! Password strength scoring for the sign-up meter.
//!
//! One point per satisfied class: length ≥ 8, an uppercase letter, a digit, a
//! symbol, length ≥ 12. The score is bounded to 0..=5 and drives both the
//! label next to the input and the 4-segment strength bar.

/// Result of scoring a password.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordStrength {
    pub score: u8,
    pub label: &'static str,
    /// CSS color keyword used by the meter.
    pub color: &'static str,
}

/// Score a password. Recomputed on every keystroke by the sign-up page.
pub fn password_strength(password: &str) -> PasswordStrength {
    let mut score = 0u8;

    if password.len() >= 8 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }
    if password.len() >= 12 {
        score += 1;
    }

    let (label, color) = match score {
        0 => ("Very Weak", "red"),
        1 => ("Weak", "red"),
        2 => ("Fair", "yellow"),
        3 => ("Good", "green"),
        _ => ("Strong", "green"),
    };

    PasswordStrength { score, label, color }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_grows_with_each_class() {
        // Each password satisfies one more class than the previous.
        let ladder = [
            "",             // 0
            "abcdefgh",     // length >= 8
            "Abcdefgh",     // + uppercase
            "Abcdefg1",     // + digit
            "Abcdef1!",     // + symbol
            "Abcdefgh1!xy", // + length >= 12
        ];

        let mut previous = 0;
        for (expected, pw) in ladder.iter().enumerate() {
            let strength = password_strength(pw);
            assert_eq!(strength.score as usize, expected, "password {pw:?}");
            assert!(strength.score as usize >= previous);
            previous = strength.score as usize;
        }
    }

    #[test]
    fn test_score_is_bounded() {
        for pw in ["", "a", "aA1!aA1!aA1!aA1!", "💰💰💰💰💰💰💰💰💰💰💰💰"] {
            assert!(password_strength(pw).score <= 5);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(password_strength("").label, "Very Weak");
        assert_eq!(password_strength("abcdefgh").label, "Weak");
        assert_eq!(password_strength("Abcdefgh").label, "Fair");
        assert_eq!(password_strength("Abcdefg1").label, "Good");
        assert_eq!(password_strength("Abcdef1!").label, "Strong");
        assert_eq!(password_strength("Abcdefgh1!xy").label, "Strong");
    }

    #[test]
    fn test_non_ascii_counts_as_symbol() {
        // Mirrors the original [^A-Za-z0-9] class.
        assert_eq!(password_strength("é").score, 1);
    }
}
