use std::io::{BufRead, Write};

/// Decides whether pre-existing skills may be overwritten.
///
/// Injected into the install flow so tests and non-interactive runs never
/// touch a terminal.
pub trait OverwriteConfirmer: Send + Sync {
    /// `preexisting` is the number of same-named skills already installed.
    fn confirm_overwrite(&self, preexisting: usize) -> std::io::Result<bool>;
}

/// Interactive confirmer: a y/N prompt on the controlling terminal.
pub struct StdinConfirmer;

impl OverwriteConfirmer for StdinConfirmer {
    fn confirm_overwrite(&self, preexisting: usize) -> std::io::Result<bool> {
        print!("Found {preexisting} already-installed skill(s). Overwrite? [y/N] ");
        std::io::stdout().flush()?;
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        Ok(is_affirmative(&line))
    }
}

/// Fixed-answer confirmer for tests and the `--yes`/`--non-interactive` flags.
pub struct FixedConfirmer(pub bool);

impl OverwriteConfirmer for FixedConfirmer {
    fn confirm_overwrite(&self, _preexisting: usize) -> std::io::Result<bool> {
        Ok(self.0)
    }
}

/// `y`/`yes` in any case is affirmative; everything else, including an empty
/// line, declines.
pub fn is_affirmative(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affirmative_inputs() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("YES\n"));
        assert!(is_affirmative("  y  "));
    }

    #[test]
    fn test_everything_else_declines() {
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("\n"));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("yeah"));
        assert!(!is_affirmative("ok"));
    }

    #[test]
    fn test_fixed_confirmer() {
        assert!(FixedConfirmer(true).confirm_overwrite(3).unwrap());
        assert!(!FixedConfirmer(false).confirm_overwrite(3).unwrap());
    }
}
