//! Interactive conflict resolution.
//!
//! The core engine only asks `what should happen to this path?`; the
//! terminal prompt lives entirely here.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use arkgen_core::application::ports::{ConflictChoice, ConflictPolicy};

/// Prompts on stderr for each conflicting file: `y` overwrites, `q` aborts
/// the run, anything else (including EOF) skips.
///
/// Skip-on-EOF keeps a half-interactive run safe when stdin closes, and
/// matches the default answer shown in the prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptPolicy;

impl PromptPolicy {
    pub fn new() -> Self {
        Self
    }

    /// `true` when an interactive prompt is possible at all.
    pub fn available() -> bool {
        io::stdin().is_terminal() && io::stderr().is_terminal()
    }
}

impl ConflictPolicy for PromptPolicy {
    fn resolve(&self, path: &Path) -> ConflictChoice {
        // Prompt on stderr so stdout stays clean for --output-format json.
        eprint!("File {} already exists. Overwrite? [y/N/q] ", path.display());
        if io::stderr().flush().is_err() {
            return ConflictChoice::Skip;
        }

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return ConflictChoice::Skip;
        }

        parse_answer(&input)
    }
}

fn parse_answer(input: &str) -> ConflictChoice {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => ConflictChoice::Overwrite,
        "q" | "quit" => ConflictChoice::Abort,
        _ => ConflictChoice::Skip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_answers_overwrite() {
        assert_eq!(parse_answer("y\n"), ConflictChoice::Overwrite);
        assert_eq!(parse_answer("YES\n"), ConflictChoice::Overwrite);
    }

    #[test]
    fn quit_answers_abort() {
        assert_eq!(parse_answer("q\n"), ConflictChoice::Abort);
        assert_eq!(parse_answer("quit\n"), ConflictChoice::Abort);
    }

    #[test]
    fn anything_else_skips() {
        assert_eq!(parse_answer("\n"), ConflictChoice::Skip);
        assert_eq!(parse_answer("n\n"), ConflictChoice::Skip);
        assert_eq!(parse_answer("maybe\n"), ConflictChoice::Skip);
        assert_eq!(parse_answer(""), ConflictChoice::Skip);
    }
}
