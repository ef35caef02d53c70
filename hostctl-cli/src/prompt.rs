//! Interactive confirmation

use dialoguer::Confirm;

use crate::error::CliError;

/// Yes/no question asked before destructive or long-running operations
pub trait Confirmation: Send + Sync {
    fn confirm(&self, question: &str) -> Result<bool, CliError>;
}

/// Asks on the terminal, or answers yes for every question when `--yes` is set
pub struct TerminalConfirmation {
    assume_yes: bool,
}

impl TerminalConfirmation {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirmation for TerminalConfirmation {
    fn confirm(&self, question: &str) -> Result<bool, CliError> {
        if self.assume_yes {
            return Ok(true);
        }

        Ok(Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assume_yes_skips_prompt() {
        let confirm = TerminalConfirmation::new(true);
        assert!(confirm.confirm("Are you sure?").unwrap());
    }
}
