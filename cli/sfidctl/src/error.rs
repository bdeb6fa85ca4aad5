//! Error handling and display for the CLI.

use colored::Colorize;
use sfid_id::IdError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{failed} of {total} IDs could not be processed")]
    PartialFailure { failed: usize, total: usize },

    #[error("Invalid record ID '{input}': {source}")]
    InvalidId {
        input: String,
        #[source]
        source: IdError,
    },
}

impl CliError {
    /// Wrap a library error with the input that caused it.
    pub fn invalid_id(input: impl Into<String>, source: IdError) -> Self {
        Self::InvalidId {
            input: input.into(),
            source,
        }
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    let id_err = match err.downcast_ref::<CliError>() {
        Some(CliError::InvalidId { source, .. }) => Some(source),
        _ => err.downcast_ref::<IdError>(),
    };

    if let Some(hint) = id_err.and_then(hint_for) {
        eprintln!("\n{}", format!("Hint: {hint}").yellow());
    }
}

/// Returns a hint for the library errors users most often trip over.
fn hint_for(err: &IdError) -> Option<&'static str> {
    match err {
        IdError::InvalidLengthSfid { .. } => {
            Some("Record IDs are 15 (case-sensitive) or 18 (case-insensitive) characters.")
        }
        IdError::InvalidSfid => Some(
            "The last 3 characters do not match the first 15. Check for a mistyped digit or drop the suffix.",
        ),
        IdError::InvalidEdition { .. } => Some("Known editions are `classic` and `extended`."),
        IdError::InvalidAddition { .. } | IdError::InvalidSubtraction { .. } => {
            Some("The numeric identifier must stay between 00000000 and zzzzzzzz.")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_failure_message() {
        let err = CliError::PartialFailure {
            failed: 2,
            total: 5,
        };
        assert_eq!(err.to_string(), "2 of 5 IDs could not be processed");
    }

    #[test]
    fn test_invalid_id_message() {
        let err = CliError::invalid_id("abc", IdError::InvalidLengthSfid { length: 3 });
        assert_eq!(
            err.to_string(),
            "Invalid record ID 'abc': record IDs must be 15 or 18 characters, got 3"
        );
    }

    #[test]
    fn test_hints() {
        assert!(hint_for(&IdError::InvalidSfid).is_some());
        assert!(hint_for(&IdError::InvalidSubtraction { delta: 1 }).is_some());
        assert!(hint_for(&IdError::InvalidNumericIdentifier).is_none());
    }
}
