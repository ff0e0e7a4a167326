//! Command Line - batch arguments and file loading
//!
//! The only fallible collaborator: everything here runs before the
//! engine sees its first label, and failures abort the process instead
//! of reaching the calculator.

use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::batch;

/// RPN calculator for the terminal.
///
/// With no arguments the calculator starts interactive. A token
/// sequence, given inline or through --file, is replayed against the
/// engine before the screen opens.
#[derive(Debug, Parser)]
#[command(name = "stackpad", version)]
pub struct Args {
    /// Whitespace-separated button labels, e.g. "5 3 +"
    pub tokens: Option<String>,

    /// Read the token sequence from a file instead
    #[arg(short, long, value_name = "FILE", conflicts_with = "tokens")]
    pub file: Option<PathBuf>,
}

/// Failure to assemble the batch token sequence.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("cannot read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Args {
    /// Tokens to replay before going interactive, if any were given.
    pub fn batch_tokens(&self) -> Result<Option<Vec<String>>, BatchError> {
        if let Some(path) = &self.file {
            let text = fs::read_to_string(path).map_err(|source| BatchError::Unreadable {
                path: path.clone(),
                source,
            })?;
            return Ok(Some(batch::tokenize(&text)));
        }
        Ok(self.tokens.as_deref().map(batch::tokenize))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_no_arguments_means_interactive() {
        let args = Args::try_parse_from(["stackpad"]).unwrap();
        assert!(args.batch_tokens().unwrap().is_none());
    }

    #[test]
    fn test_inline_tokens() {
        let args = Args::try_parse_from(["stackpad", "5 3 +"]).unwrap();
        let tokens = args.batch_tokens().unwrap().unwrap();
        assert_eq!(tokens, vec!["5", "3", "+"]);
    }

    #[test]
    fn test_file_tokens_span_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "5 3").unwrap();
        writeln!(file, "+").unwrap();

        let path = file.path().to_str().unwrap().to_owned();
        let args = Args::try_parse_from(["stackpad", "--file", &path]).unwrap();
        let tokens = args.batch_tokens().unwrap().unwrap();
        assert_eq!(tokens, vec!["5", "3", "+"]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let args = Args::try_parse_from(["stackpad", "-f", "/no/such/file"]).unwrap();
        let error = args.batch_tokens().unwrap_err();
        assert!(matches!(error, BatchError::Unreadable { .. }));
    }

    #[test]
    fn test_inline_and_file_conflict() {
        assert!(Args::try_parse_from(["stackpad", "5 3 +", "--file", "x"]).is_err());
    }
}
