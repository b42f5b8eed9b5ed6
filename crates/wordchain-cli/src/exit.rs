//! CLI exit codes.
//!
//! Exit codes are part of the external contract, one per failure cause:
//! - 0: success, including "no ladder found" (a valid negative result)
//! - 1: wrong argument count (or unusable `WORDCHAIN_CONFIG`)
//! - 2: dictionary file unreadable
//! - 3: begin or end word absent from the dictionary
//! - 4: ladder mode with mismatched word lengths

use std::process::ExitCode;

use wordchain_core::{DictionaryError, QueryError};

/// Exit codes for the wordchain binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CliExitCode {
    Success = 0,
    Usage = 1,
    Dictionary = 2,
    WordNotFound = 3,
    LengthMismatch = 4,
}

impl From<CliExitCode> for ExitCode {
    fn from(code: CliExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

impl From<&DictionaryError> for CliExitCode {
    fn from(_: &DictionaryError) -> Self {
        CliExitCode::Dictionary
    }
}

impl From<&QueryError> for CliExitCode {
    fn from(err: &QueryError) -> Self {
        match err {
            QueryError::WordNotInDictionary { .. } => CliExitCode::WordNotFound,
            QueryError::LengthMismatch { .. } => CliExitCode::LengthMismatch,
        }
    }
}
