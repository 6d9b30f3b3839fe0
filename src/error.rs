use thiserror::Error;

use crate::LineError;

/// Unified error type covering validation and I/O.
///
/// Returned by convenience methods like [`Validator::load()`](crate::Validator::load)
/// and [`RuleSet::from_file()`](crate::RuleSet::from_file).
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] LineError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
