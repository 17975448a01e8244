use numbermind_solver::encoders::DecodeError;
use numbermind_solver::parsers::ClauseParseError;
use thiserror::Error;

pub(crate) type NumberMindResult<T> = Result<T, NumberMindError>;

#[derive(Error, Debug)]
pub(crate) enum NumberMindError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The clauses were invalid, more details: {0}")]
    InvalidClauses(#[from] ClauseParseError),
    #[error("The solution does not describe a digit string, more details: {0}")]
    InvalidSolution(#[from] DecodeError),
    #[error("The guess {guess} has {actual} digits, but the puzzle has {expected} positions")]
    GuessLength {
        guess: String,
        actual: usize,
        expected: usize,
    },
}
