//! Translations of counting constraints, and of Number Mind puzzles built from them, into CNF.
mod cardinality;
mod number_mind;

pub use cardinality::at_least_k;
pub use cardinality::at_most_k;
pub use cardinality::exactly_k;
pub use cardinality::exactly_one;
pub use number_mind::count_correct_digits;
pub use number_mind::DecodeError;
pub use number_mind::EncodedPuzzle;
pub use number_mind::Guess;
pub use number_mind::GuessParseError;
pub use number_mind::PuzzleConfiguration;
pub use number_mind::DEFAULT_ALPHABET_SIZE;
