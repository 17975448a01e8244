//! Number Mind: find the secret digit string given guesses, each annotated with the number of
//! positions at which the guess has the correct digit.
//!
//! Every pair of (position, symbol) becomes one variable, true iff the secret has that symbol at
//! that position. Each position gets an [`exactly_one`] constraint over its symbols, and each guess
//! gets an [`exactly_k`] constraint over the variables it names.
use std::fmt::Display;
use std::str::FromStr;

use log::debug;
use thiserror::Error;

use super::exactly_k;
use super::exactly_one;
use crate::basic_types::Solution;
use crate::dpll_assert_eq_simple;
use crate::dpll_assert_simple;
use crate::formula::Domain;
use crate::formula::Formula;
use crate::formula::Literal;
use crate::formula::Variable;

/// The number of symbols per position: the decimal digits.
pub const DEFAULT_ALPHABET_SIZE: usize = 10;

/// A guessed digit string together with the number of positions at which it is correct.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Guess {
    digits: Vec<u8>,
    num_correct: usize,
}

impl Guess {
    pub fn new(digits: Vec<u8>, num_correct: usize) -> Guess {
        Guess {
            digits,
            num_correct,
        }
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn num_correct(&self) -> usize {
        self.num_correct
    }
}

impl Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for digit in &self.digits {
            write!(f, "{digit}")?;
        }
        write!(f, ":{}", self.num_correct)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuessParseError {
    #[error("'{0}' is missing the ':<correct>' suffix")]
    MissingScore(String),
    #[error("'{0}' is not a valid number of correct digits")]
    InvalidScore(String),
    #[error("'{0}' is not a decimal digit")]
    InvalidDigit(char),
    #[error("a guess needs at least one digit")]
    Empty,
}

/// Parses guesses of the form `90342:2`.
impl FromStr for Guess {
    type Err = GuessParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (digits, score) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| GuessParseError::MissingScore(s.to_owned()))?;

        if digits.is_empty() {
            return Err(GuessParseError::Empty);
        }

        let digits = digits
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|digit| digit as u8)
                    .ok_or(GuessParseError::InvalidDigit(c))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let num_correct = score
            .parse::<usize>()
            .map_err(|_| GuessParseError::InvalidScore(score.to_owned()))?;

        Ok(Guess::new(digits, num_correct))
    }
}

/// A position of the secret ended up with no symbol, or with several. The exactly-one constraints
/// rule this out for any solution of the encoded formula.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("no symbol is assigned to position {position}")]
    NoSymbolAssigned { position: usize },
    #[error("more than one symbol is assigned to position {position}")]
    MultipleSymbolsAssigned { position: usize },
}

/// The length of the secret, the size of its alphabet and the known guesses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleConfiguration {
    num_positions: usize,
    alphabet_size: usize,
    guesses: Vec<Guess>,
}

impl PuzzleConfiguration {
    pub fn new(num_positions: usize) -> PuzzleConfiguration {
        PuzzleConfiguration {
            num_positions,
            alphabet_size: DEFAULT_ALPHABET_SIZE,
            guesses: vec![],
        }
    }

    /// Restricts the symbols to `0..alphabet_size`; at most the ten decimal digits are supported.
    pub fn with_alphabet_size(mut self, alphabet_size: usize) -> PuzzleConfiguration {
        dpll_assert_simple!(
            (1..=DEFAULT_ALPHABET_SIZE).contains(&alphabet_size),
            "the alphabet consists of decimal digits"
        );
        self.alphabet_size = alphabet_size;
        self
    }

    pub fn with_guess(mut self, guess: Guess) -> PuzzleConfiguration {
        self.add_guess(guess);
        self
    }

    pub fn add_guess(&mut self, guess: Guess) {
        self.guesses.push(guess);
    }

    pub fn num_positions(&self) -> usize {
        self.num_positions
    }

    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// Builds the formula and its domain. The domain lists the variables position by position,
    /// and within a position by increasing symbol.
    ///
    /// Every guess must have exactly [`PuzzleConfiguration::num_positions`] digits, each smaller
    /// than the alphabet size.
    pub fn encode(&self) -> EncodedPuzzle {
        let mut domain = Domain::default();
        let position_variables = (0..self.num_positions)
            .map(|position| {
                (0..self.alphabet_size)
                    .map(|symbol| domain.new_variable(format!("{position}:{symbol}")))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let mut formula = Formula::default();
        for variables in &position_variables {
            formula.extend(exactly_one(variables));
        }

        for guess in &self.guesses {
            dpll_assert_eq_simple!(
                self.num_positions,
                guess.digits.len(),
                "guess {guess} does not have {} digits",
                self.num_positions
            );

            let matches = guess
                .digits
                .iter()
                .zip(&position_variables)
                .map(|(&digit, variables)| {
                    dpll_assert_simple!(
                        (digit as usize) < self.alphabet_size,
                        "guess {guess} uses a symbol outside of the alphabet"
                    );
                    Literal::positive(variables[digit as usize])
                })
                .collect::<Vec<_>>();

            formula.extend(exactly_k(&matches, guess.num_correct));
        }

        debug!(
            "Encoded {} guesses over {} positions into {} clauses",
            self.guesses.len(),
            self.num_positions,
            formula.num_clauses()
        );

        EncodedPuzzle {
            formula,
            domain,
            position_variables,
            guesses: self.guesses.clone(),
        }
    }
}

/// The output of [`PuzzleConfiguration::encode`], which also knows how to read a secret back
/// from a solution.
#[derive(Clone, Debug)]
pub struct EncodedPuzzle {
    formula: Formula,
    domain: Domain,
    position_variables: Vec<Vec<Variable>>,
    guesses: Vec<Guess>,
}

impl EncodedPuzzle {
    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// The variable which is true iff the secret has `symbol` at `position`.
    pub fn variable(&self, position: usize, symbol: u8) -> Variable {
        self.position_variables[position][symbol as usize]
    }

    /// Reads the secret from a solution of [`EncodedPuzzle::formula`].
    pub fn decode(&self, solution: &Solution) -> Result<String, DecodeError> {
        self.position_variables
            .iter()
            .enumerate()
            .map(|(position, variables)| {
                let mut symbols = variables
                    .iter()
                    .enumerate()
                    .filter(|(_, variable)| solution.get_value(**variable))
                    .map(|(symbol, _)| symbol);

                match (symbols.next(), symbols.next()) {
                    (Some(symbol), None) => Ok(char::from(b'0' + symbol as u8)),
                    (None, _) => Err(DecodeError::NoSymbolAssigned { position }),
                    (Some(_), Some(_)) => Err(DecodeError::MultipleSymbolsAssigned { position }),
                }
            })
            .collect()
    }

    /// Checks that `answer`, scored against every guess, gives the declared number of correct
    /// digits.
    pub fn verify(&self, answer: &str) -> bool {
        let Ok(candidate) = answer
            .chars()
            .map(|c| c.to_digit(10).map(|digit| digit as u8).ok_or(()))
            .collect::<Result<Vec<_>, _>>()
        else {
            return false;
        };

        candidate.len() == self.position_variables.len()
            && self
                .guesses
                .iter()
                .all(|guess| count_correct_digits(&candidate, guess.digits()) == guess.num_correct)
    }
}

/// The number of positions at which `candidate` and `guess` have the same digit.
pub fn count_correct_digits(candidate: &[u8], guess: &[u8]) -> usize {
    candidate
        .iter()
        .zip(guess)
        .filter(|(left, right)| left == right)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solve;

    #[test]
    fn guesses_are_parsed_from_digits_and_score() {
        assert_eq!(Ok(Guess::new(vec![9, 0, 3, 4, 2], 2)), "90342:2".parse());
        assert_eq!(Ok(Guess::new(vec![0], 0)), " 0:0 ".parse());
    }

    #[test]
    fn malformed_guesses_are_rejected() {
        assert_eq!(
            Err(GuessParseError::MissingScore("90342".to_owned())),
            "90342".parse::<Guess>()
        );
        assert_eq!(
            Err(GuessParseError::InvalidDigit('x')),
            "90x42:1".parse::<Guess>()
        );
        assert_eq!(
            Err(GuessParseError::InvalidScore("two".to_owned())),
            "90342:two".parse::<Guess>()
        );
        assert_eq!(Err(GuessParseError::Empty), ":1".parse::<Guess>());
    }

    #[test]
    fn guess_display_round_trips() {
        let guess = Guess::new(vec![3, 4, 1, 0, 9], 1);

        assert_eq!("34109:1", guess.to_string());
        assert_eq!(Ok(guess.clone()), guess.to_string().parse());
    }

    #[test]
    fn domain_holds_every_position_and_symbol() {
        let puzzle = PuzzleConfiguration::new(3).encode();

        assert_eq!(30, puzzle.domain().len());
        assert_eq!("2:7", puzzle.domain().name(puzzle.variable(2, 7)));
        // Without guesses only the exactly-one constraints remain.
        assert_eq!(3 * (1 + 45), puzzle.formula().num_clauses());
    }

    #[test]
    fn guess_adds_exactly_k_clauses() {
        let puzzle = PuzzleConfiguration::new(5)
            .with_guess(Guess::new(vec![9, 0, 3, 4, 2], 2))
            .encode();

        // C(5, 3) clauses for at most two matches and C(5, 4) for at least two.
        assert_eq!(5 * 46 + 10 + 5, puzzle.formula().num_clauses());
    }

    #[test]
    fn single_fully_correct_guess_is_the_secret() {
        let puzzle = PuzzleConfiguration::new(4)
            .with_guess(Guess::new(vec![8, 0, 1, 5], 4))
            .encode();

        let solution = solve(puzzle.formula(), puzzle.domain()).expect("satisfiable");

        assert_eq!(Ok("8015".to_owned()), puzzle.decode(&solution));
    }

    #[test]
    fn small_alphabet_is_solved() {
        let puzzle = PuzzleConfiguration::new(3)
            .with_alphabet_size(2)
            .with_guess(Guess::new(vec![0, 0, 0], 2))
            .with_guess(Guess::new(vec![0, 1, 1], 0))
            .encode();

        let solution = solve(puzzle.formula(), puzzle.domain()).expect("satisfiable");
        let answer = puzzle.decode(&solution).expect("valid solution");

        assert_eq!("100", answer);
        assert!(puzzle.verify(&answer));
    }

    #[test]
    fn contradicting_guesses_are_unsatisfiable() {
        let puzzle = PuzzleConfiguration::new(2)
            .with_guess(Guess::new(vec![1, 2], 2))
            .with_guess(Guess::new(vec![1, 3], 0))
            .encode();

        assert_eq!(None, solve(puzzle.formula(), puzzle.domain()));
    }

    #[test]
    fn decoding_reports_positions_without_a_symbol() {
        let puzzle = PuzzleConfiguration::new(2).encode();

        let all_false = Solution::new(vec![false; puzzle.domain().len()]);

        assert_eq!(
            Err(DecodeError::NoSymbolAssigned { position: 0 }),
            puzzle.decode(&all_false)
        );
    }

    #[test]
    fn decoding_reports_positions_with_several_symbols() {
        let puzzle = PuzzleConfiguration::new(1).encode();

        let mut values = vec![false; puzzle.domain().len()];
        values[puzzle.variable(0, 3).index()] = true;
        values[puzzle.variable(0, 6).index()] = true;

        assert_eq!(
            Err(DecodeError::MultipleSymbolsAssigned { position: 0 }),
            puzzle.decode(&Solution::new(values))
        );
    }

    #[test]
    fn correct_digits_are_counted_per_position() {
        assert_eq!(2, count_correct_digits(&[3, 9, 5, 4, 2], &[9, 0, 3, 4, 2]));
        assert_eq!(0, count_correct_digits(&[3, 9, 5, 4, 2], &[7, 0, 7, 9, 4]));
    }

    #[test]
    fn verification_rejects_wrong_answers() {
        let puzzle = PuzzleConfiguration::new(2)
            .with_guess(Guess::new(vec![1, 2], 1))
            .encode();

        assert!(puzzle.verify("13"));
        assert!(!puzzle.verify("12"));
        assert!(!puzzle.verify("1"));
        assert!(!puzzle.verify("1a"));
    }

    #[test]
    #[should_panic]
    fn guess_of_the_wrong_length_is_a_contract_violation() {
        let _ = PuzzleConfiguration::new(3)
            .with_guess(Guess::new(vec![1, 2], 1))
            .encode();
    }
}
