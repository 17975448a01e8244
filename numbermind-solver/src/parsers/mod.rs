//! Reading formulas from text.
//!
//! The format is line based: every line is one clause, its literals separated by whitespace.
//! A literal is a variable name, negated by a leading `-`:
//!
//! ```text
//! a -b c
//! -a
//! b
//! ```
//!
//! Reading stops at the first blank line or at the end of the input. Variables are added to the
//! domain in the order in which they first appear.
use std::io::BufRead;

use thiserror::Error;

use crate::formula::Clause;
use crate::formula::Domain;
use crate::formula::Formula;
use crate::formula::Literal;

#[derive(Debug, Error)]
pub enum ClauseParseError {
    #[error("failed to read the clauses")]
    Io(#[from] std::io::Error),

    #[error("'{token}' on line {line} is not a valid literal")]
    InvalidLiteral { token: String, line: usize },
}

/// Reads clauses from `source` into a formula and the domain of its variables.
pub fn parse_clauses(source: impl BufRead) -> Result<(Formula, Domain), ClauseParseError> {
    let mut domain = Domain::default();
    let mut formula = Formula::default();

    for (line_index, line) in source.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }

        let clause = line
            .split_whitespace()
            .map(|token| {
                parse_literal(token, &mut domain).ok_or_else(|| ClauseParseError::InvalidLiteral {
                    token: token.to_owned(),
                    line: line_index + 1,
                })
            })
            .collect::<Result<Clause, _>>()?;

        formula.add_clause(clause);
    }

    Ok((formula, domain))
}

fn parse_literal(token: &str, domain: &mut Domain) -> Option<Literal> {
    let (name, is_positive) = match token.strip_prefix('-') {
        Some(name) => (name, false),
        None => (token, true),
    };

    if name.is_empty() || name.starts_with('-') {
        return None;
    }

    Some(Literal::new(domain.new_variable(name), is_positive))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clauses_and_domain_are_read_in_order() {
        let (formula, domain) = parse_clauses("b -a\n-b\na c\n".as_bytes()).expect("valid input");

        assert_eq!(
            vec!["b", "a", "c"],
            domain.iter().map(|v| domain.name(v)).collect::<Vec<_>>()
        );
        assert_eq!(3, formula.num_clauses());
        assert_eq!("b -a", domain.named_clause(&formula.clauses()[0]).to_string());
        assert_eq!("-b", domain.named_clause(&formula.clauses()[1]).to_string());
    }

    #[test]
    fn blank_line_ends_the_input() {
        let (formula, domain) = parse_clauses("x y\n\nz\n".as_bytes()).expect("valid input");

        assert_eq!(1, formula.num_clauses());
        assert_eq!(None, domain.get("z"));
    }

    #[test]
    fn empty_input_gives_the_empty_formula() {
        let (formula, domain) = parse_clauses("".as_bytes()).expect("valid input");

        assert!(formula.is_empty());
        assert!(domain.is_empty());
    }

    #[test]
    fn lone_and_double_negations_are_rejected() {
        for input in ["a -\n", "a\n--b\n"] {
            let error = parse_clauses(input.as_bytes()).expect_err("invalid literal");

            assert!(matches!(error, ClauseParseError::InvalidLiteral { .. }));
        }

        let error = parse_clauses("a\n--b\n".as_bytes()).expect_err("invalid literal");
        assert_eq!("'--b' on line 2 is not a valid literal", error.to_string());
    }
}
