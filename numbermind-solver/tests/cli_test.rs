#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

mod helpers;

use std::path::PathBuf;

use helpers::run_solver;

#[test]
fn built_in_puzzle_is_solved() {
    let output = run_solver(["puzzle"], None);

    assert!(output.success, "{}", output.stderr);
    assert_eq!(vec!["39542"], output.lines);
}

#[test]
fn puzzle_from_command_line_guesses() {
    let output = run_solver(["puzzle", "--length", "3", "-g", "123:3"], None);

    assert!(output.success, "{}", output.stderr);
    assert_eq!(vec!["123"], output.lines);
}

#[test]
fn contradicting_guesses_have_no_solution() {
    let output = run_solver(["puzzle", "--length", "2", "-g", "12:2", "-g", "12:0"], None);

    assert!(output.success, "{}", output.stderr);
    assert_eq!(vec!["No solution found"], output.lines);
}

#[test]
fn guess_of_the_wrong_length_is_an_error() {
    let output = run_solver(["puzzle", "--length", "3", "-g", "1234:1"], None);

    assert!(!output.success);
}

#[test]
fn malformed_guess_is_rejected() {
    let output = run_solver(["puzzle", "-g", "12345"], None);

    assert!(!output.success);
}

#[test]
fn exhausted_decision_budget_is_unknown() {
    let output = run_solver(["puzzle", "--decision-budget", "0"], None);

    assert!(output.success, "{}", output.stderr);
    assert_eq!(vec!["UNKNOWN"], output.lines);
}

#[test]
fn clauses_from_stdin_are_satisfiable() {
    let output = run_solver(["clauses"], Some("a b\n-a\n"));

    assert!(output.success, "{}", output.stderr);
    assert_eq!(vec!["SATISFIABLE", "a=false", "b=true"], output.lines);
}

#[test]
fn clauses_from_stdin_are_unsatisfiable() {
    let output = run_solver(["clauses"], Some("a\n-a\n\nb\n"));

    assert!(output.success, "{}", output.stderr);
    assert_eq!(vec!["UNSATISFIABLE"], output.lines);
}

#[test]
fn clauses_from_file() {
    let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("clauses_from_file.txt");
    std::fs::write(&path, "x -y\ny\n").expect("Failed to write clauses.");

    let output = run_solver(
        ["clauses", path.to_str().expect("temporary path is valid unicode")],
        None,
    );
    std::fs::remove_file(&path).expect("Failed to remove clauses.");

    assert!(output.success, "{}", output.stderr);
    assert_eq!(vec!["SATISFIABLE", "x=true", "y=true"], output.lines);
}

#[test]
fn invalid_literal_is_an_error() {
    let output = run_solver(["clauses"], Some("a --b\n"));

    assert!(!output.success);
}

#[test]
fn missing_file_is_an_error() {
    let output = run_solver(["clauses", "/nonexistent/clauses.txt"], None);

    assert!(!output.success);
}
