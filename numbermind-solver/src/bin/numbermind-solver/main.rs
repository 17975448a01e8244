mod os_signal_termination;
mod result;

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use log::debug;
use log::error;
use log::info;
use log::warn;
use log::Level;
use log::LevelFilter;
use numbermind_solver::encoders::Guess;
use numbermind_solver::encoders::PuzzleConfiguration;
use numbermind_solver::parsers::parse_clauses;
use numbermind_solver::statistics::configure_statistic_logging;
use numbermind_solver::termination::Combinator;
use numbermind_solver::termination::DecisionBudget;
use numbermind_solver::termination::TerminationCondition;
use numbermind_solver::DpllSolver;
use numbermind_solver::SatisfactionResult;
use os_signal_termination::OsSignal;
use result::NumberMindError;
use result::NumberMindResult;

/// The guesses solved when none are given on the command line.
const DEFAULT_GUESSES: [&str; 6] = [
    "90342:2", "70794:0", "39458:2", "34109:1", "51545:2", "12531:1",
];

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enables log message output from the solver.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", global = true, verbatim_doc_comment)]
    verbose: bool,

    /// Enables logging of statistics from the solver.
    ///
    /// Possible values: bool
    #[arg(
        short = 's',
        long = "log-statistics",
        global = true,
        verbatim_doc_comment
    )]
    log_statistics: bool,

    /// The maximum number of case splits the solver may make. When it is reached before the
    /// search concludes, the result is "UNKNOWN".
    ///
    /// Possible values: u64
    #[arg(long = "decision-budget", global = true, verbatim_doc_comment)]
    decision_budget: Option<u64>,

    /// If `--verbose` is enabled then this option removes the timestamp information from the log
    /// messages.
    ///
    /// Possible values: bool
    #[arg(long = "omit-timestamp", global = true, verbatim_doc_comment)]
    omit_timestamp: bool,

    /// If `--verbose` is enabled then this option removes the call site information from the log
    /// messages. The call site is the file and line from which the message originated.
    ///
    /// Possible values: bool
    #[arg(long = "omit-call-site", global = true, verbatim_doc_comment)]
    omit_call_site: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Finds the secret digit string of a Number Mind puzzle.
    Puzzle {
        /// The number of digits of the secret.
        #[arg(short = 'l', long = "length", default_value_t = 5)]
        length: usize,

        /// A guess followed by the number of digits it has in the correct position, e.g.
        /// `--guess 90342:2`. May be repeated. Without any guess, a built-in puzzle with five
        /// digits is solved.
        #[arg(short = 'g', long = "guess", verbatim_doc_comment)]
        guesses: Vec<Guess>,
    },
    /// Decides a formula given as clauses, one per line, with literals separated by whitespace
    /// and negated by a leading '-'. Reading stops at the first blank line.
    Clauses {
        /// The file to read the clauses from; standard input when absent.
        path: Option<PathBuf>,
    },
}

fn configure_logging(
    verbose: bool,
    log_statistics: bool,
    omit_timestamp: bool,
    omit_call_site: bool,
) {
    if log_statistics {
        configure_statistic_logging("c STAT", None, None, None);
    }

    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "c ")?;
            if record.level() != Level::Info && !omit_timestamp {
                write!(buf, "{} ", buf.timestamp())?;
            }
            write!(buf, "{} ", record.level())?;
            if record.level() != Level::Info && !omit_call_site {
                write!(
                    buf,
                    "[{}:{}] ",
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0)
                )?;
            }
            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> NumberMindResult<()> {
    let args = Args::parse();

    configure_logging(
        args.verbose,
        args.log_statistics,
        args.omit_timestamp,
        args.omit_call_site,
    );

    let mut termination = Combinator::new(
        OsSignal::install()?,
        args.decision_budget.map(DecisionBudget::new),
    );
    let mut solver = DpllSolver::default();

    match args.command {
        Command::Puzzle { length, guesses } => {
            solve_puzzle(&mut solver, &mut termination, length, guesses)?
        }
        Command::Clauses { path } => match path {
            Some(path) => solve_clauses(
                &mut solver,
                &mut termination,
                BufReader::new(File::open(path)?),
            )?,
            None => solve_clauses(&mut solver, &mut termination, std::io::stdin().lock())?,
        },
    }

    solver.log_statistics();
    Ok(())
}

fn solve_puzzle(
    solver: &mut DpllSolver,
    termination: &mut impl TerminationCondition,
    length: usize,
    guesses: Vec<Guess>,
) -> NumberMindResult<()> {
    let guesses = if guesses.is_empty() {
        DEFAULT_GUESSES
            .iter()
            .filter_map(|guess| guess.parse().ok())
            .collect()
    } else {
        guesses
    };

    let mut configuration = PuzzleConfiguration::new(length);
    for guess in guesses {
        if guess.digits().len() != length {
            return Err(NumberMindError::GuessLength {
                guess: guess.to_string(),
                actual: guess.digits().len(),
                expected: length,
            });
        }
        configuration.add_guess(guess);
    }

    let puzzle = configuration.encode();

    match solver.satisfy(puzzle.formula(), puzzle.domain(), termination) {
        SatisfactionResult::Satisfiable(solution) => {
            let answer = puzzle.decode(&solution)?;
            if puzzle.verify(&answer) {
                debug!("{answer} agrees with every guess");
            } else {
                warn!("{answer} does not agree with every guess");
            }
            println!("{answer}");
        }
        SatisfactionResult::Unsatisfiable => println!("No solution found"),
        SatisfactionResult::Unknown => println!("UNKNOWN"),
    }

    Ok(())
}

fn solve_clauses(
    solver: &mut DpllSolver,
    termination: &mut impl TerminationCondition,
    source: impl BufRead,
) -> NumberMindResult<()> {
    let (formula, domain) = parse_clauses(source)?;

    match solver.satisfy(&formula, &domain, termination) {
        SatisfactionResult::Satisfiable(solution) => {
            println!("SATISFIABLE");
            for (variable, value) in solution.iter() {
                println!("{}={value}", domain.name(variable));
            }
        }
        SatisfactionResult::Unsatisfiable => println!("UNSATISFIABLE"),
        SatisfactionResult::Unknown => println!("UNKNOWN"),
    }

    Ok(())
}
