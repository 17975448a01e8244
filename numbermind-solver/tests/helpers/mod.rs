use std::io::Read;
use std::io::Write;
use std::process::Command;
use std::process::Stdio;
use std::time::Duration;

use wait_timeout::ChildExt;

#[derive(Debug)]
pub(crate) struct SolverOutput {
    pub(crate) success: bool,
    /// The lines written to stdout, without the `c ` comment lines.
    pub(crate) lines: Vec<String>,
    pub(crate) stderr: String,
}

pub(crate) fn run_solver<'a>(
    args: impl IntoIterator<Item = &'a str>,
    input: Option<&str>,
) -> SolverOutput {
    const TEST_TIMEOUT: Duration = Duration::from_secs(60);

    let mut command = Command::new(env!("CARGO_BIN_EXE_numbermind-solver"));
    for arg in args {
        let _ = command.arg(arg);
    }

    let mut child = command
        .stdin(if input.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run solver.");

    if let Some(input) = input {
        let mut stdin = child.stdin.take().expect("stdin is piped");
        stdin
            .write_all(input.as_bytes())
            .expect("Failed to write to solver.");
    }

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs()),
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting solver: {e}"),
    };

    let mut stdout = String::new();
    let _ = child
        .stdout
        .take()
        .expect("stdout is piped")
        .read_to_string(&mut stdout)
        .expect("Failed to read solver output.");

    let mut stderr = String::new();
    let _ = child
        .stderr
        .take()
        .expect("stderr is piped")
        .read_to_string(&mut stderr)
        .expect("Failed to read solver errors.");

    SolverOutput {
        success: status.success(),
        lines: stdout
            .lines()
            .filter(|line| !line.starts_with("c "))
            .map(str::to_owned)
            .collect(),
        stderr,
    }
}
