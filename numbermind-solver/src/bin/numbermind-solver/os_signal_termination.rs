use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use numbermind_solver::termination::TerminationCondition;

/// A [`TerminationCondition`] which triggers on SIGINT or SIGTERM.
#[derive(Clone, Debug)]
pub(crate) struct OsSignal {
    signal_received: Arc<AtomicBool>,
}

impl OsSignal {
    /// Create the termination condition and register the signal listeners.
    pub(crate) fn install() -> std::io::Result<OsSignal> {
        const TERMINATION_SIGNALS: &[std::ffi::c_int] =
            &[signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM];

        let signal_termination = OsSignal {
            signal_received: Arc::new(AtomicBool::new(false)),
        };

        for &signal in TERMINATION_SIGNALS {
            let _ = signal_hook::flag::register(
                signal,
                Arc::clone(&signal_termination.signal_received),
            )?;
        }

        Ok(signal_termination)
    }
}

impl TerminationCondition for OsSignal {
    fn should_stop(&mut self) -> bool {
        self.signal_received.load(Ordering::Relaxed)
    }
}
