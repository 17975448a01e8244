use std::fmt::Display;

use itertools::Itertools;

use super::statistic_logging::log_statistic;

/// Logs statistics under a prefix; nested statistics extend the prefix with their own name.
#[derive(Debug, Default, Clone)]
pub struct StatisticLogger {
    name_prefix: String,
}

impl StatisticLogger {
    pub fn new<Input: IntoIterator<Item = impl Display>>(name_prefix: Input) -> Self {
        Self {
            name_prefix: name_prefix.into_iter().join("_"),
        }
    }

    /// Returns a new [`StatisticLogger`] whose prefix is the current one followed by
    /// `addition_to_prefix`.
    pub fn attach_to_prefix(&self, addition_to_prefix: impl Display) -> Self {
        Self {
            name_prefix: format!("{}_{}", self.name_prefix, addition_to_prefix),
        }
    }

    pub fn name_prefix(&self) -> &str {
        &self.name_prefix
    }

    pub fn log_statistic(&self, value: impl Display) {
        log_statistic(&self.name_prefix, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_joined_with_underscores() {
        let logger = StatisticLogger::new(["dpll", "solver"]);

        assert_eq!("dpll_solver", logger.name_prefix());
        assert_eq!(
            "dpll_solver_num_decisions",
            logger.attach_to_prefix("num_decisions").name_prefix()
        );
    }
}
