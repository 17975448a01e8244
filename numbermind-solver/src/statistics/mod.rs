//! Logging of solver statistics with a configurable prefix, closing line and casing.
mod statistic_logger;
mod statistic_logging;

pub use statistic_logger::StatisticLogger;
pub use statistic_logging::configure_statistic_logging;
pub use statistic_logging::log_statistic;
pub use statistic_logging::log_statistic_postfix;
pub use statistic_logging::should_log_statistics;

/// A value which can be logged through a [`StatisticLogger`].
///
/// See [`create_statistics_struct!`] for creating a struct of statistics.
pub trait Statistic {
    fn log(&self, statistic_logger: StatisticLogger);
}

impl Statistic for u64 {
    fn log(&self, statistic_logger: StatisticLogger) {
        statistic_logger.log_statistic(self);
    }
}

impl Statistic for usize {
    fn log(&self, statistic_logger: StatisticLogger) {
        statistic_logger.log_statistic(self);
    }
}

/// Generates a struct of statistics; logging it logs every field, with the field name appended
/// to the prefix of the logger.
///
/// # Example
/// ```rust
/// # use numbermind_solver::create_statistics_struct;
/// create_statistics_struct!(Statistics {
///     number_of_calls: u64
/// });
///
/// let statistics = Statistics::default();
///
/// assert_eq!(statistics.number_of_calls, 0);
/// ```
#[macro_export]
macro_rules! create_statistics_struct {
    ($(#[$struct_documentation:meta])* $name:ident { $($(#[$variable_documentation:meta])* $field:ident : $type:ident),+ $(,)? }) => {
        $(#[$struct_documentation])*
        #[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
        pub struct $name {
            $($(#[$variable_documentation])* pub $field: $type),+
        }

        impl $crate::statistics::Statistic for $name {
            fn log(&self, statistic_logger: $crate::statistics::StatisticLogger) {
                $($crate::statistics::Statistic::log(
                    &self.$field,
                    statistic_logger.attach_to_prefix(stringify!($field)),
                );)+
            }
        }
    };
}
