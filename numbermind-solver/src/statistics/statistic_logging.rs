use std::fmt::Display;
use std::io::stdout;
use std::io::Write;
use std::sync::OnceLock;
use std::sync::RwLock;

use convert_case::Case;
use convert_case::Casing;
use log::debug;

struct StatisticOptions {
    // Printed before every statistic, which is written as `{PREFIX} {NAME}={VALUE}`
    statistic_prefix: &'static str,
    // Printed once after all statistics have been written
    after_statistics: Option<&'static str>,
    statistics_casing: Option<Case>,
    statistics_writer: Box<dyn Write + Send + Sync>,
}

static STATISTIC_OPTIONS: OnceLock<RwLock<StatisticOptions>> = OnceLock::new();

/// Configures the logging of statistics. Until this is called, statistics are not logged at all.
/// Only the first call has an effect.
///
/// When no writer is given, statistics are written to stdout.
pub fn configure_statistic_logging(
    prefix: &'static str,
    after: Option<&'static str>,
    casing: Option<Case>,
    writer: Option<Box<dyn Write + Send + Sync>>,
) {
    let _ = STATISTIC_OPTIONS.get_or_init(|| {
        RwLock::from(StatisticOptions {
            statistic_prefix: prefix,
            after_statistics: after,
            statistics_casing: casing,
            statistics_writer: writer.unwrap_or(Box::new(stdout())),
        })
    });
}

/// Logs the statistic `name` with value `value` in the format `PREFIX NAME=VALUE`.
pub fn log_statistic(name: impl Display, value: impl Display) {
    if let Some(statistic_options_lock) = STATISTIC_OPTIONS.get() {
        if let Ok(mut statistic_options) = statistic_options_lock.write() {
            let line = format_statistic(
                statistic_options.statistic_prefix,
                name,
                value,
                statistic_options.statistics_casing,
            );
            if let Err(e) = writeln!(statistic_options.statistics_writer, "{line}") {
                debug!("Could not write statistic: {e}")
            };
        }
    }
}

/// Logs the closing line of a block of statistics, if one has been configured.
pub fn log_statistic_postfix() {
    if let Some(statistic_options_lock) = STATISTIC_OPTIONS.get() {
        if let Ok(mut statistic_options) = statistic_options_lock.write() {
            if let Some(post_fix) = statistic_options.after_statistics {
                if let Err(e) = writeln!(statistic_options.statistics_writer, "{post_fix}") {
                    debug!("Could not write statistic: {e}");
                }
            }
        }
    }
}

pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS.get().is_some()
}

fn format_statistic(
    prefix: &str,
    name: impl Display,
    value: impl Display,
    casing: Option<Case>,
) -> String {
    let name = match casing {
        Some(casing) => name.to_string().to_case(casing),
        None => name.to_string(),
    };
    format!("{prefix} {name}={value}")
}
