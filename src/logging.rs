//! Logger setup for the rotmin binary

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use crate::cli::Verbosity;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Map a verbosity level to the log filter it enables
pub fn level_for(verbosity: Verbosity) -> log::LevelFilter {
    match verbosity {
        Verbosity::Quiet => log::LevelFilter::Error,
        Verbosity::Normal => log::LevelFilter::Warn,
        Verbosity::Verbose => log::LevelFilter::Debug,
        Verbosity::VeryVerbose => log::LevelFilter::Trace,
    }
}

/// Initialize the logger with elapsed-time formatting.
///
/// Output format: [HH:MM:SS] LEVEL: message
/// All output goes to stderr so stdout carries only results.
pub fn init_logger(verbosity: Verbosity) {
    let start = *START_TIME.get_or_init(Instant::now);

    let result = env_logger::Builder::from_default_env()
        .filter_level(level_for(verbosity))
        .format(move |buf, record| {
            let elapsed = start.elapsed().as_secs();
            writeln!(
                buf,
                "[{:02}:{:02}:{:02}] {}: {}",
                elapsed / 3600,
                (elapsed % 3600) / 60,
                elapsed % 60,
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .try_init();

    if result.is_err() {
        log::debug!("Logger already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping() {
        assert_eq!(level_for(Verbosity::Quiet), log::LevelFilter::Error);
        assert_eq!(level_for(Verbosity::Normal), log::LevelFilter::Warn);
        assert_eq!(level_for(Verbosity::Verbose), log::LevelFilter::Debug);
        assert_eq!(level_for(Verbosity::VeryVerbose), log::LevelFilter::Trace);
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logger(Verbosity::Normal);
        init_logger(Verbosity::Verbose);
    }
}
