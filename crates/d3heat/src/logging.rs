//! Verbosity-integer logging setup.
//!
//! The public API carries a 0–5 verbosity level in its config objects.
//! This maps it onto a `tracing_subscriber::fmt` subscriber.

use tracing::level_filters::LevelFilter;

/// Map a 0–5 verbosity integer to a tracing level filter.
///
/// 0: off, 1: error, 2: warn, 3: info, 4: debug, 5+: trace.
pub fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::OFF,
        1 => LevelFilter::ERROR,
        2 => LevelFilter::WARN,
        3 => LevelFilter::INFO,
        4 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install a global fmt subscriber at the given verbosity.
///
/// Safe to call more than once: only the first call installs a subscriber,
/// later calls (and calls from tests running in one process) are no-ops.
pub fn init(verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_filter(verbose))
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_expected_levels() {
        assert_eq!(level_filter(0), LevelFilter::OFF);
        assert_eq!(level_filter(2), LevelFilter::WARN);
        assert_eq!(level_filter(3), LevelFilter::INFO);
        assert_eq!(level_filter(9), LevelFilter::TRACE);
    }

    #[test]
    fn double_init_does_not_panic() {
        init(3);
        init(5);
    }
}
