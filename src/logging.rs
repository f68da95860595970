//! Process-wide logger setup.

use env_logger::{Builder, Target};

/// Initializes `env_logger` with the given filter, writing to stderr.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(filter: &str) {
    let result = Builder::new()
        .parse_filters(filter)
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init();

    if result.is_ok() {
        log::debug!("logging initialized with filter {filter:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_does_not_panic() {
        init("warn");
        init("debug");
    }
}
