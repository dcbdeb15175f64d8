//! `l2fwdctl`-flavored presets for the [`tracing`] framework.
//!
//! Diagnostics go to standard error, so standard output carries only the exchange transcript.

use tracing::metadata::LevelFilter;
use tracing_subscriber::prelude::*;

/// Builder of `l2fwdctl`-flavor tracing configuration.
#[derive(Debug, Clone, Default)]
pub struct Builder {
    quiet: bool,
    verbose: bool,
    color: bool,
}
impl Builder {
    /// Creates a new [`Builder`] instance with default settings.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether only errors are logged.
    #[inline]
    pub fn quiet(&mut self, val: bool) -> &mut Self {
        self.quiet = val;
        self
    }

    /// Sets whether console output is verbose for the logger.
    #[inline]
    pub fn verbose(&mut self, val: bool) -> &mut Self {
        self.verbose = val;
        self
    }

    /// Sets whether colorful console output is enabled for the logger.
    #[inline]
    pub fn color(&mut self, val: bool) -> &mut Self {
        self.color = val;
        self
    }

    /// Returns the most verbose level this configuration lets through.
    pub fn level_filter(&self) -> LevelFilter {
        match (self.quiet, self.verbose) {
            (true, _) => LevelFilter::ERROR,
            (false, true) => LevelFilter::TRACE,
            (false, false) => LevelFilter::INFO,
        }
    }

    /// Initializes the logger.
    #[inline]
    pub fn init(&mut self) {
        let stdio_layer = tracing_subscriber::fmt::layer()
            .without_time()
            .with_ansi(self.color)
            .with_file(false)
            .with_writer(std::io::stderr)
            .with_target(self.verbose)
            .with_filter(self.level_filter());

        tracing_subscriber::registry().with(stdio_layer).init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_filter() {
        assert_eq!(Builder::new().level_filter(), LevelFilter::INFO);
        assert_eq!(
            Builder::new().verbose(true).level_filter(),
            LevelFilter::TRACE
        );
        assert_eq!(
            Builder::new().verbose(true).quiet(true).level_filter(),
            LevelFilter::ERROR
        );
    }
}
