use log::LevelFilter;

/// Installs the stderr logger. `Debug` level carries the scanner and evaluator trace lines;
/// the default `Warn` keeps stderr clear for error reporting.
pub(crate) fn init(verbose: bool) {
    // set_logger only fails if a logger is already installed, in which case the existing one
    // stays in effect.
    let _ = log::set_logger(&StderrLogger);
    log::set_max_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
}

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}
