//! crates/logger/src/logger.rs
//! The installed `log::Log` implementation and its severity dispatch.

use std::io::{self, Write as _};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{SystemTime, UNIX_EPOCH};

use config::ConfigurationDescription;
use log::{LevelFilter, Log, Metadata, Record};
use spec::Severity;

use crate::render::render_record;

/// Logger driven by a swappable [`ConfigurationDescription`].
///
/// The description sits behind a lock so a reset-then-apply can replace the
/// configuration of the logger that is already installed on the facade; the
/// facade itself only accepts one logger per process.
#[derive(Debug)]
pub(crate) struct EnvLogger {
    description: RwLock<ConfigurationDescription>,
}

impl EnvLogger {
    pub(crate) fn new(description: ConfigurationDescription) -> Self {
        Self {
            description: RwLock::new(description),
        }
    }

    /// Replaces the active configuration.
    pub(crate) fn swap(&self, description: ConfigurationDescription) {
        let mut active = self
            .description
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *active = description;
    }

    fn emits(&self, metadata: &Metadata<'_>) -> bool {
        let record_severity = record_severity(metadata.level());
        let description = self
            .description
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        record_severity.rank() >= description.effective_severity(metadata.target()).rank()
    }
}

impl Log for EnvLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.emits(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        if !self.emits(record.metadata()) {
            return;
        }

        let rendered = {
            let description = self
                .description
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            render_record(
                description.handler(),
                epoch_seconds(),
                record_severity(record.level()),
                record.target(),
                &record.args().to_string(),
            )
        };

        // Write failures cannot be surfaced from the facade; drop them.
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{rendered}");
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Shared handle handed to the facade; the applicator keeps the other end.
#[derive(Debug)]
pub(crate) struct SharedLogger(Arc<EnvLogger>);

impl SharedLogger {
    pub(crate) const fn new(logger: Arc<EnvLogger>) -> Self {
        Self(logger)
    }
}

impl Log for SharedLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.0.enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        self.0.log(record);
    }

    fn flush(&self) {
        self.0.flush();
    }
}

/// Maps a facade record level to its severity.
///
/// Trace records share the debug rank, mirroring the level table where the
/// `trace` spelling maps to the debug severity.
pub(crate) const fn record_severity(level: log::Level) -> Severity {
    match level {
        log::Level::Error => Severity::Error,
        log::Level::Warn => Severity::Warning,
        log::Level::Info => Severity::Info,
        log::Level::Debug | log::Level::Trace => Severity::Debug,
    }
}

/// The loosest facade filter that still admits every configured severity.
pub(crate) fn max_level_filter(description: &ConfigurationDescription) -> LevelFilter {
    description
        .loggers()
        .iter()
        .map(|logger| severity_filter(logger.severity()))
        .fold(severity_filter(description.default_severity()), |a, b| {
            a.max(b)
        })
}

/// Maps a severity threshold to the facade filter that admits it.
///
/// The debug severity admits trace records as well (both share rank 10), and
/// the critical severity admits nothing the facade can express.
const fn severity_filter(severity: Severity) -> LevelFilter {
    match severity {
        Severity::Debug => LevelFilter::Trace,
        Severity::Info => LevelFilter::Info,
        Severity::Warning => LevelFilter::Warn,
        Severity::Error => LevelFilter::Error,
        Severity::Critical => LevelFilter::Off,
    }
}

fn epoch_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}
