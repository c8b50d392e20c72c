use super::{severity::concat, LeveledLogger, LogFacade, SeverityLogger};
use crate::LevelName;
use std::fmt::Display;

/// Implements [`SeverityLogger`] by writing to a wrapped [`LeveledLogger`].
///
/// See the [module documentation](crate::grpc) for how severities and verbosity are mapped.
///
/// The configured level name is not validated; a name other than
/// `TRACE`, `DEBUG` or `INFO` simply disables all verbosity levels.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Debug)]
pub struct GrpcLogger<L> {
    level: String,
    logger: L,
}
impl<L: LeveledLogger> GrpcLogger<L> {
    /// Wraps `logger`; `level` is the configured minimum level name, like `"DEBUG"`.
    #[must_use]
    pub fn new<S: Into<String>>(level: S, logger: L) -> Self {
        Self {
            level: level.into(),
            logger,
        }
    }

    /// The configured minimum level name.
    #[must_use]
    pub fn level(&self) -> &str {
        &self.level
    }

    /// The wrapped logger.
    #[must_use]
    pub fn logger(&self) -> &L {
        &self.logger
    }
}
impl GrpcLogger<LogFacade> {
    /// Writes to the `log` crate facade, with target [`DEFAULT_TARGET`](crate::grpc::DEFAULT_TARGET).
    #[must_use]
    pub fn from_log_facade<S: Into<String>>(level: S) -> Self {
        Self::new(level, LogFacade::new())
    }
}

impl<L: LeveledLogger> SeverityLogger for GrpcLogger<L> {
    // gRPC's info is rather what others call trace
    fn info(&self, args: &[&dyn Display]) {
        self.logger.trace(&concat(args));
    }

    fn warning(&self, args: &[&dyn Display]) {
        self.logger.warn(&concat(args));
    }

    fn error(&self, args: &[&dyn Display]) {
        self.logger.error(&concat(args));
    }

    fn fatal(&self, args: &[&dyn Display]) {
        self.logger.error(&concat(args));
    }

    fn v(&self, level: i32) -> bool {
        match LevelName::parse_lenient(&self.level) {
            Some(LevelName::Trace) => true,
            Some(LevelName::Debug) => level < 2,
            Some(LevelName::Info) => level < 1,
            _ => false,
        }
    }
}
