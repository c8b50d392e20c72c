use std::fmt::{self, Display, Write};

/// The gRPC-style logging contract: four severities, each in three flavors,
/// plus a verbosity predicate.
///
/// The plain methods take a list of values that are concatenated without separator,
/// e.g. `logger.error(&[&"connection ", &id, &" failed"])`.
/// The `ln` methods concatenate the same way and then delegate to the plain method;
/// they do not add a line terminator.
/// The `f` methods format their arguments and then delegate to the plain method.
///
/// Only the plain methods and [`v`](SeverityLogger::v) need to be implemented.
#[allow(clippy::module_name_repetitions)]
pub trait SeverityLogger {
    /// Logs with severity info.
    fn info(&self, args: &[&dyn Display]);

    /// Logs with severity warning.
    fn warning(&self, args: &[&dyn Display]);

    /// Logs with severity error.
    fn error(&self, args: &[&dyn Display]);

    /// Logs with severity fatal.
    ///
    /// Callers of this contract terminate the process after a fatal message;
    /// implementations only log.
    fn fatal(&self, args: &[&dyn Display]);

    /// Reports whether logging at verbosity level `level` is enabled.
    fn v(&self, level: i32) -> bool;

    /// Logs with severity info, arguments concatenated.
    fn infoln(&self, args: &[&dyn Display]) {
        self.info(&[&concat(args)]);
    }

    /// Logs with severity info, with `format_args!` arguments.
    fn infof(&self, args: fmt::Arguments<'_>) {
        self.info(&[&args]);
    }

    /// Logs with severity warning, arguments concatenated.
    fn warningln(&self, args: &[&dyn Display]) {
        self.warning(&[&concat(args)]);
    }

    /// Logs with severity warning, with `format_args!` arguments.
    fn warningf(&self, args: fmt::Arguments<'_>) {
        self.warning(&[&args]);
    }

    /// Logs with severity error, arguments concatenated.
    fn errorln(&self, args: &[&dyn Display]) {
        self.error(&[&concat(args)]);
    }

    /// Logs with severity error, with `format_args!` arguments.
    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.error(&[&args]);
    }

    /// Logs with severity fatal, arguments concatenated.
    fn fatalln(&self, args: &[&dyn Display]) {
        self.fatal(&[&concat(args)]);
    }

    /// Logs with severity fatal, with `format_args!` arguments.
    fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.fatal(&[&args]);
    }
}

/// Renders the values one after the other, without separator.
pub(crate) fn concat(args: &[&dyn Display]) -> String {
    let mut s = String::new();
    for arg in args {
        // writing into a String can't fail
        let _ = write!(s, "{arg}");
    }
    s
}
