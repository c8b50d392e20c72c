use std::{rc::Rc, sync::Arc};

/// Target that [`LogFacade::new`] uses for its log records.
pub const DEFAULT_TARGET: &str = "grpc";

/// The capabilities [`GrpcLogger`](crate::grpc::GrpcLogger) needs from the logger it wraps:
/// single, pre-formatted messages at the usual five levels.
///
/// Only `trace`, `warn` and `error` have to be implemented; the bridge never calls
/// `debug` or `info`, which by default fall through to the next more verbose level.
///
/// Implementations decide on their own whether a message is really written;
/// failures are not reported back.
#[allow(clippy::module_name_repetitions)]
pub trait LeveledLogger {
    /// Logs at level trace.
    fn trace(&self, msg: &str);

    /// Logs at level debug.
    ///
    /// Defaults to [`trace`](LeveledLogger::trace).
    fn debug(&self, msg: &str) {
        self.trace(msg);
    }

    /// Logs at level info.
    ///
    /// Defaults to [`debug`](LeveledLogger::debug).
    fn info(&self, msg: &str) {
        self.debug(msg);
    }

    /// Logs at level warn.
    fn warn(&self, msg: &str);

    /// Logs at level error.
    fn error(&self, msg: &str);
}

macro_rules! forward_leveled_logger {
    ($($ptr:ty),*) => {
        $(
            impl<T: LeveledLogger + ?Sized> LeveledLogger for $ptr {
                fn trace(&self, msg: &str) {
                    (**self).trace(msg);
                }
                fn debug(&self, msg: &str) {
                    (**self).debug(msg);
                }
                fn info(&self, msg: &str) {
                    (**self).info(msg);
                }
                fn warn(&self, msg: &str) {
                    (**self).warn(msg);
                }
                fn error(&self, msg: &str) {
                    (**self).error(msg);
                }
            }
        )*
    };
}
forward_leveled_logger!(&T, Box<T>, Rc<T>, Arc<T>);

/// A [`LeveledLogger`] that writes to the `log` crate facade,
/// i.e. to whatever logger the program has installed.
#[derive(Clone, Debug)]
pub struct LogFacade {
    target: String,
}
impl LogFacade {
    /// Logs with target [`DEFAULT_TARGET`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_target(DEFAULT_TARGET)
    }

    /// Logs with the given target, which can then be used in the log specification
    /// of the installed logger.
    #[must_use]
    pub fn with_target<S: Into<String>>(target: S) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// The target of the produced log records.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    fn log(&self, level: log::Level, msg: &str) {
        log::log!(target: self.target.as_str(), level, "{msg}");
    }
}
impl Default for LogFacade {
    fn default() -> Self {
        Self::new()
    }
}
impl LeveledLogger for LogFacade {
    fn trace(&self, msg: &str) {
        self.log(log::Level::Trace, msg);
    }
    fn debug(&self, msg: &str) {
        self.log(log::Level::Debug, msg);
    }
    fn info(&self, msg: &str) {
        self.log(log::Level::Info, msg);
    }
    fn warn(&self, msg: &str) {
        self.log(log::Level::Warn, msg);
    }
    fn error(&self, msg: &str) {
        self.log(log::Level::Error, msg);
    }
}

#[cfg(test)]
mod test {
    use super::LeveledLogger;
    use crate::grpc::{GrpcLogger, SeverityLogger};
    use std::sync::Mutex;

    // implements only what the bridge calls
    #[derive(Default)]
    struct Minimal(Mutex<Vec<String>>);
    impl LeveledLogger for Minimal {
        fn trace(&self, msg: &str) {
            self.0.lock().unwrap().push(format!("trace {msg}"));
        }
        fn warn(&self, msg: &str) {
            self.0.lock().unwrap().push(format!("warn {msg}"));
        }
        fn error(&self, msg: &str) {
            self.0.lock().unwrap().push(format!("error {msg}"));
        }
    }

    #[test]
    fn debug_and_info_fall_through_to_trace() {
        let minimal = Minimal::default();
        minimal.debug("d");
        minimal.info("i");

        let logger = GrpcLogger::new("INFO", &minimal);
        logger.info(&[&"x"]);
        logger.warning(&[&"w"]);
        logger.fatal(&[&"f"]);

        assert_eq!(
            *minimal.0.lock().unwrap(),
            vec!["trace d", "trace i", "trace x", "warn w", "error f"]
        );
    }
}
