//! Exposes the gRPC-style logging contract on top of a leveled logger.
//!
//! The gRPC logging contract ([`SeverityLogger`]) knows four severities
//! (info, warning, error, fatal), each in a plain, an `ln` and an `f` flavor,
//! plus an integer verbosity predicate [`SeverityLogger::v`].
//! Typical leveled loggers, like the `log` crate, know `trace`, `debug`, `info`, `warn` and `error`
//! instead. [`GrpcLogger`] bridges the two:
//!
//! | gRPC severity | leveled logger |
//! |---------------|----------------|
//! | info          | trace          |
//! | warning       | warn           |
//! | error         | error          |
//! | fatal         | error          |
//!
//! gRPC's info messages are chatty, hence they are downgraded to `trace`.
//! Fatal messages are only logged; terminating the process is the caller's business.
//!
//! The verbosity predicate is derived from the configured minimum level name:
//!
//! | configured level | `v(l)`   |
//! |------------------|----------|
//! | `TRACE`          | `true`   |
//! | `DEBUG`          | `l < 2`  |
//! | `INFO`           | `l < 1`  |
//! | anything else    | `false`  |
//!
//! ```rust
//! use log_shims::grpc::{GrpcLogger, SeverityLogger};
//!
//! let grpc_logger = GrpcLogger::from_log_facade("DEBUG");
//! if grpc_logger.v(1) {
//!     grpc_logger.infof(format_args!("channel {} connected", 7));
//! }
//! grpc_logger.warning(&[&"transport closed: ", &"EOF"]);
//! ```

mod bridge;
mod leveled;
mod severity;

pub use self::{
    bridge::GrpcLogger,
    leveled::{LeveledLogger, LogFacade, DEFAULT_TARGET},
    severity::SeverityLogger,
};

/// Logs to [`SeverityLogger::infof`], with `format!`-style arguments.
#[macro_export]
macro_rules! grpc_info {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::grpc::SeverityLogger as _;
        $logger.infof(format_args!($($arg)*))
    }};
}

/// Logs to [`SeverityLogger::warningf`], with `format!`-style arguments.
#[macro_export]
macro_rules! grpc_warning {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::grpc::SeverityLogger as _;
        $logger.warningf(format_args!($($arg)*))
    }};
}

/// Logs to [`SeverityLogger::errorf`], with `format!`-style arguments.
#[macro_export]
macro_rules! grpc_error {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::grpc::SeverityLogger as _;
        $logger.errorf(format_args!($($arg)*))
    }};
}

/// Logs to [`SeverityLogger::fatalf`], with `format!`-style arguments.
///
/// Does not terminate the process.
#[macro_export]
macro_rules! grpc_fatal {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::grpc::SeverityLogger as _;
        $logger.fatalf(format_args!($($arg)*))
    }};
}
