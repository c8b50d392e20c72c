// only enables the `doc_cfg` feature when the `docsrs` configuration attribute is defined
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
//! Two small adapters for plugging existing logging machinery together.
//!
//! * The module [`grpc`] contains [`GrpcLogger`](crate::grpc::GrpcLogger),
//!   which exposes the gRPC-style logging contract
//!   (severities info/warning/error/fatal plus an integer verbosity predicate)
//!   on top of any [`LeveledLogger`](crate::grpc::LeveledLogger),
//!   e.g. the `log` crate facade.
//!
//! * The module [`syslog`] contains [`SyslogRouter`](crate::syslog::SyslogRouter),
//!   a byte sink that reads a bracketed level tag like `[WARN]` from each log line
//!   and hands the rest of the line to a [`SyslogClient`](crate::syslog::SyslogClient)
//!   at the matching syslog priority.
//!
//! * [`LineLogger`] is a `log::Log` implementation that renders records as
//!   `"<timestamp> [LEVEL] target: message"` lines into any writer, so that
//!   the `log` facade can feed the router:
//!
//! ```rust,ignore
//! use log_shims::{syslog::SyslogRouter, LineLogger};
//!
//! let router = SyslogRouter::new(my_syslog_client);
//! LineLogger::builder(router)
//!     .max_level(log::LevelFilter::Debug)
//!     .start()
//!     .unwrap();
//! log::warn!("disk low");   // ends up in the syslog with priority `warning`
//! ```
//!
//! Neither adapter decides levels, buffers, retries or terminates the process;
//! that is left to the wrapped collaborators and to the caller.

mod level;
mod line_logger;
mod shim_error;
mod util;

pub mod grpc;
pub mod syslog;

pub use crate::level::LevelName;
pub use crate::line_logger::{LineLogger, LineLoggerBuilder};
pub use crate::shim_error::ShimError;

/// Re-exports from log crate
pub use log::{Level, LevelFilter};
