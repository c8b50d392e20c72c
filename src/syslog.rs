//! Routes log lines to the syslog, with a priority taken from the line's level tag.
//!
//! [`SyslogRouter`] is a byte sink (it implements `std::io::Write`) that expects
//! one formatted log line per write, with a bracketed level tag like `[WARN]`.
//! It removes the tag and everything in front of it,
//! and passes the rest to a [`SyslogClient`] with the priority
//! that [`priority_for`] assigns to the tag.
//!
//! The crate provides [`PosixSyslog`], which uses the `syslog` function of the C library,
//! with optional crate feature `syslog_call`.
//! Any other client, e.g. one that sends to a remote syslog, can be plugged in by implementing
//! [`SyslogClient`].
//!
//! ```rust,ignore
//! use log_shims::syslog::{PosixSyslog, SyslogFacility, SyslogRouter};
//! use std::io::Write;
//!
//! let mut router = SyslogRouter::new(PosixSyslog::try_new("my_prog", SyslogFacility::LocalUse0)?);
//! router.write_all(b"[WARN] disk low")?;  // syslog gets "disk low" with priority warning
//! ```

mod client;
#[cfg(all(unix, feature = "syslog_call"))]
#[cfg_attr(docsrs, doc(cfg(all(unix, feature = "syslog_call"))))]
mod posix;
mod router;
mod severity;
mod tag;

pub use self::{
    client::SyslogClient,
    router::SyslogRouter,
    severity::{level_priority, priority_for, SyslogSeverity, DEFAULT_PRIORITY},
    tag::extract_level_tag,
};

#[cfg(all(unix, feature = "syslog_call"))]
#[cfg_attr(docsrs, doc(cfg(all(unix, feature = "syslog_call"))))]
pub use self::posix::{PosixSyslog, SyslogFacility};
