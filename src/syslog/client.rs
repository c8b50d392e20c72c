use super::SyslogSeverity;
use crate::util::io_err;
use std::{
    io::{Result as IoResult, Write},
    rc::Rc,
    sync::{Arc, Mutex},
};

/// The capability [`SyslogRouter`](crate::syslog::SyslogRouter) needs from a syslog client:
/// writing a message with a given priority.
///
/// Every call produces one syslog entry.
#[allow(clippy::module_name_repetitions)]
pub trait SyslogClient {
    /// Writes `msg` to the syslog with priority `severity`.
    ///
    /// # Errors
    ///
    /// `std::io::Error` if the message could not be handed over.
    fn write_level(&self, severity: SyslogSeverity, msg: &[u8]) -> IoResult<()>;
}

macro_rules! forward_syslog_client {
    ($($ptr:ty),*) => {
        $(
            impl<T: SyslogClient + ?Sized> SyslogClient for $ptr {
                fn write_level(&self, severity: SyslogSeverity, msg: &[u8]) -> IoResult<()> {
                    (**self).write_level(severity, msg)
                }
            }
        )*
    };
}
forward_syslog_client!(&T, Box<T>, Rc<T>, Arc<T>);

/// Writes the bare message to the wrapped writer, ignoring the priority.
///
/// Useful for tests, or for a transport that adds its own framing.
impl<W: Write> SyslogClient for Mutex<W> {
    fn write_level(&self, _severity: SyslogSeverity, msg: &[u8]) -> IoResult<()> {
        self.lock()
            .map_err(|_| io_err("SyslogClient is poisoned"))?
            .write_all(msg)
    }
}
