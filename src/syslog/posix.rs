use super::{SyslogClient, SyslogSeverity};
use crate::util::io_err;
use nix::syslog::{openlog, syslog, Facility, LogFlags};
use std::{
    ffi::{CStr, CString, OsStr},
    io::Result as IoResult,
    os::unix::ffi::OsStrExt,
    sync::Mutex,
};

// `openlog` sets ident and facility process-wide, so all `PosixSyslog` instances share this state.
static POSIX_SYSLOG_STATE: Mutex<PosixSyslogState> = Mutex::new(PosixSyslogState {
    idents_stack: vec![],
    opened: None,
});

struct PosixSyslogState {
    // leaked ident strings, for reuse
    idents_stack: Vec<&'static CStr>,
    // what the last `openlog` call was made with
    opened: Option<(&'static CStr, SyslogFacility)>,
}

/// Syslog facility, restricted to the facilities that are available on all unix platforms.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum SyslogFacility {
    /// kernel messages.
    Kernel,
    /// user-level messages.
    UserLevel,
    /// mail system.
    MailSystem,
    /// system daemons.
    SystemDaemons,
    /// security/authorization messages.
    Authorization,
    /// messages generated internally by syslogd.
    SyslogD,
    /// line printer subsystem.
    LinePrinter,
    /// network news subsystem.
    News,
    /// UUCP subsystem.
    Uucp,
    /// local use 0  (local0).
    LocalUse0,
    /// local use 1  (local1).
    LocalUse1,
    /// local use 2  (local2).
    LocalUse2,
    /// local use 3  (local3).
    LocalUse3,
    /// local use 4  (local4).
    LocalUse4,
    /// local use 5  (local5).
    LocalUse5,
    /// local use 6  (local6).
    LocalUse6,
    /// local use 7  (local7).
    LocalUse7,
}
impl SyslogFacility {
    fn to_nix(self) -> Facility {
        match self {
            Self::Kernel => Facility::LOG_KERN,
            Self::UserLevel => Facility::LOG_USER,
            Self::MailSystem => Facility::LOG_MAIL,
            Self::SystemDaemons => Facility::LOG_DAEMON,
            Self::Authorization => Facility::LOG_AUTH,
            Self::SyslogD => Facility::LOG_SYSLOG,
            Self::LinePrinter => Facility::LOG_LPR,
            Self::News => Facility::LOG_NEWS,
            Self::Uucp => Facility::LOG_UUCP,
            Self::LocalUse0 => Facility::LOG_LOCAL0,
            Self::LocalUse1 => Facility::LOG_LOCAL1,
            Self::LocalUse2 => Facility::LOG_LOCAL2,
            Self::LocalUse3 => Facility::LOG_LOCAL3,
            Self::LocalUse4 => Facility::LOG_LOCAL4,
            Self::LocalUse5 => Facility::LOG_LOCAL5,
            Self::LocalUse6 => Facility::LOG_LOCAL6,
            Self::LocalUse7 => Facility::LOG_LOCAL7,
        }
    }
}

/// A [`SyslogClient`] that uses the POSIX-standard [`syslog` C function]
/// of the platform's C library.
///
/// The C library takes care of the transport and of the line header,
/// so this client only contributes the identifier, the facility and the priority.
///
/// Identifier and facility are process-wide settings of the C library;
/// instances with different settings can be mixed, each write re-opens the log if needed.
///
/// Only available on unix, with optional crate feature `syslog_call`.
///
/// [`syslog` C function]: https://pubs.opengroup.org/onlinepubs/9799919799/functions/syslog.html
#[derive(Debug)]
pub struct PosixSyslog {
    ident: String,
    facility: SyslogFacility,
}
impl PosixSyslog {
    /// Logs with the given identifier (usually the program name) and facility.
    ///
    /// # Errors
    ///
    /// `std::io::Error` if `ident` contains a NUL byte.
    pub fn try_new<S: Into<String>>(ident: S, facility: SyslogFacility) -> IoResult<Self> {
        let ident = ident.into();
        if ident.as_bytes().contains(&0) {
            return Err(io_err("PosixSyslog ident contains internal NUL bytes"));
        }
        Ok(Self { ident, facility })
    }

    /// The identifier that prefixes each syslog entry.
    #[must_use]
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// The facility of the syslog entries.
    #[must_use]
    pub fn facility(&self) -> SyslogFacility {
        self.facility
    }

    // Makes sure the process-wide ident and facility are ours; must be called with the state locked.
    fn ensure_opened(&self, state: &mut PosixSyslogState) -> IoResult<()> {
        if let Some((ident, facility)) = state.opened {
            if ident.to_bytes() == self.ident.as_bytes() && facility == self.facility {
                return Ok(());
            }
        }
        let ident_cstr = if let Some(ident) = state
            .idents_stack
            .iter()
            .find(|s| s.to_bytes() == self.ident.as_bytes())
        {
            // reuse the leaked string instead of leaking another one
            *ident
        } else {
            let ident: &'static CStr = Box::leak(
                CString::new(&*self.ident)
                    .map_err(|_| io_err("PosixSyslog ident contains internal NUL bytes"))?
                    .into_boxed_c_str(),
            );
            state.idents_stack.push(ident);
            ident
        };

        // nix has a Linux-specific signature for openlog
        #[cfg(target_os = "linux")]
        openlog(Some(ident_cstr), LogFlags::LOG_PID, self.facility.to_nix())?;
        #[cfg(not(target_os = "linux"))]
        openlog(
            Some(OsStr::from_bytes(ident_cstr.to_bytes())),
            LogFlags::LOG_PID,
            self.facility.to_nix(),
        )?;
        state.opened = Some((ident_cstr, self.facility));
        Ok(())
    }
}

impl SyslogClient for PosixSyslog {
    fn write_level(&self, severity: SyslogSeverity, msg: &[u8]) -> IoResult<()> {
        let mut state = POSIX_SYSLOG_STATE
            .lock()
            .map_err(|_| io_err("PosixSyslog is poisoned"))?;
        self.ensure_opened(&mut state)?;
        Ok(syslog(severity.to_nix(), OsStr::from_bytes(msg))?)
    }
}
