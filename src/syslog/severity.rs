use crate::LevelName;

/// Syslog severity, used as priority of the routed lines.
///
/// See [RFC 5424](https://datatracker.ietf.org/doc/rfc5424).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(clippy::module_name_repetitions)]
pub enum SyslogSeverity {
    /// System is unusable.
    Emergency = 0,
    /// Action must be taken immediately.
    Alert = 1,
    /// Critical conditions.
    Critical = 2,
    /// Error conditions.
    Error = 3,
    /// Warning conditions
    Warning = 4,
    /// Normal but significant condition
    Notice = 5,
    /// Informational messages.
    Info = 6,
    /// Debug-level messages.
    Debug = 7,
}

/// Priority for lines without a known level tag.
pub const DEFAULT_PRIORITY: SyslogSeverity = SyslogSeverity::Notice;

/// Looks up the syslog priority for a level tag.
///
/// Each level is shifted down by one step, so that `INFO` lines end up as `notice`:
///
/// | tag     | priority  |
/// |---------|-----------|
/// | `TRACE` | debug     |
/// | `DEBUG` | info      |
/// | `INFO`  | notice    |
/// | `WARN`  | warning   |
/// | `ERROR` | err       |
/// | `CRIT`  | crit      |
///
/// Returns `None` for any other tag, including the empty one.
#[must_use]
pub fn level_priority(tag: &str) -> Option<SyslogSeverity> {
    LevelName::parse_lenient(tag).map(|level| match level {
        LevelName::Trace => SyslogSeverity::Debug,
        LevelName::Debug => SyslogSeverity::Info,
        LevelName::Info => SyslogSeverity::Notice,
        LevelName::Warn => SyslogSeverity::Warning,
        LevelName::Error => SyslogSeverity::Error,
        LevelName::Crit => SyslogSeverity::Critical,
    })
}

/// Like [`level_priority`], but falls back to [`DEFAULT_PRIORITY`].
#[must_use]
pub fn priority_for(tag: &str) -> SyslogSeverity {
    level_priority(tag).unwrap_or(DEFAULT_PRIORITY)
}

#[cfg(all(unix, feature = "syslog_call"))]
impl SyslogSeverity {
    pub(crate) fn to_nix(self) -> nix::syslog::Severity {
        use nix::syslog::Severity;
        match self {
            Self::Emergency => Severity::LOG_EMERG,
            Self::Alert => Severity::LOG_ALERT,
            Self::Critical => Severity::LOG_CRIT,
            Self::Error => Severity::LOG_ERR,
            Self::Warning => Severity::LOG_WARNING,
            Self::Notice => Severity::LOG_NOTICE,
            Self::Info => Severity::LOG_INFO,
            Self::Debug => Severity::LOG_DEBUG,
        }
    }
}
