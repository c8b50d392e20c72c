use crate::ShimError;
use std::{fmt, str::FromStr};

/// The fixed set of level names that appear in configuration and in
/// the bracketed level tags of log lines.
///
/// The textual form is always upper-case, e.g. `WARN`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LevelName {
    /// `TRACE`
    Trace,
    /// `DEBUG`
    Debug,
    /// `INFO`
    Info,
    /// `WARN`
    Warn,
    /// `ERROR`
    Error,
    /// `CRIT`
    Crit,
}

impl LevelName {
    /// All level names, from the most verbose to the most severe.
    pub const ALL: [LevelName; 6] = [
        LevelName::Trace,
        LevelName::Debug,
        LevelName::Info,
        LevelName::Warn,
        LevelName::Error,
        LevelName::Crit,
    ];

    /// The upper-case tag, as it is used in configuration and in log lines.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LevelName::Trace => "TRACE",
            LevelName::Debug => "DEBUG",
            LevelName::Info => "INFO",
            LevelName::Warn => "WARN",
            LevelName::Error => "ERROR",
            LevelName::Crit => "CRIT",
        }
    }

    /// Like `str::parse`, but returns `None` instead of an error.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Option<LevelName> {
        Self::ALL.into_iter().find(|l| l.as_str() == s)
    }
}

impl FromStr for LevelName {
    type Err = ShimError;

    /// Case-sensitive; `"warn"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(s).ok_or_else(|| ShimError::UnknownLevel(s.to_owned()))
    }
}

impl fmt::Display for LevelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<log::Level> for LevelName {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => LevelName::Trace,
            log::Level::Debug => LevelName::Debug,
            log::Level::Info => LevelName::Info,
            log::Level::Warn => LevelName::Warn,
            log::Level::Error => LevelName::Error,
        }
    }
}

#[cfg(test)]
mod test {
    use super::LevelName;
    use crate::ShimError;

    #[test]
    fn parse_and_print() {
        for level in LevelName::ALL {
            assert_eq!(level.as_str().parse::<LevelName>().unwrap(), level);
            assert_eq!(level.to_string(), level.as_str());
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!(matches!(
            "warn".parse::<LevelName>(),
            Err(ShimError::UnknownLevel(ref s)) if s == "warn"
        ));
        assert_eq!(LevelName::parse_lenient("Info"), None);
        assert_eq!(LevelName::parse_lenient(""), None);
    }

    #[test]
    fn from_log_level() {
        assert_eq!(LevelName::from(log::Level::Trace), LevelName::Trace);
        assert_eq!(LevelName::from(log::Level::Warn), LevelName::Warn);
        assert_eq!(LevelName::from(log::Level::Error), LevelName::Error);
    }
}
