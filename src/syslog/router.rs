use super::{extract_level_tag, priority_for, SyslogClient};
use std::io::{Result as IoResult, Write};

/// A byte sink that sends each written log line to a [`SyslogClient`],
/// with the priority that corresponds to the line's level tag.
///
/// Each `write` is expected to contain one formatted log line, like
/// `2024-05-01T10:00:00.000+02:00 [WARN] disk low`.
/// The level tag `WARN` is mapped with [`priority_for`](crate::syslog::priority_for),
/// the text in front of the tag (usually a timestamp, which the syslog adds anyway) is dropped,
/// and only `disk low` is handed to the client.
/// Lines without level tag are passed on unchanged, with priority `notice`.
///
/// A write always reports the full length of the line as written, so that callers
/// don't see a short write because of the removed tag.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug)]
pub struct SyslogRouter<C> {
    client: C,
}
impl<C: SyslogClient> SyslogRouter<C> {
    /// Routes lines to `client`.
    #[must_use]
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// The wrapped client.
    #[must_use]
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Unwraps the client.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.client
    }

    /// Writes a line to the client and returns the length of `line`,
    /// together with the client's result.
    ///
    /// The length is reported also if the client fails.
    #[must_use]
    pub fn write_tagged(&self, line: &[u8]) -> (usize, IoResult<()>) {
        let (tag, payload) = extract_level_tag(line);
        let severity = priority_for(&String::from_utf8_lossy(tag));
        (line.len(), self.client.write_level(severity, payload))
    }
}

/// `Write` can't return a length together with an error;
/// a failing client's error is returned as is.
impl<C: SyslogClient> Write for &SyslogRouter<C> {
    fn write(&mut self, buf: &[u8]) -> IoResult<usize> {
        let (len, result) = self.write_tagged(buf);
        result.map(|()| len)
    }

    fn flush(&mut self) -> IoResult<()> {
        Ok(())
    }
}

impl<C: SyslogClient> Write for SyslogRouter<C> {
    fn write(&mut self, buf: &[u8]) -> IoResult<usize> {
        let (len, result) = self.write_tagged(buf);
        result.map(|()| len)
    }

    fn flush(&mut self) -> IoResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::SyslogRouter;
    use crate::syslog::{SyslogClient, SyslogSeverity};
    use std::{
        io::{Error, ErrorKind, Result as IoResult, Write},
        sync::Mutex,
    };

    #[derive(Default)]
    struct Recorder {
        fail: bool,
        lines: Mutex<Vec<(SyslogSeverity, String)>>,
    }
    impl SyslogClient for Recorder {
        fn write_level(&self, severity: SyslogSeverity, msg: &[u8]) -> IoResult<()> {
            self.lines
                .lock()
                .unwrap()
                .push((severity, String::from_utf8_lossy(msg).into_owned()));
            if self.fail {
                Err(Error::new(ErrorKind::BrokenPipe, "syslog is gone"))
            } else {
                Ok(())
            }
        }
    }
    impl Recorder {
        fn single(&self) -> (SyslogSeverity, String) {
            let mut lines = self.lines.lock().unwrap();
            assert_eq!(lines.len(), 1);
            lines.pop().unwrap()
        }
    }

    fn route(line: &str) -> (usize, (SyslogSeverity, String)) {
        let router = SyslogRouter::new(Recorder::default());
        let (len, result) = router.write_tagged(line.as_bytes());
        result.unwrap();
        (len, router.client().single())
    }

    #[test]
    fn tagged_line() {
        let (len, (severity, payload)) = route("[WARN] disk low");
        assert_eq!(len, 15);
        assert_eq!(severity, SyslogSeverity::Warning);
        assert_eq!(payload, "disk low");
    }

    #[test]
    fn untagged_line() {
        let (len, (severity, payload)) = route("plain message");
        assert_eq!(len, 13);
        assert_eq!(severity, SyslogSeverity::Notice);
        assert_eq!(payload, "plain message");
    }

    #[test]
    fn unknown_tag() {
        let (len, (severity, payload)) = route("[UNKNOWN] foo");
        assert_eq!(len, 13);
        assert_eq!(severity, SyslogSeverity::Notice);
        assert_eq!(payload, "foo");
    }

    #[test]
    fn unclosed_tag() {
        let (len, (severity, payload)) = route("[INFO bad");
        assert_eq!(len, 9);
        assert_eq!(severity, SyslogSeverity::Notice);
        assert_eq!(payload, "[INFO bad");
    }

    #[test]
    fn empty_line() {
        let (len, (severity, payload)) = route("");
        assert_eq!(len, 0);
        assert_eq!(severity, SyslogSeverity::Notice);
        assert_eq!(payload, "");
    }

    #[test]
    fn all_levels() {
        for (line, expected) in [
            ("[TRACE] t", SyslogSeverity::Debug),
            ("[DEBUG] d", SyslogSeverity::Info),
            ("[INFO] i", SyslogSeverity::Notice),
            ("[WARN] w", SyslogSeverity::Warning),
            ("[ERROR] e", SyslogSeverity::Error),
            ("[CRIT] c", SyslogSeverity::Critical),
        ] {
            let (len, (severity, _)) = route(line);
            assert_eq!(len, line.len());
            assert_eq!(severity, expected, "{line}");
        }
    }

    #[test]
    fn length_is_reported_on_error() {
        let router = SyslogRouter::new(Recorder {
            fail: true,
            ..Recorder::default()
        });
        let (len, result) = router.write_tagged(b"[ERROR] boom");
        assert_eq!(len, 12);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::BrokenPipe);
        assert_eq!(
            router.client().single(),
            (SyslogSeverity::Error, "boom".to_owned())
        );
    }

    #[test]
    fn as_io_write() {
        let mut router = SyslogRouter::new(Recorder::default());
        assert_eq!(router.write(b"[DEBUG]  x").unwrap(), 10);
        router.flush().unwrap();
        assert_eq!(
            router.client().single(),
            (SyslogSeverity::Info, "x".to_owned())
        );

        // write! may split a line into several writes, each one becomes an entry
        writeln!(&router, "[CRIT] fire").unwrap();
        assert!(!router.client().lines.lock().unwrap().is_empty());

        let mut failing = SyslogRouter::new(Recorder {
            fail: true,
            ..Recorder::default()
        });
        assert_eq!(
            failing.write(b"[INFO] x").unwrap_err().kind(),
            ErrorKind::BrokenPipe
        );
    }
}
