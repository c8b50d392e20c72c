use crate::{
    util::{buffer_with, io_err, write_err, ERR_FORMATTING, ERR_POISONED, ERR_WRITING},
    LevelName, ShimError,
};
use log::{LevelFilter, Log, Metadata, Record};
use std::{
    io::{Result as IoResult, Write},
    sync::Mutex,
};

const TS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// A `log::Log` implementation that renders each record as one line with a bracketed level tag,
/// and writes it with a single call to the wrapped writer.
///
/// The lines look like
///
/// ```text
/// 2024-05-01T10:00:00.000+02:00 [WARN] my_prog::disk: disk low
/// ```
///
/// which is what [`SyslogRouter`](crate::syslog::SyslogRouter) expects.
///
/// Is created with [`LineLogger::builder`].
pub struct LineLogger<W: Write + Send> {
    max_level: LevelFilter,
    timestamp: bool,
    writer: Mutex<W>,
}
impl<W: Write + Send> LineLogger<W> {
    /// Instantiate the builder for the `LineLogger`.
    #[must_use]
    pub fn builder(writer: W) -> LineLoggerBuilder<W> {
        LineLoggerBuilder {
            max_level: LevelFilter::Info,
            timestamp: true,
            writer,
        }
    }

    /// The most verbose level that is written.
    #[must_use]
    pub fn max_level(&self) -> LevelFilter {
        self.max_level
    }

    /// Unwraps the writer.
    ///
    /// # Errors
    ///
    /// `std::io::Error` if a thread panicked while writing.
    pub fn into_inner(self) -> IoResult<W> {
        self.writer.into_inner().map_err(|_| io_err(ERR_POISONED))
    }

    fn format(&self, buffer: &mut Vec<u8>, record: &Record) -> IoResult<()> {
        if self.timestamp {
            write!(buffer, "{} ", chrono::Local::now().format(TS_FORMAT))?;
        }
        writeln!(
            buffer,
            "[{}] {}: {}",
            LevelName::from(record.level()),
            record.target(),
            record.args()
        )
    }

    fn write_line(&self, line: &[u8]) -> IoResult<()> {
        self.writer
            .lock()
            .map_err(|_| io_err(ERR_POISONED))?
            .write_all(line)
    }
}

impl<W: Write + Send> Log for LineLogger<W> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        buffer_with(|tl_buf| match tl_buf.try_borrow_mut() {
            Ok(mut buffer) => {
                self.format(&mut buffer, record)
                    .unwrap_or_else(|e| write_err(ERR_FORMATTING, &e));
                self.write_line(&buffer)
                    .unwrap_or_else(|e| write_err(ERR_WRITING, &e));
                buffer.clear();
            }
            Err(_e) => {
                // recursive logging, e.g. from a Display implementation
                let mut tmp_buf = Vec::<u8>::with_capacity(200);
                self.format(&mut tmp_buf, record)
                    .unwrap_or_else(|e| write_err(ERR_FORMATTING, &e));
                self.write_line(&tmp_buf)
                    .unwrap_or_else(|e| write_err(ERR_WRITING, &e));
            }
        });
    }

    fn flush(&self) {
        self.writer
            .lock()
            .map_err(|_| io_err(ERR_POISONED))
            .and_then(|mut w| w.flush())
            .unwrap_or_else(|e| write_err(ERR_WRITING, &e));
    }
}

/// Builder for the [`LineLogger`].
#[allow(clippy::module_name_repetitions)]
pub struct LineLoggerBuilder<W> {
    max_level: LevelFilter,
    timestamp: bool,
    writer: W,
}
impl<W: Write + Send> LineLoggerBuilder<W> {
    /// Specify up to which level log messages are written.
    ///
    /// Default is `Info`.
    #[must_use]
    pub fn max_level(mut self, max_level: LevelFilter) -> Self {
        self.max_level = max_level;
        self
    }

    /// Specify whether a local timestamp starts each line.
    ///
    /// Default is `true`.
    #[must_use]
    pub fn timestamp(mut self, timestamp: bool) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Returns the `LineLogger`, without installing it.
    #[must_use]
    pub fn build(self) -> LineLogger<W> {
        LineLogger {
            max_level: self.max_level,
            timestamp: self.timestamp,
            writer: Mutex::new(self.writer),
        }
    }

    /// Installs the `LineLogger` as the global logger of the `log` crate.
    ///
    /// # Errors
    ///
    /// [`ShimError::Log`] if a global logger was already installed.
    pub fn start(self) -> Result<(), ShimError>
    where
        W: 'static,
    {
        let logger = self.build();
        let max_level = logger.max_level;
        log::set_boxed_logger(Box::new(logger))?;
        log::set_max_level(max_level);
        Ok(())
    }
}
