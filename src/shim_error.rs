/// Describes errors in the configuration and installation of the adapters.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ShimError {
    /// A level name is not one of `TRACE`, `DEBUG`, `INFO`, `WARN`, `ERROR`, `CRIT`.
    #[error("Unknown level name: \"{0}\"")]
    UnknownLevel(String),

    /// Writing to the underlying output failed.
    #[error("Writing to the underlying output failed")]
    Io(#[from] std::io::Error),

    /// Installing the logger as the global `log` logger failed.
    #[error("Logger initialization failed")]
    Log(#[from] log::SetLoggerError),
}
