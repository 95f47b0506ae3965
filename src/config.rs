//! Deserializable logger settings, for loading from a configuration file
//! with [serde]. Requires Cargo feature `serde`.
//!
//! [serde]: https://serde.rs/

use libc::c_int;
use serde::{Deserialize, Serialize};

use crate::facility::Facility;
use crate::level::Level;
use crate::logger::Logger;
use crate::sink::SyslogSink;

/// Deserializable settings for a [`Logger`].
///
/// Call the [`build`] method to create a [`Logger`] from a `LoggerConfig`.
///
/// # Example
///
/// ```
/// use leveled_syslog::config::LoggerConfig;
/// use leveled_syslog::{Level, PosixSink};
///
/// let config: LoggerConfig = toml::from_str(r#"
///     ident = "example-app"
///     level = "warning"
///     facility = "daemon"
/// "#).unwrap();
///
/// let logger = config.build(PosixSink::new());
/// assert_eq!(logger.min_level(), Some(Level::Warning));
/// ```
///
/// [`build`]: #method.build
/// [`Logger`]: ../struct.Logger.html
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// The identity tag attached to the connection, usually the program
    /// name. `None` leaves the choice to the sink.
    pub ident: Option<String>,

    /// The minimum severity to deliver; less severe messages are dropped.
    pub level: Level,

    /// The syslog facility to send logs to.
    pub facility: Facility,

    /// Include the process ID in log messages.
    pub log_pid: bool,

    /// Open the connection immediately rather than on the first message.
    pub log_ndelay: bool,

    /// Also emit log messages on `stderr`.
    pub log_perror: bool,
}

impl LoggerConfig {
    /// Creates a `LoggerConfig` with default settings.
    pub fn new() -> Self {
        Default::default()
    }

    /// The configured option booleans folded into an `open` options bitmask.
    pub fn options(&self) -> c_int {
        let mut options = 0;

        if self.log_pid {
            options |= libc::LOG_PID;
        }
        if self.log_ndelay {
            options |= libc::LOG_NDELAY;
        }
        if self.log_perror {
            options |= libc::LOG_PERROR;
        }

        options
    }

    /// Creates a [`Logger`] over `sink` from the settings.
    ///
    /// [`Logger`]: ../struct.Logger.html
    pub fn build<S: SyslogSink>(self, sink: S) -> Logger<S> {
        let options = self.options();

        let mut logger = Logger::new(sink, self.ident, self.level);
        logger.set_facility(self.facility);
        logger.set_options(options);
        logger
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig {
            ident: None,
            level: Level::Debug,
            facility: Facility::default(),
            log_pid: true,
            log_ndelay: true,
            log_perror: false,
        }
    }
}
