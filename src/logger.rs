use libc::{self, c_int};
use std::error::Error;
use std::fmt::{self, Display};
use std::sync::Mutex;

use crate::level::{Level, UnknownLevelError};
use crate::message::{substitute, Context};
use crate::sink::{PosixSink, SyslogSink};

/// Default `open` options: connect immediately, include the process ID.
pub const DEFAULT_OPTIONS: c_int = libc::LOG_NDELAY | libc::LOG_PID;

/// Default facility, `local7`.
pub const DEFAULT_FACILITY: c_int = libc::LOG_LOCAL7;

/// A leveled logger that delivers messages to a [`SyslogSink`].
///
/// A `Logger` resolves each message's [`Level`] to its syslog priority
/// integer, drops messages less severe than the configured minimum, opens the
/// sink lazily on the first accepted message, substitutes `{placeholder}`
/// tokens from the per-call [`Context`], and forwards the finished text to
/// the sink.
///
/// The sink is injected at construction, so tests can substitute a recording
/// fake for the real [`PosixSink`].
///
/// # Example
///
/// ```
/// use leveled_syslog::{Context, Level, Logger, PosixSink};
///
/// let logger = Logger::new(PosixSink::new(), Some("example-app"), Level::Info);
///
/// let mut ctx = Context::new();
/// ctx.insert("name", "world".to_string());
///
/// logger.info("Hello, {name}!", &ctx).expect("syslog unavailable");
/// ```
///
/// [`Context`]: type.Context.html
/// [`Level`]: enum.Level.html
/// [`PosixSink`]: struct.PosixSink.html
/// [`SyslogSink`]: trait.SyslogSink.html
#[derive(Debug)]
pub struct Logger<S: SyslogSink = PosixSink> {
    sink: S,
    ident: Option<String>,
    min_priority: c_int,
    options: c_int,
    facility: c_int,

    /// Lazy-init state: false until the sink has been opened successfully,
    /// then true for the rest of the instance's life. The mutex makes the
    /// check-and-open sequence a single critical section, so concurrent
    /// callers can't both observe "unopened" and open the sink twice.
    opened: Mutex<bool>,
}

impl Logger<PosixSink> {
    /// Creates a `Logger` over the process syslog connection, with the given
    /// identity and the least restrictive minimum level, `debug`.
    ///
    /// ```
    /// use leveled_syslog::{Level, Logger};
    ///
    /// let logger = Logger::to_posix_syslog(Some("example-app"));
    /// assert_eq!(logger.min_level(), Some(Level::Debug));
    /// ```
    pub fn to_posix_syslog<I: Into<String>>(ident: Option<I>) -> Self {
        Logger::new(PosixSink::new(), ident, Level::Debug)
    }
}

impl<S: SyslogSink> Logger<S> {
    /// Creates a `Logger` with the given sink, identity, and minimum level.
    ///
    /// Options default to [`DEFAULT_OPTIONS`] and the facility to
    /// [`DEFAULT_FACILITY`]; both can be changed with the setters below.
    ///
    /// [`DEFAULT_FACILITY`]: constant.DEFAULT_FACILITY.html
    /// [`DEFAULT_OPTIONS`]: constant.DEFAULT_OPTIONS.html
    pub fn new<I: Into<String>>(sink: S, ident: Option<I>, min_level: Level) -> Self {
        Logger {
            sink,
            ident: ident.map(Into::into),
            min_priority: min_level.into(),
            options: DEFAULT_OPTIONS,
            facility: DEFAULT_FACILITY,
            opened: Mutex::new(false),
        }
    }

    /// Creates a `Logger` with no identity and the least restrictive minimum
    /// level, `debug`.
    pub fn with_defaults(sink: S) -> Self {
        Logger::new(sink, None::<String>, Level::Debug)
    }

    /// Logs a message at the given level.
    ///
    /// If the level is less severe than the configured minimum, this is a
    /// no-op: the message is dropped before placeholder substitution or any
    /// sink interaction. Otherwise the sink is opened if this is the first
    /// accepted message, `{placeholder}` tokens are substituted from
    /// `context`, and the finished text is written.
    ///
    /// # Errors
    ///
    /// Returns [`SinkOpenError`] if the sink's `open` reported failure. The
    /// message is not delivered, and the logger stays unopened, so the next
    /// accepted message will retry `open`. Write failures are not observable
    /// and not reported.
    ///
    /// [`SinkOpenError`]: struct.SinkOpenError.html
    pub fn log(&self, level: Level, message: &str, context: &Context<'_>) -> Result<(), SinkOpenError> {
        let priority = c_int::from(level);

        if priority > self.min_priority {
            return Ok(());
        }

        self.ensure_open()?;
        self.sink.write(priority, &substitute(message, context));
        Ok(())
    }

    /// Logs a message at the `emergency` level.
    pub fn emergency(&self, message: &str, context: &Context<'_>) -> Result<(), SinkOpenError> {
        self.log(Level::Emergency, message, context)
    }

    /// Logs a message at the `alert` level.
    pub fn alert(&self, message: &str, context: &Context<'_>) -> Result<(), SinkOpenError> {
        self.log(Level::Alert, message, context)
    }

    /// Logs a message at the `critical` level.
    pub fn critical(&self, message: &str, context: &Context<'_>) -> Result<(), SinkOpenError> {
        self.log(Level::Critical, message, context)
    }

    /// Logs a message at the `error` level.
    pub fn error(&self, message: &str, context: &Context<'_>) -> Result<(), SinkOpenError> {
        self.log(Level::Error, message, context)
    }

    /// Logs a message at the `warning` level.
    pub fn warning(&self, message: &str, context: &Context<'_>) -> Result<(), SinkOpenError> {
        self.log(Level::Warning, message, context)
    }

    /// Logs a message at the `notice` level.
    pub fn notice(&self, message: &str, context: &Context<'_>) -> Result<(), SinkOpenError> {
        self.log(Level::Notice, message, context)
    }

    /// Logs a message at the `info` level.
    pub fn info(&self, message: &str, context: &Context<'_>) -> Result<(), SinkOpenError> {
        self.log(Level::Info, message, context)
    }

    /// Logs a message at the `debug` level.
    pub fn debug(&self, message: &str, context: &Context<'_>) -> Result<(), SinkOpenError> {
        self.log(Level::Debug, message, context)
    }

    /// The injected sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The identity tag passed to the sink's `open`, usually the program
    /// name.
    pub fn ident(&self) -> Option<&str> {
        self.ident.as_deref()
    }

    /// Sets the identity tag. Takes effect if the sink has not been opened
    /// yet; an already-open connection is not reopened.
    pub fn set_ident<I: Into<String>>(&mut self, ident: Option<I>) {
        self.ident = ident.map(Into::into);
    }

    /// The options bitmask passed to the sink's `open`.
    pub fn options(&self) -> c_int {
        self.options
    }

    /// Sets the options bitmask. Like `set_ident`, this does not reopen an
    /// already-open sink.
    pub fn set_options(&mut self, options: c_int) {
        self.options = options;
    }

    /// The facility code passed to the sink's `open`. Opaque to the logger.
    pub fn facility(&self) -> c_int {
        self.facility
    }

    /// Sets the facility code. Accepts a raw integer or a [`Facility`].
    /// Like `set_ident`, this does not reopen an already-open sink.
    ///
    /// [`Facility`]: enum.Facility.html
    pub fn set_facility<F: Into<c_int>>(&mut self, facility: F) {
        self.facility = facility.into();
    }

    /// The minimum-severity cutoff as a raw priority integer. Messages whose
    /// priority integer exceeds this value (i.e. are less severe) are
    /// dropped.
    pub fn min_priority(&self) -> c_int {
        self.min_priority
    }

    /// The minimum-severity cutoff as a [`Level`], or `None` if a raw
    /// integer override outside the level table is in effect.
    ///
    /// [`Level`]: enum.Level.html
    pub fn min_level(&self) -> Option<Level> {
        Level::from_int(self.min_priority)
    }

    /// The canonical name of the minimum level, or `None` under a raw
    /// override outside the level table.
    pub fn min_level_name(&self) -> Option<&'static str> {
        self.min_level().map(|level| level.name())
    }

    /// Sets the minimum-severity cutoff.
    pub fn set_min_level(&mut self, level: Level) {
        self.min_priority = level.into();
    }

    /// Sets the minimum-severity cutoff from a level name, resolved through
    /// the level table.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownLevelError`] if the name is not one of the eight
    /// canonical levels; the cutoff is left unchanged.
    ///
    /// [`UnknownLevelError`]: struct.UnknownLevelError.html
    pub fn set_min_level_str(&mut self, level: &str) -> Result<(), UnknownLevelError> {
        self.min_priority = level.parse::<Level>()?.into();
        Ok(())
    }

    /// Sets the minimum-severity cutoff to a raw priority integer, bypassing
    /// the level table. The value is stored as-is, without validation.
    pub fn set_min_priority(&mut self, priority: c_int) {
        self.min_priority = priority;
    }

    /// Opens the sink if it has not been opened yet. At most one `open` ever
    /// succeeds per instance; after that this is a lock-and-test.
    fn ensure_open(&self) -> Result<(), SinkOpenError> {
        let mut opened = match self.opened.lock() {
            Ok(locked) => locked,
            // A poisoned flag is still a usable flag.
            Err(poisoned) => poisoned.into_inner(),
        };

        if !*opened {
            if !self.sink.open(self.ident.as_deref(), self.options, self.facility) {
                return Err(SinkOpenError);
            }
            *opened = true;
        }

        Ok(())
    }
}

/// Indicates that the sink's `open` reported failure.
///
/// The logger stays unopened and retries `open` opportunistically on the next
/// accepted message; the failure is local to one log call, never fatal.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(test, derive(Eq, PartialEq))]
pub struct SinkOpenError;

impl Display for SinkOpenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("failed to open a connection to the syslog sink")
    }
}

impl Error for SinkOpenError {}
