use libc::{self, c_int};
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A syslog severity level. Conversions are provided to and from `c_int`.
///
/// The set of levels is closed and platform-independent. They were originally
/// defined by BSD and are specified by POSIX; the priority integers run from
/// 0 (`Emergency`, most severe) to 7 (`Debug`, least severe).
///
/// The derived ordering is by urgency, so `Level::Debug < Level::Emergency`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Level {
    /// Verbose debugging messages.
    Debug,

    /// Normal informational messages. A program that's starting up might log
    /// its version number at this level.
    Info,

    /// The situation is not an error, but it probably needs attention.
    Notice,

    /// Warning. Something has probably gone wrong.
    Warning,

    /// Error. Something has definitely gone wrong.
    Error,

    /// Critical condition. Hardware failures fall under this level.
    Critical,

    /// Something has happened that requires immediate action.
    Alert,

    /// The system is unusable.
    Emergency,
}

impl Level {
    /// Gets the name of this `Level`, like `emergency` or `notice`.
    ///
    /// The `FromStr` implementation accepts the same names, but it is
    /// case-insensitive.
    pub fn name(&self) -> &'static str {
        match *self {
            Level::Emergency => "emergency",
            Level::Alert => "alert",
            Level::Critical => "critical",
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Notice => "notice",
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }

    /// Converts a priority integer (a `libc::LOG_*` severity constant) to a
    /// `Level` value.
    ///
    /// Returns `Some` if the value is a valid level, or `None` if not.
    pub fn from_int(value: c_int) -> Option<Level> {
        match value {
            libc::LOG_EMERG => Some(Level::Emergency),
            libc::LOG_ALERT => Some(Level::Alert),
            libc::LOG_CRIT => Some(Level::Critical),
            libc::LOG_ERR => Some(Level::Error),
            libc::LOG_WARNING => Some(Level::Warning),
            libc::LOG_NOTICE => Some(Level::Notice),
            libc::LOG_INFO => Some(Level::Info),
            libc::LOG_DEBUG => Some(Level::Debug),
            _ => None,
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Level> for c_int {
    fn from(level: Level) -> Self {
        match level {
            Level::Emergency => libc::LOG_EMERG,
            Level::Alert => libc::LOG_ALERT,
            Level::Critical => libc::LOG_CRIT,
            Level::Error => libc::LOG_ERR,
            Level::Warning => libc::LOG_WARNING,
            Level::Notice => libc::LOG_NOTICE,
            Level::Info => libc::LOG_INFO,
            Level::Debug => libc::LOG_DEBUG,
        }
    }
}

impl FromStr for Level {
    type Err = UnknownLevelError;

    fn from_str(s: &str) -> Result<Self, <Self as FromStr>::Err> {
        let s = s.to_ascii_lowercase();

        match &*s {
            "emergency" => Ok(Level::Emergency),
            "alert" => Ok(Level::Alert),
            "critical" => Ok(Level::Critical),
            "error" => Ok(Level::Error),
            "warning" => Ok(Level::Warning),
            "notice" => Ok(Level::Notice),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            _ => Err(UnknownLevelError {
                name: s,
            })
        }
    }
}

/// Indicates that `<Level as FromStr>::from_str` was called with a name
/// outside the eight canonical levels.
///
/// Unknown names are rejected rather than mapped to some default priority,
/// which would silently corrupt filtering.
#[derive(Clone, Debug)]
#[cfg_attr(test, derive(Eq, PartialEq))]
pub struct UnknownLevelError {
    name: String,
}

impl UnknownLevelError {
    /// The unrecognized level name.
    pub fn name(&self) -> &str {
        &*self.name
    }
}

impl Display for UnknownLevelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unrecognized syslog level name `{}`", self.name)
    }
}

impl Error for UnknownLevelError {}

#[test]
fn test_level_from_str() {
    assert_eq!(Level::from_str("notice"), Ok(Level::Notice));
    assert_eq!(Level::from_str("ERROR"), Ok(Level::Error));
    assert_eq!(Level::from_str("foobar"), Err(UnknownLevelError { name: "foobar".to_string() }));
    assert_eq!(Level::from_str("foobar").unwrap_err().to_string(), "unrecognized syslog level name `foobar`");
}

#[test]
fn test_level_ordering() {
    assert!(Level::Debug < Level::Emergency);
}

#[test]
fn test_level_priority_table() {
    let table = [
        (Level::Emergency, 0),
        (Level::Alert, 1),
        (Level::Critical, 2),
        (Level::Error, 3),
        (Level::Warning, 4),
        (Level::Notice, 5),
        (Level::Info, 6),
        (Level::Debug, 7),
    ];

    for &(level, priority) in &table {
        assert_eq!(c_int::from(level), priority);
        assert_eq!(Level::from_int(priority), Some(level));
    }

    assert_eq!(Level::from_int(8), None);
}
