//! A minimal leveled logging facade over a syslog-style sink. Unix-like
//! platforms only.
//!
//! A [`Logger`] maps the eight canonical syslog severity names to their
//! priority integers, drops messages less severe than a configured minimum,
//! opens its sink lazily (at most once per instance) on the first accepted
//! message, and substitutes `{placeholder}` tokens in message templates from
//! a per-call [`Context`] map.
//!
//! The sink is an injected [`SyslogSink`] capability. [`PosixSink`] delivers
//! to the process syslog connection through the [POSIX syslog API]; tests
//! substitute a recording fake.
//!
//! [POSIX syslog API]: https://pubs.opengroup.org/onlinepubs/9699919799/functions/closelog.html
//!
//! # Example
//!
//! ```
//! use leveled_syslog::{Context, Facility, Level, Logger, PosixSink};
//!
//! let mut logger = Logger::new(PosixSink::new(), Some("example-app"), Level::Info);
//! logger.set_facility(Facility::Local0);
//!
//! let mut ctx = Context::new();
//! ctx.insert("version", env!("CARGO_PKG_VERSION").to_string());
//!
//! logger.info("starting up, version {version}", &ctx).expect("syslog unavailable");
//! logger.debug("not delivered below the minimum level", &Context::new()).unwrap();
//! ```
//!
//! # Cargo features
//!
//! If the Cargo feature `serde` is enabled, logger settings can be loaded
//! from a configuration file using [`config::LoggerConfig`].
//!
//! [`config::LoggerConfig`]: config/struct.LoggerConfig.html
//!
//! # Concurrency issues
//!
//! POSIX doesn't support opening more than one connection to the syslog
//! server at a time: the settings installed by `openlog` live in global
//! variables in the platform libc. A program should construct at most one
//! [`PosixSink`]-backed [`Logger`] at a time, and libraries should leave
//! constructing one to the main application. The [`Logger`] itself is safe
//! to share between threads; its lazy open happens at most once even under
//! concurrent first use.
//!
//! [`Context`]: type.Context.html
//! [`Logger`]: struct.Logger.html
//! [`PosixSink`]: struct.PosixSink.html
//! [`SyslogSink`]: trait.SyslogSink.html

#![cfg(unix)]
#![warn(missing_docs)]

#[cfg(feature = "serde")]
pub mod config;

mod facility;
pub use facility::*;

mod level;
pub use level::*;

mod logger;
pub use logger::*;

mod message;
pub use message::*;

#[cfg(test)]
mod mock;
#[cfg(test)]
mod tests;

mod sink;
pub use sink::*;
