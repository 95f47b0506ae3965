use lazy_static::lazy_static;
use libc::{self, c_int};
use std::ffi::CString;
use std::ptr;
use std::sync::{Arc, Mutex, MutexGuard};

lazy_static! {
    /// Keeps the `ident` string most recently passed to `openlog` alive.
    ///
    /// The POSIX `openlog` function accepts a pointer to a C string. Though
    /// POSIX does not specify the expected lifetime of the string, all known
    /// implementations either
    ///
    /// 1. keep the pointer in a global variable, or
    /// 2. copy the string into an internal buffer, which is kept in a global
    ///    variable.
    ///
    /// When running with an implementation in the first category, the string
    /// must not be freed while the connection may still use it. Retaining the
    /// most recently passed `CString` here satisfies that for the lifetime of
    /// the process; a replacement is stored before the previous string is
    /// dropped, after `openlog` has already been handed the new pointer.
    ///
    /// The mutex is also held across the `openlog` call itself, since the
    /// settings it installs live in libc globals.
    static ref LAST_IDENT: Mutex<Option<CString>> = Mutex::new(None);
}

/// The sink that log records are delivered to.
///
/// The [`Logger`] calls `open` at most once per successful initialization,
/// lazily, the first time a message passes its severity filter, and then
/// calls `write` once per accepted message. Implement this trait to capture
/// records in tests or to route them somewhere other than the system syslog.
///
/// [`Logger`]: struct.Logger.html
pub trait SyslogSink {
    /// Establishes the logging connection. Returns `false` on failure, in
    /// which case the caller's message is not delivered.
    fn open(&self, ident: Option<&str>, options: c_int, facility: c_int) -> bool;

    /// Emits one record. Fire-and-forget: failures are not reported.
    fn write(&self, priority: c_int, message: &str);
}

impl<'a, S: SyslogSink + ?Sized> SyslogSink for &'a S {
    fn open(&self, ident: Option<&str>, options: c_int, facility: c_int) -> bool {
        (**self).open(ident, options, facility)
    }

    fn write(&self, priority: c_int, message: &str) {
        (**self).write(priority, message)
    }
}

impl<S: SyslogSink + ?Sized> SyslogSink for Box<S> {
    fn open(&self, ident: Option<&str>, options: c_int, facility: c_int) -> bool {
        (**self).open(ident, options, facility)
    }

    fn write(&self, priority: c_int, message: &str) {
        (**self).write(priority, message)
    }
}

impl<S: SyslogSink + ?Sized> SyslogSink for Arc<S> {
    fn open(&self, ident: Option<&str>, options: c_int, facility: c_int) -> bool {
        (**self).open(ident, options, facility)
    }

    fn write(&self, priority: c_int, message: &str) {
        (**self).write(priority, message)
    }
}

/// [`SyslogSink`] implementation over the POSIX `openlog` and `syslog`
/// functions. Unix-like platforms only.
///
/// POSIX doesn't support more than one connection to the syslog server at a
/// time; the `openlog` settings are process-global. A program should
/// therefore avoid opening `PosixSink`-backed loggers with conflicting
/// identities or facilities, and libraries should leave constructing one to
/// the main application.
///
/// [`SyslogSink`]: trait.SyslogSink.html
#[derive(Clone, Copy, Debug, Default)]
pub struct PosixSink;

impl PosixSink {
    /// Creates a new `PosixSink`.
    pub fn new() -> Self {
        PosixSink
    }
}

impl SyslogSink for PosixSink {
    /// Calls `openlog`. Always returns `true`: POSIX `openlog` has no way to
    /// report failure, and the connection is reopened implicitly by `syslog`
    /// if it could not be established here.
    fn open(&self, ident: Option<&str>, options: c_int, facility: c_int) -> bool {
        let ident = ident.map(cstring_lossy);

        let mut last_ident: MutexGuard<Option<CString>> = match LAST_IDENT.lock() {
            Ok(locked) => locked,
            // A poisoned lock still guards a usable ident slot.
            Err(poisoned) => poisoned.into_inner(),
        };

        let ident_ptr = match &ident {
            Some(s) => s.as_ptr(),
            None => ptr::null(),
        };

        // `openlog` must see the new pointer before the previously retained
        // string (if any) is dropped by the assignment below.
        unsafe { libc::openlog(ident_ptr, options, facility); }

        if ident.is_some() {
            *last_ident = ident;
        }

        true
    }

    fn write(&self, priority: c_int, message: &str) {
        let message = cstring_lossy(message);

        unsafe {
            libc::syslog(
                priority,
                b"%s\0".as_ptr() as *const libc::c_char,
                message.as_ptr(),
            );
        }
    }
}

/// Copies `s` into a `CString`, removing interior null bytes.
fn cstring_lossy(s: &str) -> CString {
    let bytes: Vec<u8> = s.bytes().filter(|&b| b != 0).collect();

    // Sound: every interior null byte was just removed.
    unsafe { CString::from_vec_unchecked(bytes) }
}
