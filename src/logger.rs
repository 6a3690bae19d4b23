use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET_MODE: AtomicBool = AtomicBool::new(false);
static VERBOSE_MODE: AtomicBool = AtomicBool::new(false);

/// Applies the output flags for the whole process. Quiet wins over verbose.
pub fn init(quiet: bool, verbose: bool) {
    QUIET_MODE.store(quiet, Ordering::Relaxed);
    VERBOSE_MODE.store(verbose && !quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::Relaxed)
}

pub fn is_verbose() -> bool {
    VERBOSE_MODE.load(Ordering::Relaxed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Detail,
    Warning,
    Failure,
}

impl Level {
    /// Status mark printed in front of the message.
    pub fn mark(self) -> Option<&'static str> {
        match self {
            Level::Info => None,
            Level::Success => Some("✔"),
            Level::Detail => Some("·"),
            Level::Warning => Some("⚠"),
            Level::Failure => Some("✖"),
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Level::Warning | Level::Failure)
    }

    /// Failures always print; details need `--verbose`; the rest are
    /// silenced by `--quiet`.
    pub fn enabled(self, quiet: bool, verbose: bool) -> bool {
        match self {
            Level::Failure => true,
            Level::Detail => verbose && !quiet,
            Level::Info | Level::Success | Level::Warning => !quiet,
        }
    }
}

pub fn render(level: Level, args: fmt::Arguments<'_>) -> String {
    match level.mark() {
        Some(mark) => format!("{} {}", mark, args),
        None => args.to_string(),
    }
}

#[doc(hidden)]
pub fn emit(level: Level, args: fmt::Arguments<'_>) {
    if !level.enabled(is_quiet(), is_verbose()) {
        return;
    }
    let line = render(level, args);
    // A closed pipe must not turn into a panic.
    let _ = if level.to_stderr() {
        writeln!(io::stderr().lock(), "{}", line)
    } else {
        writeln!(io::stdout().lock(), "{}", line)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Level::Info, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Level::Success, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Level::Detail, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Level::Warning, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Level::Failure, format_args!($($arg)*))
    };
}
