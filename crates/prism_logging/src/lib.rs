//! Lightweight logger used by the prism crates
//!
//! Nothing is logged until a logger has been installed using [`set_logger`], so libraries can log freely without producing any side effects for consumers that did not opt in.

use core::{
    fmt::{self, Arguments, Display},
    sync::atomic::{AtomicU8, Ordering},
};
use std::{
    fmt::Write as _,
    io::{self, Write as _},
    time::{SystemTime, UNIX_EPOCH},
};
use parking_lot::{Mutex, RwLock};

static LOGGER : RwLock<Option<&'static Logger>> = parking_lot::const_rwlock(None);

/// Install the process-wide logger
pub fn set_logger(logger: &'static Logger) {
    *LOGGER.write() = Some(logger);
}

/// Remove the process-wide logger, returning the previously installed one
pub fn clear_logger() -> Option<&'static Logger> {
    LOGGER.write().take()
}

/// Get the process-wide logger, if one is installed
pub fn get_logger() -> Option<&'static Logger> {
    *LOGGER.read()
}

/// Severity of a message, ordered from most to least severe
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum LogLevel {
    /// Unrecoverable state
    Severe,
    Error,
    /// Unexpected, but the result is still usable
    Warning,
    Info,
    Verbose,
    /// Dumps of intermediate values
    Debug,
}

impl LogLevel {
    const ALL : [LogLevel; 6] = [LogLevel::Severe, LogLevel::Error, LogLevel::Warning, LogLevel::Info, LogLevel::Verbose, LogLevel::Debug];

    /// Fixed width label of the level
    pub const fn label(self) -> &'static str {
        match self {
            LogLevel::Severe  => "SEVERE ",
            LogLevel::Error   => "ERROR  ",
            LogLevel::Warning => "WARNING",
            LogLevel::Info    => "INFO   ",
            LogLevel::Verbose => "VERBOSE",
            LogLevel::Debug   => "DEBUG  ",
        }
    }

    // ANSI escape sequence used to color the label
    const fn ansi_style(self) -> &'static str {
        match self {
            LogLevel::Severe  => "\x1B[1m\x1B[41m\x1B[30m",
            LogLevel::Error   => "\x1B[91m",
            LogLevel::Warning => "\x1B[93m",
            LogLevel::Info    => "\x1B[37m",
            LogLevel::Verbose => "\x1B[90m",
            LogLevel::Debug   => "\x1B[94m",
        }
    }

    /// Only errors and debug output carry the source location of the message
    const fn shows_location(self) -> bool {
        matches!(self, LogLevel::Severe | LogLevel::Error | LogLevel::Debug)
    }

    fn from_u8(val: u8) -> LogLevel {
        Self::ALL.get(val as usize).copied().unwrap_or(LogLevel::Debug)
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{}[{}]\x1B[0m", self.ansi_style(), self.label()))
    }
}

/// Category a message belongs to, generally one per crate
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LogCategory {
    name     : &'static str,
    sub_name : Option<&'static str>,
}

impl LogCategory {
    pub const fn new(name: &'static str) -> Self {
        Self { name, sub_name: None }
    }

    pub const fn new_with_sub(name: &'static str, sub_name: &'static str) -> Self {
        Self { name, sub_name: Some(sub_name) }
    }
}

impl Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sub_name {
            Some(sub_name) => f.write_fmt(format_args!("{}({sub_name})", self.name)),
            None => f.write_str(self.name),
        }
    }
}

/// Wall-clock time at which a message was logged, in milliseconds since the unix epoch
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct TimeStamp(u64);

impl TimeStamp {
    pub fn now() -> Self {
        let millis = SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |dur| dur.as_millis() as u64);
        Self(millis)
    }

    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }
}

// Formatted as the UTC time of day: `hh:mm:ss.mmm`
impl Display for TimeStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let millis = self.0 % 1000;
        let secs = self.0 / 1000;
        let (hours, mins, secs) = ((secs / 3600) % 24, (secs / 60) % 60, secs % 60);
        f.write_fmt(format_args!("{hours:02}:{mins:02}:{secs:02}.{millis:03}"))
    }
}

/// Source location and time of a message, created by [`log_location!`]
#[derive(Clone, Copy, Debug)]
pub struct LogLocation {
    pub file : &'static str,
    pub line : u32,
    pub func : &'static str,
    pub time : TimeStamp,
}

impl LogLocation {
    pub const fn new(file: &'static str, line: u32, func: &'static str, time: TimeStamp) -> Self {
        Self { file, line, func, time }
    }
}

/// Name of the function item `F`, used to fill in [`LogLocation::func`]
pub fn get_func_name<F>(_: F) -> &'static str {
    core::any::type_name::<F>()
}

#[macro_export]
macro_rules! log_location {
    () => {
        $crate::LogLocation::new(file!(), line!(), "", $crate::TimeStamp::now())
    };
    ($func:expr) => {
        $crate::LogLocation::new(file!(), line!(), $crate::get_func_name($func), $crate::TimeStamp::now())
    };
}

/// Destination of the logged text
pub type LogWriter = Box<dyn io::Write + Send>;

const MAX_WRITERS : usize = 8;
const FLUSH_THRESHOLD : usize = 4 * 1024;

// Text is collected in `pending` and handed to every output at once
struct Outputs {
    writers      : [Option<LogWriter>; MAX_WRITERS],
    pending      : String,
    always_flush : bool,
    console      : bool,
}

impl Outputs {
    const EMPTY_SLOT : Option<LogWriter> = None;

    const fn new() -> Self {
        Self {
            writers: [Self::EMPTY_SLOT; MAX_WRITERS],
            pending: String::new(),
            always_flush: false,
            console: true,
        }
    }

    fn push_line(&mut self, header: Arguments, message: Arguments) {
        _ = self.pending.write_fmt(header);
        _ = self.pending.write_fmt(message);
        self.pending.push('\n');

        if self.always_flush || self.pending.len() > FLUSH_THRESHOLD {
            self.flush();
        }
    }

    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let bytes = self.pending.as_bytes();
        if self.console {
            let mut stdout = io::stdout().lock();
            _ = stdout.write_all(bytes);
            _ = stdout.flush();
        }
        for writer in self.writers.iter_mut().flatten() {
            _ = writer.write_all(bytes);
            _ = writer.flush();
        }
        self.pending.clear();
    }
}

/// Logger writing to the console and up to 8 additional writers
pub struct Logger {
    outputs   : Mutex<Outputs>,
    max_level : AtomicU8,
}

impl Logger {
    pub const fn new() -> Self {
        Self {
            outputs: parking_lot::const_mutex(Outputs::new()),
            max_level: AtomicU8::new(LogLevel::Debug as u8),
        }
    }

    /// Set the least severe level that is still logged
    pub fn set_max_level(&self, level: LogLevel) {
        self.max_level.store(level as u8, Ordering::Relaxed)
    }

    pub fn max_level(&self) -> LogLevel {
        LogLevel::from_u8(self.max_level.load(Ordering::Relaxed))
    }

    /// Check if a message with the given level would be logged
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level <= self.max_level()
    }

    /// Write every message out immediately instead of batching them
    pub fn set_always_flush(&self, always_flush: bool) {
        self.outputs.lock().always_flush = always_flush;
    }

    /// Enable or disable writing to stdout, pending messages still go to the previous destinations
    pub fn set_log_to_console(&self, log_to_console: bool) {
        let mut outputs = self.outputs.lock();
        outputs.flush();
        outputs.console = log_to_console;
    }

    /// Add a writer, returning the slot it was placed in.
    ///
    /// When all slots are taken, the writer is handed back as the error.
    pub fn add_writer(&self, writer: LogWriter) -> Result<usize, LogWriter> {
        let mut outputs = self.outputs.lock();
        match outputs.writers.iter().position(Option::is_none) {
            Some(slot) => {
                outputs.writers[slot] = Some(writer);
                Ok(slot)
            },
            None => Err(writer),
        }
    }

    /// Remove the writer in `slot`, after writing out all pending messages
    pub fn remove_writer(&self, slot: usize) -> Option<LogWriter> {
        let mut outputs = self.outputs.lock();
        outputs.flush();
        outputs.writers.get_mut(slot).and_then(Option::take)
    }

    pub fn log(&self, category: LogCategory, level: LogLevel, loc: LogLocation, text: &str) {
        self.log_fmt(category, level, loc, format_args!("{text}"));
    }

    pub fn log_fmt(&self, category: LogCategory, level: LogLevel, loc: LogLocation, message: Arguments) {
        if !self.is_enabled(level) {
            return;
        }

        let time = loc.time;
        let mut outputs = self.outputs.lock();
        if level.shows_location() {
            outputs.push_line(format_args!("\x1B[38m{time}\x1B[0m {level} [{category}] ({}:{}: {}): ", loc.file, loc.line, loc.func), message);
        } else {
            outputs.push_line(format_args!("\x1B[38m{time}\x1B[0m {level} [{category}]: "), message);
        }
    }

    pub fn flush(&self) {
        self.outputs.lock().flush()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.flush();
    }
}

/// Log a message at the given level, when a logger is installed
///
/// `log!(category, level, location; format, args...)`
#[macro_export]
macro_rules! log {
    ($category:expr, $level:expr, $loc:expr; $($arg:tt)+) => {
        if let Some(logger) = $crate::get_logger() {
            logger.log_fmt($category, $level, $loc, format_args!($($arg)+));
        }
    };
}

/// Takes the calling function as 2nd argument, which is included in the output
#[macro_export]
macro_rules! log_severe {
    ($category:expr, $func:expr, $($arg:tt)+) => {
        $crate::log!($category, $crate::LogLevel::Severe, $crate::log_location!($func); $($arg)+)
    };
}

/// Takes the calling function as 2nd argument, which is included in the output
#[macro_export]
macro_rules! log_error {
    ($category:expr, $func:expr, $($arg:tt)+) => {
        $crate::log!($category, $crate::LogLevel::Error, $crate::log_location!($func); $($arg)+)
    };
}

#[macro_export]
macro_rules! log_warning {
    ($category:expr, $($arg:tt)+) => {
        $crate::log!($category, $crate::LogLevel::Warning, $crate::log_location!(); $($arg)+)
    };
}

#[macro_export]
macro_rules! log_info {
    ($category:expr, $($arg:tt)+) => {
        $crate::log!($category, $crate::LogLevel::Info, $crate::log_location!(); $($arg)+)
    };
}

#[macro_export]
macro_rules! log_verbose {
    ($category:expr, $($arg:tt)+) => {
        $crate::log!($category, $crate::LogLevel::Verbose, $crate::log_location!(); $($arg)+)
    };
}

/// Takes the calling function as 2nd argument, which is included in the output
#[macro_export]
macro_rules! log_debug {
    ($category:expr, $func:expr, $($arg:tt)+) => {
        $crate::log!($category, $crate::LogLevel::Debug, $crate::log_location!($func); $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    const CATEGORY : LogCategory = LogCategory::new_with_sub("test", "logging");

    fn make_logger() -> (Logger, SharedBuffer) {
        let logger = Logger::new();
        let buffer = SharedBuffer::default();
        logger.set_log_to_console(false);
        assert!(logger.add_writer(Box::new(buffer.clone())).is_ok());
        (logger, buffer)
    }

    fn test_func() {}

    #[test]
    fn category_display() {
        assert_eq!(format!("{}", LogCategory::new("math")), "math");
        assert_eq!(format!("{CATEGORY}"), "test(logging)");
    }

    #[test]
    fn timestamp_display() {
        let stamp = TimeStamp::from_millis(((13 * 60 + 7) * 60 + 5) * 1000 + 42);
        assert_eq!(format!("{stamp}"), "13:07:05.042");
    }

    #[test]
    fn level_order() {
        assert!(LogLevel::Severe < LogLevel::Debug);
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_u8(level as u8), level);
            assert!(format!("{level}").contains(level.label()));
        }
    }

    #[test]
    fn messages_are_cached_until_flush() {
        let (logger, buffer) = make_logger();
        logger.log(CATEGORY, LogLevel::Info, log_location!(), "cached");
        assert!(buffer.contents().is_empty());

        logger.flush();
        let contents = buffer.contents();
        assert!(contents.contains("[test(logging)]"));
        assert!(contents.ends_with("cached\n"));
    }

    #[test]
    fn always_flush_writes_whole_lines() {
        let (logger, buffer) = make_logger();
        logger.set_always_flush(true);
        let value = 3;
        logger.log_fmt(CATEGORY, LogLevel::Warning, log_location!(), format_args!("value {value}"));
        assert!(buffer.contents().ends_with("value 3\n"));
    }

    #[test]
    fn location_only_for_errors_and_debug() {
        let (logger, buffer) = make_logger();
        logger.set_always_flush(true);

        logger.log(CATEGORY, LogLevel::Info, log_location!(test_func), "no location");
        assert!(!buffer.contents().contains("test_func"));

        logger.log(CATEGORY, LogLevel::Error, log_location!(test_func), "with location");
        assert!(buffer.contents().contains("test_func"));
        assert!(buffer.contents().contains(file!()));
    }

    #[test]
    fn max_level_filters() {
        let (logger, buffer) = make_logger();
        logger.set_always_flush(true);
        logger.set_max_level(LogLevel::Warning);
        assert_eq!(logger.max_level(), LogLevel::Warning);
        assert!(!logger.is_enabled(LogLevel::Info));

        logger.log(CATEGORY, LogLevel::Debug, log_location!(), "hidden");
        logger.log(CATEGORY, LogLevel::Error, log_location!(), "shown");
        let contents = buffer.contents();
        assert!(!contents.contains("hidden"));
        assert!(contents.contains("shown"));
    }

    #[test]
    fn writer_slots_are_limited() {
        let logger = Logger::new();
        logger.set_log_to_console(false);
        for i in 0..MAX_WRITERS {
            assert_eq!(logger.add_writer(Box::new(io::sink())).ok(), Some(i));
        }
        assert!(logger.add_writer(Box::new(io::sink())).is_err());
        assert!(logger.remove_writer(3).is_some());
        assert!(logger.remove_writer(3).is_none());
        assert!(logger.remove_writer(42).is_none());
        assert_eq!(logger.add_writer(Box::new(io::sink())).ok(), Some(3));
    }
}
