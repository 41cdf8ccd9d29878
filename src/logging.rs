// Diagnostics go to stderr; stdout is reserved for engine commands.

use std::sync::atomic::{AtomicBool, Ordering};

/// Global verbose logging flag
pub static VERBOSE_LOGGING: AtomicBool = AtomicBool::new(false);

pub fn enable_verbose_logging() {
    VERBOSE_LOGGING.store(true, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE_LOGGING.load(Ordering::Relaxed)
}

/// Verbose log line on stderr
#[macro_export]
macro_rules! vlog {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!("[planner] {}", format!($($arg)*));
        }
    };
}
