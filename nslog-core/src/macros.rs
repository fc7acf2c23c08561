/// Formatted print through any [`Log`](crate::Log).
///
/// ```rust
/// use nslog_core::{nslog, LoggerFactory, PatternList};
///
/// let log = LoggerFactory::new(PatternList::parse("db")).create_default("cache");
/// nslog!(log, "evicted {} entries", 3).unwrap();
/// ```
#[macro_export]
macro_rules! nslog {
    ($logger:expr, $($arg:tt)+) => {
        $crate::Log::printf(&$logger, ::std::format_args!($($arg)+))
    };
}
