/// Debug-only informational logging for the board
///
/// `log!` takes `format!` arguments and disappears from release builds unless
/// the `console_logging` feature is turned on. Diagnostics that must survive a
/// release build (data gaps, map load failures) go through
/// `leptos::logging::warn!` and `leptos::logging::error!` instead.
///
/// On wasm the message lands in the browser console; in native tests and
/// benches it is printed to stdout.
///
/// # Examples
///
/// ```rust
/// let station = "14";
/// rail_board::log!("Clicked station {station}");
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:tt)+) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            leptos::logging::log!($($arg)+);
        }
    };
}
