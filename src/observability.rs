//! Structured diagnostics for the compression pipeline.
//!
//! The `log_metric!` macro prints one key-value line per event in debug builds
//! only; the `#[cfg(debug_assertions)]` body means the macro and every call to
//! it compile out of release builds, where the codec performs no logging at all.

/// Logs a structured key-value metric line to stdout, only in debug builds.
///
/// # Example
/// ```
/// use vbz::log_metric;
/// let written = 7;
/// log_metric!("event" = "compress", "output_bytes" = &written);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            println!("VBZ_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}
