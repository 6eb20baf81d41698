//! Logging shims.
//!
//! Forwards to the `log` facade when the `log` feature is enabled, and expands to nothing
//! otherwise so the kernels carry no logging cost in default builds.

#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)+) => {
        ::log::trace!($($arg)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)+) => {{
        if false {
            let _ = ::core::format_args!($($arg)+);
        }
    }};
}
