//! Logging shims.
//!
//! On target hardware (`embedded` feature) these forward to `defmt`; on the
//! host they compile to nothing. Diagnostics are best-effort and must never
//! alter control flow, so call sites use these unconditionally.

#![allow(unused_macros)]

macro_rules! debug {
    ($($arg:expr),* $(,)?) => {{
        #[cfg(feature = "embedded")]
        ::defmt::debug!($($arg),*);
        #[cfg(not(feature = "embedded"))]
        let _ = ($(&$arg),*);
    }};
}

macro_rules! info {
    ($($arg:expr),* $(,)?) => {{
        #[cfg(feature = "embedded")]
        ::defmt::info!($($arg),*);
        #[cfg(not(feature = "embedded"))]
        let _ = ($(&$arg),*);
    }};
}

macro_rules! warning {
    ($($arg:expr),* $(,)?) => {{
        #[cfg(feature = "embedded")]
        ::defmt::warn!($($arg),*);
        #[cfg(not(feature = "embedded"))]
        let _ = ($(&$arg),*);
    }};
}
