//! Internal diagnostics, contingent on the hidden `__log` feature
//!
//! Only enable `__log` when debugging this crate, and when you're certain
//! that your logger isn't writing to the same sink that you're printing to!

#[allow(unused_macros)]
macro_rules! debug {
    ($($args:tt)*) => {
        #[cfg(feature = "__log")]
        ::__log::debug!($($args)*)
    };
}

#[allow(unused_macros)]
macro_rules! warn {
    ($($args:tt)*) => {
        #[cfg(feature = "__log")]
        ::__log::warn!($($args)*)
    };
}
