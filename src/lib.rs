//! Debug print macros for microcontroller serial output
//!
//! `debug-print` provides the [`debug_p!`], [`debug_pln!`], [`debug_printf!`],
//! and [`debug_trace!`] macros. They forward their arguments to a [`Print`]
//! sink, like a UART or a USB serial port, choosing the sink primitive by the
//! number of arguments at the call site.
//!
//! ```
//! use core::fmt;
//! use debug_print::{debug_p, debug_pln, debug_printf, Print};
//!
//! struct Serial;
//!
//! impl Print for Serial {
//!     fn write_bytes(&mut self, bytes: &[u8]) -> fmt::Result {
//!         // Write the bytes to your UART...
//! #       let _ = bytes;
//!         Ok(())
//!     }
//! }
//!
//! let mut serial = Serial;
//! debug_p!(serial; "register: 0x");
//! debug_pln!(serial; 0x2Au8, debug_print::HEX); // "register: 0x2A\r\n"
//! debug_printf!(serial; "{} + {} = {}\r\n", 1, 2, 1 + 2);
//! ```
//!
//! # Compiling it all out
//!
//! Enable the `silent` feature to remove every debug print from your program.
//! Silent calls generate no code and never evaluate their arguments. Check
//! [`ENABLED`] if you need to know which way the crate was built.
//!
//! # Sinks
//!
//! Implement [`Print`] for your own output, or use one of the provided sinks:
//!
//! - [`Shared`] makes any sink reachable from a `static`.
//! - `ItmSink` writes to a Cortex-M ITM stimulus port. Requires the `itm` feature.
//! - `UsbSerialSink` writes to a `usbd-serial` port. Requires the `usb-serial` feature.

#![no_std]

#[macro_use]
mod log;

mod macros;
mod print;
mod printable;
mod shared;

#[cfg(feature = "itm")]
mod itm;
#[cfg(feature = "usb-serial")]
mod usb_serial;

#[cfg(test)]
mod testing;

pub use print::{Print, LINE_ENDING};
pub use printable::{
    Printable, PrintableWith, BIN, BYTE, DEC, DEFAULT_FLOAT_DIGITS, HEX, MAX_FLOAT_DIGITS, OCT,
};
pub use shared::Shared;

#[cfg(feature = "itm")]
pub use itm::ItmSink;
#[cfg(feature = "usb-serial")]
pub use usb_serial::UsbSerialSink;

/// `true` unless this crate was built with the `silent` feature.
pub const ENABLED: bool = !cfg!(feature = "silent");

#[cfg(test)]
mod test {
    #[test]
    fn enabled_tracks_silent_feature() {
        assert_eq!(super::ENABLED, !cfg!(feature = "silent"));
    }
}
