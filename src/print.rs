//! The output sink contract
//!
//! [`Print`] mirrors the print primitives that a microcontroller serial
//! object exposes. Implementors supply [`write_bytes`](Print::write_bytes);
//! everything else has a default that renders through it.

use core::fmt;

use crate::printable::{Printable, PrintableWith};

/// Terminator written by the `println*` primitives.
pub const LINE_ENDING: &str = "\r\n";

/// A sink for debug output.
///
/// The zero-, one-, and two-argument primitives are distinct methods so that
/// the [`debug_p!`](crate::debug_p) and [`debug_pln!`](crate::debug_pln)
/// macros can select them by arity at compile time.
///
/// Every primitive returns the sink's `fmt::Result`. The macros discard it.
///
/// ```
/// use core::fmt;
/// use debug_print::Print;
///
/// struct Uart;
///
/// impl Print for Uart {
///     fn write_bytes(&mut self, bytes: &[u8]) -> fmt::Result {
///         for _byte in bytes {
///             // Push the byte into the transmit FIFO...
///         }
///         Ok(())
///     }
/// }
///
/// let mut uart = Uart;
/// uart.println2(&65u8, debug_print::HEX).ok();
/// ```
pub trait Print {
    /// Write all of `bytes` to the sink.
    fn write_bytes(&mut self, bytes: &[u8]) -> fmt::Result;

    /// Write a single raw byte.
    fn write_byte(&mut self, byte: u8) -> fmt::Result {
        self.write_bytes(&[byte])
    }

    /// Write a string without any terminator.
    fn write_text(&mut self, s: &str) -> fmt::Result {
        self.write_bytes(s.as_bytes())
    }

    /// The zero-argument print. There's nothing to write.
    fn print0(&mut self) -> fmt::Result {
        Ok(())
    }

    fn print1<T: Printable + ?Sized>(&mut self, value: &T) -> fmt::Result {
        value.print_to(self)
    }

    /// Print `value`, interpreting `selector` per the value's type.
    ///
    /// Integers treat the selector as a base; floats treat it as the number
    /// of fractional digits.
    fn print2<T: PrintableWith + ?Sized>(&mut self, value: &T, selector: u32) -> fmt::Result {
        value.print_with_to(self, selector)
    }

    /// Write a bare [`LINE_ENDING`].
    fn println0(&mut self) -> fmt::Result {
        self.write_text(LINE_ENDING)
    }

    fn println1<T: Printable + ?Sized>(&mut self, value: &T) -> fmt::Result {
        self.print1(value)?;
        self.println0()
    }

    fn println2<T: PrintableWith + ?Sized>(&mut self, value: &T, selector: u32) -> fmt::Result {
        self.print2(value, selector)?;
        self.println0()
    }

    /// Write formatted arguments, as produced by `format_args!`.
    fn printf(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        fmt::Write::write_fmt(&mut Adapter(self), args)
    }
}

impl<P: Print + ?Sized> Print for &mut P {
    fn write_bytes(&mut self, bytes: &[u8]) -> fmt::Result {
        (**self).write_bytes(bytes)
    }

    fn write_byte(&mut self, byte: u8) -> fmt::Result {
        (**self).write_byte(byte)
    }

    fn write_text(&mut self, s: &str) -> fmt::Result {
        (**self).write_text(s)
    }

    fn print0(&mut self) -> fmt::Result {
        (**self).print0()
    }

    fn print1<T: Printable + ?Sized>(&mut self, value: &T) -> fmt::Result {
        (**self).print1(value)
    }

    fn print2<T: PrintableWith + ?Sized>(&mut self, value: &T, selector: u32) -> fmt::Result {
        (**self).print2(value, selector)
    }

    fn println0(&mut self) -> fmt::Result {
        (**self).println0()
    }

    fn println1<T: Printable + ?Sized>(&mut self, value: &T) -> fmt::Result {
        (**self).println1(value)
    }

    fn println2<T: PrintableWith + ?Sized>(&mut self, value: &T, selector: u32) -> fmt::Result {
        (**self).println2(value, selector)
    }

    fn printf(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        (**self).printf(args)
    }
}

/// Lets `core::fmt` machinery write into a [`Print`] sink.
pub(crate) struct Adapter<'a, P: ?Sized>(pub(crate) &'a mut P);

impl<P: Print + ?Sized> fmt::Write for Adapter<'_, P> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_bytes(s.as_bytes())
    }
}
