//! Values that can be printed to a [`Print`] sink
//!
//! Integers, floats, characters, strings, and `format_args!` output are all
//! [`Printable`]. Integers and floats are also [`PrintableWith`], accepting a
//! selector: a base for integers, and a count of fractional digits for floats.

use core::fmt;

use crate::print::{Adapter, Print};

/// Write the low byte of an integer, unformatted.
pub const BYTE: u32 = 0;
pub const BIN: u32 = 2;
pub const OCT: u32 = 8;
pub const DEC: u32 = 10;
pub const HEX: u32 = 16;

/// Fractional digits used when a float is printed without a selector.
pub const DEFAULT_FLOAT_DIGITS: u32 = 2;

/// Largest count of fractional digits a float prints with.
pub const MAX_FLOAT_DIGITS: u32 = u8::MAX as u32;

/// Floats beyond this magnitude print as `ovf`.
const FLOAT_OVERFLOW: f64 = 4294967040.0;

/// A value that renders to a sink on its own.
pub trait Printable {
    fn print_to<P: Print + ?Sized>(&self, out: &mut P) -> fmt::Result;
}

/// A value that renders to a sink with a selector argument.
pub trait PrintableWith {
    fn print_with_to<P: Print + ?Sized>(&self, out: &mut P, selector: u32) -> fmt::Result;
}

impl<T: Printable + ?Sized> Printable for &T {
    fn print_to<P: Print + ?Sized>(&self, out: &mut P) -> fmt::Result {
        (**self).print_to(out)
    }
}

impl<T: PrintableWith + ?Sized> PrintableWith for &T {
    fn print_with_to<P: Print + ?Sized>(&self, out: &mut P, selector: u32) -> fmt::Result {
        (**self).print_with_to(out, selector)
    }
}

impl Printable for str {
    fn print_to<P: Print + ?Sized>(&self, out: &mut P) -> fmt::Result {
        out.write_text(self)
    }
}

impl Printable for char {
    fn print_to<P: Print + ?Sized>(&self, out: &mut P) -> fmt::Result {
        let mut utf8 = [0; 4];
        out.write_text(self.encode_utf8(&mut utf8))
    }
}

impl Printable for fmt::Arguments<'_> {
    fn print_to<P: Print + ?Sized>(&self, out: &mut P) -> fmt::Result {
        fmt::Write::write_fmt(&mut Adapter(out), *self)
    }
}

/// Maps an out-of-range base onto decimal.
fn effective_base(base: u32) -> u32 {
    if (2..=36).contains(&base) {
        base
    } else {
        DEC
    }
}

/// Writes `value` in `base`, most significant digit first.
///
/// `base` must already be in `2..=36`.
fn write_unsigned<P: Print + ?Sized>(out: &mut P, mut value: u64, base: u32) -> fmt::Result {
    // Enough for u64::MAX in base 2.
    let mut digits = [0u8; 64];
    let mut idx = digits.len();
    let base = u64::from(base);
    loop {
        idx -= 1;
        let digit = (value % base) as u8;
        digits[idx] = if digit < 10 {
            b'0' + digit
        } else {
            b'A' + digit - 10
        };
        value /= base;
        if value == 0 {
            break;
        }
    }
    out.write_bytes(&digits[idx..])
}

fn write_signed<P: Print + ?Sized>(out: &mut P, value: i64) -> fmt::Result {
    if value < 0 {
        out.write_byte(b'-')?;
    }
    write_unsigned(out, value.unsigned_abs(), DEC)
}

macro_rules! unsigned_printable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Printable for $ty {
                fn print_to<P: Print + ?Sized>(&self, out: &mut P) -> fmt::Result {
                    write_unsigned(out, *self as u64, DEC)
                }
            }

            impl PrintableWith for $ty {
                fn print_with_to<P: Print + ?Sized>(&self, out: &mut P, base: u32) -> fmt::Result {
                    if base == BYTE {
                        out.write_byte(*self as u8)
                    } else {
                        write_unsigned(out, *self as u64, effective_base(base))
                    }
                }
            }
        )*
    };
}

macro_rules! signed_printable {
    ($($ty:ty => $unsigned:ty),* $(,)?) => {
        $(
            impl Printable for $ty {
                fn print_to<P: Print + ?Sized>(&self, out: &mut P) -> fmt::Result {
                    write_signed(out, *self as i64)
                }
            }

            impl PrintableWith for $ty {
                fn print_with_to<P: Print + ?Sized>(&self, out: &mut P, base: u32) -> fmt::Result {
                    match effective_base(base) {
                        _ if base == BYTE => out.write_byte(*self as u8),
                        DEC => write_signed(out, *self as i64),
                        // Other bases show the bit pattern at the value's own width.
                        base => write_unsigned(out, *self as $unsigned as u64, base),
                    }
                }
            }
        )*
    };
}

unsigned_printable!(u8, u16, u32, u64, usize);
signed_printable!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, isize => usize);

/// Writes `value` with `digits` fractional digits, rounding half up.
///
/// `digits` saturates at [`MAX_FLOAT_DIGITS`].
fn write_float<P: Print + ?Sized>(out: &mut P, value: f64, digits: u32) -> fmt::Result {
    let digits = digits.min(MAX_FLOAT_DIGITS);
    if value.is_nan() {
        return out.write_text("nan");
    }
    if value.is_infinite() {
        return out.write_text("inf");
    }
    if value > FLOAT_OVERFLOW {
        return out.write_text("ovf");
    }
    if value < -FLOAT_OVERFLOW {
        return out.write_text("-ovf");
    }

    let mut value = value;
    if value < 0.0 {
        out.write_byte(b'-')?;
        value = -value;
    }

    let mut rounding = 0.5;
    for _ in 0..digits {
        rounding /= 10.0;
    }
    value += rounding;

    let integer = value as u64;
    let mut remainder = value - integer as f64;
    write_unsigned(out, integer, DEC)?;

    if digits > 0 {
        out.write_byte(b'.')?;
    }
    for _ in 0..digits {
        remainder *= 10.0;
        let digit = remainder as u8;
        out.write_byte(b'0' + digit.min(9))?;
        remainder -= f64::from(digit);
    }
    Ok(())
}

impl Printable for f64 {
    fn print_to<P: Print + ?Sized>(&self, out: &mut P) -> fmt::Result {
        write_float(out, *self, DEFAULT_FLOAT_DIGITS)
    }
}

impl PrintableWith for f64 {
    fn print_with_to<P: Print + ?Sized>(&self, out: &mut P, digits: u32) -> fmt::Result {
        write_float(out, *self, digits)
    }
}

impl Printable for f32 {
    fn print_to<P: Print + ?Sized>(&self, out: &mut P) -> fmt::Result {
        write_float(out, f64::from(*self), DEFAULT_FLOAT_DIGITS)
    }
}

impl PrintableWith for f32 {
    fn print_with_to<P: Print + ?Sized>(&self, out: &mut P, digits: u32) -> fmt::Result {
        write_float(out, f64::from(*self), digits)
    }
}
