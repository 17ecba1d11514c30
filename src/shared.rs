//! A sink that can be reached from anywhere
//!
//! Wrap your sink in a [`Shared`] and place it in a `static`. Then, any module
//! can print to it by name:
//!
//! ```no_run
//! use core::fmt;
//! use debug_print::{debug_pln, debug_printf, Print, Shared};
//!
//! struct Uart;
//! impl Print for Uart {
//!     fn write_bytes(&mut self, bytes: &[u8]) -> fmt::Result {
//!         // ...
//! #       let _ = bytes;
//!         Ok(())
//!     }
//! }
//!
//! static SERIAL: Shared<Uart> = Shared::new(Uart);
//!
//! fn set_direction(gear: u8) {
//!     debug_printf!(&SERIAL; "gear {}", gear);
//!     debug_pln!(&SERIAL);
//! }
//! # set_direction(3);
//! ```

use core::{cell::RefCell, fmt};

use cortex_m::interrupt::{self, Mutex};

use crate::{Print, Printable, PrintableWith};

/// Interrupt-safe access to a sink.
///
/// Each print through a `&Shared` runs in a critical section, so one message
/// is never interleaved with another. If you print from within
/// [`with`](Shared::with), that nested print fails instead of deadlocking.
pub struct Shared<S> {
    sink: Mutex<RefCell<S>>,
}

impl<S> Shared<S> {
    pub const fn new(sink: S) -> Self {
        Shared {
            sink: Mutex::new(RefCell::new(sink)),
        }
    }

    /// Interrupt-safe, mutable access to the sink
    ///
    /// Returns `None` if the sink is already borrowed by an enclosing
    /// call.
    pub fn with<R>(&self, func: impl FnOnce(&mut S) -> R) -> Option<R> {
        interrupt::free(|cs| with_borrowed(self.sink.borrow(cs), func))
    }

    /// Runs one whole message in one critical section.
    fn print_locked(&self, func: impl FnOnce(&mut S) -> fmt::Result) -> fmt::Result {
        interrupt::free(|cs| print_borrowed(self.sink.borrow(cs), func))
    }
}

fn with_borrowed<S, R>(cell: &RefCell<S>, func: impl FnOnce(&mut S) -> R) -> Option<R> {
    let mut sink = cell.try_borrow_mut().ok()?;
    Some(func(&mut *sink))
}

fn print_borrowed<S>(cell: &RefCell<S>, func: impl FnOnce(&mut S) -> fmt::Result) -> fmt::Result {
    with_borrowed(cell, func).unwrap_or_else(|| {
        warn!("Shared sink is already in use");
        Err(fmt::Error)
    })
}

impl<S: Print> Print for &Shared<S> {
    fn write_bytes(&mut self, bytes: &[u8]) -> fmt::Result {
        self.print_locked(|sink| sink.write_bytes(bytes))
    }

    fn print1<T: Printable + ?Sized>(&mut self, value: &T) -> fmt::Result {
        self.print_locked(|sink| sink.print1(value))
    }

    fn print2<T: PrintableWith + ?Sized>(&mut self, value: &T, selector: u32) -> fmt::Result {
        self.print_locked(|sink| sink.print2(value, selector))
    }

    fn println1<T: Printable + ?Sized>(&mut self, value: &T) -> fmt::Result {
        self.print_locked(|sink| sink.println1(value))
    }

    fn println2<T: PrintableWith + ?Sized>(&mut self, value: &T, selector: u32) -> fmt::Result {
        self.print_locked(|sink| sink.println2(value, selector))
    }

    fn printf(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        self.print_locked(|sink| sink.printf(args))
    }
}

#[cfg(test)]
mod test {
    use super::{print_borrowed, with_borrowed};
    use crate::{testing::Capture, Print};
    use core::{cell::RefCell, fmt};

    #[test]
    fn message_written_while_borrowed() {
        let cell = RefCell::new(Capture::new());
        assert_eq!(print_borrowed(&cell, |sink| sink.println2(&10, 16)), Ok(()));
        assert_eq!(print_borrowed(&cell, |sink| sink.print1("ok")), Ok(()));
        assert_eq!(cell.borrow().as_str(), "A\r\nok");
    }

    #[test]
    fn nested_access_is_refused() {
        let cell = RefCell::new(Capture::new());
        let nested = with_borrowed(&cell, |_| with_borrowed(&cell, |_| ()));
        assert_eq!(nested, Some(None));
    }

    #[test]
    fn nested_print_fails_without_writing() {
        let cell = RefCell::new(Capture::new());
        let nested = with_borrowed(&cell, |outer| {
            outer.print1("a").unwrap();
            print_borrowed(&cell, |inner| inner.print1("b"))
        });
        assert_eq!(nested, Some(Err(fmt::Error)));
        assert_eq!(cell.borrow().as_str(), "a");

        // The sink is usable once the enclosing borrow ends.
        assert_eq!(print_borrowed(&cell, |sink| sink.print1("c")), Ok(()));
        assert_eq!(cell.borrow().as_str(), "ac");
    }
}
