//! The debug print macros
//!
//! Each macro takes the sink as its first operand, then up to two values
//! (or a format string and its arguments). The number of values selects the
//! [`Print`](crate::Print) primitive when the macro expands; there's no
//! runtime dispatch.
//!
//! Build with the `silent` feature to compile every call out. Silent calls
//! still type check their operands, but nothing executes, so side effects in
//! the arguments never happen.

/// Print zero, one, or two values, without a line ending.
///
/// ```
/// # use debug_print::{debug_p, Print};
/// # struct Serial;
/// # impl Print for Serial { fn write_bytes(&mut self, _: &[u8]) -> core::fmt::Result { Ok(()) } }
/// let mut serial = Serial;
/// debug_p!(serial);
/// debug_p!(serial; "temperature: ");
/// debug_p!(serial; 65, debug_print::HEX); // "41"
/// ```
#[cfg(not(feature = "silent"))]
#[macro_export]
macro_rules! debug_p {
    ($sink:expr $(;)?) => {{
        $crate::Print::print0(&mut $sink).ok();
    }};
    ($sink:expr; $a:expr $(,)?) => {{
        $crate::Print::print1(&mut $sink, &$a).ok();
    }};
    ($sink:expr; $a:expr, $b:expr $(,)?) => {{
        $crate::Print::print2(&mut $sink, &$a, $b).ok();
    }};
}

/// Placeholder for builds with the `silent` feature.
#[cfg(feature = "silent")]
#[macro_export]
macro_rules! debug_p {
    ($sink:expr $(;)?) => {
        if false {
            let _ = &mut $sink;
        }
    };
    ($sink:expr; $a:expr $(,)?) => {
        if false {
            let _ = (&mut $sink, &$a);
        }
    };
    ($sink:expr; $a:expr, $b:expr $(,)?) => {
        if false {
            let _ = (&mut $sink, &$a, &$b);
        }
    };
}

/// Print zero, one, or two values, followed by a line ending.
///
/// With no values, only the line ending is written.
///
/// ```
/// # use debug_print::{debug_pln, Print};
/// # struct Serial;
/// # impl Print for Serial { fn write_bytes(&mut self, _: &[u8]) -> core::fmt::Result { Ok(()) } }
/// let mut serial = Serial;
/// debug_pln!(serial; 3.14159, 3); // "3.142\r\n"
/// debug_pln!(serial);             // "\r\n"
/// ```
#[cfg(not(feature = "silent"))]
#[macro_export]
macro_rules! debug_pln {
    ($sink:expr $(;)?) => {{
        $crate::Print::println0(&mut $sink).ok();
    }};
    ($sink:expr; $a:expr $(,)?) => {{
        $crate::Print::println1(&mut $sink, &$a).ok();
    }};
    ($sink:expr; $a:expr, $b:expr $(,)?) => {{
        $crate::Print::println2(&mut $sink, &$a, $b).ok();
    }};
}

/// Placeholder for builds with the `silent` feature.
#[cfg(feature = "silent")]
#[macro_export]
macro_rules! debug_pln {
    ($sink:expr $(;)?) => {
        if false {
            let _ = &mut $sink;
        }
    };
    ($sink:expr; $a:expr $(,)?) => {
        if false {
            let _ = (&mut $sink, &$a);
        }
    };
    ($sink:expr; $a:expr, $b:expr $(,)?) => {
        if false {
            let _ = (&mut $sink, &$a, &$b);
        }
    };
}

/// Print a format string and its arguments.
///
/// The format string follows `core::fmt` syntax.
///
/// ```
/// # use debug_print::{debug_printf, Print};
/// # struct Serial;
/// # impl Print for Serial { fn write_bytes(&mut self, _: &[u8]) -> core::fmt::Result { Ok(()) } }
/// let mut serial = Serial;
/// let gear = 3;
/// debug_printf!(serial; "gear {} of {}\r\n", gear, 6);
/// ```
#[cfg(not(feature = "silent"))]
#[macro_export]
macro_rules! debug_printf {
    ($sink:expr; $($arg:tt)+) => {{
        $crate::Print::printf(&mut $sink, ::core::format_args!($($arg)+)).ok();
    }};
}

/// Placeholder for builds with the `silent` feature.
#[cfg(feature = "silent")]
#[macro_export]
macro_rules! debug_printf {
    ($sink:expr; $($arg:tt)+) => {
        if false {
            let _ = (&mut $sink, ::core::format_args!($($arg)+));
        }
    };
}

/// Like [`debug_printf!`], prefixed with the calling module and line.
///
/// `debug_trace!(serial; "{}", 3)` called from line 178 of `gearbox` prints
/// `"gearbox:178 - 3"`.
#[cfg(not(feature = "silent"))]
#[macro_export]
macro_rules! debug_trace {
    ($sink:expr; $($arg:tt)+) => {{
        $crate::Print::printf(
            &mut $sink,
            ::core::format_args!(
                "{}:{} - {}",
                ::core::module_path!(),
                ::core::line!(),
                ::core::format_args!($($arg)+),
            ),
        )
        .ok();
    }};
}

/// Placeholder for builds with the `silent` feature.
#[cfg(feature = "silent")]
#[macro_export]
macro_rules! debug_trace {
    ($sink:expr; $($arg:tt)+) => {
        if false {
            let _ = (&mut $sink, ::core::format_args!($($arg)+));
        }
    };
}

#[cfg(all(test, not(feature = "silent")))]
mod test {
    use crate::testing::Capture;
    use crate::{debug_p, debug_pln, debug_printf, debug_trace};

    #[test]
    fn print_selects_arity() {
        let mut sink = Capture::new();
        debug_p!(sink);
        assert_eq!(sink.as_str(), "");
        debug_p!(sink; "x=");
        debug_p!(sink; 65, 16);
        debug_p!(sink; 7u8,);
        assert_eq!(sink.as_str(), "x=417");
    }

    #[test]
    fn print_line_selects_arity() {
        let mut sink = Capture::new();
        debug_pln!(sink);
        assert_eq!(sink.as_str(), "\r\n");
        debug_pln!(sink; 'a');
        debug_pln!(sink; 65, 16);
        debug_pln!(sink; 2.0, 1);
        assert_eq!(sink.as_str(), "\r\na\r\n41\r\n2.0\r\n");
    }

    #[test]
    fn formatted_print() {
        let mut sink = Capture::new();
        debug_printf!(sink; "{}", 5);
        assert_eq!(sink.as_str(), "5");
    }

    #[test]
    fn sink_behind_a_reference() {
        let mut sink = Capture::new();
        let mut by_ref = &mut sink;
        debug_p!(by_ref; -3);
        debug_printf!(by_ref; "{:>3}", 1);
        assert_eq!(sink.as_str(), "-3  1");
    }

    #[test]
    fn arguments_evaluate_once() {
        let mut sink = Capture::new();
        let mut evaluated = 0;
        debug_p!(sink; {
            evaluated += 1;
            evaluated
        });
        debug_pln!(sink; {
            evaluated += 1;
            evaluated
        }, 10);
        assert_eq!(evaluated, 2);
        assert_eq!(sink.as_str(), "12\r\n");
    }

    #[test]
    fn trace_prefixes_module_and_line() {
        let mut sink = Capture::new();
        let line = line!() + 1;
        debug_trace!(sink; "{}", 3);

        let mut expected = Capture::new();
        crate::Print::printf(
            &mut expected,
            format_args!("{}:{} - 3", module_path!(), line),
        )
        .unwrap();
        assert_eq!(sink.as_str(), expected.as_str());
        assert!(sink.as_str().starts_with("debug_print::macros::test:"));
    }

    #[test]
    fn sink_errors_are_swallowed() {
        let mut sink = Capture::<2>::with_capacity();
        debug_p!(sink; "too long");
        debug_pln!(sink; 1);
        assert_eq!(sink.as_str(), "1");
    }

    #[test]
    fn reference_reaches_sink_primitives() {
        use crate::Print;

        struct LineFeed(Capture);
        impl crate::Print for LineFeed {
            fn write_bytes(&mut self, bytes: &[u8]) -> core::fmt::Result {
                self.0.write_bytes(bytes)
            }
            fn println0(&mut self) -> core::fmt::Result {
                self.write_byte(b'\n')
            }
        }

        let mut sink = LineFeed(Capture::new());
        debug_pln!(sink; 1);
        let mut by_ref = &mut sink;
        debug_pln!(by_ref; 2);
        debug_pln!(by_ref; 10, 16);
        debug_pln!(by_ref);
        assert_eq!(sink.0.as_str(), "1\n2\nA\n\n");
    }

    #[test]
    fn formatting_ignores_macros_at_call_site() {
        #[allow(unused_macros)]
        macro_rules! format_args {
            ($($args:tt)*) => {
                "replaced"
            };
        }

        let mut sink = Capture::new();
        debug_printf!(sink; "{}", 5);
        debug_trace!(sink; "{}", 6);
        assert!(sink.as_str().starts_with("5debug_print::macros::test:"));
        assert!(sink.as_str().ends_with(" - 6"));
    }
}
