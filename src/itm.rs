//! Debug output over an ITM stimulus port
//!
//! Requires the `itm` feature. The ITM isn't available on ARMv6-M or ARMv8-M
//! Baseline processors.

use core::fmt;

use cortex_m::{itm, peripheral::itm::Stim};

use crate::Print;

/// A sink that writes to one ITM stimulus port.
///
/// ```no_run
/// use debug_print::{debug_pln, ItmSink};
///
/// let mut peripherals = cortex_m::Peripherals::take().unwrap();
/// let mut itm = ItmSink::new(&mut peripherals.ITM.stim[0]);
/// debug_pln!(itm; "hello from the ITM");
/// ```
pub struct ItmSink<'a> {
    port: &'a mut Stim,
}

impl<'a> ItmSink<'a> {
    pub fn new(port: &'a mut Stim) -> Self {
        ItmSink { port }
    }
}

impl Print for ItmSink<'_> {
    /// Blocks until the port accepts every byte.
    fn write_bytes(&mut self, bytes: &[u8]) -> fmt::Result {
        itm::write_all(self.port, bytes);
        Ok(())
    }
}
