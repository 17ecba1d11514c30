//! Debug output over a USB CDC serial port
//!
//! Requires the `usb-serial` feature. The sink writes into the port's transmit
//! buffer; you still need to poll your USB device so that the data moves.

use core::{borrow::BorrowMut, fmt};

use usb_device::{bus::UsbBus, UsbError};
use usbd_serial::{DefaultBufferStore, SerialPort};

use crate::Print;

/// A sink that writes to a `usbd-serial` port.
///
/// When the port's transmit buffer fills, the rest of the message is dropped
/// and the write fails.
///
/// ```no_run
/// use debug_print::{debug_p, UsbSerialSink};
///
/// # fn setup<B: usb_device::bus::UsbBus>(serial: &mut usbd_serial::SerialPort<'_, B>) {
/// // let mut serial = usbd_serial::SerialPort::new(&bus_allocator);
/// let mut sink = UsbSerialSink::new(serial);
/// debug_p!(sink; 65, 16);
/// # }
/// ```
pub struct UsbSerialSink<'a, 'b, B, RS = DefaultBufferStore, WS = DefaultBufferStore>
where
    B: UsbBus,
    RS: BorrowMut<[u8]>,
    WS: BorrowMut<[u8]>,
{
    port: &'a mut SerialPort<'b, B, RS, WS>,
}

impl<'a, 'b, B, RS, WS> UsbSerialSink<'a, 'b, B, RS, WS>
where
    B: UsbBus,
    RS: BorrowMut<[u8]>,
    WS: BorrowMut<[u8]>,
{
    pub fn new(port: &'a mut SerialPort<'b, B, RS, WS>) -> Self {
        UsbSerialSink { port }
    }

    /// Release the serial port.
    pub fn release(self) -> &'a mut SerialPort<'b, B, RS, WS> {
        self.port
    }
}

impl<B, RS, WS> Print for UsbSerialSink<'_, '_, B, RS, WS>
where
    B: UsbBus,
    RS: BorrowMut<[u8]>,
    WS: BorrowMut<[u8]>,
{
    fn write_bytes(&mut self, bytes: &[u8]) -> fmt::Result {
        write_all(bytes, |chunk| self.port.write(chunk))
    }
}

/// Feeds `bytes` to `write` until they're all accepted.
///
/// Once `write` stops accepting bytes, the rest are dropped.
fn write_all(
    mut bytes: &[u8],
    mut write: impl FnMut(&[u8]) -> usb_device::Result<usize>,
) -> fmt::Result {
    while !bytes.is_empty() {
        match write(bytes) {
            Ok(0) | Err(UsbError::WouldBlock) => {
                warn!("USB serial buffer full, dropped {} bytes", bytes.len());
                return Err(fmt::Error);
            }
            Ok(written) => bytes = &bytes[written..],
            Err(_err) => {
                debug!("USB serial write failed: {:?}", _err);
                return Err(fmt::Error);
            }
        }
    }
    Ok(())
}
