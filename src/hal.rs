//! `embedded-hal` 1.0 integration.
//!
//! This module lets the identity EEPROM be driven through any
//! `embedded_hal::i2c::I2c` implementation. Enable the `embedded-hal`
//! feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! idprom = { version = "0.1", features = ["embedded-hal"] }
//! ```
//!
//! [`HalController`] adapts an indexed set of HAL buses to the
//! [`I2cController`] contract, with bus numbers assigned in insertion
//! order. HAL errors are mapped to errno-style status codes carried in
//! [`Error::Bus`].

use embedded_hal::i2c::{Error as _, ErrorKind, I2c, NoAcknowledgeSource};

use crate::bus::{BusId, I2cController};
use crate::error::{Error, Result};

// Errno-style status codes reported through `Error::Bus`.
const EIO: i32 = -5;
const ENXIO: i32 = -6;
const EAGAIN: i32 = -11;
const EREMOTEIO: i32 = -121;

/// [`I2cController`] over a set of `embedded-hal` I2C buses.
///
/// Buses are numbered `0..n` in the order they are added. `select_bus`
/// accepts any number; a read on a bus with no backing HAL instance fails
/// with [`Error::UnknownBus`].
pub struct HalController<I> {
    buses: Vec<I>,
    current: BusId,
}

impl<I> HalController<I> {
    /// Create a controller over the given buses; bus 0 starts current.
    pub fn new(buses: Vec<I>) -> Self {
        Self { buses, current: 0 }
    }

    /// Append a bus, returning its assigned number.
    pub fn push_bus(&mut self, bus: I) -> BusId {
        self.buses.push(bus);
        (self.buses.len() - 1) as BusId
    }
}

impl<I: I2c> I2cController for HalController<I> {
    fn current_bus(&self) -> BusId {
        self.current
    }

    fn select_bus(&mut self, bus: BusId) {
        self.current = bus;
    }

    fn read(&mut self, device_addr: u8, offset: u32, addr_len: u8, buf: &mut [u8]) -> Result<()> {
        let current = self.current;
        let bus = self
            .buses
            .get_mut(current as usize)
            .ok_or(Error::UnknownBus(current))?;

        // Register address goes out MSB first for 2-byte addressing.
        let addr_bytes = [(offset >> 8) as u8, offset as u8];
        let pointer = match addr_len {
            1 => &addr_bytes[1..],
            2 => &addr_bytes[..],
            _ => return Err(Error::InvalidArgument("addr_len must be 1 or 2")),
        };

        bus.write_read(device_addr, pointer, buf)
            .map_err(|err| Error::Bus(status_code(err.kind())))
    }
}

/// Map a HAL error kind to an errno-style status code.
fn status_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address) => ENXIO,
        ErrorKind::NoAcknowledge(_) => EREMOTEIO,
        ErrorKind::ArbitrationLoss => EAGAIN,
        _ => EIO,
    }
}
