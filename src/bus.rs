//! The I2C subsystem interface and scoped EEPROM bus selection.
//!
//! The identity EEPROM hangs off a numbered bus behind a controller that
//! multiplexes several buses and tracks which one is currently active, as
//! firmware I2C subsystems and hardware muxes commonly do. [`I2cController`]
//! is the contract this crate consumes; [`BusSelection`] scopes a
//! transaction to the EEPROM's bus and restores the previously active bus
//! when it ends.

use crate::error::Result;

/// Identifier of a bus multiplexed behind an [`I2cController`].
pub type BusId = u32;

/// A multi-bus I2C controller with a current-bus notion.
///
/// Implementations are synchronous and blocking: `read` returns once the
/// transaction has completed or failed. Failures carry the controller's
/// status code in [`Error::Bus`](crate::Error::Bus). No retries are
/// performed at this level.
pub trait I2cController {
    /// The currently selected bus.
    fn current_bus(&self) -> BusId;

    /// Select `bus` as the current bus.
    fn select_bus(&mut self, bus: BusId);

    /// Read `buf.len()` bytes starting at register `offset` of the device
    /// at `device_addr` on the current bus.
    ///
    /// `addr_len` is the register address width in bytes (1 or 2).
    fn read(&mut self, device_addr: u8, offset: u32, addr_len: u8, buf: &mut [u8]) -> Result<()>;
}

/// Scoped selection of an EEPROM bus.
///
/// Construction saves the controller's current bus and switches to the
/// target; dropping restores the saved bus. The restore happens on every
/// path, including early returns after a failed read.
pub(crate) struct BusSelection<'a, C: I2cController> {
    ctrl: &'a mut C,
    saved: BusId,
}

impl<'a, C: I2cController> BusSelection<'a, C> {
    /// Switch the controller to `bus`, remembering the active bus.
    pub(crate) fn new(ctrl: &'a mut C, bus: BusId) -> Self {
        let saved = ctrl.current_bus();
        ctrl.select_bus(bus);
        Self { ctrl, saved }
    }

    /// Read from the selected bus.
    pub(crate) fn read(
        &mut self,
        device_addr: u8,
        offset: u32,
        addr_len: u8,
        buf: &mut [u8],
    ) -> Result<()> {
        self.ctrl.read(device_addr, offset, addr_len, buf)
    }
}

impl<C: I2cController> Drop for BusSelection<'_, C> {
    fn drop(&mut self) {
        self.ctrl.select_bus(self.saved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct Recorder {
        current: BusId,
        fail: bool,
    }

    impl I2cController for Recorder {
        fn current_bus(&self) -> BusId {
            self.current
        }

        fn select_bus(&mut self, bus: BusId) {
            self.current = bus;
        }

        fn read(
            &mut self,
            _device_addr: u8,
            _offset: u32,
            _addr_len: u8,
            buf: &mut [u8],
        ) -> Result<()> {
            if self.fail {
                return Err(Error::Bus(-5));
            }
            buf.fill(0xAB);
            Ok(())
        }
    }

    #[test]
    fn restores_bus_after_success() {
        let mut ctrl = Recorder {
            current: 7,
            fail: false,
        };

        let mut buf = [0u8; 2];
        {
            let mut sel = BusSelection::new(&mut ctrl, 2);
            sel.read(0x50, 0, 1, &mut buf).unwrap();
        }

        assert_eq!(buf, [0xAB, 0xAB]);
        assert_eq!(ctrl.current_bus(), 7);
    }

    #[test]
    fn restores_bus_after_failure() {
        let mut ctrl = Recorder {
            current: 7,
            fail: true,
        };

        let mut buf = [0u8; 2];
        {
            let mut sel = BusSelection::new(&mut ctrl, 2);
            assert!(sel.read(0x50, 0, 1, &mut buf).is_err());
        }

        assert_eq!(ctrl.current_bus(), 7);
    }
}
