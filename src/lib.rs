//! Read board identity data from I2C identity EEPROMs.
//!
//! Embedded boards commonly carry a small I2C EEPROM holding the board's
//! identity: serial number, MAC address(es), and hardware revision. Two
//! generations of the binary layout exist in the field, a versioned
//! "current" layout and an unversioned "legacy" one, and the revision
//! field is encoded differently in each. This crate detects which layout
//! a board carries, caches the result, and decodes the identity fields
//! accordingly.
//!
//! # Quick Start
//!
//! ```no_run
//! use idprom::{BusId, I2cController, IdpromDevice, Result};
//! # struct Smbus;
//! # impl I2cController for Smbus {
//! #     fn current_bus(&self) -> BusId { 0 }
//! #     fn select_bus(&mut self, _bus: BusId) {}
//! #     fn read(&mut self, _addr: u8, _offset: u32, _len: u8, _buf: &mut [u8]) -> Result<()> { Ok(()) }
//! # }
//! let mut idprom = IdpromDevice::new(Smbus);
//!
//! if let Some(serial) = idprom.serial_number()? {
//!     println!("serial:   {serial}");
//! }
//! println!("MAC:      {}", idprom.mac_addr()?);
//! println!("revision: {}", idprom.board_rev()?);
//! # Ok::<(), idprom::Error>(())
//! ```
//!
//! # Features
//!
//! - **Layout detection**: The version byte is read once per device
//!   context and cached; unversioned EEPROMs classify as legacy.
//! - **Typed accessors**: Serial number, MAC address, and board revision
//!   with explicit errors ([`Error::LayoutUnresolved`] vs [`Error::Bus`]).
//! - **Lenient accessors**: Blank-identity degradation for board-init
//!   code that must come up with or without a programmed EEPROM.
//! - **Two EEPROMs**: A secondary NIC-adjacent EEPROM is read with the
//!   same contract on its own bus.
//! - **Bus restoration**: The previously selected bus is restored after
//!   every transaction, error paths included.
//! - **`embedded-hal` integration**: Adapt any `embedded_hal::i2c::I2c`
//!   bus via the `embedded-hal` feature (the `hal` module).

pub mod bus;
pub mod constants;
pub mod context;
pub mod eeprom;
pub mod error;
#[cfg(feature = "embedded-hal")]
pub mod hal;
pub mod types;

// ---- Convenience re-exports ----

pub use bus::{BusId, I2cController};
pub use context::{EepromConfig, IdpromDevice};
pub use error::{Error, Result};
pub use types::{BoardRev, Layout, MacAddr, SerialNumber};
