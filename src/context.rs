//! Core identity EEPROM reader and its configuration.
//!
//! [`IdpromDevice`] is the main type in this crate. It owns the I2C
//! controller, the bus/address configuration, and the cached layout
//! classification, and provides the typed field accessors plus lenient
//! wrappers for board-init code.

use std::fmt;

use log::{debug, warn};

use crate::bus::{BusId, BusSelection, I2cController};
use crate::constants::*;
use crate::eeprom::decode;
use crate::eeprom::layout::{field_spec, Field};
use crate::error::{Error, Result};
use crate::types::{BoardRev, Layout, MacAddr, SerialNumber};

/// Bus and addressing configuration for the identity EEPROMs.
///
/// The defaults match the common arrangement: the board EEPROM on bus 0
/// and the NIC EEPROM on bus 1, both at device address 0x50 with one-byte
/// register addressing.
///
/// # Example
///
/// ```
/// use idprom::EepromConfig;
///
/// let config = EepromConfig::new().primary_bus(2).addr_len(2);
/// assert_eq!(config.primary_bus, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EepromConfig {
    /// Bus carrying the primary board EEPROM.
    pub primary_bus: BusId,
    /// Bus carrying the secondary (NIC) EEPROM.
    pub secondary_bus: BusId,
    /// I2C device address of both EEPROMs.
    pub device_addr: u8,
    /// Register address width in bytes (1 or 2).
    pub addr_len: u8,
}

impl Default for EepromConfig {
    fn default() -> Self {
        Self {
            primary_bus: DEFAULT_PRIMARY_BUS,
            secondary_bus: DEFAULT_SECONDARY_BUS,
            device_addr: EEPROM_I2C_ADDR,
            addr_len: EEPROM_ADDR_LEN,
        }
    }
}

impl EepromConfig {
    /// Create a configuration with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the primary board EEPROM on `bus`.
    pub fn primary_bus(mut self, bus: BusId) -> Self {
        self.primary_bus = bus;
        self
    }

    /// Place the secondary (NIC) EEPROM on `bus`.
    pub fn secondary_bus(mut self, bus: BusId) -> Self {
        self.secondary_bus = bus;
        self
    }

    /// Use `addr` as the EEPROM device address.
    pub fn device_addr(mut self, addr: u8) -> Self {
        self.device_addr = addr;
        self
    }

    /// Use `len`-byte register addressing (1 or 2).
    pub fn addr_len(mut self, len: u8) -> Self {
        self.addr_len = len;
        self
    }
}

/// An identity EEPROM reader.
///
/// Wraps an [`I2cController`] together with the EEPROM configuration and
/// the lazily resolved [`Layout`]. All accessors take `&mut self`: each
/// read is a blocking bus transaction, and the first one resolves and
/// caches the layout classification.
///
/// # Reading identity fields
///
/// ```no_run
/// use idprom::{BusId, I2cController, IdpromDevice, Result};
/// # struct Smbus;
/// # impl I2cController for Smbus {
/// #     fn current_bus(&self) -> BusId { 0 }
/// #     fn select_bus(&mut self, _bus: BusId) {}
/// #     fn read(&mut self, _addr: u8, _offset: u32, _len: u8, _buf: &mut [u8]) -> Result<()> { Ok(()) }
/// # }
/// let mut idprom = IdpromDevice::new(Smbus);
/// if let Some(serial) = idprom.serial_number()? {
///     println!("board serial: {serial}");
/// }
/// # Ok::<(), idprom::Error>(())
/// ```
pub struct IdpromDevice<C> {
    ctrl: C,
    config: EepromConfig,
    // Resolved on the first successful version-byte read, then never
    // re-read for the lifetime of the context.
    layout: Option<Layout>,
}

impl<C> fmt::Debug for IdpromDevice<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdpromDevice")
            .field("config", &self.config)
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

impl<C: I2cController> IdpromDevice<C> {
    /// Create a reader with the default [`EepromConfig`].
    pub fn new(ctrl: C) -> Self {
        Self::with_config(ctrl, EepromConfig::default())
    }

    /// Create a reader with an explicit configuration.
    pub fn with_config(ctrl: C, config: EepromConfig) -> Self {
        Self {
            ctrl,
            config,
            layout: None,
        }
    }

    // ---- Bus access ----

    /// Read `buf.len()` bytes at `offset` from the EEPROM on `bus`,
    /// restoring the previously selected bus afterwards.
    fn read_at(&mut self, bus: BusId, offset: u32, buf: &mut [u8]) -> Result<()> {
        let device_addr = self.config.device_addr;
        let addr_len = self.config.addr_len;

        let mut sel = BusSelection::new(&mut self.ctrl, bus);
        sel.read(device_addr, offset, addr_len, buf)
    }

    // ---- Layout detection ----

    /// The EEPROM layout, resolving and caching it on first use.
    ///
    /// Resolution reads the version byte from the primary EEPROM. A failed
    /// read caches nothing, so a later call retries; after one success the
    /// version byte is never read again.
    pub fn layout(&mut self) -> Result<Layout> {
        if let Some(layout) = self.layout {
            return Ok(layout);
        }

        let mut byte = [0u8; 1];
        if let Err(err) = self.read_at(self.config.primary_bus, LAYOUT_VERSION_OFFSET, &mut byte) {
            warn!("layout version read failed: {err}");
            return Err(Error::LayoutUnresolved);
        }

        let layout = Layout::from_version_byte(byte[0]);
        debug!("EEPROM layout resolved to {layout:?} (version byte {:#04x})", byte[0]);
        self.layout = Some(layout);
        Ok(layout)
    }

    /// Resolve the layout, then read `field` from the EEPROM on `bus`.
    fn read_field(&mut self, bus: BusId, field: Field, buf: &mut [u8]) -> Result<Layout> {
        let layout = self.layout()?;
        let spec = field_spec(field, layout);
        debug_assert_eq!(buf.len(), spec.len);

        self.read_at(bus, spec.offset, buf)?;
        Ok(layout)
    }

    // ---- Typed accessors ----

    /// The board serial number, or `None` if the field is unprogrammed.
    pub fn serial_number(&mut self) -> Result<Option<SerialNumber>> {
        let mut raw = [0u8; SERIAL_LEN];
        self.read_field(self.config.primary_bus, Field::SerialNumber, &mut raw)?;
        Ok(decode::serial_number(&raw))
    }

    /// The MAC address stored in the primary board EEPROM.
    pub fn mac_addr(&mut self) -> Result<MacAddr> {
        self.mac_addr_on(self.config.primary_bus)
    }

    /// The MAC address stored in the secondary (NIC) EEPROM.
    ///
    /// The field offset still follows the layout read from the primary
    /// EEPROM; the secondary chip carries no version byte of its own.
    pub fn secondary_mac_addr(&mut self) -> Result<MacAddr> {
        self.mac_addr_on(self.config.secondary_bus)
    }

    fn mac_addr_on(&mut self, bus: BusId) -> Result<MacAddr> {
        let mut raw = [0u8; MAC_ADDR_LEN];
        self.read_field(bus, Field::MacAddr, &mut raw)?;
        Ok(decode::mac_addr(&raw))
    }

    /// The board revision.
    ///
    /// Legacy EEPROMs store the revision digit-packed; the decoded value
    /// is always the plain number (100 for revision "1.00").
    pub fn board_rev(&mut self) -> Result<BoardRev> {
        let mut raw = [0u8; BOARD_REV_LEN];
        let layout = self.read_field(self.config.primary_bus, Field::BoardRev, &mut raw)?;
        Ok(decode::board_rev(raw, layout))
    }

    // ---- Lenient accessors ----
    //
    // Board-init code treats a missing or corrupt EEPROM as a board with a
    // blank identity rather than a boot failure. These wrappers absorb
    // every failure; use the typed accessors to distinguish layout
    // resolution failures from bus errors.

    /// The serial number; zeroed on any failure or if unprogrammed.
    pub fn serial_number_or_default(&mut self) -> SerialNumber {
        match self.serial_number() {
            Ok(Some(serial)) => serial,
            Ok(None) => SerialNumber::default(),
            Err(err) => {
                warn!("serial number unavailable: {err}");
                SerialNumber::default()
            }
        }
    }

    /// The primary MAC address, or `None` on any failure.
    pub fn mac_addr_or_none(&mut self) -> Option<MacAddr> {
        self.mac_addr()
            .map_err(|err| warn!("MAC address unavailable: {err}"))
            .ok()
    }

    /// The secondary (NIC) MAC address, or `None` on any failure.
    pub fn secondary_mac_addr_or_none(&mut self) -> Option<MacAddr> {
        self.secondary_mac_addr()
            .map_err(|err| warn!("secondary MAC address unavailable: {err}"))
            .ok()
    }

    /// The board revision as a plain number, 0 on any failure.
    pub fn board_rev_or_zero(&mut self) -> u32 {
        match self.board_rev() {
            Ok(rev) => rev.value(),
            Err(err) => {
                warn!("board revision unavailable: {err}");
                0
            }
        }
    }

    // ---- Access to the underlying pieces ----

    /// The active configuration.
    pub fn config(&self) -> &EepromConfig {
        &self.config
    }

    /// A reference to the underlying controller.
    pub fn controller(&self) -> &C {
        &self.ctrl
    }

    /// A mutable reference to the underlying controller.
    pub fn controller_mut(&mut self) -> &mut C {
        &mut self.ctrl
    }

    /// Consume the reader, returning the controller.
    pub fn into_controller(self) -> C {
        self.ctrl
    }
}
