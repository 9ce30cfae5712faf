//! Wire-level constants for the identity EEPROM.
//!
//! These describe where the identity fields live inside the EEPROM for the
//! two known layouts. Most users should not need these directly; the
//! decoders locate fields through the table in [`crate::eeprom::layout`].

use crate::bus::BusId;

// ---- I2C device defaults ----

/// Default I2C device address of the identity EEPROMs.
pub const EEPROM_I2C_ADDR: u8 = 0x50;
/// Default register address width in bytes.
pub const EEPROM_ADDR_LEN: u8 = 1;
/// Default bus number of the primary board EEPROM.
pub const DEFAULT_PRIMARY_BUS: BusId = 0;
/// Default bus number of the secondary (NIC) EEPROM.
pub const DEFAULT_SECONDARY_BUS: BusId = 1;

// ---- Layout classification ----

/// Offset of the layout version byte in the primary EEPROM.
pub(crate) const LAYOUT_VERSION_OFFSET: u32 = 44;
/// Version bytes at or above this value cannot belong to a current layout.
pub(crate) const LAYOUT_LEGACY_THRESHOLD: u8 = 0x20;

// ---- Field locations ----

/// Serial number offset, current layout.
pub(crate) const SERIAL_OFFSET: u32 = 20;
/// Serial number offset, legacy layout.
pub(crate) const SERIAL_OFFSET_LEGACY: u32 = 8;
/// Serial number length: two 32-bit words.
pub(crate) const SERIAL_LEN: usize = 8;

/// MAC address offset, current layout.
pub(crate) const MAC_ADDR_OFFSET: u32 = 4;
/// MAC address offset, legacy layout.
pub(crate) const MAC_ADDR_OFFSET_LEGACY: u32 = 0;
/// MAC address length.
pub(crate) const MAC_ADDR_LEN: usize = 6;

/// Board revision offset, current layout.
pub(crate) const BOARD_REV_OFFSET: u32 = 0;
/// Board revision offset, legacy layout.
pub(crate) const BOARD_REV_OFFSET_LEGACY: u32 = 6;
/// Board revision length.
pub(crate) const BOARD_REV_LEN: usize = 2;

// ---- Sentinels ----

/// A serial word reading all-ones marks the serial field as unprogrammed.
pub(crate) const SERIAL_ABSENT_WORD: u32 = 0xFFFF_FFFF;
