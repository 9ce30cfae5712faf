//! Error types for the idprom crate.

use crate::bus::BusId;

/// The error type for identity EEPROM operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The EEPROM layout version could not be resolved.
    ///
    /// The classification read failed, so none of the layout-dependent
    /// fields can be located. The underlying bus status is logged by the
    /// detector rather than carried here; a later accessor call retries
    /// the resolution.
    #[error("EEPROM layout version is unresolved")]
    LayoutUnresolved,

    /// An I2C transaction failed with a controller status code.
    #[error("I2C bus error: status {0}")]
    Bus(i32),

    /// The selected bus number is not known to the controller.
    #[error("unknown I2C bus {0}")]
    UnknownBus(BusId),

    /// Invalid argument(s) were provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// A specialized `Result` type for identity EEPROM operations.
pub type Result<T> = std::result::Result<T, Error>;
