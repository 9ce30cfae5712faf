//! Identity EEPROM decoding: field locations and field decoders.
//!
//! The EEPROM stores three identity fields at fixed offsets that depend on
//! which of the two layouts the chip carries. This module provides:
//!
//! - [`layout`] - The declarative field location table.
//! - [`decode`] - Pure decoders from raw field bytes to domain types.
//!
//! Bus access and layout detection live on
//! [`IdpromDevice`](crate::IdpromDevice).

pub mod decode;
pub mod layout;

pub use layout::{field_spec, Field, FieldSpec};
