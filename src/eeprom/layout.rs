//! The field location table: where each identity field lives per layout.

use crate::constants::*;
use crate::types::Layout;

/// An identity field stored in the EEPROM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Two-word board serial number.
    SerialNumber,
    /// 6-byte MAC address.
    MacAddr,
    /// 2-byte board revision.
    BoardRev,
}

/// Location of one field within one layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Byte offset from the start of the EEPROM.
    pub offset: u32,
    /// Field length in bytes.
    pub len: usize,
}

/// Field locations, one row per field: (field, current, legacy).
///
/// Rows are ordered by `Field` discriminant.
const FIELD_TABLE: [(Field, FieldSpec, FieldSpec); 3] = [
    (
        Field::SerialNumber,
        FieldSpec {
            offset: SERIAL_OFFSET,
            len: SERIAL_LEN,
        },
        FieldSpec {
            offset: SERIAL_OFFSET_LEGACY,
            len: SERIAL_LEN,
        },
    ),
    (
        Field::MacAddr,
        FieldSpec {
            offset: MAC_ADDR_OFFSET,
            len: MAC_ADDR_LEN,
        },
        FieldSpec {
            offset: MAC_ADDR_OFFSET_LEGACY,
            len: MAC_ADDR_LEN,
        },
    ),
    (
        Field::BoardRev,
        FieldSpec {
            offset: BOARD_REV_OFFSET,
            len: BOARD_REV_LEN,
        },
        FieldSpec {
            offset: BOARD_REV_OFFSET_LEGACY,
            len: BOARD_REV_LEN,
        },
    ),
];

/// Look up where `field` lives under `layout`.
pub fn field_spec(field: Field, layout: Layout) -> FieldSpec {
    let (row_field, current, legacy) = FIELD_TABLE[field as usize];
    debug_assert_eq!(row_field, field);

    if layout.is_legacy() {
        legacy
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_rows_match_discriminants() {
        for (i, (field, _, _)) in FIELD_TABLE.iter().enumerate() {
            assert_eq!(*field as usize, i);
        }
    }

    #[test]
    fn current_layout_offsets() {
        let current = Layout::Current(1);
        assert_eq!(
            field_spec(Field::SerialNumber, current),
            FieldSpec { offset: 20, len: 8 }
        );
        assert_eq!(
            field_spec(Field::MacAddr, current),
            FieldSpec { offset: 4, len: 6 }
        );
        assert_eq!(
            field_spec(Field::BoardRev, current),
            FieldSpec { offset: 0, len: 2 }
        );
    }

    #[test]
    fn legacy_layout_offsets() {
        assert_eq!(
            field_spec(Field::SerialNumber, Layout::Legacy),
            FieldSpec { offset: 8, len: 8 }
        );
        assert_eq!(
            field_spec(Field::MacAddr, Layout::Legacy),
            FieldSpec { offset: 0, len: 6 }
        );
        assert_eq!(
            field_spec(Field::BoardRev, Layout::Legacy),
            FieldSpec { offset: 6, len: 2 }
        );
    }
}
