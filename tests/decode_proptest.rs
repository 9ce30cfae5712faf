//! Property-based tests for layout classification and field decoding.
//!
//! Uses `proptest` to sweep the classification and decoding rules over
//! their full input domains.

use idprom::eeprom::decode;
use idprom::{Layout, SerialNumber};
use proptest::prelude::*;

proptest! {
    /// The version byte classifies as legacy exactly for 0 and >= 0x20.
    #[test]
    fn classification_matches_rule(byte in any::<u8>()) {
        let layout = Layout::from_version_byte(byte);
        let legacy = byte == 0 || byte >= 0x20;

        prop_assert_eq!(layout.is_legacy(), legacy);
        if !legacy {
            prop_assert_eq!(layout, Layout::Current(byte));
        }
    }

    /// Current-layout revisions decode unchanged.
    #[test]
    fn current_revision_is_identity(raw in any::<u16>()) {
        let rev = decode::board_rev(raw.to_le_bytes(), Layout::Current(1));
        prop_assert_eq!(rev.value(), raw as u32);
    }

    /// Legacy revisions round-trip: a field whose hex digits spell a
    /// decimal number decodes to that number.
    #[test]
    fn legacy_revision_digit_round_trip(rev in 0u32..=9999) {
        let raw = u16::from_str_radix(&rev.to_string(), 16).unwrap();
        let decoded = decode::board_rev(raw.to_le_bytes(), Layout::Legacy);
        prop_assert_eq!(decoded.value(), rev);
    }

    /// A serial is populated only when both words are valid.
    #[test]
    fn serial_requires_both_words_valid(low in any::<u32>(), high in any::<u32>()) {
        let mut raw = [0u8; 8];
        raw[..4].copy_from_slice(&low.to_le_bytes());
        raw[4..].copy_from_slice(&high.to_le_bytes());

        let decoded = decode::serial_number(&raw);
        if low != 0xFFFF_FFFF && high != 0xFFFF_FFFF {
            prop_assert_eq!(decoded, Some(SerialNumber { low, high }));
        } else {
            prop_assert_eq!(decoded, None);
        }
    }

    /// MAC decoding is a plain copy of the 6 field bytes.
    #[test]
    fn mac_is_uninterpreted(octets in any::<[u8; 6]>()) {
        prop_assert_eq!(decode::mac_addr(&octets).octets(), octets);
    }
}
