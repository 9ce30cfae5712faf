//! Identity dump example.
//!
//! Replays a captured identity EEPROM image through the public API and
//! prints the decoded identity fields plus a hex dump of the identity
//! region.
//!
//! Usage: cargo run --example dump

use idprom::{BusId, I2cController, IdpromDevice, Result};

/// Replays a captured EEPROM image as a single-bus I2C subsystem.
struct ImageBus {
    image: [u8; 64],
    current: BusId,
}

impl I2cController for ImageBus {
    fn current_bus(&self) -> BusId {
        self.current
    }

    fn select_bus(&mut self, bus: BusId) {
        self.current = bus;
    }

    fn read(&mut self, _addr: u8, offset: u32, _addr_len: u8, buf: &mut [u8]) -> Result<()> {
        let start = offset as usize;
        buf.copy_from_slice(&self.image[start..start + buf.len()]);
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // A current-layout board: version 2, serial 0x1_0000_2A3F,
    // revision 1.23
    let mut image = [0xFFu8; 64];
    image[44] = 0x02;
    image[0..2].copy_from_slice(&123u16.to_le_bytes());
    image[4..10].copy_from_slice(&[0x00, 0x01, 0xC0, 0x1D, 0xBE, 0xEF]);
    image[20..28].copy_from_slice(&0x0000_0001_0000_2A3Fu64.to_le_bytes());

    let mut idprom = IdpromDevice::new(ImageBus { image, current: 0 });

    println!("Layout:   {:?}", idprom.layout()?);
    match idprom.serial_number()? {
        Some(serial) => println!("Serial:   {serial}"),
        None => println!("Serial:   (unprogrammed)"),
    }
    println!("MAC:      {}", idprom.mac_addr()?);
    println!("Revision: {}", idprom.board_rev()?);

    println!("\nRaw EEPROM (first 48 bytes):");
    let image = idprom.controller().image;
    for (i, chunk) in image[..48].chunks(16).enumerate() {
        print!("  {:04X}: ", i * 16);
        for b in chunk {
            print!("{b:02X} ");
        }
        println!();
    }

    Ok(())
}
