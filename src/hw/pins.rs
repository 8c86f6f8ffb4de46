// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the mbed LPC1768 board.
//!
//! Only the header pins that carry a CAN controller are listed. Each one records the LPC1768 GPIO
//! port/bit behind the header number and the PINSEL function that routes it to the controller.

use core::fmt;

/// A DIP header pin on the mbed LPC1768 board.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pin {
    /// mbed header number (`p9` is 9).
    pub header: u8,
    /// LPC1768 GPIO port.
    pub port: u8,
    /// Bit within the port.
    pub bit: u8,
    /// PINSEL function number selecting the CAN signal.
    pub function: u8,
}

impl Pin {
    /// PINSEL register index (PINSEL0..PINSEL9) that owns this pin.
    #[inline]
    pub const fn pinsel_register(&self) -> u8 {
        self.port * 2 + self.bit / 16
    }

    /// Shift of this pin's 2-bit function field inside its PINSEL register.
    #[inline]
    pub const fn pinsel_shift(&self) -> u8 {
        (self.bit % 16) * 2
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{} (P{}.{})", self.header, self.port, self.bit)
    }
}

/// p9 = P0.0, RD1
pub const P9: Pin = Pin {
    header: 9,
    port: 0,
    bit: 0,
    function: 1,
};

/// p10 = P0.1, TD1
pub const P10: Pin = Pin {
    header: 10,
    port: 0,
    bit: 1,
    function: 1,
};

/// p30 = P0.4, RD2
pub const P30: Pin = Pin {
    header: 30,
    port: 0,
    bit: 4,
    function: 2,
};

/// p29 = P0.5, TD2
pub const P29: Pin = Pin {
    header: 29,
    port: 0,
    bit: 5,
    function: 2,
};
