// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! LPC17xx CAN controller register block.
//!
//! Layout follows the LPC176x/5x user manual (UM10360, chapter 16). This layer only ever reads
//! `icr` and `sr`; the rest is declared so the struct matches the hardware.

use volatile_register::{RO, RW, WO};

/// CAN1 base address.
pub const CAN1_BASE: usize = 0x4004_4000;
/// CAN2 base address.
pub const CAN2_BASE: usize = 0x4004_8000;

#[repr(C)]
pub struct TxBufferRegisters {
    /// Frame info
    pub tfi: RW<u32>,
    /// Identifier
    pub tid: RW<u32>,
    /// Data bytes 1..4
    pub tda: RW<u32>,
    /// Data bytes 5..8
    pub tdb: RW<u32>,
}

#[repr(C)]
pub struct RegisterBlock {
    /// 0x00: Mode
    pub mod_: RW<u32>,
    /// 0x04: Command
    pub cmr: WO<u32>,
    /// 0x08: Global status
    pub gsr: RW<u32>,
    /// 0x0C: Interrupt and capture. Reading clears the transmit interrupt flags.
    pub icr: RO<u32>,
    /// 0x10: Interrupt enable
    pub ier: RW<u32>,
    /// 0x14: Bus timing
    pub btr: RW<u32>,
    /// 0x18: Error warning limit
    pub ewl: RW<u32>,
    /// 0x1C: Status
    pub sr: RO<u32>,
    /// 0x20: Rx frame status
    pub rfs: RW<u32>,
    /// 0x24: Rx identifier
    pub rid: RW<u32>,
    /// 0x28: Rx data bytes 1..4
    pub rda: RW<u32>,
    /// 0x2C: Rx data bytes 5..8
    pub rdb: RW<u32>,
    /// 0x30..0x60: Transmit buffers 1..3
    pub tx: [TxBufferRegisters; 3],
}

/// Which controller's register block a port is wired to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PeripheralBase {
    Can1,
    Can2,
}

impl PeripheralBase {
    #[inline]
    pub const fn address(self) -> usize {
        match self {
            PeripheralBase::Can1 => CAN1_BASE,
            PeripheralBase::Can2 => CAN2_BASE,
        }
    }

    #[inline]
    pub const fn ptr(self) -> *const RegisterBlock {
        self.address() as *const RegisterBlock
    }
}
