// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Transmit status predicates.
//!
//! The controller has three transmit buffers. `SR` reports per-buffer "released" bits and `ICR`
//! reports per-buffer "transmission complete" interrupt causes. Upstream protocol code asks two
//! questions of these registers:
//!
//! - can another frame be queued right now? ([`tx_buffer_available`])
//! - did the interrupt that just fired include a transmit completion? ([`tx_interrupt_pending`])
//!
//! Both are pure bit tests. The status register must be read fresh for every query since the
//! hardware drains buffers asynchronously.

use core::convert::Infallible;

/// SR.TBS1: transmit buffer 1 released
pub const SR_TBS1: u32 = 1 << 2;
/// SR.TBS2: transmit buffer 2 released
pub const SR_TBS2: u32 = 1 << 10;
/// SR.TBS3: transmit buffer 3 released
pub const SR_TBS3: u32 = 1 << 18;
pub const SR_TX_BUFFERS_FREE: u32 = SR_TBS1 | SR_TBS2 | SR_TBS3;

/// ICR.TI1: transmit buffer 1 complete
pub const ICR_TI1: u32 = 1 << 1;
/// ICR.TI2: transmit buffer 2 complete
pub const ICR_TI2: u32 = 1 << 9;
/// ICR.TI3: transmit buffer 3 complete
pub const ICR_TI3: u32 = 1 << 10;
pub const ICR_TX_COMPLETE: u32 = ICR_TI1 | ICR_TI2 | ICR_TI3;

/// True if at least one transmit buffer is free in the given `SR` value.
#[inline]
pub const fn tx_buffer_available(status: u32) -> bool {
    status & SR_TX_BUFFERS_FREE != 0
}

/// True if the captured `ICR` value includes any transmit-complete cause.
#[inline]
pub const fn tx_interrupt_pending(int_status: u32) -> bool {
    int_status & ICR_TX_COMPLETE != 0
}

/// One of the three hardware transmit buffers.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TxBuffer {
    Tx1,
    Tx2,
    Tx3,
}

impl TxBuffer {
    pub const ALL: [TxBuffer; 3] = [TxBuffer::Tx1, TxBuffer::Tx2, TxBuffer::Tx3];

    /// Bit in `SR` that is set while this buffer is free.
    #[inline]
    pub const fn status_mask(self) -> u32 {
        match self {
            TxBuffer::Tx1 => SR_TBS1,
            TxBuffer::Tx2 => SR_TBS2,
            TxBuffer::Tx3 => SR_TBS3,
        }
    }

    /// Bit in `ICR` set when this buffer finished transmitting.
    #[inline]
    pub const fn interrupt_mask(self) -> u32 {
        match self {
            TxBuffer::Tx1 => ICR_TI1,
            TxBuffer::Tx2 => ICR_TI2,
            TxBuffer::Tx3 => ICR_TI3,
        }
    }

    /// Zero-based index, matching `RegisterBlock::tx`.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            TxBuffer::Tx1 => 0,
            TxBuffer::Tx2 => 1,
            TxBuffer::Tx3 => 2,
        }
    }
}

/// Lowest-numbered free transmit buffer, if any.
pub fn first_free_buffer(status: u32) -> Option<TxBuffer> {
    TxBuffer::ALL
        .into_iter()
        .find(|buf| status & buf.status_mask() != 0)
}

/// Buffers whose transmit-complete cause is set in `int_status`.
pub fn completed_buffers(int_status: u32) -> impl Iterator<Item = TxBuffer> {
    TxBuffer::ALL
        .into_iter()
        .filter(move |buf| int_status & buf.interrupt_mask() != 0)
}

/// Source of live transmit status.
///
/// Implementations must hit the hardware (or the test double) on every call.
pub trait TxStatus {
    fn status_register(&self) -> u32;
}

/// Non-owning view of a CAN controller handed to protocol code at startup.
///
/// Holds only a shared reference; the controller itself stays with init code.
pub struct TxGate<'a, S: TxStatus + ?Sized> {
    source: &'a S,
}

impl<'a, S: TxStatus + ?Sized> TxGate<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Check for a free transmit buffer. Call immediately before every send.
    #[inline]
    pub fn is_free(&self) -> bool {
        tx_buffer_available(self.source.status_register())
    }

    /// Lowest-numbered free buffer right now.
    #[inline]
    pub fn free_buffer(&self) -> Option<TxBuffer> {
        first_free_buffer(self.source.status_register())
    }

    /// Non-blocking readiness poll, for use with `nb::block!`.
    pub fn poll_ready(&self) -> nb::Result<TxBuffer, Infallible> {
        self.free_buffer().ok_or(nb::Error::WouldBlock)
    }

    /// Whether an interrupt status captured by the ISR includes a transmit completion.
    #[inline]
    pub fn tx_interrupt(&self, int_status: u32) -> bool {
        tx_interrupt_pending(int_status)
    }
}

impl<'a, S: TxStatus + ?Sized> Clone for TxGate<'a, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S: TxStatus + ?Sized> Copy for TxGate<'a, S> {}
