// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Controller Area Network (CAN) handle.
//!
//! - `CanController` is the one handle to the CAN controller selected by [`CanPort`].
//! - Init code owns it; protocol code borrows it through a [`TxGate`].
//! - It only reads `SR` and `ICR`. Bit timing, frame queueing and the ISR body belong to the
//!   driver above.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::hw::port::{CanPort, PortBinding};
use crate::hw::registers::RegisterBlock;
use crate::hw::status::{TxGate, TxStatus};
use crate::{log_debug, log_info, log_warn};

static TAKEN: AtomicBool = AtomicBool::new(false);

/// Owned handle to the active CAN controller.
///
/// At most one exists at a time. Dropping it releases the controller so it can be taken again.
pub struct CanController {
    port: CanPort,
    binding: PortBinding,
}

impl CanController {
    /// Acquire the controller wired to `port`.
    ///
    /// Returns `None` if a handle is already alive.
    pub fn take(port: CanPort) -> Option<Self> {
        if TAKEN
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log_warn!("CAN controller already taken");
            return None;
        }

        let binding = port.binding();
        log_info!(
            "CAN port {=u8}: rx p{=u8}, tx p{=u8}",
            port.selector(),
            binding.rx.header,
            binding.tx.header
        );

        Some(Self { port, binding })
    }

    #[inline]
    pub fn port(&self) -> CanPort {
        self.port
    }

    #[inline]
    pub fn binding(&self) -> PortBinding {
        self.binding
    }

    /// Register block of the selected controller.
    #[inline]
    pub fn registers(&self) -> &RegisterBlock {
        // Fixed MMIO address from the port binding, valid for the life of the program
        unsafe { &*self.binding.base.ptr() }
    }

    /// Read `ICR` once at the top of the CAN interrupt handler.
    ///
    /// Reading `ICR` clears the transmit interrupt flags, so pass the returned value along instead
    /// of reading again.
    #[inline]
    pub fn capture_interrupts(&self) -> u32 {
        self.registers().icr.read()
    }

    /// Non-owning view for protocol code.
    #[inline]
    pub fn gate(&self) -> TxGate<'_, Self> {
        TxGate::new(self)
    }
}

impl TxStatus for CanController {
    #[inline]
    fn status_register(&self) -> u32 {
        self.registers().sr.read()
    }
}

impl Drop for CanController {
    fn drop(&mut self) {
        log_debug!("CAN port {=u8} released", self.port.selector());
        TAKEN.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hw::registers::PeripheralBase;

    // Single test so the process-wide flag isn't raced by the parallel test runner.
    #[test]
    fn only_one_handle_at_a_time() {
        let can = CanController::take(CanPort::Port1).expect("first take succeeds");
        assert_eq!(can.port(), CanPort::Port1);
        assert_eq!(can.binding().base, PeripheralBase::Can2);
        assert_eq!(can.binding().rx.header, 30);

        assert!(CanController::take(CanPort::Port0).is_none());
        assert!(CanController::take(CanPort::Port1).is_none());

        drop(can);

        let can = CanController::take(CanPort::Port0).expect("released after drop");
        assert_eq!(can.binding(), CanPort::Port0.binding());
    }
}
