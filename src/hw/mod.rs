// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

pub mod can;
pub mod pins;
pub mod port;
pub mod registers;
pub mod status;

pub use can::CanController;
pub use port::{CanPort, PortBinding};
pub use status::{tx_buffer_available, tx_interrupt_pending, TxBuffer, TxGate, TxStatus};
