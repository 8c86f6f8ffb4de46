// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # CANopen LPC1768 CAN Binding
//!
//! This crate binds a CANopen stack to one of the two on-chip CAN controllers of the mbed LPC1768
//! board, written in Rust.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | CAN port selection, register block, transmit status predicates, controller handle |
//! | [`error`] | Configuration errors |
//!
//! ## Selecting a port
//!
//! Exactly one of the `can-port-0` (default, p9/p10 on CAN1) or `can-port-1` (p30/p29 on CAN2)
//! features must be enabled. The firmware binary refuses to build otherwise.
//!
//! ```bash
//! cargo build --release --no-default-features --features can-port-1
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

mod log;

pub mod error;
pub mod hw;

pub use error::ConfigError;
