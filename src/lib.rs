//! AIS Transceiver Firmware Core
//!
//! This library implements the transmit/receive scheduling core of a VHF
//! maritime AIS (Automatic Identification System) transceiver built on a
//! half-duplex Si4463 RF chip. It decides, tick by tick, whether the radio
//! is listening or transmitting, performs clear-channel assessment before
//! keying up, bit-bangs outgoing packets against the hardware bit clock,
//! and reconfigures chip GPIO roles and RF power on each mode transition.
//!
//! # Architecture
//!
//! The core is organized in layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SCHEDULING LAYER                          │
//! │  Mode-switch / CCA state machine  │  Slot coordinator        │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    TRANSMIT PATH                             │
//! │  TxPacket bit cursor  │  GPIO bit-banging per bit clock      │
//! ├─────────────────────────────────────────────────────────────┤
//! │                 CHIP COMMAND PROTOCOL                        │
//! │  SET_PROPERTY │ GPIO_PIN_CFG │ START_TX │ GET_CHIP_STATUS    │
//! ├─────────────────────────────────────────────────────────────┤
//! │                 COLLABORATOR SEAMS                           │
//! │  CommandBus │ ReceiveChain │ NoiseFloorSource │ RadioIo      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The receive chain (bit/slot timing, RSSI and packet capture), the
//! per-channel noise floor estimator, the UTC clock source and the SPI
//! transport all live in the embedding firmware and are reached through
//! the traits in [`radio::ports`] and [`chip`].
//!
//! # Design Principles
//!
//! - **Single writer**: exactly one [`radio::transceiver::Transceiver`]
//!   owns the radio mode and the assigned TX packet
//! - **Composition over inheritance**: shared bit/slot bookkeeping is
//!   delegated to a [`radio::ports::ReceiveChain`] collaborator
//! - **Type-driven design**: channel and power tables are fixed const data
//!   indexed by small enums
//! - **Testable without hardware**: every hardware touchpoint is a trait
//!   that host tests replace with fakes
//! - **Explicit error handling**: all fallible chip exchanges return
//!   `Result` over the transport's error type

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

#[macro_use]
mod fmt;

/// Si4463 Command Protocol
///
/// Bit-exact command frames and the transport seam to the RF chip.
pub mod chip;

/// Radio Scheduling Logic
///
/// The mode-switch state machine, transmit bit path and collaborator seams.
pub mod radio;

/// Shared types used across the firmware core
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::chip::{ChipStatus, CommandBus};
    pub use crate::config::*;
    pub use crate::radio::packet::TxPacket;
    pub use crate::radio::ports::{IndicatorColor, NoiseFloorSource, RadioIo, ReceiveChain};
    pub use crate::radio::transceiver::{Transceiver, TransceiverConfig};
    pub use crate::types::*;

    // Common traits
    pub use embedded_hal::digital::OutputPin;

    // Error handling
    pub use core::result::Result;
}
