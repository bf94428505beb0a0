//! Radio Scheduling Logic
//!
//! The half-duplex mode-switch state machine and its collaborators.
//! Implements the functional core of the AIS transceiver.

pub mod packet;
pub mod ports;
pub mod transceiver;
