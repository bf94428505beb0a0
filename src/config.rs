//! System configuration and channel-access constants
//!
//! This module centralizes the fixed parameters of the AIS scheduling core:
//! TDMA slot geometry, the clear-channel assessment policy, and the default
//! channel-access throttling values. Board pin assignments are documented in
//! [`pins`] for reference; the core itself only touches pins through the
//! [`crate::radio::ports::RadioIo`] seam.

/// AIS bit rate in bits per second (GMSK, 9600 baud)
pub const BIT_RATE: u32 = 9_600;

/// Number of bit periods in one TDMA slot
pub const SLOT_BITS: u32 = 256;

/// Number of TDMA slots per frame (one frame per minute)
pub const SLOTS_PER_FRAME: u32 = 2_250;

/// Intra-slot bit position at which the receive chain latches RSSI.
///
/// The mode-switch machine evaluates clear-channel assessment on the tick
/// after this one, so a fresh RSSI reading is always available.
pub const CCA_SLOT_BIT: u32 = 20;

/// Clear-channel margin above the noise floor estimate.
///
/// A channel is judged idle when the latched RSSI is within this many dB of
/// the per-channel noise floor.
pub const CCA_MARGIN_DB: u8 = 12;

/// Default minimum spacing between our own transmissions, in seconds.
///
/// Channel-access fairness: even with a packet queued and a clear channel,
/// the scheduler will not key up again before this interval has elapsed.
pub const DEFAULT_MIN_TX_INTERVAL_S: u32 = 60;

/// Default maximum age of a queued packet, in seconds.
///
/// A position report older than this is stale; it is discarded rather than
/// transmitted.
pub const DEFAULT_MAX_PACKET_AGE_S: u32 = 120;

/// Maximum AIS frame length in bits (message, stuffing, flags and ramp)
pub const MAX_PACKET_BITS: usize = 256;

/// Packet payload capacity in bytes
pub const MAX_PACKET_BYTES: usize = MAX_PACKET_BITS / 8;

/// Pin assignments for GPIO
pub mod pins {
    //! Board pin roles matching the schematic.
    //!
    //! These are documentation only; the integrating firmware owns the pin
    //! objects and exposes them through `RadioIo`.

    /// SPI chip select for the Si4463
    pub const RF_CS: &str = "PA4";

    /// Si4463 shutdown line
    pub const RF_SDN: &str = "PB0";

    /// Si4463 GPIO1: RX data out / TX modulation in (direction switched)
    pub const RF_DATA: &str = "PB1";

    /// Si4463 GPIO2: recovered bit clock
    pub const RF_BIT_CLOCK: &str = "PB2";

    /// Si4463 GPIO3: RX/TX state indicator
    pub const RF_STATE: &str = "PB10";

    /// Si4463 NIRQ: sync word detect
    pub const RF_NIRQ: &str = "PB11";

    /// P.A. bias enable (MOSFET gate supply for the transmit amplifier)
    pub const PA_BIAS_EN: &str = "PA8";

    /// Status LED blinked on each completed transmission
    pub const LED_TX: &str = "PC13";
}
