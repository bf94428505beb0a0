//! Collaborator Seams
//!
//! Traits through which the scheduling core reaches everything it does not
//! own: the inherited receive machinery, the noise floor estimator, and the
//! MCU-side pins. Host tests substitute fakes; the integrating firmware
//! supplies the real implementations.

use crate::chip::CommandBus;
use crate::types::VhfChannel;
use embedded_hal::digital::OutputPin;

/// The receive-path machinery the transceiver composes with.
///
/// Covers bit-clock sampling, slot timing and RSSI capture. The transceiver
/// owns the command bus and lends it to the chain for operations that touch
/// the chip.
pub trait ReceiveChain<B: CommandBus> {
    /// One-time chip configuration for reception
    ///
    /// # Errors
    /// Propagates the transport error.
    fn configure(&mut self, bus: &mut B) -> Result<(), B::Error>;

    /// Tune to `channel` and resume listening
    ///
    /// # Errors
    /// Propagates the transport error.
    fn start_receiving(&mut self, bus: &mut B, channel: VhfChannel) -> Result<(), B::Error>;

    /// Sample and process one received bit
    ///
    /// # Errors
    /// Propagates the transport error.
    fn on_bit_clock(&mut self, bus: &mut B) -> Result<(), B::Error>;

    /// Slot-boundary bookkeeping
    fn time_slot_started(&mut self, slot: u32);

    /// Current intra-slot bit position
    fn slot_bit(&self) -> u32;

    /// Signal strength latched at the slot's RSSI capture bit
    fn rssi(&self) -> u8;
}

/// Read-only per-channel noise floor estimate, in RSSI units
pub trait NoiseFloorSource {
    /// Current noise floor for `channel`
    fn noise_floor(&self, channel: VhfChannel) -> u8;
}

/// Status indicator color tags
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndicatorColor {
    /// Receive activity
    Green,
    /// Transmission completed
    Orange,
    /// Fault
    Red,
}

#[cfg(feature = "embedded")]
impl defmt::Format for IndicatorColor {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Green => defmt::write!(f, "GREEN"),
            Self::Orange => defmt::write!(f, "ORANGE"),
            Self::Red => defmt::write!(f, "RED"),
        }
    }
}

/// MCU-side I/O the transceiver drives directly.
///
/// The data pin is the MCU pin wired to chip GPIO1; it is an input while
/// receiving (chip drives RX bits) and an output while transmitting (MCU
/// drives the modulation stream).
pub trait RadioIo {
    /// Reconfigure the data pin as a push-pull output
    fn set_data_pin_output(&mut self);

    /// Reconfigure the data pin as a high-impedance input
    fn set_data_pin_input(&mut self);

    /// Drive one modulation bit onto the data pin
    fn write_data_bit(&mut self, bit: bool);

    /// Switch the P.A. bias supply.
    ///
    /// Must be asserted before RF energy is applied and deasserted whenever
    /// receive mode is entered; leaving it up during receive wastes power
    /// and risks amplifier damage.
    fn set_pa_bias(&mut self, enabled: bool);

    /// Fire-and-forget status blink
    fn blink(&mut self, color: IndicatorColor);
}

/// P.A. bias supply switch over a plain output pin.
///
/// Semantic wrapper boards can compose into their [`RadioIo`]
/// implementation. Starts deasserted; receive is the safe state.
pub struct PaBias<P: OutputPin> {
    pin: P,
    enabled: bool,
}

impl<P: OutputPin> PaBias<P> {
    /// Wrap a bias-enable pin, forcing it low
    pub fn new(mut pin: P) -> Self {
        let _ = pin.set_low();
        Self {
            pin,
            enabled: false,
        }
    }

    /// Raise or drop the bias supply
    pub fn set(&mut self, enabled: bool) {
        if enabled {
            self.pin.set_high().ok();
        } else {
            self.pin.set_low().ok();
        }
        self.enabled = enabled;
    }

    /// Check whether the supply is up
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }
}
