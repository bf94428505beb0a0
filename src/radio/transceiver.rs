//! Half-Duplex Mode-Switch State Machine
//!
//! The [`Transceiver`] owns the radio mode flag, the tuned channel and the
//! single assigned [`TxPacket`] slot, and drives every transition between
//! listening and transmitting:
//!
//! - on each bit-clock tick while receiving, it evaluates clear-channel
//!   assessment and channel-access policy and may key up;
//! - on each tick while transmitting, it shifts one packet bit onto the
//!   data pin and restores receive mode at end of frame;
//! - on each slot boundary, it retunes onto a pending packet's channel so
//!   CCA samples the noise of the channel it intends to transmit on.
//!
//! All three notification sources arrive on one execution context, so no
//! transition is ever observable half-done between ticks.

use crate::chip::{self, mod_type, prop, CommandBus, GpioPinCfg, StartTxOptions};
use crate::config::{
    CCA_MARGIN_DB, CCA_SLOT_BIT, DEFAULT_MAX_PACKET_AGE_S, DEFAULT_MIN_TX_INTERVAL_S,
};
use crate::radio::packet::TxPacket;
use crate::radio::ports::{IndicatorColor, NoiseFloorSource, RadioIo, ReceiveChain};
use crate::types::{FilterShaping, RadioMode, TxPowerLevel, VhfChannel};

/// Runtime policy configuration, chosen once at startup.
///
/// Replaces the original firmware's compile-time switches: bench test mode
/// and filter shaping are plain fields, and the channel-access intervals
/// are supplied by the integrator instead of being hard-coded per build
/// target.
#[derive(Clone, Copy, Debug)]
pub struct TransceiverConfig {
    /// Bypass clearance and throttling; for bench runs into a dummy load
    pub test_mode: bool,
    /// Gaussian pulse-shaping table loaded at configuration time
    pub shaping: FilterShaping,
    /// Power table entry applied on every transmit entry
    pub power: TxPowerLevel,
    /// Minimum spacing between own transmissions, in seconds
    pub min_tx_interval_s: u32,
    /// Age beyond which a queued packet is discarded, in seconds
    pub max_packet_age_s: u32,
}

impl Default for TransceiverConfig {
    fn default() -> Self {
        Self {
            test_mode: false,
            shaping: FilterShaping::Bt04,
            power: TxPowerLevel::default(),
            min_tx_interval_s: DEFAULT_MIN_TX_INTERVAL_S,
            max_packet_age_s: DEFAULT_MAX_PACKET_AGE_S,
        }
    }
}

/// The scheduling core of the transceiver.
///
/// Composes the receive chain, noise floor estimator and board I/O behind
/// trait seams; owns the command bus and lends it to the receive chain for
/// chip operations.
pub struct Transceiver<B, R, N, IO>
where
    B: CommandBus,
    R: ReceiveChain<B>,
    N: NoiseFloorSource,
    IO: RadioIo,
{
    bus: B,
    chain: R,
    noise: N,
    io: IO,
    config: TransceiverConfig,
    mode: RadioMode,
    channel: VhfChannel,
    tx_packet: Option<TxPacket>,
    utc: u32,
    last_tx_time: u32,
}

impl<B, R, N, IO> Transceiver<B, R, N, IO>
where
    B: CommandBus,
    R: ReceiveChain<B>,
    N: NoiseFloorSource,
    IO: RadioIo,
{
    /// Create the scheduler in receive mode on AIS channel A.
    ///
    /// The UTC time base starts unknown; no transmission is attempted until
    /// the first [`clock_event`](Self::clock_event) arrives.
    pub fn new(bus: B, chain: R, noise: N, io: IO, config: TransceiverConfig) -> Self {
        Self {
            bus,
            chain,
            noise,
            io,
            config,
            mode: RadioMode::Receiving,
            channel: VhfChannel::default(),
            tx_packet: None,
            utc: 0,
            last_tx_time: 0,
        }
    }

    /// Get the current radio mode
    #[must_use]
    pub const fn mode(&self) -> RadioMode {
        self.mode
    }

    /// Get the currently tuned channel
    #[must_use]
    pub const fn channel(&self) -> VhfChannel {
        self.channel
    }

    /// Get the UTC time of the last completed transmission
    #[must_use]
    pub const fn last_tx_time(&self) -> u32 {
        self.last_tx_time
    }

    /// Get the assigned TX packet, if any
    #[must_use]
    pub const fn assigned_packet(&self) -> Option<&TxPacket> {
        self.tx_packet.as_ref()
    }

    /// One-time chip configuration.
    ///
    /// Delegates receive setup to the chain, then selects synchronous
    /// direct mode with GPIO1 as the 2-GFSK modulation source and, when
    /// configured, loads the BT = 0.4 transmit filter coefficients.
    ///
    /// # Errors
    /// Propagates the transport error.
    pub fn configure(&mut self) -> Result<(), B::Error> {
        self.chain.configure(&mut self.bus)?;

        chip::set_property(
            &mut self.bus,
            prop::GROUP_MODEM,
            prop::MODEM_MOD_TYPE,
            &[mod_type::DIRECT_GPIO1 | mod_type::DIRECT_SYNC | mod_type::MOD_2GFSK],
        )?;

        if self.config.shaping == FilterShaping::Bt04 {
            chip::set_property(
                &mut self.bus,
                prop::GROUP_PA,
                prop::TX_FILTER_COEFF_START,
                &chip::TX_FILTER_COEFF_BT04,
            )?;
        }

        Ok(())
    }

    /// Deliver a UTC clock notification.
    ///
    /// Only updates the time base; transmit policy is evaluated on the next
    /// bit-clock tick, never here.
    pub fn clock_event(&mut self, utc: u32) {
        self.utc = utc;

        if let Some(packet) = self.tx_packet.as_ref() {
            debug!(
                "utc {}, packet stamped {}, last tx {}",
                utc,
                packet.timestamp(),
                self.last_tx_time
            );
        }
    }

    /// Take ownership of an outgoing packet and stamp it with the current
    /// UTC time.
    ///
    /// # Panics
    /// Panics if a packet is already assigned: the slot holds at most one
    /// packet, and assigning over it is a caller contract breach, not a
    /// runtime condition.
    pub fn assign_tx_packet(&mut self, mut packet: TxPacket) {
        assert!(
            self.tx_packet.is_none(),
            "TX packet assigned while one is pending"
        );
        packet.set_timestamp(self.utc);
        self.tx_packet = Some(packet);
    }

    /// Service one bit-clock tick.
    ///
    /// While receiving, the tick is delegated to the receive chain and the
    /// transmit-start policy is evaluated; while transmitting, one packet
    /// bit is shifted out.
    ///
    /// # Errors
    /// Propagates the transport error.
    pub fn on_bit_clock(&mut self) -> Result<(), B::Error> {
        match self.mode {
            RadioMode::Receiving => {
                self.chain.on_bit_clock(&mut self.bus)?;
                self.evaluate_transmit_start()
            }
            RadioMode::Transmitting => self.transmit_bit(),
        }
    }

    /// Service a slot-boundary notification.
    ///
    /// If a transmission is pending on another channel, retune now so the
    /// CCA point of a later slot samples the target channel's noise.
    ///
    /// # Errors
    /// Propagates the transport error.
    pub fn time_slot_started(&mut self, slot: u32) -> Result<(), B::Error> {
        self.chain.time_slot_started(slot);

        if self.mode == RadioMode::Receiving {
            if let Some(target) = self.tx_packet.as_ref().map(TxPacket::channel) {
                if target != self.channel {
                    self.start_receiving(target)?;
                }
            }
        }
        Ok(())
    }

    /// Drop the P.A. bias and resume listening on `channel`.
    ///
    /// The bias supply comes down before anything else touches the chip;
    /// receive is the amplifier's safe state.
    ///
    /// # Errors
    /// Propagates the transport error.
    pub fn start_receiving(&mut self, channel: VhfChannel) -> Result<(), B::Error> {
        self.io.set_pa_bias(false);
        self.configure_gpios_for_rx()?;
        self.channel = channel;
        self.chain.start_receiving(&mut self.bus, channel)
    }

    /// Apply a power table entry (group 0x22: mode, level, bias/clkduty).
    ///
    /// Used on every transmit entry and standalone for calibration.
    ///
    /// # Errors
    /// Propagates the transport error.
    pub fn set_tx_power(&mut self, level: TxPowerLevel) -> Result<(), B::Error> {
        let pa = level.settings();
        chip::set_property(
            &mut self.bus,
            prop::GROUP_PA,
            prop::PA_MODE,
            &[pa.pa_mode, pa.pa_level, pa.pa_bias_clkduty],
        )
    }

    /// Key up an unmodulated carrier on `channel` for bench or regulatory
    /// measurements. Not part of normal packet scheduling.
    ///
    /// # Errors
    /// Propagates the transport error. Chip-level rejection is reported in
    /// the returned status.
    pub fn transmit_carrier(&mut self, channel: VhfChannel) -> Result<chip::ChipStatus, B::Error> {
        self.start_receiving(channel)?;
        self.configure_gpios_for_tx()?;

        chip::set_property(
            &mut self.bus,
            prop::GROUP_MODEM,
            prop::MODEM_MOD_TYPE,
            &[mod_type::DIRECT_SYNC],
        )?;

        let options = StartTxOptions::unmodulated_carrier(channel.parameters().ordinal);
        chip::start_tx(&mut self.bus, &options)?;

        let status = chip::get_chip_status(&mut self.bus)?;
        if status.command_failed() {
            warning!(
                "carrier start rejected: {:02x} {:02x} {:02x}",
                status.pending,
                status.current,
                status.error
            );
        } else {
            let params = channel.parameters();
            info!(
                "transmitting carrier on channel {} ({} Hz)",
                params.itu,
                params.frequency_hz
            );
        }
        Ok(status)
    }

    /// Evaluate the RECEIVING → TRANSMITTING transition at this tick.
    ///
    /// Requires a packet assigned, CCA-bit alignment and channel match. In
    /// test mode that is the whole gate; otherwise the UTC time base must
    /// be known, age policy is applied before any clearance check, and the
    /// channel must be judged idle with the minimum interval elapsed.
    fn evaluate_transmit_start(&mut self) -> Result<(), B::Error> {
        let Some(packet) = self.tx_packet.as_ref() else {
            return Ok(());
        };
        if self.chain.slot_bit() != CCA_SLOT_BIT + 1 || packet.channel() != self.channel {
            return Ok(());
        }

        if self.config.test_mode {
            // Presumably firing into a dummy load; no clearance, no throttle.
            return self.start_transmitting();
        }

        if self.utc == 0 {
            return Ok(());
        }

        if self.utc.saturating_sub(packet.timestamp()) > self.config.max_packet_age_s {
            info!("discarded aged TX packet ({} bits)", packet.size());
            self.tx_packet = None;
            return Ok(());
        }

        let noise_floor = self.noise.noise_floor(self.channel);
        let channel_clear = self.chain.rssi() < noise_floor.saturating_add(CCA_MARGIN_DB);

        if channel_clear && self.utc - self.last_tx_time >= self.config.min_tx_interval_s {
            self.start_transmitting()?;
        }
        Ok(())
    }

    /// Enter transmit mode and ask the chip to key up.
    ///
    /// If the chip reports a command fault, the attempt is abandoned:
    /// receive mode is restored on the same channel and the packet stays
    /// assigned for a retry on a later slot.
    fn start_transmitting(&mut self) -> Result<(), B::Error> {
        self.mode = RadioMode::Transmitting;
        self.configure_gpios_for_tx()?;

        let options = StartTxOptions::direct_mode(self.channel.parameters().ordinal);
        chip::start_tx(&mut self.bus, &options)?;

        let status = chip::get_chip_status(&mut self.bus)?;
        if status.command_failed() {
            warning!(
                "TX start rejected: {:02x} {:02x} {:02x}",
                status.pending,
                status.current,
                status.error
            );
            self.mode = RadioMode::Receiving;
            self.start_receiving(self.channel)?;
        }
        Ok(())
    }

    /// Shift one packet bit out, or finish the frame.
    fn transmit_bit(&mut self) -> Result<(), B::Error> {
        let Some(packet) = self.tx_packet.as_mut() else {
            // Contract breach: Transmitting always implies an assigned packet.
            panic!("transmitting with no packet assigned");
        };

        if packet.eof() {
            self.complete_transmission()
        } else {
            let bit = packet.next_bit();
            self.io.write_data_bit(bit);
            Ok(())
        }
    }

    /// End-of-frame bookkeeping: the sole completion path.
    fn complete_transmission(&mut self) -> Result<(), B::Error> {
        self.last_tx_time = self.utc;
        self.io.blink(IndicatorColor::Orange);
        self.mode = RadioMode::Receiving;

        let packet = self.tx_packet.take();
        self.start_receiving(self.channel)?;

        if let Some(packet) = packet {
            info!(
                "transmitted {} bit packet on channel {}",
                packet.size(),
                self.channel.parameters().itu
            );
        }
        Ok(())
    }

    /// MCU data pin to output, chip pins to their TX roles, power applied,
    /// then the P.A. bias line up. Bias must be asserted before any RF
    /// energy reaches the amplifier.
    fn configure_gpios_for_tx(&mut self) -> Result<(), B::Error> {
        self.io.set_data_pin_output();
        chip::gpio_pin_cfg(&mut self.bus, &GpioPinCfg::transmit())?;
        self.set_tx_power(self.config.power)?;
        self.io.set_pa_bias(true);
        Ok(())
    }

    /// Mirror operation for receive; bias is handled by the caller.
    fn configure_gpios_for_rx(&mut self) -> Result<(), B::Error> {
        self.io.set_data_pin_input();
        chip::gpio_pin_cfg(&mut self.bus, &GpioPinCfg::receive())?;
        Ok(())
    }
}
