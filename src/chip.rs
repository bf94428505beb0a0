//! Si4463 Command Protocol
//!
//! Bit-exact framing for the four chip commands the scheduling core uses,
//! plus the [`CommandBus`] seam behind which the SPI transport lives. Each
//! command is a fixed-size request, optionally followed by a fixed-size
//! response; the transport guarantees the exchange completes well inside one
//! bit period, so callers treat it as atomic.
//!
//! Property-set requests carry `group / count / start` addressing followed by
//! up to [`SET_PROPERTY_MAX_DATA`] data bytes.

use heapless::Vec;

/// Command opcodes
pub mod cmd {
    /// Write one or more properties within a group
    pub const SET_PROPERTY: u8 = 0x11;
    /// Map the function of each chip pin
    pub const GPIO_PIN_CFG: u8 = 0x13;
    /// Read pending/current/error status bitfields
    pub const GET_CHIP_STATUS: u8 = 0x23;
    /// Begin a transmission
    pub const START_TX: u8 = 0x31;
}

/// Property group and offset addresses
pub mod prop {
    /// Modem configuration group
    pub const GROUP_MODEM: u8 = 0x20;
    /// Modulation type / source selection within the modem group
    pub const MODEM_MOD_TYPE: u8 = 0x00;
    /// Power amplifier group
    pub const GROUP_PA: u8 = 0x22;
    /// First PA property (mode, level, bias/clkduty follow consecutively)
    pub const PA_MODE: u8 = 0x00;
    /// First TX filter coefficient property within the PA group
    pub const TX_FILTER_COEFF_START: u8 = 0x0F;
}

/// `MODEM_MOD_TYPE` bit values
pub mod mod_type {
    /// TX bits sourced from GPIO1
    pub const DIRECT_GPIO1: u8 = 0x20;
    /// Synchronous direct mode (bits clocked by the chip)
    pub const DIRECT_SYNC: u8 = 0x08;
    /// 2-GFSK modulation
    pub const MOD_2GFSK: u8 = 0x03;
}

/// Chip pin function codes for `GPIO_PIN_CFG`
pub mod pin_fn {
    /// Leave the pin as currently configured
    pub const NO_CHANGE: u8 = 0x00;
    /// High-impedance input (TX modulation source)
    pub const INPUT: u8 = 0x04;
    /// Received data bit stream
    pub const RX_DATA: u8 = 0x14;
    /// Sync word detect strobe
    pub const SYNC_WORD_DETECT: u8 = 0x1A;
    /// RX/TX data clock
    pub const RX_TX_DATA_CLK: u8 = 0x1F;
    /// High while receiving, low while transmitting
    pub const RX_STATE: u8 = 0x21;
}

/// TX filter coefficients for BT = 0.4 Gaussian shaping.
///
/// Needed to meet the AIS regulatory spectral mask; the chip default is
/// BT = 0.5.
pub const TX_FILTER_COEFF_BT04: [u8; 9] = [
    0x52, 0x4F, 0x45, 0x37, 0x28, 0x1A, 0x10, 0x09, 0x04,
];

/// `START_TX` condition code forcing an unmodulated carrier
pub const CONDITION_CARRIER: u8 = 8 << 4;

/// Maximum data bytes in one `SET_PROPERTY` request
pub const SET_PROPERTY_MAX_DATA: usize = 12;

/// Largest request frame the protocol produces
const MAX_REQUEST_LEN: usize = 1 + 3 + SET_PROPERTY_MAX_DATA;

/// Synchronous command/response transport to the RF chip.
///
/// Implementations own the wire mechanics (chip select, CTS polling,
/// response readback). `exchange` blocks until `response` is filled; an
/// empty response slice means the command returns nothing.
pub trait CommandBus {
    /// Transport-level error type
    type Error;

    /// Send `request` (opcode plus parameters) and read back `response`
    ///
    /// # Errors
    /// Returns the transport's error if the exchange could not complete.
    fn exchange(&mut self, request: &[u8], response: &mut [u8]) -> Result<(), Self::Error>;
}

/// Chip pin function map written by `GPIO_PIN_CFG`.
///
/// The chip echoes the resulting configuration in a same-sized reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct GpioPinCfg {
    /// GPIO0 function
    pub gpio0: u8,
    /// GPIO1 function
    pub gpio1: u8,
    /// GPIO2 function
    pub gpio2: u8,
    /// GPIO3 function
    pub gpio3: u8,
    /// NIRQ pin function
    pub nirq: u8,
    /// SDO pin function
    pub sdo: u8,
    /// Drive strength / general configuration byte
    pub gen_config: u8,
}

impl GpioPinCfg {
    /// Pin map for transmit: GPIO1 becomes the modulation input.
    ///
    /// GPIO2 stays on the data clock, GPIO3 indicates RX/TX state and NIRQ
    /// keeps signalling sync word detect for the receive chain.
    #[must_use]
    pub const fn transmit() -> Self {
        Self {
            gpio0: pin_fn::NO_CHANGE,
            gpio1: pin_fn::INPUT,
            gpio2: pin_fn::RX_TX_DATA_CLK,
            gpio3: pin_fn::RX_STATE,
            nirq: pin_fn::SYNC_WORD_DETECT,
            sdo: pin_fn::NO_CHANGE,
            gen_config: pin_fn::NO_CHANGE,
        }
    }

    /// Pin map for receive: GPIO1 carries the RX data bit stream
    #[must_use]
    pub const fn receive() -> Self {
        Self {
            gpio0: pin_fn::NO_CHANGE,
            gpio1: pin_fn::RX_DATA,
            gpio2: pin_fn::RX_TX_DATA_CLK,
            gpio3: pin_fn::RX_STATE,
            nirq: pin_fn::SYNC_WORD_DETECT,
            sdo: pin_fn::NO_CHANGE,
            gen_config: pin_fn::NO_CHANGE,
        }
    }

    /// Request parameter bytes, in wire order
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 7] {
        [
            self.gpio0, self.gpio1, self.gpio2, self.gpio3, self.nirq, self.sdo, self.gen_config,
        ]
    }

    /// Decode the chip's echo reply
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 7]) -> Self {
        Self {
            gpio0: bytes[0],
            gpio1: bytes[1],
            gpio2: bytes[2],
            gpio3: bytes[3],
            nirq: bytes[4],
            sdo: bytes[5],
            gen_config: bytes[6],
        }
    }
}

/// `START_TX` parameters.
///
/// The scheduling core always transmits with zero length and zero delay:
/// the bit stream is driven externally through GPIO1 rather than from the
/// chip FIFO.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StartTxOptions {
    /// Chip-level channel ordinal
    pub channel: u8,
    /// Start condition code
    pub condition: u8,
    /// FIFO transmit length (unused in direct mode)
    pub tx_len: u16,
    /// Start delay (unused in direct mode)
    pub tx_delay: u8,
    /// Repeat count (unused in direct mode)
    pub repeats: u8,
}

impl StartTxOptions {
    /// Options for a GPIO-driven direct-mode transmission
    #[must_use]
    pub const fn direct_mode(channel: u8) -> Self {
        Self {
            channel,
            condition: 0,
            tx_len: 0,
            tx_delay: 0,
            repeats: 0,
        }
    }

    /// Options forcing an unmodulated test carrier
    #[must_use]
    pub const fn unmodulated_carrier(channel: u8) -> Self {
        Self {
            condition: CONDITION_CARRIER,
            ..Self::direct_mode(channel)
        }
    }

    /// Request parameter bytes, in wire order
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 6] {
        [
            self.channel,
            self.condition,
            (self.tx_len >> 8) as u8,
            self.tx_len as u8,
            self.tx_delay,
            self.repeats,
        ]
    }
}

/// `GET_CHIP_STATUS` reply bitfields
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ChipStatus {
    /// Latched-pending status bits
    pub pending: u8,
    /// Current status bits
    pub current: u8,
    /// Last command error code
    pub error: u8,
}

impl ChipStatus {
    /// CMD_ERROR bit within the `current` field
    pub const CMD_ERROR: u8 = 0x08;

    /// Decode the reply bytes
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self {
            pending: bytes[0],
            current: bytes[1],
            error: bytes[2],
        }
    }

    /// Check whether the last command was rejected by the chip
    #[must_use]
    pub const fn command_failed(&self) -> bool {
        self.current & Self::CMD_ERROR != 0
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ChipStatus {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "status {=u8:02x} {=u8:02x} {=u8:02x}",
            self.pending,
            self.current,
            self.error
        );
    }
}

/// Write consecutive properties starting at `group:start`.
///
/// # Errors
/// Propagates the transport error.
///
/// # Panics
/// Debug builds panic if `data` exceeds [`SET_PROPERTY_MAX_DATA`] bytes;
/// the chip cannot accept longer runs in one command.
pub fn set_property<B: CommandBus>(
    bus: &mut B,
    group: u8,
    start: u8,
    data: &[u8],
) -> Result<(), B::Error> {
    debug_assert!(data.len() <= SET_PROPERTY_MAX_DATA);

    let mut request: Vec<u8, MAX_REQUEST_LEN> = Vec::new();
    let _ = request.push(cmd::SET_PROPERTY);
    let _ = request.push(group);
    let _ = request.push(data.len() as u8);
    let _ = request.push(start);
    let _ = request.extend_from_slice(data);

    bus.exchange(&request, &mut [])
}

/// Apply a pin function map, returning the chip's echo of the result.
///
/// # Errors
/// Propagates the transport error.
pub fn gpio_pin_cfg<B: CommandBus>(bus: &mut B, cfg: &GpioPinCfg) -> Result<GpioPinCfg, B::Error> {
    let mut request: Vec<u8, MAX_REQUEST_LEN> = Vec::new();
    let _ = request.push(cmd::GPIO_PIN_CFG);
    let _ = request.extend_from_slice(&cfg.as_bytes());

    let mut reply = [0u8; 7];
    bus.exchange(&request, &mut reply)?;
    Ok(GpioPinCfg::from_bytes(reply))
}

/// Issue `START_TX` with the given options.
///
/// # Errors
/// Propagates the transport error. Chip-level rejection is reported
/// separately through [`get_chip_status`].
pub fn start_tx<B: CommandBus>(bus: &mut B, options: &StartTxOptions) -> Result<(), B::Error> {
    let mut request: Vec<u8, MAX_REQUEST_LEN> = Vec::new();
    let _ = request.push(cmd::START_TX);
    let _ = request.extend_from_slice(&options.as_bytes());

    bus.exchange(&request, &mut [])
}

/// Read the chip status bitfields.
///
/// # Errors
/// Propagates the transport error.
pub fn get_chip_status<B: CommandBus>(bus: &mut B) -> Result<ChipStatus, B::Error> {
    let mut reply = [0u8; 3];
    bus.exchange(&[cmd::GET_CHIP_STATUS], &mut reply)?;
    Ok(ChipStatus::from_bytes(reply))
}
