//! Shared types used across the firmware core
//!
//! Domain types for the AIS scheduling core: the fixed VHF channel table,
//! the radio mode flag owned by the transceiver, and the power-amplifier
//! configuration table applied on transmit entry.

use core::fmt;

/// VHF AIS channel designator.
///
/// Indexes the fixed [`AIS_CHANNELS`] table. The maritime AIS service uses
/// exactly two channels, alternated by higher-layer scheduling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VhfChannel {
    /// AIS 1 (ITU channel 87B, 161.975 MHz)
    #[default]
    ChannelA,
    /// AIS 2 (ITU channel 88B, 162.025 MHz)
    ChannelB,
}

impl VhfChannel {
    /// Number of entries in the channel table
    pub const COUNT: usize = 2;

    /// Get the table index for this channel
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::ChannelA => 0,
            Self::ChannelB => 1,
        }
    }

    /// Look up the radio parameters for this channel
    #[must_use]
    pub const fn parameters(self) -> &'static Channel {
        &AIS_CHANNELS[self.index()]
    }

    /// Get the other AIS channel
    #[must_use]
    pub const fn alternate(self) -> Self {
        match self {
            Self::ChannelA => Self::ChannelB,
            Self::ChannelB => Self::ChannelA,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for VhfChannel {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "ch {}", self.parameters().itu);
    }
}

/// Per-channel radio parameters.
///
/// Immutable records looked up through [`VhfChannel`]; never constructed at
/// runtime.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    /// Chip-level channel index passed in `START_TX`/`START_RX`
    pub ordinal: u8,
    /// Human-facing ITU channel number
    pub itu: u8,
    /// Center frequency in Hz
    pub frequency_hz: u32,
}

impl Channel {
    /// Get the center frequency in MHz as floating point
    #[must_use]
    pub fn frequency_mhz(&self) -> f32 {
        self.frequency_hz as f32 / 1_000_000.0
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Channel(itu {}, {} Hz)", self.itu, self.frequency_hz)
    }
}

/// The fixed VHF AIS channel table.
///
/// Chip ordinals assume the synthesizer is programmed with a 25 kHz channel
/// raster starting at 161.725 MHz.
pub const AIS_CHANNELS: [Channel; VhfChannel::COUNT] = [
    Channel {
        ordinal: 10,
        itu: 87,
        frequency_hz: 161_975_000,
    },
    Channel {
        ordinal: 12,
        itu: 88,
        frequency_hz: 162_025_000,
    },
];

/// Half-duplex radio mode.
///
/// Owned and written exclusively by the transceiver; the receive chain only
/// observes it through the transceiver's accessor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RadioMode {
    /// Listening; per-tick work is delegated to the receive chain
    #[default]
    Receiving,
    /// Keyed up; per-tick work shifts TX packet bits onto the data pin
    Transmitting,
}

#[cfg(feature = "embedded")]
impl defmt::Format for RadioMode {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Receiving => defmt::write!(f, "RX"),
            Self::Transmitting => defmt::write!(f, "TX"),
        }
    }
}

/// Transmit power level, selecting a [`POWER_TABLE`] entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TxPowerLevel {
    /// 1 W nominal, used for class B position reports
    Low,
    /// 2 W nominal
    #[default]
    Medium,
    /// 5 W nominal, bench calibration only
    High,
}

impl TxPowerLevel {
    /// Look up the PA property values for this level
    #[must_use]
    pub const fn settings(self) -> &'static PaSettings {
        &POWER_TABLE[self as usize]
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for TxPowerLevel {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Low => defmt::write!(f, "PWR-LO"),
            Self::Medium => defmt::write!(f, "PWR-MED"),
            Self::High => defmt::write!(f, "PWR-HI"),
        }
    }
}

/// Power-amplifier property values (Si4463 group 0x22, properties 0x00-0x02)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaSettings {
    /// PA_MODE: amplifier topology and enable bits
    pub pa_mode: u8,
    /// PA_PWR_LVL: output level in DAC steps
    pub pa_level: u8,
    /// PA_BIAS_CLKDUTY: bias current and clock duty trim
    pub pa_bias_clkduty: u8,
}

/// PA settings per [`TxPowerLevel`], tuned for the class-E match on this board
pub const POWER_TABLE: [PaSettings; 3] = [
    PaSettings {
        pa_mode: 0x08,
        pa_level: 0x20,
        pa_bias_clkduty: 0x00,
    },
    PaSettings {
        pa_mode: 0x08,
        pa_level: 0x45,
        pa_bias_clkduty: 0x00,
    },
    PaSettings {
        pa_mode: 0x08,
        pa_level: 0x7F,
        pa_bias_clkduty: 0x00,
    },
];

/// Gaussian pulse-shaping selection for the transmit filter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FilterShaping {
    /// Chip default filter coefficients
    #[default]
    None,
    /// BT = 0.4 coefficient table, required to meet the AIS spectral mask
    Bt04,
}

#[cfg(feature = "embedded")]
impl defmt::Format for FilterShaping {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::None => defmt::write!(f, "shaping off"),
            Self::Bt04 => defmt::write!(f, "BT 0.4"),
        }
    }
}
