//! Outgoing Frame Representation
//!
//! A [`TxPacket`] is a fully encoded AIS frame (NRZI/stuffed bits, flags and
//! ramp included) waiting for a transmission slot. The encoder that builds
//! the bit sequence lives upstream; the scheduling core only consumes bits
//! one per tick through the cursor.
//!
//! Ownership follows the packet: it is moved into the transceiver at
//! assignment and dropped on completion or age discard. The cursor advances
//! monotonically and never rewinds, so a packet cannot be retransmitted.

use crate::config::{MAX_PACKET_BITS, MAX_PACKET_BYTES};
use crate::types::VhfChannel;
use heapless::Vec;

/// A queued outgoing frame with a bit cursor
#[derive(Clone, Debug)]
pub struct TxPacket {
    /// Target channel, fixed at construction
    channel: VhfChannel,
    /// UTC seconds at assignment, set by the transceiver
    timestamp: u32,
    /// Encoded frame bits, MSB of byte 0 first
    payload: Vec<u8, MAX_PACKET_BYTES>,
    /// Valid bit count within `payload`
    bit_count: usize,
    /// Next bit to transmit
    cursor: usize,
}

impl TxPacket {
    /// Build a packet from an encoded bit sequence.
    ///
    /// `bit_count` selects how many leading bits of `payload` are valid.
    /// Returns `None` if the sequence is empty, exceeds
    /// [`MAX_PACKET_BITS`], or claims more bits than `payload` holds.
    #[must_use]
    pub fn new(channel: VhfChannel, payload: &[u8], bit_count: usize) -> Option<Self> {
        if bit_count == 0 || bit_count > MAX_PACKET_BITS || bit_count > payload.len() * 8 {
            return None;
        }

        let payload = Vec::from_slice(payload).ok()?;
        Some(Self {
            channel,
            timestamp: 0,
            payload,
            bit_count,
            cursor: 0,
        })
    }

    /// Get the target channel
    #[must_use]
    pub const fn channel(&self) -> VhfChannel {
        self.channel
    }

    /// Get the assignment timestamp (UTC seconds)
    #[must_use]
    pub const fn timestamp(&self) -> u32 {
        self.timestamp
    }

    /// Stamp the packet with the assignment time
    pub fn set_timestamp(&mut self, utc: u32) {
        self.timestamp = utc;
    }

    /// Total frame length in bits
    #[must_use]
    pub const fn size(&self) -> usize {
        self.bit_count
    }

    /// Check whether every bit has been consumed
    #[must_use]
    pub const fn eof(&self) -> bool {
        self.cursor >= self.bit_count
    }

    /// Consume the next bit, advancing the cursor.
    ///
    /// Callers must check [`eof`](Self::eof) first; past the end the packet
    /// keeps returning `false` without advancing.
    pub fn next_bit(&mut self) -> bool {
        if self.eof() {
            return false;
        }

        let byte = self.payload[self.cursor / 8];
        let bit = byte & (0x80 >> (self.cursor % 8)) != 0;
        self.cursor += 1;
        bit
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for TxPacket {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "TxPacket({}, {=usize} bits, t={=u32})",
            self.channel,
            self.bit_count,
            self.timestamp
        );
    }
}
