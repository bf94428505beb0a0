//! Tests for the TX packet bit cursor

use ais_firmware::config::MAX_PACKET_BITS;
use ais_firmware::radio::packet::TxPacket;
use ais_firmware::types::VhfChannel;

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn packet_new_basic() {
    let p = TxPacket::new(VhfChannel::ChannelA, &[0xAA, 0x55], 16).unwrap();
    assert_eq!(p.channel(), VhfChannel::ChannelA);
    assert_eq!(p.size(), 16);
    assert_eq!(p.timestamp(), 0);
    assert!(!p.eof());
}

#[test]
fn packet_new_partial_last_byte() {
    let p = TxPacket::new(VhfChannel::ChannelB, &[0xFF, 0xF0], 12).unwrap();
    assert_eq!(p.size(), 12);
}

#[test]
fn packet_new_rejects_empty() {
    assert!(TxPacket::new(VhfChannel::ChannelA, &[], 0).is_none());
}

#[test]
fn packet_new_rejects_bit_count_beyond_payload() {
    assert!(TxPacket::new(VhfChannel::ChannelA, &[0xFF], 9).is_none());
}

#[test]
fn packet_new_rejects_oversize() {
    let payload = [0u8; MAX_PACKET_BITS / 8 + 1];
    assert!(TxPacket::new(VhfChannel::ChannelA, &payload, MAX_PACKET_BITS + 8).is_none());
}

#[test]
fn packet_new_accepts_max_size() {
    let payload = [0u8; MAX_PACKET_BITS / 8];
    let p = TxPacket::new(VhfChannel::ChannelA, &payload, MAX_PACKET_BITS);
    assert!(p.is_some());
}

// ============================================================================
// Timestamp Tests
// ============================================================================

#[test]
fn packet_timestamp_set() {
    let mut p = TxPacket::new(VhfChannel::ChannelA, &[0x00], 8).unwrap();
    p.set_timestamp(123_456);
    assert_eq!(p.timestamp(), 123_456);
}

// ============================================================================
// Bit Cursor Tests
// ============================================================================

#[test]
fn packet_bits_come_out_msb_first() {
    // 0b1011_0010 then the top nibble of 0b0100_0000
    let mut p = TxPacket::new(VhfChannel::ChannelA, &[0b1011_0010, 0b0100_0000], 12).unwrap();

    let expected = [
        true, false, true, true, false, false, true, false, // byte 0
        false, true, false, false, // high nibble of byte 1
    ];
    for &want in &expected {
        assert!(!p.eof());
        assert_eq!(p.next_bit(), want);
    }
    assert!(p.eof());
}

#[test]
fn packet_eof_after_exact_bit_count() {
    let mut p = TxPacket::new(VhfChannel::ChannelA, &[0xFF], 5).unwrap();
    for _ in 0..5 {
        assert!(!p.eof());
        p.next_bit();
    }
    assert!(p.eof());
}

#[test]
fn packet_next_bit_past_end_is_inert() {
    let mut p = TxPacket::new(VhfChannel::ChannelA, &[0xFF], 3).unwrap();
    for _ in 0..3 {
        p.next_bit();
    }
    assert!(p.eof());
    // Past the end: low output, cursor stays put
    assert!(!p.next_bit());
    assert!(!p.next_bit());
    assert!(p.eof());
}

#[test]
fn packet_cursor_never_rewinds() {
    let mut p = TxPacket::new(VhfChannel::ChannelA, &[0b1000_0000], 2).unwrap();
    assert!(p.next_bit());
    assert!(!p.next_bit());
    // No API rewinds the cursor; the packet is spent
    assert!(p.eof());
}
