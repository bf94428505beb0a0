//! Tests for shared domain types
//!
//! Channel table lookups, radio mode defaults and the PA power table.

use ais_firmware::types::{
    Channel, FilterShaping, RadioMode, TxPowerLevel, VhfChannel, AIS_CHANNELS, POWER_TABLE,
};

// ============================================================================
// Channel Table Tests
// ============================================================================

#[test]
fn channel_table_entry_a() {
    let ch = &AIS_CHANNELS[0];
    assert_eq!(ch.ordinal, 10);
    assert_eq!(ch.itu, 87);
    assert_eq!(ch.frequency_hz, 161_975_000);
}

#[test]
fn channel_table_entry_b() {
    let ch = &AIS_CHANNELS[1];
    assert_eq!(ch.ordinal, 12);
    assert_eq!(ch.itu, 88);
    assert_eq!(ch.frequency_hz, 162_025_000);
}

#[test]
fn channel_index_maps_to_table() {
    assert_eq!(VhfChannel::ChannelA.index(), 0);
    assert_eq!(VhfChannel::ChannelB.index(), 1);
    assert_eq!(VhfChannel::ChannelA.parameters().itu, 87);
    assert_eq!(VhfChannel::ChannelB.parameters().itu, 88);
}

#[test]
fn channel_alternate_flips() {
    assert_eq!(VhfChannel::ChannelA.alternate(), VhfChannel::ChannelB);
    assert_eq!(VhfChannel::ChannelB.alternate(), VhfChannel::ChannelA);
}

#[test]
fn channel_default_is_a() {
    assert_eq!(VhfChannel::default(), VhfChannel::ChannelA);
}

#[test]
fn channel_frequency_mhz() {
    let ch = Channel {
        ordinal: 10,
        itu: 87,
        frequency_hz: 161_975_000,
    };
    assert!((ch.frequency_mhz() - 161.975).abs() < 0.001);
}

#[test]
fn channel_raster_spacing() {
    // The two AIS channels sit two 25 kHz steps apart
    let a = VhfChannel::ChannelA.parameters();
    let b = VhfChannel::ChannelB.parameters();
    assert_eq!(b.frequency_hz - a.frequency_hz, 50_000);
    assert_eq!(b.ordinal - a.ordinal, 2);
}

// ============================================================================
// Radio Mode Tests
// ============================================================================

#[test]
fn radio_mode_initial_state() {
    assert_eq!(RadioMode::default(), RadioMode::Receiving);
}

// ============================================================================
// Power Table Tests
// ============================================================================

#[test]
fn power_table_lookup() {
    assert_eq!(
        TxPowerLevel::Low.settings().pa_level,
        POWER_TABLE[0].pa_level
    );
    assert_eq!(
        TxPowerLevel::Medium.settings().pa_level,
        POWER_TABLE[1].pa_level
    );
    assert_eq!(
        TxPowerLevel::High.settings().pa_level,
        POWER_TABLE[2].pa_level
    );
}

#[test]
fn power_table_levels_increase() {
    assert!(POWER_TABLE[0].pa_level < POWER_TABLE[1].pa_level);
    assert!(POWER_TABLE[1].pa_level < POWER_TABLE[2].pa_level);
}

#[test]
fn power_level_default_is_medium() {
    assert_eq!(TxPowerLevel::default(), TxPowerLevel::Medium);
}

// ============================================================================
// Filter Shaping Tests
// ============================================================================

#[test]
fn filter_shaping_default() {
    assert_eq!(FilterShaping::default(), FilterShaping::None);
}
