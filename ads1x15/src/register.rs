//! Register map and configuration word encoding.
//!
//! Everything here is pure bit manipulation; the bus transfers live in the
//! driver. The layout follows the config register description in section 9.6.3
//! of the ADS1015 datasheet, which the ADS1115 shares.

use bit_field::BitField;

use crate::{Chip, Gain};

/// Targets of the pointer register.
///
/// Every access to the device starts by writing one of these to the pointer
/// register. All four registers are 16 bits wide and transferred MSB first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// Result of the last conversion (read-only).
    Conversion,
    /// Configuration.
    Config,
    /// Comparator low threshold.
    LowThreshold,
    /// Comparator high threshold.
    HighThreshold,
}

impl From<Register> for u8 {
    fn from(value: Register) -> Self {
        match value {
            Register::Conversion => 0b00,
            Register::Config => 0b01,
            Register::LowThreshold => 0b10,
            Register::HighThreshold => 0b11,
        }
    }
}

/// Input multiplexer selection.
///
/// Only the pairings exposed by the driver are listed. Differential pairs are
/// named positive input first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mux {
    /// AIN0 relative to AIN1.
    Differential0_1,
    /// AIN2 relative to AIN3.
    Differential2_3,
    /// AIN0 relative to GND.
    SingleEnded0,
    /// AIN1 relative to GND.
    SingleEnded1,
    /// AIN2 relative to GND.
    SingleEnded2,
    /// AIN3 relative to GND.
    SingleEnded3,
}

impl Mux {
    /// Single-ended input for `channel`, or `None` if it is outside `0..=3`.
    pub fn single_ended(channel: u8) -> Option<Mux> {
        match channel {
            0 => Some(Mux::SingleEnded0),
            1 => Some(Mux::SingleEnded1),
            2 => Some(Mux::SingleEnded2),
            3 => Some(Mux::SingleEnded3),
            _ => None,
        }
    }
}

/// Value of the 3-bit MUX field.
impl From<Mux> for u16 {
    fn from(value: Mux) -> Self {
        match value {
            Mux::Differential0_1 => 0b000,
            Mux::Differential2_3 => 0b011,
            Mux::SingleEnded0 => 0b100,
            Mux::SingleEnded1 => 0b101,
            Mux::SingleEnded2 => 0b110,
            Mux::SingleEnded3 => 0b111,
        }
    }
}

/// How the device should behave once the config word is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionMode {
    /// Perform one conversion then power down, with the comparator disabled.
    SingleShot,
    /// Convert continuously, asserting ALERT/RDY (active low, latched) as soon
    /// as one conversion exceeds the high threshold.
    Comparator,
}

// Bit positions within the config register.
const OS: usize = 15;
const MUX: core::ops::RangeInclusive<usize> = 12..=14;
const PGA: core::ops::RangeInclusive<usize> = 9..=11;
const MODE: usize = 8;
const DATA_RATE: core::ops::RangeInclusive<usize> = 5..=7;
const COMP_MODE: usize = 4;
const COMP_POL: usize = 3;
const COMP_LAT: usize = 2;
const COMP_QUE: core::ops::RangeInclusive<usize> = 0..=1;

/// 1600 samples per second on the ADS1015 (128 on the ADS1115).
const DATA_RATE_1600SPS: u16 = 0b100;
/// Assert ALERT/RDY after one conversion beyond the threshold.
const COMP_QUE_ONE_CONVERSION: u16 = 0b00;
/// Comparator disabled, ALERT/RDY high impedance.
const COMP_QUE_DISABLED: u16 = 0b11;

/// Assemble the config register value for a conversion.
///
/// The comparator is always in traditional mode with an active-low ALERT/RDY
/// pin. A single-shot config additionally sets the OS bit so that writing it
/// starts a conversion immediately.
pub fn build_config(gain: Gain, mux: Mux, mode: ConversionMode) -> u16 {
    let mut config = 0u16;
    config.set_bits(MUX, mux.into());
    config.set_bits(PGA, u8::from(gain).into());
    config.set_bits(DATA_RATE, DATA_RATE_1600SPS);
    config.set_bit(COMP_MODE, false);
    config.set_bit(COMP_POL, false);
    match mode {
        ConversionMode::SingleShot => {
            config.set_bit(OS, true);
            config.set_bit(MODE, true);
            config.set_bit(COMP_LAT, false);
            config.set_bits(COMP_QUE, COMP_QUE_DISABLED);
        }
        ConversionMode::Comparator => {
            config.set_bit(MODE, false);
            config.set_bit(COMP_LAT, true);
            config.set_bits(COMP_QUE, COMP_QUE_ONE_CONVERSION);
        }
    }
    config
}

/// Sign bit of a 12-bit sample once shifted down from the register.
const SAMPLE_SIGN_12BIT: usize = 11;

/// Convert a conversion register value into a signed sample.
///
/// The result occupies the top bits of the register, so it is first shifted
/// down by [`Chip::bit_shift`]. For the ADS1015 the sign bit (bit 11 after
/// shifting) is then extended into bits 12 to 15. For the ADS1115 the register
/// is simply reinterpreted as two's complement.
pub fn decode_sample(raw: u16, chip: Chip) -> i16 {
    let mut sample = raw >> chip.bit_shift;
    if chip.bit_shift != 0 && sample.get_bit(SAMPLE_SIGN_12BIT) {
        sample.set_bits(SAMPLE_SIGN_12BIT + 1..16, 0b1111);
    }
    sample as i16
}

/// Align a threshold given in sample counts to the threshold register format.
///
/// Returns `None` if the threshold is outside [`Chip::sample_range`], as it
/// would not survive the shift into the register.
pub fn encode_threshold(threshold: i16, chip: Chip) -> Option<u16> {
    chip.sample_range()
        .contains(&threshold)
        .then(|| (threshold << chip.bit_shift) as u16)
}
