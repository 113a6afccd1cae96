//! Chip family presets and bus addressing.

use core::ops::RangeInclusive;

use crate::Gain;

/// 7-bit bus address of a device with its ADDR pin tied to ground.
///
/// The ADDR strap selects one of `0x48..=0x4B`, see [`AddressPin`].
pub const DEFAULT_ADDRESS: u8 = 0x48;

/// The two members of the family differ only in resolution and conversion time.
///
/// The ADS1015 is a 12-bit converter whose result is left-aligned in the 16-bit
/// conversion register, so the bottom 4 bits are discarded. The ADS1115 uses all
/// 16 bits. The driver always writes the same data rate field, which selects
/// 1600 samples per second on the ADS1015 but 128 on the ADS1115, hence the
/// longer conversion delay for the latter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Chip {
    pub(crate) bit_shift: u8,
    pub(crate) conversion_delay_ms: u32,
}

impl Chip {
    /// 12-bit ADS1015.
    pub const ADS1015: Chip = Chip {
        bit_shift: 4,
        conversion_delay_ms: 1,
    };

    /// 16-bit ADS1115.
    pub const ADS1115: Chip = Chip {
        bit_shift: 0,
        conversion_delay_ms: 8,
    };

    /// Number of low bits of the conversion register that carry no data.
    pub fn bit_shift(&self) -> u8 {
        self.bit_shift
    }

    /// Time to wait between starting a conversion and reading its result.
    pub fn conversion_delay_ms(&self) -> u32 {
        self.conversion_delay_ms
    }

    /// Number of counts spanning the positive half of the input range.
    pub(crate) fn counts_per_full_scale(&self) -> u32 {
        1 << (15 - self.bit_shift)
    }

    /// Voltage of `sample` counts at the given gain.
    pub(crate) fn millivolts(&self, gain: Gain, sample: i32) -> f32 {
        let full_scale = f32::from(gain.full_scale_millivolts());
        sample as f32 * full_scale / self.counts_per_full_scale() as f32
    }

    /// Signed sample values representable at the chip's resolution.
    ///
    /// `-2048..=2047` for the ADS1015 and the whole of `i16` for the ADS1115.
    /// Comparator thresholds must lie in this range.
    pub fn sample_range(&self) -> RangeInclusive<i16> {
        let counts = self.counts_per_full_scale() as i32;
        (-counts) as i16..=(counts - 1) as i16
    }
}

/// Connection of the ADDR pin, which selects one of four bus addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressPin {
    /// ADDR tied to GND (0x48).
    Gnd,
    /// ADDR tied to VDD (0x49).
    Vdd,
    /// ADDR tied to SDA (0x4A).
    Sda,
    /// ADDR tied to SCL (0x4B).
    Scl,
}

impl From<AddressPin> for u8 {
    fn from(value: AddressPin) -> Self {
        match value {
            AddressPin::Gnd => DEFAULT_ADDRESS,
            AddressPin::Vdd => DEFAULT_ADDRESS + 1,
            AddressPin::Sda => DEFAULT_ADDRESS + 2,
            AddressPin::Scl => DEFAULT_ADDRESS + 3,
        }
    }
}
