use crate::util;

use clap::{Parser, ValueEnum, value_parser};

/// CLI for the ADS1015 and ADS1115 analog-to-digital converters
///
/// Talks to a single converter on a Linux I2C bus (/dev/i2c-N). Readings are
/// printed as raw sample counts followed by the equivalent voltage at the
/// selected gain.
///
/// The comparator command leaves the converter running continuously; use the
/// last command to fetch results and clear a latched alert.
#[derive(Debug, Parser)]
#[command(version, about)]
pub(crate) struct Cli {
    /// Linux I2C bus number
    #[arg(short, long, default_value_t = 1)]
    pub(crate) bus: u8,
    /// Device address in hexadecimal, 0x48 to 0x4B depending on the ADDR pin
    #[arg(short, long, default_value = "0x48", value_parser = util::address_from_hex)]
    pub(crate) address: u8,
    /// Converter model
    #[arg(short, long, default_value = "ads1015")]
    pub(crate) chip: ChipModel,
    /// Programmable gain (input range)
    #[arg(short, long, default_value = "two-thirds")]
    pub(crate) gain: GainSetting,
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Parser)]
pub(crate) enum Commands {
    /// Read one input relative to ground
    Read {
        /// Input channel, 0 to 3
        #[arg(value_parser = value_parser!(u8).range(0..=3))]
        channel: u8,
    },
    /// Read the difference between a pair of inputs
    Diff { pair: Pair },
    /// Start continuous conversion with the comparator armed
    Comparator {
        /// Input channel, 0 to 3
        #[arg(value_parser = value_parser!(u8).range(0..=3))]
        channel: u8,
        /// High threshold in sample counts (-2048 to 2047 on the ADS1015)
        #[arg(allow_negative_numbers = true)]
        threshold: i16,
    },
    /// Fetch the latest conversion result
    Last,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum ChipModel {
    /// 12-bit
    Ads1015,
    /// 16-bit
    Ads1115,
}

impl From<ChipModel> for ads1x15::Chip {
    fn from(value: ChipModel) -> ads1x15::Chip {
        match value {
            ChipModel::Ads1015 => ads1x15::Chip::ADS1015,
            ChipModel::Ads1115 => ads1x15::Chip::ADS1115,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum GainSetting {
    /// ±6.144V
    TwoThirds,
    /// ±4.096V
    One,
    /// ±2.048V
    Two,
    /// ±1.024V
    Four,
    /// ±0.512V
    Eight,
    /// ±0.256V
    Sixteen,
}

impl From<GainSetting> for ads1x15::Gain {
    fn from(value: GainSetting) -> ads1x15::Gain {
        match value {
            GainSetting::TwoThirds => ads1x15::Gain::TwoThirds,
            GainSetting::One => ads1x15::Gain::One,
            GainSetting::Two => ads1x15::Gain::Two,
            GainSetting::Four => ads1x15::Gain::Four,
            GainSetting::Eight => ads1x15::Gain::Eight,
            GainSetting::Sixteen => ads1x15::Gain::Sixteen,
        }
    }
}

/// Differential input pair, positive input first.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Pair {
    /// AIN0 - AIN1
    #[value(name = "0-1")]
    Ain0Ain1,
    /// AIN2 - AIN3
    #[value(name = "2-3")]
    Ain2Ain3,
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pair::Ain0Ain1 => f.write_str("AIN0-AIN1"),
            Pair::Ain2Ain3 => f.write_str("AIN2-AIN3"),
        }
    }
}
