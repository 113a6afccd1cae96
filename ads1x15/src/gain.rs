//! Programmable gain amplifier settings.

/// Full-scale range of the programmable gain amplifier.
///
/// The names give the amplifier gain; [`Gain::full_scale_millivolts`] gives the
/// corresponding input range. Note that the input pins themselves must never be
/// driven beyond VDD + 0.3V, whatever the range.
///
/// The default is the widest range, ±6.144V.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gain {
    /// ±6.144V
    #[default]
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

impl Gain {
    /// Every gain setting, widest range first.
    pub const ALL: [Gain; 6] = [
        Gain::TwoThirds,
        Gain::One,
        Gain::Two,
        Gain::Four,
        Gain::Eight,
        Gain::Sixteen,
    ];

    /// Positive full-scale input voltage in millivolts.
    pub fn full_scale_millivolts(self) -> u16 {
        match self {
            Gain::TwoThirds => 6144,
            Gain::One => 4096,
            Gain::Two => 2048,
            Gain::Four => 1024,
            Gain::Eight => 512,
            Gain::Sixteen => 256,
        }
    }
}

/// Value of the 3-bit PGA field of the config register.
impl From<Gain> for u8 {
    fn from(value: Gain) -> Self {
        match value {
            Gain::TwoThirds => 0b000,
            Gain::One => 0b001,
            Gain::Two => 0b010,
            Gain::Four => 0b011,
            Gain::Eight => 0b100,
            Gain::Sixteen => 0b101,
        }
    }
}

impl TryFrom<u8> for Gain {
    type Error = u8;

    /// Decode the PGA field. `0b110` and `0b111` also select ±0.256V on the
    /// device but are not produced by this driver, so they are rejected.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0b000 => Ok(Gain::TwoThirds),
            0b001 => Ok(Gain::One),
            0b010 => Ok(Gain::Two),
            0b011 => Ok(Gain::Four),
            0b100 => Ok(Gain::Eight),
            0b101 => Ok(Gain::Sixteen),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Gain;

    #[test]
    fn default_is_widest_range() {
        assert_eq!(Gain::default(), Gain::TwoThirds);
        assert_eq!(Gain::default().full_scale_millivolts(), 6144);
    }

    #[test]
    fn field_value_round_trips() {
        for gain in Gain::ALL {
            assert_eq!(Gain::try_from(u8::from(gain)), Ok(gain));
        }
        assert_eq!(Gain::try_from(0b110), Err(0b110));
    }

    #[test]
    fn ranges_halve_above_unity_gain() {
        for pair in Gain::ALL[1..].windows(2) {
            assert_eq!(
                pair[0].full_scale_millivolts() / 2,
                pair[1].full_scale_millivolts()
            );
        }
    }
}
