use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::register::{self, ConversionMode, Mux, Register};
use crate::{Chip, DEFAULT_ADDRESS, Error, Gain};

#[cfg(feature = "async")]
mod asynch;

#[cfg(feature = "async")]
pub use asynch::Ads1x15Async;

/// Driver for the ADS1015 and ADS1115.
///
/// # Quick start
///
/// Create the driver with [`Ads1x15::new_ads1015`] or [`Ads1x15::new_ads1115`],
/// passing any blocking [`I2c`] implementation and a [`DelayNs`] used to wait
/// for conversions to finish. Use [`Ads1x15::new`] if the ADDR pin is not tied to
/// ground.
///
/// The driver takes the bus by value. To share one bus between several devices,
/// pass a shared-bus wrapper (for example from `embedded-hal-bus`); the driver
/// does no locking of its own and each method assumes exclusive use of the bus
/// until it returns.
///
/// # Conversions
///
/// The single-ended and differential reads each write a single-shot config,
/// block for the chip's conversion delay, then read the result. The comparator
/// instead leaves the device converting continuously; fetch results (and clear
/// a latched alert) with [`Ads1x15::get_last_conversion_results`].
#[derive(Debug)]
pub struct Ads1x15<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    chip: Chip,
    gain: Gain,
}

impl<I2C: I2c, D: DelayNs> Ads1x15<I2C, D> {
    ////////////////////////////////////////////////////////////////////////////////
    // Constructors
    ////////////////////////////////////////////////////////////////////////////////

    /// Create a driver for `chip` at the given 7-bit bus address.
    ///
    /// No bus transfer happens until the first reading. The gain starts at the
    /// widest range, ±6.144V.
    pub fn new(i2c: I2C, delay: D, chip: Chip, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
            chip,
            gain: Gain::default(),
        }
    }

    /// Create a driver for a 12-bit ADS1015 at the default address (0x48).
    pub fn new_ads1015(i2c: I2C, delay: D) -> Self {
        Self::new(i2c, delay, Chip::ADS1015, DEFAULT_ADDRESS)
    }

    /// Create a driver for a 16-bit ADS1115 at the default address (0x48).
    pub fn new_ads1115(i2c: I2C, delay: D) -> Self {
        Self::new(i2c, delay, Chip::ADS1115, DEFAULT_ADDRESS)
    }

    /// Destroy the driver, returning the bus and delay.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Settings
    ////////////////////////////////////////////////////////////////////////////////

    /// Bus address of the device.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Chip family the driver was created for.
    pub fn chip(&self) -> Chip {
        self.chip
    }

    /// Gain used by subsequent conversions.
    pub fn gain(&self) -> Gain {
        self.gain
    }

    /// Change the gain used by subsequent conversions.
    ///
    /// Nothing is written to the device; the new range takes effect with the
    /// next config write.
    pub fn set_gain(&mut self, gain: Gain) {
        self.gain = gain;
    }

    /// Convert a sample into millivolts using the current gain.
    ///
    /// Takes an `i32` so that both signed (differential) and unsigned
    /// (single-ended) samples convert without loss.
    pub fn millivolts(&self, sample: i32) -> f32 {
        self.chip.millivolts(self.gain, sample)
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Conversions
    ////////////////////////////////////////////////////////////////////////////////

    /// Read the voltage of one input relative to ground.
    ///
    /// Returns `Ok(0)` without touching the bus if `channel` is not in `0..=3`.
    ///
    /// The result is the conversion register shifted down to the chip's
    /// resolution and is deliberately not sign-extended: a single-ended input
    /// cannot go (meaningfully) below ground, so the value is treated as a
    /// magnitude from zero to full scale.
    pub fn read_single_ended(&mut self, channel: u8) -> Result<u16, Error<I2C::Error>> {
        let Some(mux) = Mux::single_ended(channel) else {
            return Ok(0);
        };
        let raw = self.convert(mux)?;
        Ok(raw >> self.chip.bit_shift)
    }

    /// Read the signed difference between AIN0 (positive) and AIN1 (negative).
    pub fn read_differential_0_1(&mut self) -> Result<i16, Error<I2C::Error>> {
        let raw = self.convert(Mux::Differential0_1)?;
        Ok(register::decode_sample(raw, self.chip))
    }

    /// Read the signed difference between AIN2 (positive) and AIN3 (negative).
    pub fn read_differential_2_3(&mut self) -> Result<i16, Error<I2C::Error>> {
        let raw = self.convert(Mux::Differential2_3)?;
        Ok(register::decode_sample(raw, self.chip))
    }

    /// Start continuous conversions on one input with the comparator watching
    /// for results above `threshold`.
    ///
    /// ALERT/RDY goes low once a conversion exceeds the threshold and stays low
    /// (latched) until the conversion register is read, for example with
    /// [`Ads1x15::get_last_conversion_results`]. `threshold` is in sample counts
    /// at the chip's resolution, so must lie within [`Chip::sample_range`]:
    /// `-2048..=2047` for the ADS1015, any `i16` for the ADS1115.
    ///
    /// This returns as soon as the registers are written; there is no wait for
    /// a conversion.
    ///
    /// # Errors
    ///
    /// Unlike [`Ads1x15::read_single_ended`], a `channel` outside `0..=3` is an
    /// error ([`Error::InvalidChannel`]) rather than a zero reading, since there
    /// is no reading to return. A threshold outside the chip's range is
    /// [`Error::ThresholdOutOfRange`]. Nothing is written in either case, and
    /// the channel is checked first.
    pub fn start_comparator_single_ended(
        &mut self,
        channel: u8,
        threshold: i16,
    ) -> Result<(), Error<I2C::Error>> {
        let mux = Mux::single_ended(channel).ok_or(Error::InvalidChannel(channel))?;
        let config = register::build_config(self.gain, mux, ConversionMode::Comparator);
        let threshold = register::encode_threshold(threshold, self.chip)
            .ok_or(Error::ThresholdOutOfRange(threshold))?;
        self.write_register(Register::HighThreshold, threshold)?;
        self.write_register(Register::Config, config)
    }

    /// Wait for one conversion period, then read the conversion register
    /// without changing the configuration.
    ///
    /// Reading the result also clears a latched comparator alert.
    pub fn get_last_conversion_results(&mut self) -> Result<i16, Error<I2C::Error>> {
        self.delay.delay_ms(self.chip.conversion_delay_ms);
        let raw = self.read_register(Register::Conversion)?;
        Ok(register::decode_sample(raw, self.chip))
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Register access
    ////////////////////////////////////////////////////////////////////////////////

    /// Run one single-shot conversion and return the raw conversion register.
    fn convert(&mut self, mux: Mux) -> Result<u16, Error<I2C::Error>> {
        let config = register::build_config(self.gain, mux, ConversionMode::SingleShot);
        self.write_register(Register::Config, config)?;
        self.delay.delay_ms(self.chip.conversion_delay_ms);
        self.read_register(Register::Conversion)
    }

    /// Write a 16-bit register, MSB first, in a single transfer.
    fn write_register(&mut self, register: Register, value: u16) -> Result<(), Error<I2C::Error>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("ads1x15 {=u8:#x}: write {} = {=u16:#x}", self.address, register, value);
        let [high, low] = value.to_be_bytes();
        self.i2c
            .write(self.address, &[register.into(), high, low])
            .map_err(Error::I2c)
    }

    /// Point at a register, then read it back in a separate transfer.
    fn read_register(&mut self, register: Register) -> Result<u16, Error<I2C::Error>> {
        self.i2c
            .write(self.address, &[register.into()])
            .map_err(Error::I2c)?;
        let mut buf = [0u8; 2];
        self.i2c.read(self.address, &mut buf).map_err(Error::I2c)?;
        let value = u16::from_be_bytes(buf);
        #[cfg(feature = "defmt")]
        defmt::trace!("ads1x15 {=u8:#x}: read {} = {=u16:#x}", self.address, register, value);
        Ok(value)
    }
}
