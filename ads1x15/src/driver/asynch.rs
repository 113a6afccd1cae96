//! Async counterpart of [`Ads1x15`](crate::Ads1x15).
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use crate::register::{self, ConversionMode, Mux, Register};
use crate::{Chip, DEFAULT_ADDRESS, Error, Gain};

/// Driver for the ADS1015 and ADS1115 over async I2C.
///
/// Behaves exactly like [`Ads1x15`](crate::Ads1x15), including the zero reading
/// for an out-of-range single-ended channel, but awaits the bus and the
/// conversion delay instead of blocking.
#[derive(Debug)]
pub struct Ads1x15Async<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    chip: Chip,
    gain: Gain,
}

impl<I2C: I2c, D: DelayNs> Ads1x15Async<I2C, D> {
    /// Create a driver for `chip` at the given 7-bit bus address.
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
    pub fn set_gain(&mut self, gain: Gain) {
        self.gain = gain;
    }

    /// Convert a sample into millivolts using the current gain.
    pub fn millivolts(&self, sample: i32) -> f32 {
        self.chip.millivolts(self.gain, sample)
    }

    /// See [`Ads1x15::read_single_ended`](crate::Ads1x15::read_single_ended).
    pub async fn read_single_ended(&mut self, channel: u8) -> Result<u16, Error<I2C::Error>> {
        let Some(mux) = Mux::single_ended(channel) else {
            return Ok(0);
        };
        let raw = self.convert(mux).await?;
        Ok(raw >> self.chip.bit_shift)
    }

    /// Read the signed difference between AIN0 (positive) and AIN1 (negative).
    pub async fn read_differential_0_1(&mut self) -> Result<i16, Error<I2C::Error>> {
        let raw = self.convert(Mux::Differential0_1).await?;
        Ok(register::decode_sample(raw, self.chip))
    }

    /// Read the signed difference between AIN2 (positive) and AIN3 (negative).
    pub async fn read_differential_2_3(&mut self) -> Result<i16, Error<I2C::Error>> {
        let raw = self.convert(Mux::Differential2_3).await?;
        Ok(register::decode_sample(raw, self.chip))
    }

    /// See [`Ads1x15::start_comparator_single_ended`](crate::Ads1x15::start_comparator_single_ended).
    pub async fn start_comparator_single_ended(
        &mut self,
        channel: u8,
        threshold: i16,
    ) -> Result<(), Error<I2C::Error>> {
        let mux = Mux::single_ended(channel).ok_or(Error::InvalidChannel(channel))?;
        let config = register::build_config(self.gain, mux, ConversionMode::Comparator);
        let threshold = register::encode_threshold(threshold, self.chip)
            .ok_or(Error::ThresholdOutOfRange(threshold))?;
        self.write_register(Register::HighThreshold, threshold).await?;
        self.write_register(Register::Config, config).await
    }

    /// Wait for one conversion period, then read the conversion register.
    pub async fn get_last_conversion_results(&mut self) -> Result<i16, Error<I2C::Error>> {
        self.delay.delay_ms(self.chip.conversion_delay_ms).await;
        let raw = self.read_register(Register::Conversion).await?;
        Ok(register::decode_sample(raw, self.chip))
    }

    async fn convert(&mut self, mux: Mux) -> Result<u16, Error<I2C::Error>> {
        let config = register::build_config(self.gain, mux, ConversionMode::SingleShot);
        self.write_register(Register::Config, config).await?;
        self.delay.delay_ms(self.chip.conversion_delay_ms).await;
        self.read_register(Register::Conversion).await
    }

    async fn write_register(
        &mut self,
        register: Register,
        value: u16,
    ) -> Result<(), Error<I2C::Error>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("ads1x15 {=u8:#x}: write {} = {=u16:#x}", self.address, register, value);
        let [high, low] = value.to_be_bytes();
        self.i2c
            .write(self.address, &[register.into(), high, low])
            .await
            .map_err(Error::I2c)
    }

    async fn read_register(&mut self, register: Register) -> Result<u16, Error<I2C::Error>> {
        self.i2c
            .write(self.address, &[register.into()])
            .await
            .map_err(Error::I2c)?;
        let mut buf = [0u8; 2];
        self.i2c
            .read(self.address, &mut buf)
            .await
            .map_err(Error::I2c)?;
        let value = u16::from_be_bytes(buf);
        #[cfg(feature = "defmt")]
        defmt::trace!("ads1x15 {=u8:#x}: read {} = {=u16:#x}", self.address, register, value);
        Ok(value)
    }
}
