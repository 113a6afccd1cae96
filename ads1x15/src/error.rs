use core::fmt;

/// Wrapper for problems when communicating with the ADS1x15.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The underlying I2C transfer failed.
    ///
    /// The enclosed value is the error reported by the bus implementation.
    I2c(E),
    /// The comparator was asked to watch a single-ended channel outside `0..=3`.
    ///
    /// No bus transfer is attempted in this case, so the device configuration
    /// is left as it was.
    InvalidChannel(u8),
    /// A comparator threshold does not fit the chip's resolution.
    ///
    /// See [`Chip::sample_range`](crate::Chip::sample_range). Nothing is
    /// written in this case either.
    ThresholdOutOfRange(i16),
}

impl<E: fmt::Display> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C transfer failed: {e}"),
            Error::InvalidChannel(channel) => {
                write!(f, "channel {channel} is not a single-ended input (0..=3)")
            }
            Error::ThresholdOutOfRange(threshold) => {
                write!(f, "threshold {threshold} is outside the chip's sample range")
            }
        }
    }
}

impl<E: fmt::Debug + fmt::Display> core::error::Error for Error<E> {}
