#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

mod chip;
mod driver;
mod error;
mod gain;
pub mod register;

pub use chip::{AddressPin, Chip, DEFAULT_ADDRESS};
#[cfg(feature = "async")]
pub use driver::Ads1x15Async;
pub use driver::Ads1x15;
pub use error::Error;
pub use gain::Gain;
