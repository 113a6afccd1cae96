//! The async driver issues the same transfers as the blocking one.
#![cfg(feature = "async")]
mod common;

use ads1x15::{Ads1x15Async, Error, Gain};
use embassy_futures::block_on;

use common::{Event, MockError, mocks, read, write};

#[test]
fn async_single_ended_sequence() -> Result<(), Error<MockError>> {
    let (mut bus, delay, log) = mocks();
    bus.respond(&[0x12, 0x30]);
    let mut adc = Ads1x15Async::new_ads1015(bus, delay);

    assert_eq!(block_on(adc.read_single_ended(0))?, 0x0123);
    assert_eq!(
        *log.borrow(),
        [
            write(0x48, &[0x01, 0xC1, 0x83]),
            Event::DelayMs(1),
            write(0x48, &[0x00]),
            read(0x48, 2),
        ]
    );
    Ok(())
}

#[test]
fn async_comparator_and_last_result() -> Result<(), Error<MockError>> {
    let (mut bus, delay, log) = mocks();
    bus.respond(&[0x80, 0x00]);
    let mut adc = Ads1x15Async::new_ads1115(bus, delay);

    block_on(adc.start_comparator_single_ended(0, -5))?;
    assert_eq!(block_on(adc.get_last_conversion_results())?, i16::MIN);
    assert_eq!(log.borrow()[0], write(0x48, &[0x03, 0xFF, 0xFB]));
    assert_eq!(log.borrow()[1], write(0x48, &[0x01, 0x40, 0x84]));
    assert_eq!(log.borrow()[2], Event::DelayMs(8));
    Ok(())
}

#[test]
fn async_out_of_range_channels() {
    let (bus, delay, log) = mocks();
    let mut adc = Ads1x15Async::new_ads1015(bus, delay);
    assert_eq!(block_on(adc.read_single_ended(7)), Ok(0));
    assert_eq!(
        block_on(adc.start_comparator_single_ended(7, 0)),
        Err(Error::InvalidChannel(7))
    );
    assert!(log.borrow().is_empty());
}

#[test]
fn async_differential_reads() -> Result<(), Error<MockError>> {
    let (mut bus, delay, log) = mocks();
    bus.respond(&[0x80, 0x00]).respond(&[0x7F, 0xF0]);
    let mut adc = Ads1x15Async::new_ads1015(bus, delay);
    adc.set_gain(Gain::One);

    let d01 = block_on(adc.read_differential_0_1())?;
    let d23 = block_on(adc.read_differential_2_3())?;
    assert_eq!((d01, d23), (-2048, 2047));
    assert_eq!(adc.millivolts(d01.into()), -4096.0);
    assert_eq!(adc.millivolts(d23.into()), 4094.0);

    let log = log.borrow();
    assert_eq!(log[0], write(0x48, &[0x01, 0x83, 0x83]));
    assert_eq!(log[4], write(0x48, &[0x01, 0xB3, 0x83]));
    Ok(())
}

#[test]
fn async_comparator_rejects_threshold_beyond_resolution() {
    let (bus, delay, log) = mocks();
    let mut adc = Ads1x15Async::new_ads1015(bus, delay);
    assert_eq!(
        block_on(adc.start_comparator_single_ended(1, 2048)),
        Err(Error::ThresholdOutOfRange(2048))
    );
    assert!(log.borrow().is_empty());
}
