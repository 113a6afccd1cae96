//! Recording stand-ins for the bus and delay.
//!
//! Both mocks append to one shared log so tests can assert on the exact order
//! of transfers and waits.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{self, ErrorKind, ErrorType, I2c, Operation, SevenBitAddress};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Write { address: u8, bytes: Vec<u8> },
    Read { address: u8, len: usize },
    DelayMs(u32),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

impl i2c::Error for MockError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

impl core::fmt::Display for MockError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("mock bus failure")
    }
}

/// I2C bus that records every operation and answers reads from a queue.
pub struct MockBus {
    log: Log,
    reads: VecDeque<Vec<u8>>,
    fail: bool,
}

impl MockBus {
    /// Queue the bytes returned by the next read.
    pub fn respond(&mut self, bytes: &[u8]) -> &mut Self {
        self.reads.push_back(bytes.to_vec());
        self
    }

    /// Make every subsequent operation fail after being recorded.
    pub fn fail(&mut self) {
        self.fail = true;
    }

    pub(crate) fn run(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), MockError> {
        for op in operations {
            match op {
                Operation::Write(bytes) => self.log.borrow_mut().push(Event::Write {
                    address,
                    bytes: bytes.to_vec(),
                }),
                Operation::Read(buf) => {
                    self.log.borrow_mut().push(Event::Read {
                        address,
                        len: buf.len(),
                    });
                    if !self.fail {
                        let response = self.reads.pop_front().expect("unexpected read");
                        buf.copy_from_slice(&response);
                    }
                }
            }
            if self.fail {
                return Err(MockError);
            }
        }
        Ok(())
    }
}

impl ErrorType for MockBus {
    type Error = MockError;
}

impl I2c for MockBus {
    fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.run(address, operations)
    }
}

/// Delay that records the requested wait and returns immediately.
pub struct MockDelay {
    log: Log,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::DelayMs(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::DelayMs(ms));
    }
}

#[cfg(feature = "async")]
impl embedded_hal_async::i2c::I2c for MockBus {
    async fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.run(address, operations)
    }
}

#[cfg(feature = "async")]
impl embedded_hal_async::delay::DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::DelayMs(ns / 1_000_000));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::DelayMs(ms));
    }
}

/// A bus and delay sharing a fresh log.
pub fn mocks() -> (MockBus, MockDelay, Log) {
    let log = Log::default();
    let bus = MockBus {
        log: log.clone(),
        reads: VecDeque::new(),
        fail: false,
    };
    let delay = MockDelay { log: log.clone() };
    (bus, delay, log)
}

pub fn write(address: u8, bytes: &[u8]) -> Event {
    Event::Write {
        address,
        bytes: bytes.to_vec(),
    }
}

pub fn read(address: u8, len: usize) -> Event {
    Event::Read { address, len }
}
