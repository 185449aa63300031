//! Blocking I2C Interface
//!
//! Drives a blocking `embedded_hal::i2c::I2c` bus from the async driver API, for
//! HALs without async I2C support. Every call completes before its future resolves.
use super::Interface;
use embedded_hal::i2c::I2c;

/// Blocking I2C bus
pub struct BlockingI2cInterface<I2C>
where
    I2C: I2c,
{
    i2c: I2C,
}

impl<I2C, CommE> BlockingI2cInterface<I2C>
where
    I2C: I2c<Error = CommE>,
{
    /// Initializes an Interface with a blocking `I2C` instance
    /// # Arguments
    /// * `i2c` - I2C instance
    pub fn init(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Gives back the I2C instance
    pub fn release(self) -> I2C {
        self.i2c
    }
}

/// Implementation of `Interface`
impl<I2C, CommE> Interface for BlockingI2cInterface<I2C>
where
    I2C: I2c<Error = CommE>,
{
    type Error = CommE;

    async fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(address, bytes)
    }

    async fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.read(address, buffer)
    }
}
