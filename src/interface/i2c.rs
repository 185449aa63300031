//! I2C Interface
use super::Interface;
use embedded_hal_async::i2c::I2c;

/// Async I2C bus
pub struct I2cInterface<I2C> {
    i2c: I2C,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Initializes an Interface with an async `I2C` instance
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
impl<I2C> Interface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    async fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(address, bytes).await
    }

    async fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.read(address, buffer).await
    }
}
