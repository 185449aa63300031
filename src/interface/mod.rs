//! Interface trait
pub mod blocking;
pub mod i2c;

pub use self::blocking::BlockingI2cInterface;
pub use self::i2c::I2cInterface;

/// Interface Trait. `I2cInterface` and `BlockingI2cInterface` implement this.
///
/// Each call is one bus transaction addressed to a 7-bit device address.
pub trait Interface {
    type Error;

    /// Prepares the bus before the first transaction.
    /// embedded-hal buses are handed over already configured, so the default does nothing.
    async fn begin(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    /// Writes bytes to a device.
    /// # Arguments
    /// * `address` - device address
    /// * `bytes` - command byte followed by any data bytes
    async fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error>;
    /// Reads bytes from a device.
    /// # Arguments
    /// * `address` - device address
    /// * `buffer` - buffer to store read data
    async fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error>;
}
