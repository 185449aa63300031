//! A platform agnostic driver to interface with the TCS34725 RGB color light-to-digital converter.
//!
//! The driver talks to the sensor through an [`Interface`]: use [`I2cInterface`] with an
//! `embedded-hal-async` bus, or [`BlockingI2cInterface`] with a blocking `embedded-hal` one.
//! Waits for integration cycles go through an `embedded_hal_async::delay::DelayNs`.
//!
//! ```ignore
//! use tcs34725::{configuration::{Gain, IntegrationTime}, I2cInterface, Tcs34725Init};
//!
//! let mut sensor = Tcs34725Init {
//!     integration_time: IntegrationTime::Ms50,
//!     gain: Gain::X4,
//! }
//! .with_interface(I2cInterface::init(i2c), delay);
//!
//! sensor.connect_default().await?;
//! let rgbc = sensor.read_raw_data().await?;
//! ```
//!
//! ### Datasheets
//! - [TCS34725](https://ams.com/documents/20143/36005/TCS3472_DS000390_3-00.pdf)
#![allow(async_fn_in_trait)]
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod configuration;
pub mod data;
pub mod interface;
pub mod register;


use configuration::{ConfigToWrite, Gain, IntegrationTime};
use data::{RawData, Status};
use embedded_hal_async::delay::DelayNs;
use register::{EnableBits, Register, COMMAND_BIT};

pub use crate::interface::{BlockingI2cInterface, I2cInterface, Interface};
pub use crate::register::DEFAULT_ADDRESS;

/// Power-on to ADC-enable settling time
const POWER_ON_DELAY_MS: u32 = 3;

/// Driver errors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Error<E> {
    /// Bus transaction failed
    Interface(E),
    /// The ID register holds a value that is not a known TCS34725 identity
    NotDetected(u8),
}

impl<E> From<E> for Error<E> {
    fn from(value: E) -> Self {
        Error::Interface(value)
    }
}

/// TCS34725 init struct.
/// Use this struct to pick the startup configuration and create a driver with an interface of your choice.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tcs34725Init {
    pub integration_time: IntegrationTime,
    pub gain: Gain,
}

impl Tcs34725Init {
    /// Constructs a new, not yet connected TCS34725 driver instance.
    ///
    /// # Arguments
    /// * `interface` - `I2cInterface` or `BlockingI2cInterface`
    /// * `delay` - delay provider used to wait out integration cycles
    pub fn with_interface<T, D>(self, interface: T, delay: D) -> Tcs34725<T, D>
    where
        T: Interface,
        D: DelayNs,
    {
        Tcs34725 {
            interface,
            delay,
            address: DEFAULT_ADDRESS,
            integration_time: self.integration_time,
            gain: self.gain,
            initialized: false,
        }
    }
}

/// TCS34725 color sensor
pub struct Tcs34725<T, D>
where
    T: Interface,
{
    interface: T,
    delay: D,
    address: u8,
    integration_time: IntegrationTime,
    gain: Gain,
    initialized: bool,
}

impl<T, D> Tcs34725<T, D>
where
    T: Interface,
    D: DelayNs,
{
    /// Constructs a driver with 2.4 ms integration time and 1x gain.
    pub fn new(interface: T, delay: D) -> Self {
        Tcs34725Init::default().with_interface(interface, delay)
    }

    /// Connects to the sensor at `address`.
    ///
    /// Checks the device identity, then writes the configured integration time and gain
    /// and powers the sensor up. The driver stays unconnected unless every step succeeds.
    pub async fn connect(&mut self, address: u8) -> Result<(), Error<T::Error>> {
        self.address = address;
        self.initialized = false;
        self.interface.begin().await?;

        let id = self.read8(Register::ID).await?;
        if !register::is_known_id(id) {
            warn!("no TCS34725 at {:#x}, ID register reads {:#x}", address, id);
            return Err(Error::NotDetected(id));
        }
        debug!("TCS34725 found at {:#x} (ID {:#x})", address, id);

        // device powers up in sleep state
        self.write_register(self.integration_time).await?;
        self.write_register(self.gain).await?;
        self.enable().await?;
        // only a powered-up device counts as connected
        self.initialized = true;
        Ok(())
    }

    /// Connects to the sensor at [`DEFAULT_ADDRESS`].
    pub async fn connect_default(&mut self) -> Result<(), Error<T::Error>> {
        self.connect(DEFAULT_ADDRESS).await
    }

    /// Returns true once `connect` has found the sensor.
    pub fn is_connected(&self) -> bool {
        self.initialized
    }

    /// Device address used for bus transactions
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Current integration time
    pub fn integration_time(&self) -> IntegrationTime {
        self.integration_time
    }

    /// Current gain
    pub fn gain(&self) -> Gain {
        self.gain
    }

    /// Powers the sensor on and starts RGBC conversions.
    ///
    /// Returns after the first integration cycle has completed.
    pub async fn enable(&mut self) -> Result<(), Error<T::Error>> {
        self.write8(Register::ENABLE, EnableBits::PON).await?;
        self.delay.delay_ms(POWER_ON_DELAY_MS).await;
        self.write8(Register::ENABLE, EnableBits::PON | EnableBits::AEN)
            .await?;
        self.delay.delay_ms(self.integration_time.wait_ms()).await;
        Ok(())
    }

    /// Puts the sensor to sleep. Other ENABLE bits are preserved.
    pub async fn disable(&mut self) -> Result<(), Error<T::Error>> {
        let enable = self.read8(Register::ENABLE).await?;
        self.write8(
            Register::ENABLE,
            enable & !(EnableBits::PON | EnableBits::AEN),
        )
        .await
    }

    /// Sets the integration time, connecting at [`DEFAULT_ADDRESS`] first if needed.
    pub async fn set_integration_time(
        &mut self,
        integration_time: IntegrationTime,
    ) -> Result<(), Error<T::Error>> {
        self.ensure_connected().await?;
        self.write_register(integration_time).await?;
        self.integration_time = integration_time;
        Ok(())
    }

    /// Sets the gain, connecting at [`DEFAULT_ADDRESS`] first if needed.
    pub async fn set_gain(&mut self, gain: Gain) -> Result<(), Error<T::Error>> {
        self.ensure_connected().await?;
        self.write_register(gain).await?;
        self.gain = gain;
        Ok(())
    }

    /// Reads the raw clear, red, green and blue channel counts.
    ///
    /// Connects at [`DEFAULT_ADDRESS`] first if needed, and waits one integration
    /// cycle after reading so back-to-back calls never return the same conversion.
    pub async fn read_raw_data(&mut self) -> Result<RawData, Error<T::Error>> {
        self.ensure_connected().await?;
        let data = RawData {
            clear: self.read16(Register::CDATAL).await?,
            red: self.read16(Register::RDATAL).await?,
            green: self.read16(Register::GDATAL).await?,
            blue: self.read16(Register::BDATAL).await?,
        };
        self.delay.delay_ms(self.integration_time.wait_ms()).await;
        Ok(data)
    }

    /// Enables or disables the RGBC interrupt. Other ENABLE bits are preserved.
    pub async fn set_interrupt(&mut self, enabled: bool) -> Result<(), Error<T::Error>> {
        let mut enable = self.read8(Register::ENABLE).await?;
        if enabled {
            enable |= EnableBits::AIEN;
        } else {
            enable &= !EnableBits::AIEN;
        }
        self.write8(Register::ENABLE, enable).await
    }

    /// Clears a pending clear channel interrupt.
    pub async fn clear_interrupt(&mut self) -> Result<(), Error<T::Error>> {
        self.interface
            .write(
                self.address,
                &[COMMAND_BIT | register::CLEAR_CHANNEL_INTERRUPT],
            )
            .await?;
        Ok(())
    }

    /// Sets the clear channel interrupt thresholds.
    ///
    /// An interrupt is generated when the clear count falls below `low` or rises above `high`.
    pub async fn set_int_limits(&mut self, low: u16, high: u16) -> Result<(), Error<T::Error>> {
        let [low_l, low_h] = low.to_le_bytes();
        let [high_l, high_h] = high.to_le_bytes();
        self.write8(Register::AILTL, low_l).await?;
        self.write8(Register::AILTH, low_h).await?;
        self.write8(Register::AIHTL, high_l).await?;
        self.write8(Register::AIHTH, high_h).await
    }

    /// Reads the STATUS register
    pub async fn read_status(&mut self) -> Result<Status, Error<T::Error>> {
        Ok(self.read8(Register::STATUS).await?.into())
    }

    /// Destroys the driver, giving back the interface and delay.
    /// The sensor is left as last configured.
    pub fn release(self) -> (T, D) {
        (self.interface, self.delay)
    }

    async fn ensure_connected(&mut self) -> Result<(), Error<T::Error>> {
        if !self.initialized {
            debug!("not connected, connecting at default address");
            self.connect(DEFAULT_ADDRESS).await?;
        }
        Ok(())
    }

    /// Write a configuration to its register.
    async fn write_register<C: ConfigToWrite>(&mut self, config: C) -> Result<(), Error<T::Error>> {
        self.write8(config.register(), config.byte()).await
    }

    async fn write8(&mut self, register: Register, value: u8) -> Result<(), Error<T::Error>> {
        trace!("write {:#x} <- {:#x}", register.addr(), value);
        self.interface
            .write(self.address, &[register.command(), value])
            .await?;
        Ok(())
    }

    /// Read a byte from the given register.
    async fn read8(&mut self, register: Register) -> Result<u8, Error<T::Error>> {
        let mut reg_data = [0u8];
        self.read_into(register, &mut reg_data).await?;
        Ok(reg_data[0])
    }

    /// Read a little-endian word starting at the given register.
    async fn read16(&mut self, register: Register) -> Result<u16, Error<T::Error>> {
        let mut bytes = [0u8; 2];
        self.read_into(register, &mut bytes).await?;
        Ok((bytes[1] as u16) << 8 | bytes[0] as u16)
    }

    async fn read_into(
        &mut self,
        register: Register,
        buffer: &mut [u8],
    ) -> Result<(), Error<T::Error>> {
        self.interface
            .write(self.address, &[register.command()])
            .await?;
        self.interface.read(self.address, buffer).await?;
        Ok(())
    }
}
