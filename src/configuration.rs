//! Sensor settings and how they map onto registers
use crate::register::Register;

/// A setting that is written to the device as a single register byte.
pub trait ConfigToWrite {
    /// Target register
    fn register(&self) -> Register;
    /// Raw register value
    fn byte(&self) -> u8;
}

/// RGBC integration time (ATIME register).
///
/// Longer integration increases resolution and sensitivity, and lengthens every
/// measurement cycle by the same amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum IntegrationTime {
    /// 2.4 ms, 1 cycle, max count 1024
    #[default]
    Ms2p4,
    /// 24 ms, 10 cycles, max count 10240
    Ms24,
    /// 50 ms, 20 cycles, max count 20480
    Ms50,
    /// 101 ms, 42 cycles, max count 43008
    Ms101,
    /// 154 ms, 64 cycles, max count 65535
    Ms154,
    /// 700 ms, 256 cycles, max count 65535
    Ms700,
}

impl IntegrationTime {
    /// ATIME register value
    pub fn value(self) -> u8 {
        match self {
            IntegrationTime::Ms2p4 => 0xFF,
            IntegrationTime::Ms24 => 0xF6,
            IntegrationTime::Ms50 => 0xEB,
            IntegrationTime::Ms101 => 0xD5,
            IntegrationTime::Ms154 => 0xC0,
            IntegrationTime::Ms700 => 0x00,
        }
    }

    /// Milliseconds to wait for one integration cycle to complete.
    ///
    /// Used after enabling the ADC and after every raw data read.
    pub fn wait_ms(self) -> u32 {
        match self {
            IntegrationTime::Ms2p4 => 3,
            IntegrationTime::Ms24 => 24,
            IntegrationTime::Ms50 => 50,
            IntegrationTime::Ms101 => 101,
            IntegrationTime::Ms154 => 154,
            IntegrationTime::Ms700 => 700,
        }
    }
}

impl ConfigToWrite for IntegrationTime {
    fn register(&self) -> Register {
        Register::ATIME
    }
    fn byte(&self) -> u8 {
        self.value()
    }
}

/// RGBC analog gain (CONTROL register)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Gain {
    /// No gain
    #[default]
    X1 = 0x00,
    /// 4x gain
    X4 = 0x01,
    /// 16x gain
    X16 = 0x02,
    /// 60x gain
    X60 = 0x03,
}

impl Gain {
    /// CONTROL register value
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl ConfigToWrite for Gain {
    fn register(&self) -> Register {
        Register::CONTROL
    }
    fn byte(&self) -> u8 {
        self.value()
    }
}
