//! Register map
//!
//! Every command byte carries [`COMMAND_BIT`]. Register accesses leave the
//! transaction type bits at zero; only
//! [`CLEAR_CHANNEL_INTERRUPT`] uses the special function encoding.

/// Command byte flag, OR'd into every register address on the bus.
pub const COMMAND_BIT: u8 = 0x80;

/// Default 7-bit I2C address of the TCS34725.
pub const DEFAULT_ADDRESS: u8 = 0x29;

/// ID register value of the TCS34721/TCS34725.
pub const ID_TCS34725: u8 = 0x44;
/// Secondary ID value reported by some TCS34725 compatible parts.
pub const ID_ALTERNATE: u8 = 0x10;

/// Special function: clear channel interrupt.
/// Sent as a bare command byte, without a data phase.
pub const CLEAR_CHANNEL_INTERRUPT: u8 = 0x66;

/// Device registers
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Register {
    /// Power, ADC, wait and interrupt enables
    ENABLE = 0x00,
    /// RGBC integration time
    ATIME = 0x01,
    /// Wait time
    WTIME = 0x03,
    /// Clear channel interrupt low threshold, low byte
    AILTL = 0x04,
    /// Clear channel interrupt low threshold, high byte
    AILTH = 0x05,
    /// Clear channel interrupt high threshold, low byte
    AIHTL = 0x06,
    /// Clear channel interrupt high threshold, high byte
    AIHTH = 0x07,
    /// Interrupt persistence filter
    PERS = 0x0C,
    /// Configuration
    CONFIG = 0x0D,
    /// Gain control
    CONTROL = 0x0F,
    /// Device ID
    ID = 0x12,
    /// Device status
    STATUS = 0x13,
    CDATAL = 0x14,
    CDATAH = 0x15,
    RDATAL = 0x16,
    RDATAH = 0x17,
    GDATAL = 0x18,
    GDATAH = 0x19,
    BDATAL = 0x1A,
    BDATAH = 0x1B,
}

impl Register {
    /// Register address without the command bit
    pub fn addr(self) -> u8 {
        self as u8
    }

    /// Command byte selecting this register
    pub fn command(self) -> u8 {
        COMMAND_BIT | self.addr()
    }
}

/// ENABLE register bits
pub struct EnableBits;

impl EnableBits {
    /// Power ON. Activates the internal oscillator.
    pub const PON: u8 = 0x01;
    /// RGBC ADC enable
    pub const AEN: u8 = 0x02;
    /// Wait enable
    pub const WEN: u8 = 0x08;
    /// RGBC interrupt enable
    pub const AIEN: u8 = 0x10;
}

/// STATUS register bits
pub struct StatusBits;

impl StatusBits {
    /// RGBC valid. An integration cycle has completed since AEN was set.
    pub const AVALID: u8 = 0x01;
    /// RGBC clear channel interrupt
    pub const AINT: u8 = 0x10;
}

/// Returns true if `id` is an identity value accepted during connect.
pub fn is_known_id(id: u8) -> bool {
    matches!(id, ID_TCS34725 | ID_ALTERNATE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_byte_sets_command_bit() {
        assert_eq!(Register::ENABLE.command(), 0x80);
        assert_eq!(Register::ID.command(), 0x92);
        assert_eq!(Register::BDATAL.command(), 0x9A);
    }

    #[test]
    fn data_registers_are_consecutive_pairs() {
        assert_eq!(Register::CDATAH.addr(), Register::CDATAL.addr() + 1);
        assert_eq!(Register::RDATAH.addr(), Register::RDATAL.addr() + 1);
        assert_eq!(Register::GDATAH.addr(), Register::GDATAL.addr() + 1);
        assert_eq!(Register::BDATAH.addr(), Register::BDATAL.addr() + 1);
    }

    #[test]
    fn only_two_identities_are_accepted() {
        assert!(is_known_id(0x44));
        assert!(is_known_id(0x10));
        assert!(!is_known_id(0x4D));
        assert!(!is_known_id(0x00));
        assert!(!is_known_id(0xFF));
    }
}
