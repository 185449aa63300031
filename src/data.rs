//! Measurement results
use crate::register::StatusBits;

/// Raw RGBC channel counts from one integration cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct RawData {
    pub clear: u16,
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

/// Decoded STATUS register
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Status {
    /// An RGBC integration cycle has completed
    pub valid: bool,
    /// The clear channel interrupt is asserted
    pub interrupt: bool,
}

impl From<u8> for Status {
    fn from(value: u8) -> Self {
        Status {
            valid: value & StatusBits::AVALID != 0,
            interrupt: value & StatusBits::AINT != 0,
        }
    }
}
