//! Register Mapping
//!
//! Datasheet: https://www.vishay.com/docs/84286/veml7700.pdf
//! Every register is 16 bits wide and transferred LSB first.

#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Registers {
    /// ALS_CONF_0, write only.
    ALS_CONF = 0x00,
    /// ALS_WH, high threshold window.
    ALS_WH = 0x01,
    /// ALS_WL, low threshold window.
    ALS_WL = 0x02,
    /// Power saving config.
    POWER_SAVING = 0x03,
    /// WHITE output data, read only.
    WHITE = 0x04,
    /// ALS output data, read only.
    ALS = 0x05,
    /// Interrupt status, read only.
    ALS_INT = 0x06,
}

impl Registers {
    pub fn addr(self) -> u8 {
        self as u8
    }
}

impl From<Registers> for u8 {
    #[inline]
    fn from(r: Registers) -> Self {
        r as u8
    }
}


//Field masks and the shift to get the field down to bit 0.
pub(crate) struct BitMasks;

impl BitMasks {
    // === ALS_CONF (0x00) ===
    pub(crate) const GAIN: u16 = 0b0001_1000_0000_0000;
    pub(crate) const IT: u16 = 0b0000_0011_1100_0000;
    pub(crate) const PERS: u16 = 0b0000_0000_0011_0000;
    pub(crate) const INT_EN: u16 = 0b0000_0000_0000_0010;
    pub(crate) const SD: u16 = 0b0000_0000_0000_0001;
    /// Every bit of ALS_CONF that is not reserved.
    pub(crate) const CONF_ALL: u16 =
        Self::GAIN | Self::IT | Self::PERS | Self::INT_EN | Self::SD;

    pub(crate) const GAIN_SHIFT: u8 = 11;
    pub(crate) const IT_SHIFT: u8 = 6;
    pub(crate) const PERS_SHIFT: u8 = 4;
    pub(crate) const INT_EN_SHIFT: u8 = 1;
    pub(crate) const SD_SHIFT: u8 = 0;

    // === POWER_SAVING (0x03) ===
    pub(crate) const PSM: u8 = 0b110;
    pub(crate) const PSM_EN: u8 = 0b001;
    pub(crate) const PS_ALL: u8 = Self::PSM | Self::PSM_EN;

    pub(crate) const PSM_SHIFT: u8 = 1;
    pub(crate) const PSM_EN_SHIFT: u8 = 0;

    // === ALS_INT (0x06) ===
    pub(crate) const INT_TH_HIGH: u16 = 1 << 14;
    pub(crate) const INT_TH_LOW: u16 = 1 << 15;
}


#[cfg(test)]
mod test_bitmasks {
    use super::*;

    #[test]
    fn register_addresses() {
        assert_eq!(Registers::ALS_CONF.addr(), 0x00);
        assert_eq!(Registers::POWER_SAVING.addr(), 0x03);
        assert_eq!(u8::from(Registers::ALS_INT), 0x06);
    }

    #[test]
    fn conf_fields_are_disjoint() {
        let fields = [
            BitMasks::GAIN,
            BitMasks::IT,
            BitMasks::PERS,
            BitMasks::INT_EN,
            BitMasks::SD,
        ];
        for (i, a) in fields.iter().enumerate() {
            for b in &fields[i + 1..] {
                assert_eq!(a & b, 0);
            }
        }
        assert_eq!(BitMasks::CONF_ALL, 0x1BF3);
    }

    #[test]
    fn shifts_line_up_with_masks() {
        assert_eq!(BitMasks::GAIN >> BitMasks::GAIN_SHIFT, 0b11);
        assert_eq!(BitMasks::IT >> BitMasks::IT_SHIFT, 0b1111);
        assert_eq!(BitMasks::PERS >> BitMasks::PERS_SHIFT, 0b11);
        assert_eq!(BitMasks::INT_EN >> BitMasks::INT_EN_SHIFT, 0b1);
        assert_eq!(BitMasks::SD >> BitMasks::SD_SHIFT, 0b1);
        assert_eq!(BitMasks::PSM >> BitMasks::PSM_SHIFT, 0b11);
        assert_eq!(BitMasks::PS_ALL, 0b111);
    }
}
