//Bits and their meanings, ALS_INT (0x06) in the datasheet.
/*
 * bit[15]: int_th_low, reading went under the low threshold
 * bit[14]: int_th_high, reading went over the high threshold
 * bit[13:0]: Reserved
*/

use crate::register::BitMasks;

pub const INTEVT_HIGH_THRESHOLD: u16 = BitMasks::INT_TH_HIGH;
pub const INTEVT_LOW_THRESHOLD: u16 = BitMasks::INT_TH_LOW;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptStatus {
    pub raw: u16,
}

impl InterruptStatus {
    pub fn new(raw: u16) -> InterruptStatus {
        InterruptStatus { raw }
    }

    pub fn is_high_threshold(&self) -> bool {
        self.raw & INTEVT_HIGH_THRESHOLD > 0
    }

    pub fn is_low_threshold(&self) -> bool {
        self.raw & INTEVT_LOW_THRESHOLD > 0
    }

    pub fn any(&self) -> bool {
        self.is_high_threshold() || self.is_low_threshold()
    }
}

impl From<u16> for InterruptStatus {
    fn from(raw: u16) -> Self {
        InterruptStatus::new(raw)
    }
}


#[cfg(test)]
mod interrupt_status_tests {
    use super::*;

    #[test]
    fn check_bits() {
        assert_eq!(INTEVT_HIGH_THRESHOLD, 0x4000);
        assert_eq!(INTEVT_LOW_THRESHOLD, 0x8000);
    }

    #[test]
    fn no_event() {
        let s = InterruptStatus::new(0x0000);
        assert!(!s.is_high_threshold());
        assert!(!s.is_low_threshold());
        assert!(!s.any());
    }

    #[test]
    fn high_event() {
        let mut s = InterruptStatus::new(INTEVT_HIGH_THRESHOLD);
        assert!(s.is_high_threshold());
        assert!(!s.is_low_threshold());

        //reserved bits don't count as events.
        s.raw = 0x3FFF;
        assert!(!s.any());
    }

    #[test]
    fn low_event() {
        let s: InterruptStatus = (INTEVT_LOW_THRESHOLD | INTEVT_HIGH_THRESHOLD).into();
        assert!(s.is_low_threshold());
        assert!(s.is_high_threshold());
        assert!(s.any());
    }
}
