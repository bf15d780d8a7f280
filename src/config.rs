/*
 * Filename: config.rs
 * Description: Masked register values for the write only config registers.
 */

use crate::register::BitMasks;
use crate::settings::{
    Gain, IntegrationTime, InterruptEnable, Persistence, PsmEnable, PsmMode, Shutdown,
};

/// Raw field getters return this when the field was never set.
pub const NOT_PRESENT: u8 = 0xFF;

/// A register payload paired with the bits of it that are meaningful.
///
/// Bits inside `mask` are written as given. Bits outside it keep their
/// device value, except on a config write that sets every field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Masked<W> {
    pub value: W,
    pub mask: W,
}

macro_rules! impl_masked {
    ($w:ty) => {
        impl Masked<$w> {
            pub const fn new() -> Self {
                Masked { value: 0, mask: 0 }
            }

            /// Every bit specified.
            pub const fn full(value: $w) -> Self {
                Masked { value, mask: <$w>::MAX }
            }

            /// Oversized values are truncated by `field_mask`. A `shift` at or
            /// past the word width leaves the field cleared but still marked set.
            pub fn set_field(&mut self, field: u8, field_mask: $w, shift: u8) {
                let bits = <$w>::from(field)
                    .checked_shl(u32::from(shift))
                    .unwrap_or(0);
                self.value &= !field_mask;
                self.value |= bits & field_mask;
                self.mask |= field_mask;
            }

            /// `None` when the field was never set, when `shift` is at or past
            /// the word width, or when the field doesn't fit in a `u8`.
            pub fn get_field(&self, field_mask: $w, shift: u8) -> Option<u8> {
                if (self.mask & field_mask) != field_mask {
                    return None;
                }
                let field = (self.value & field_mask).checked_shr(u32::from(shift))?;
                u8::try_from(field).ok()
            }

            /// Same as `get_field` but with `NOT_PRESENT` standing in for `None`.
            pub fn get_field_raw(&self, field_mask: $w, shift: u8) -> u8 {
                self.get_field(field_mask, shift).unwrap_or(NOT_PRESENT)
            }

            pub fn covers(&self, bits: $w) -> bool {
                (self.mask & bits) == bits
            }

            /// Combine with what the device currently holds.
            pub fn merge(&self, current: $w) -> $w {
                (current & !self.mask) | (self.value & self.mask)
            }
        }
    };
}

impl_masked!(u8);
impl_masked!(u16);


/// ALS_CONF, everything in it can be set in one write.
///
/// ```
/// use sensor_lib_veml7700::{Config, Gain, IntegrationTime};
///
/// let mut conf = Config::new();
/// conf.set_gain(Gain::X2).set_integration_time(IntegrationTime::Ms100);
/// assert_eq!(conf.raw().value, 0x0800);
/// assert_eq!(conf.raw().mask, 0x1BC0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config(Masked<u16>);

impl Config {
    pub const fn new() -> Self {
        Config(Masked::<u16>::new())
    }

    pub fn from_raw(raw: Masked<u16>) -> Self {
        Config(raw)
    }

    pub fn raw(&self) -> Masked<u16> {
        self.0
    }

    /// True when every non reserved bit is specified.
    pub fn is_complete(&self) -> bool {
        self.0.covers(BitMasks::CONF_ALL)
    }

    pub fn set_gain(&mut self, gain: Gain) -> &mut Self {
        self.0.set_field(gain.into(), BitMasks::GAIN, BitMasks::GAIN_SHIFT);
        self
    }

    pub fn gain(&self) -> Option<Gain> {
        self.0
            .get_field(BitMasks::GAIN, BitMasks::GAIN_SHIFT)
            .and_then(|v| Gain::try_from(v).ok())
    }

    pub fn set_integration_time(&mut self, it: IntegrationTime) -> &mut Self {
        self.0.set_field(it.into(), BitMasks::IT, BitMasks::IT_SHIFT);
        self
    }

    /// `None` also covers a reserved code that was put in through `from_raw`.
    pub fn integration_time(&self) -> Option<IntegrationTime> {
        self.0
            .get_field(BitMasks::IT, BitMasks::IT_SHIFT)
            .and_then(|v| IntegrationTime::try_from(v).ok())
    }

    pub fn set_persistence(&mut self, pers: Persistence) -> &mut Self {
        self.0.set_field(pers.into(), BitMasks::PERS, BitMasks::PERS_SHIFT);
        self
    }

    pub fn persistence(&self) -> Option<Persistence> {
        self.0
            .get_field(BitMasks::PERS, BitMasks::PERS_SHIFT)
            .and_then(|v| Persistence::try_from(v).ok())
    }

    pub fn set_interrupt(&mut self, int: InterruptEnable) -> &mut Self {
        self.0.set_field(int.into(), BitMasks::INT_EN, BitMasks::INT_EN_SHIFT);
        self
    }

    pub fn interrupt(&self) -> Option<InterruptEnable> {
        self.0
            .get_field(BitMasks::INT_EN, BitMasks::INT_EN_SHIFT)
            .and_then(|v| InterruptEnable::try_from(v).ok())
    }

    pub fn set_shutdown(&mut self, sd: Shutdown) -> &mut Self {
        self.0.set_field(sd.into(), BitMasks::SD, BitMasks::SD_SHIFT);
        self
    }

    pub fn shutdown(&self) -> Option<Shutdown> {
        self.0
            .get_field(BitMasks::SD, BitMasks::SD_SHIFT)
            .and_then(|v| Shutdown::try_from(v).ok())
    }
}


/// Power saving register. Only the low 3 bits mean anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PsConfig(Masked<u8>);

impl PsConfig {
    pub const fn new() -> Self {
        PsConfig(Masked::<u8>::new())
    }

    pub fn from_raw(raw: Masked<u8>) -> Self {
        PsConfig(raw)
    }

    pub fn raw(&self) -> Masked<u8> {
        self.0
    }

    pub fn is_complete(&self) -> bool {
        self.0.covers(BitMasks::PS_ALL)
    }

    pub fn set_mode(&mut self, mode: PsmMode) -> &mut Self {
        self.0.set_field(mode.into(), BitMasks::PSM, BitMasks::PSM_SHIFT);
        self
    }

    pub fn mode(&self) -> Option<PsmMode> {
        self.0
            .get_field(BitMasks::PSM, BitMasks::PSM_SHIFT)
            .and_then(|v| PsmMode::try_from(v).ok())
    }

    pub fn set_enable(&mut self, en: PsmEnable) -> &mut Self {
        self.0.set_field(en.into(), BitMasks::PSM_EN, BitMasks::PSM_EN_SHIFT);
        self
    }

    pub fn enable(&self) -> Option<PsmEnable> {
        self.0
            .get_field(BitMasks::PSM_EN, BitMasks::PSM_EN_SHIFT)
            .and_then(|v| PsmEnable::try_from(v).ok())
    }
}
