//Field codes straight from the datasheet, before shifting into place.
//The channel selectors also exist as plain consts for callers that only
//have a raw register number.

pub const CHANNEL_WHITE: u8 = 0x04;
pub const CHANNEL_ALS: u8 = 0x05;

/// Implements `From<$t> for u8` and `TryFrom<u8> for $t` over the listed
/// variants. Unknown codes come back as `Err(code)`.
macro_rules! field_codes {
    ($t:ident { $($variant:ident),+ $(,)? }) => {
        impl From<$t> for u8 {
            #[inline]
            fn from(v: $t) -> Self {
                v as u8
            }
        }

        impl TryFrom<u8> for $t {
            type Error = u8;

            fn try_from(code: u8) -> Result<Self, Self::Error> {
                $(
                    if code == $t::$variant as u8 {
                        return Ok($t::$variant);
                    }
                )+
                Err(code)
            }
        }
    };
}

/// ALS gain.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gain {
    X1 = 0b00,
    X2 = 0b01,
    /// x 1/4
    X1_4 = 0b10,
    /// x 1/8
    X1_8 = 0b11,
}
field_codes!(Gain { X1, X2, X1_4, X1_8 });

/// ALS integration time. The codes are not monotonic.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IntegrationTime {
    Ms25 = 0b1100,
    Ms50 = 0b1000,
    Ms100 = 0b0000,
    Ms200 = 0b0001,
    Ms400 = 0b0010,
    Ms800 = 0b0011,
}
field_codes!(IntegrationTime { Ms25, Ms50, Ms100, Ms200, Ms400, Ms800 });

impl IntegrationTime {
    pub fn millis(self) -> u16 {
        match self {
            IntegrationTime::Ms25 => 25,
            IntegrationTime::Ms50 => 50,
            IntegrationTime::Ms100 => 100,
            IntegrationTime::Ms200 => 200,
            IntegrationTime::Ms400 => 400,
            IntegrationTime::Ms800 => 800,
        }
    }
}

/// Number of consecutive out-of-window samples before the interrupt latches.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Persistence {
    One = 0,
    Two = 1,
    Four = 2,
    Eight = 3,
}
field_codes!(Persistence { One, Two, Four, Eight });

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptEnable {
    Disabled = 0,
    Enabled = 1,
}
field_codes!(InterruptEnable { Disabled, Enabled });

/// Power on default is `Shutdown`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Shutdown {
    Awake = 0,
    Shutdown = 1,
}
field_codes!(Shutdown { Awake, Shutdown });

/// Power saving mode, longer modes mean a longer refresh time.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PsmMode {
    Mode1 = 0,
    Mode2 = 1,
    Mode3 = 2,
    Mode4 = 3,
}
field_codes!(PsmMode { Mode1, Mode2, Mode3, Mode4 });

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PsmEnable {
    Disabled = 0,
    Enabled = 1,
}
field_codes!(PsmEnable { Disabled, Enabled });

/// Output channel, the value is the register it is read from.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    White = CHANNEL_WHITE,
    Als = CHANNEL_ALS,
}
field_codes!(Channel { White, Als });
