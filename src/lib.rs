//! Register level driver for the Vishay VEML7700 ambient light sensor.
//!
//! The config registers on this part are write only and several settings
//! share one register, so settings are built up in a [`Config`] or
//! [`PsConfig`] that remembers which fields were set. Writing one only
//! changes those fields on the device.
//!
//! ```
//! # use embedded_hal_mock::eh1::i2c::{Mock, Transaction};
//! # let i2c = Mock::new(&[
//! #     Transaction::write(0x10, vec![0x00, 0x00, 0x08]),
//! #     Transaction::write_read(0x10, vec![0x05], vec![0x10, 0x02]),
//! # ]);
//! use sensor_lib_veml7700::*;
//!
//! let mut als = Veml7700::new(i2c, DEFAULT_ADDRESS);
//!
//! let mut conf = Config::new();
//! conf.set_gain(Gain::X2)
//!     .set_integration_time(IntegrationTime::Ms100)
//!     .set_persistence(Persistence::One)
//!     .set_interrupt(InterruptEnable::Disabled)
//!     .set_shutdown(Shutdown::Awake);
//! als.set_config(conf)?;
//!
//! assert_eq!(als.channel_value(Channel::Als)?, 0x0210);
//! # als.release().done();
//! # Ok::<(), Error<embedded_hal::i2c::ErrorKind>>(())
//! ```
#![cfg_attr(not(test), no_std)]

use embedded_hal::i2c;


//Register addresses and field masks.
mod register;
pub use crate::register::Registers;
use crate::register::BitMasks;

//Typed values for every field.
mod settings;
pub use crate::settings::*;

mod config;
pub use crate::config::{Config, Masked, PsConfig, NOT_PRESENT};

mod interrupt_status;
pub use crate::interrupt_status::{
    InterruptStatus,
    INTEVT_HIGH_THRESHOLD,
    INTEVT_LOW_THRESHOLD,
};


/// VEML7700 Sensor Address
pub const DEFAULT_ADDRESS: u8 = 0b0001_0000; // = 0x10

/// Numeric code for [`Error::InvalidChannel`].
pub const INVALID_CHANNEL_CODE: u8 = 8;


//Impliment Error type for our driver.
#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Bus error, passed through as is.
    I2C(E),
    /// Channel selector is neither white nor ALS. Nothing was sent.
    InvalidChannel,
}

impl<E> Error<E> {
    /// The driver's own numeric code, bus errors don't have one.
    pub fn code(&self) -> Option<u8> {
        match self {
            Error::I2C(_) => None,
            Error::InvalidChannel => Some(INVALID_CHANNEL_CODE),
        }
    }
}


/// A VEML7700 on a bus.
///
/// There is no unbound state, the bus and address are given up front.
/// Hand in `&mut bus` or a shared bus device to keep using the bus for
/// other parts. Calls are not synchronised, one transaction at a time.
pub struct Veml7700<I2C>
where I2C: i2c::I2c
{
    i2c: I2C,
    address: u8,
}

impl<E, I2C> Veml7700<I2C>
where I2C: i2c::I2c<Error = E>
{

    pub fn new(i2c: I2C, address: u8) -> Self {
        Veml7700 { i2c, address }
    }

    /// Optionally wakes the part up. Without `wake_up` nothing goes on the bus.
    pub fn begin(&mut self, wake_up: bool) -> Result<(), Error<E>> {
        if wake_up {
            return self.wake_up();
        }
        Ok(())
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }


    /// Clears the shutdown bit, nothing else in ALS_CONF changes.
    pub fn wake_up(&mut self) -> Result<(), Error<E>> {
        let mut conf = Config::new();
        conf.set_shutdown(Shutdown::Awake);
        self.set_config(conf)
    }

    /// Sets the shutdown bit, nothing else in ALS_CONF changes.
    pub fn shutdown(&mut self) -> Result<(), Error<E>> {
        let mut conf = Config::new();
        conf.set_shutdown(Shutdown::Shutdown);
        self.set_config(conf)
    }

    pub fn set_high_threshold(&mut self, threshold: u16) -> Result<(), Error<E>> {
        self.write16(Registers::ALS_WH.addr(), threshold)
    }

    pub fn set_low_threshold(&mut self, threshold: u16) -> Result<(), Error<E>> {
        self.write16(Registers::ALS_WL.addr(), threshold)
    }

    /// Writes the fields set in `conf`.
    ///
    /// With every field set this is a single write and the reserved bits
    /// outside the mask go out as 0. Otherwise the register is read first
    /// and the unset bits are written back unchanged. There is no getter,
    /// the datasheet has the register as write only.
    pub fn set_config(&mut self, conf: Config) -> Result<(), Error<E>> {
        self.write_masked16(
            Registers::ALS_CONF.addr(),
            conf.raw(),
            BitMasks::CONF_ALL,
        )
    }

    /// Writes the fields set in `conf`.
    ///
    /// The settings only cover the low 3 bits of a 16 bit register, so this
    /// is always a read-modify-write and bits 3-15 keep their device value.
    pub fn set_ps_config(&mut self, conf: PsConfig) -> Result<(), Error<E>> {
        let raw = conf.raw();
        let wide = Masked {
            value: u16::from(raw.value),
            mask: u16::from(raw.mask),
        };
        self.write_masked16(Registers::POWER_SAVING.addr(), wide, u16::MAX)
    }

    /// Raw counts from one output channel.
    pub fn channel_value(&mut self, channel: Channel) -> Result<u16, Error<E>> {
        self.read16(channel.into())
    }

    /// Like [`Veml7700::channel_value`] for an untyped selector.
    pub fn channel_value_raw(&mut self, channel: u8) -> Result<u16, Error<E>> {
        let channel = Channel::try_from(channel)
            .map_err(|_| Error::InvalidChannel)?;
        self.channel_value(channel)
    }

    pub fn white(&mut self) -> Result<u16, Error<E>> {
        self.channel_value(Channel::White)
    }

    pub fn als(&mut self) -> Result<u16, Error<E>> {
        self.channel_value(Channel::Als)
    }

    /// Raw ALS_INT register, see [`INTEVT_HIGH_THRESHOLD`] and
    /// [`INTEVT_LOW_THRESHOLD`].
    pub fn int_evt(&mut self) -> Result<u16, Error<E>> {
        self.read16(Registers::ALS_INT.addr())
    }

    pub fn interrupt_status(&mut self) -> Result<InterruptStatus, Error<E>> {
        let raw = self.int_evt()?;
        Ok(InterruptStatus::new(raw))
    }


    // helpers

    fn read16(&mut self, register: u8) -> Result<u16, Error<E>> {
        let mut buf = [0u8; 2];
        self.i2c
            .write_read(self.address, &[register], &mut buf)
            .map_err(Error::I2C)?;

        let value = u16::from_le_bytes(buf);
        #[cfg(feature = "defmt")]
        defmt::trace!("veml7700 read {=u8:#x} -> {=u16:#x}", register, value);
        Ok(value)
    }

    fn write16(&mut self, register: u8, value: u16) -> Result<(), Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("veml7700 write {=u8:#x} <- {=u16:#x}", register, value);

        //LSB goes out first.
        let [lsb, msb] = value.to_le_bytes();
        self.i2c
            .write(self.address, &[register, lsb, msb])
            .map_err(Error::I2C)
    }

    //Masked bits always go out as given. Once `complete` is covered the
    //read is skipped and every unmasked bit is written as 0, otherwise the
    //unmasked bits are whatever the device held.
    fn write_masked16(
        &mut self,
        register: u8,
        masked: Masked<u16>,
        complete: u16,
    ) -> Result<(), Error<E>> {
        if masked.covers(complete) {
            return self.write16(register, masked.merge(0));
        }

        let current = self.read16(register)?;
        self.write16(register, masked.merge(current))
    }
}
